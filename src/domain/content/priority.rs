//! Fixed type priority lists

use std::fmt;
use std::str::FromStr;

use super::content_type::{mime, ContentType};
use crate::domain::error::InvalidModeError;

const READ_PRIORITY: &[&str] = &[
    mime::IMAGE_PNG,
    mime::IMAGE_JPEG,
    mime::IMAGE_JPG,
    mime::IMAGE_GIF,
    mime::TEXT_HTML,
    mime::TEXT_UNICODE,
    mime::TEXT_PLAIN,
];

const CONVERT_PRIORITY: &[&str] = &[
    mime::IMAGE_PNG,
    mime::IMAGE_JPEG,
    mime::IMAGE_JPG,
    mime::IMAGE_WEBP,
    mime::IMAGE_GIF,
    mime::TEXT_HTML,
    mime::TEXT_UNICODE,
    mime::TEXT_PLAIN,
];

/// Insert mode, which also decides the priority list in effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InsertMode {
    /// Simple insert: take the best offered type as-is, never convert
    Legacy,
    /// Format-aware insert honoring the preferred image format
    #[default]
    Convert,
}

impl InsertMode {
    /// Ordered content types, most preferred first
    pub const fn priority(&self) -> &'static [&'static str] {
        match self {
            Self::Legacy => READ_PRIORITY,
            Self::Convert => CONVERT_PRIORITY,
        }
    }

    /// Whether the preferred image format applies in this mode
    pub const fn honors_preference(&self) -> bool {
        matches!(self, Self::Convert)
    }

    /// Get the string identifier for this mode
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Convert => "convert",
        }
    }

    /// The priority list narrowed to what the runtime can materialize
    pub fn supported_types<F>(&self, supports: F) -> Vec<ContentType>
    where
        F: Fn(&ContentType) -> bool,
    {
        self.priority()
            .iter()
            .map(|tag| ContentType::from(*tag))
            .filter(|ct| supports(ct))
            .collect()
    }
}

impl FromStr for InsertMode {
    type Err = InvalidModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "convert" => Ok(Self::Convert),
            _ => Err(InvalidModeError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for InsertMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Build the ranked list of types the selector may pick from.
///
/// The preferred type, when given, ranks above the whole priority list.
/// Types the runtime cannot materialize are dropped, and each type appears
/// at most once (first occurrence wins).
pub fn allowed_types<F>(
    priority: &[&str],
    preferred: Option<&ContentType>,
    supports: F,
) -> Vec<ContentType>
where
    F: Fn(&ContentType) -> bool,
{
    let ranked = preferred
        .cloned()
        .into_iter()
        .chain(priority.iter().map(|tag| ContentType::from(*tag)));

    let mut allowed: Vec<ContentType> = Vec::with_capacity(priority.len() + 1);
    for ct in ranked {
        if supports(&ct) && !allowed.contains(&ct) {
            allowed.push(ct);
        }
    }
    allowed
}
