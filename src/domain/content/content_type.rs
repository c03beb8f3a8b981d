//! Content type value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidContentTypeError;

/// Well-known content type tags
pub mod mime {
    pub const IMAGE_PNG: &str = "image/png";
    pub const IMAGE_JPEG: &str = "image/jpeg";
    pub const IMAGE_JPG: &str = "image/jpg";
    pub const IMAGE_WEBP: &str = "image/webp";
    pub const IMAGE_GIF: &str = "image/gif";
    pub const TEXT_HTML: &str = "text/html";
    pub const TEXT_UNICODE: &str = "text/unicode";
    pub const TEXT_PLAIN: &str = "text/plain";
    pub const OCTET_STREAM: &str = "application/octet-stream";
}

/// Image types a user may pick as their preferred output format
pub const PREFERABLE_IMAGE_TYPES: &[&str] = &[
    mime::IMAGE_PNG,
    mime::IMAGE_JPEG,
    mime::IMAGE_JPG,
    mime::IMAGE_WEBP,
    mime::IMAGE_GIF,
];

/// A MIME-like tag describing one representation of clipboard content.
///
/// Equality is an exact string match. No case folding or parameter
/// stripping is performed, so `image/PNG` and `image/png` are different
/// types, matching what the clipboard reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentType(String);

impl ContentType {
    /// Wrap a tag as reported by a clipboard, without validation
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Get the tag string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this tag belongs to the image family
    pub fn is_image(&self) -> bool {
        self.0.starts_with("image/")
    }

    /// Tag to hand to an encoder. `image/jpg` is an informal alias that
    /// encoders do not recognize.
    pub fn encoder_tag(&self) -> &str {
        match self.0.as_str() {
            mime::IMAGE_JPG => mime::IMAGE_JPEG,
            other => other,
        }
    }

    /// Attachment file name for content of this type
    pub fn file_name(&self) -> &'static str {
        match self.0.as_str() {
            mime::IMAGE_PNG => "document.png",
            mime::IMAGE_JPEG | mime::IMAGE_JPG => "document.jpg",
            mime::IMAGE_WEBP => "document.webp",
            mime::IMAGE_GIF => "document.gif",
            mime::TEXT_HTML => "document.html",
            _ => "document.txt",
        }
    }

    /// Parse a user supplied preferred image format.
    ///
    /// Only the image types in [`PREFERABLE_IMAGE_TYPES`] are accepted.
    pub fn parse_preferred_image(input: &str) -> Result<Self, InvalidContentTypeError> {
        let content_type: Self = input.parse()?;
        if PREFERABLE_IMAGE_TYPES.contains(&content_type.as_str()) {
            Ok(content_type)
        } else {
            Err(InvalidContentTypeError {
                input: input.to_string(),
                reason: format!(
                    "not a preferable image format (valid: {})",
                    PREFERABLE_IMAGE_TYPES.join(", ")
                ),
            })
        }
    }
}

impl FromStr for ContentType {
    type Err = InvalidContentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let valid = match trimmed.split_once('/') {
            Some((kind, sub)) => {
                !kind.is_empty() && !sub.is_empty() && !trimmed.contains(char::is_whitespace)
            }
            None => false,
        };

        if valid {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(InvalidContentTypeError {
                input: s.to_string(),
                reason: "expected <type>/<subtype>".to_string(),
            })
        }
    }
}

impl From<&str> for ContentType {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for ContentType {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

impl PartialEq<&str> for ContentType {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl AsRef<str> for ContentType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
