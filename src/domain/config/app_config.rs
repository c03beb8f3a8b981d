//! Application configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::content::InsertMode;
use crate::domain::error::ConfigError;

/// Key under which the preferred image format is persisted
pub const PREFERRED_IMAGE_FORMAT_KEY: &str = "preferred_image_format";

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[PREFERRED_IMAGE_FORMAT_KEY, "mode", "output_dir"];

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub preferred_image_format: Option<String>,
    pub mode: Option<String>,
    pub output_dir: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            preferred_image_format: None,
            mode: Some(InsertMode::default().to_string()),
            output_dir: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            preferred_image_format: other.preferred_image_format.or(self.preferred_image_format),
            mode: other.mode.or(self.mode),
            output_dir: other.output_dir.or(self.output_dir),
        }
    }

    /// Check if a config key is valid
    pub fn is_valid_key(key: &str) -> bool {
        VALID_CONFIG_KEYS.contains(&key)
    }

    /// Read a value by config key
    pub fn value(&self, key: &str) -> Result<Option<String>, ConfigError> {
        match key {
            PREFERRED_IMAGE_FORMAT_KEY => Ok(self.preferred_image_format.clone()),
            "mode" => Ok(self.mode.clone()),
            "output_dir" => Ok(self.output_dir.clone()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Replace a value by config key; `None` clears it
    pub fn set_value(&mut self, key: &str, value: Option<String>) -> Result<(), ConfigError> {
        let slot = match key {
            PREFERRED_IMAGE_FORMAT_KEY => &mut self.preferred_image_format,
            "mode" => &mut self.mode,
            "output_dir" => &mut self.output_dir,
            _ => return Err(unknown_key(key)),
        };
        *slot = value;
        Ok(())
    }

    /// Get mode as parsed InsertMode, or default if not set/invalid
    pub fn mode_or_default(&self) -> InsertMode {
        self.mode
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get the attachment output directory, or the per-user data directory
    pub fn output_dir_or_default(&self) -> PathBuf {
        match self.output_dir.as_deref() {
            Some(dir) => PathBuf::from(dir),
            None => dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("paste-attach")
                .join("attachments"),
        }
    }
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    }
}
