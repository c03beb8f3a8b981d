//! Domain error types

use thiserror::Error;

/// Error when parsing a content type string
#[derive(Debug, Clone, Error)]
#[error("Invalid content type \"{input}\": {reason}")]
pub struct InvalidContentTypeError {
    pub input: String,
    pub reason: String,
}

/// Error when an invalid insert mode is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid mode: \"{input}\". Valid modes are: convert, legacy")]
pub struct InvalidModeError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
