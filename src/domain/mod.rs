//! Domain layer - Core business logic
//!
//! Contains value objects, the type selection rules, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod content;
pub mod error;

// Re-export common types
pub use config::AppConfig;
pub use content::{allowed_types, select_type, ContentType, InsertMode, OutputFile};
pub use error::*;
