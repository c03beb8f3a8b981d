//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod attachment;
pub mod capability;
pub mod clipboard;
pub mod config;
pub mod converter;
pub mod preferences;

// Re-export common types
pub use attachment::{AttachmentError, AttachmentReceipt, AttachmentSink};
pub use capability::FormatSupport;
pub use clipboard::{ClipboardEntry, ClipboardError, ClipboardSource};
pub use config::ConfigStore;
pub use converter::{ConversionError, FormatConverter};
pub use preferences::{PreferenceError, PreferenceStore};
