//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the system clipboard, the `image` codecs,
//! the config file and the attachment directory.

pub mod attachment;
pub mod clipboard;
pub mod config;
pub mod conversion;
pub mod preferences;

// Re-export adapters
pub use attachment::DirectoryAttachmentSink;
pub use clipboard::{create_clipboard, ArboardClipboard, FileClipboard, MemoryEntry};
pub use config::XdgConfigStore;
pub use conversion::{CodecFormatSupport, RasterConverter};
pub use preferences::MemoryPreferences;
