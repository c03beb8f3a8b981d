//! Clipboard infrastructure module
//!
//! Provides the system clipboard via arboard, a file-backed clipboard,
//! and the in-memory entry both of them produce.

mod arboard;
mod file;
mod memory;

pub use arboard::ArboardClipboard;
pub use file::FileClipboard;
pub use memory::MemoryEntry;

use std::path::PathBuf;

use crate::application::ports::ClipboardSource;

/// Create the clipboard adapter for a run.
///
/// Reads the given files when any are supplied, otherwise the system
/// clipboard.
pub fn create_clipboard(files: Vec<PathBuf>) -> Box<dyn ClipboardSource> {
    if files.is_empty() {
        Box::new(ArboardClipboard::new())
    } else {
        Box::new(FileClipboard::new(files))
    }
}
