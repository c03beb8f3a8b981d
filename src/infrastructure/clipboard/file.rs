//! File-backed clipboard adapter
//!
//! Treats a list of files as clipboard entries, one entry per file, so the
//! insert pipeline can run without a desktop clipboard.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::memory::MemoryEntry;
use crate::application::ports::{ClipboardEntry, ClipboardError, ClipboardSource};
use crate::domain::content::{mime, ContentType};

/// Clipboard adapter reading entries from files
pub struct FileClipboard {
    paths: Vec<PathBuf>,
}

impl FileClipboard {
    /// Create a clipboard whose entries are the given files, in order
    pub fn new(paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl ClipboardSource for FileClipboard {
    async fn read(
        &self,
        _accepted: &[ContentType],
    ) -> Result<Vec<Box<dyn ClipboardEntry>>, ClipboardError> {
        let mut entries: Vec<Box<dyn ClipboardEntry>> = Vec::with_capacity(self.paths.len());

        for path in &self.paths {
            let data = fs::read(path)
                .await
                .map_err(|e| ClipboardError::ReadFailed(format!("{}: {}", path.display(), e)))?;

            let content_type = detect_content_type(path, &data);
            log::debug!("{} offers {}", path.display(), content_type);

            entries.push(Box::new(MemoryEntry::new().with(content_type, data)));
        }

        Ok(entries)
    }
}

/// Sniff the content type from magic bytes, then fall back to the extension.
fn detect_content_type(path: &Path, data: &[u8]) -> ContentType {
    if let Some(kind) = infer::get(data) {
        return ContentType::from(kind.mime_type());
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    match extension.as_deref() {
        Some("html") | Some("htm") => ContentType::from(mime::TEXT_HTML),
        Some("txt") | Some("text") => ContentType::from(mime::TEXT_PLAIN),
        _ if std::str::from_utf8(data).is_ok() => ContentType::from(mime::TEXT_PLAIN),
        _ => ContentType::from(mime::OCTET_STREAM),
    }
}
