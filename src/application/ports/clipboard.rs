//! Clipboard port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::content::ContentType;

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Failed to read clipboard: {0}")]
    ReadFailed(String),

    #[error("Clipboard entry does not offer {0}")]
    TypeNotOffered(ContentType),
}

/// One item on the clipboard, readable in several representations
#[async_trait]
pub trait ClipboardEntry: Send + Sync {
    /// Content types this entry can be read as, in the order the
    /// clipboard reports them
    fn types(&self) -> &[ContentType];

    /// Read the raw bytes of one representation.
    ///
    /// # Arguments
    /// * `content_type` - One of the types returned by [`ClipboardEntry::types`]
    async fn fetch(&self, content_type: &ContentType) -> Result<Vec<u8>, ClipboardError>;
}

/// Port for reading the clipboard
#[async_trait]
pub trait ClipboardSource: Send + Sync {
    /// Read all clipboard entries.
    ///
    /// # Arguments
    /// * `accepted` - Types the caller is able to handle. Sources may offer
    ///   other types as well; the caller decides what to do with them.
    ///
    /// # Returns
    /// The entries in clipboard order, possibly empty
    async fn read(
        &self,
        accepted: &[ContentType],
    ) -> Result<Vec<Box<dyn ClipboardEntry>>, ClipboardError>;
}

/// Blanket implementation for boxed clipboard sources
#[async_trait]
impl ClipboardSource for Box<dyn ClipboardSource> {
    async fn read(
        &self,
        accepted: &[ContentType],
    ) -> Result<Vec<Box<dyn ClipboardEntry>>, ClipboardError> {
        self.as_ref().read(accepted).await
    }
}
