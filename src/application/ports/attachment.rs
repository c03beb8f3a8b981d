//! Attachment sink port interface

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::content::OutputFile;

/// Attachment errors
#[derive(Debug, Clone, Error)]
pub enum AttachmentError {
    #[error("Invalid compose session id: \"{0}\"")]
    InvalidSession(String),

    #[error("Failed to add attachment: {0}")]
    AddFailed(String),
}

/// Where an attachment ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentReceipt {
    /// Name the attachment was stored under (may differ from the file name
    /// when the session already holds a file of that name)
    pub stored_name: String,
    /// Location of the stored attachment, if the sink keeps it on disk
    pub location: Option<PathBuf>,
}

/// Port for attaching files to a compose session
#[async_trait]
pub trait AttachmentSink: Send + Sync {
    /// Attach a file.
    ///
    /// # Arguments
    /// * `session_id` - Compose session receiving the attachment
    /// * `file` - The file to attach
    async fn add_attachment(
        &self,
        session_id: &str,
        file: &OutputFile,
    ) -> Result<AttachmentReceipt, AttachmentError>;
}

/// Blanket implementation for boxed sinks
#[async_trait]
impl AttachmentSink for Box<dyn AttachmentSink> {
    async fn add_attachment(
        &self,
        session_id: &str,
        file: &OutputFile,
    ) -> Result<AttachmentReceipt, AttachmentError> {
        self.as_ref().add_attachment(session_id, file).await
    }
}
