//! Image format conversion port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::content::{ContentType, OutputFile};

/// Conversion errors
#[derive(Debug, Clone, Error)]
pub enum ConversionError {
    #[error("Failed to decode {content_type} image: {message}")]
    Decode {
        content_type: ContentType,
        message: String,
    },

    #[error("Cannot encode images as {0}")]
    UnsupportedTarget(ContentType),

    #[error("Failed to encode image as {content_type}: {message}")]
    Encode {
        content_type: ContentType,
        message: String,
    },

    #[error("Conversion task failed: {0}")]
    TaskFailed(String),
}

/// Port for re-encoding image bytes into another image format
#[async_trait]
pub trait FormatConverter: Send + Sync {
    /// Re-encode an image.
    ///
    /// # Arguments
    /// * `source` - Raw bytes of the source image
    /// * `source_type` - Content type the bytes were extracted as
    /// * `target_type` - Content type to produce
    ///
    /// # Returns
    /// A file declaring `target_type`, never the unconverted source
    async fn convert(
        &self,
        source: Vec<u8>,
        source_type: &ContentType,
        target_type: &ContentType,
    ) -> Result<OutputFile, ConversionError>;
}

/// Blanket implementation for boxed converters
#[async_trait]
impl FormatConverter for Box<dyn FormatConverter> {
    async fn convert(
        &self,
        source: Vec<u8>,
        source_type: &ContentType,
        target_type: &ContentType,
    ) -> Result<OutputFile, ConversionError> {
        self.as_ref().convert(source, source_type, target_type).await
    }
}
