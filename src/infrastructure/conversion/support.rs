//! Capability query backed by the available codecs

use super::image_format_for;
use crate::application::ports::FormatSupport;
use crate::domain::content::{mime, ContentType};

/// Reports text types as always producible and image types as producible
/// when the `image` crate was built with an encoder for them.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodecFormatSupport;

impl CodecFormatSupport {
    pub fn new() -> Self {
        Self
    }
}

impl FormatSupport for CodecFormatSupport {
    fn supports(&self, content_type: &ContentType) -> bool {
        match content_type.as_str() {
            mime::TEXT_HTML | mime::TEXT_UNICODE | mime::TEXT_PLAIN => true,
            _ => image_format_for(content_type).is_some_and(|f| f.writing_enabled()),
        }
    }
}
