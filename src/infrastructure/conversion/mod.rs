//! Image conversion infrastructure module
//!
//! Maps content types onto `image` crate formats, answers capability
//! queries, and re-encodes images.

mod raster;
mod support;

pub use raster::RasterConverter;
pub use support::CodecFormatSupport;

use image::ImageFormat;

use crate::domain::content::{mime, ContentType};

/// The `image` format that encodes/decodes a content type, if any.
/// `image/jpg` resolves to JPEG.
pub(crate) fn image_format_for(content_type: &ContentType) -> Option<ImageFormat> {
    match content_type.encoder_tag() {
        mime::IMAGE_PNG => Some(ImageFormat::Png),
        mime::IMAGE_JPEG => Some(ImageFormat::Jpeg),
        mime::IMAGE_WEBP => Some(ImageFormat::WebP),
        mime::IMAGE_GIF => Some(ImageFormat::Gif),
        _ => None,
    }
}
