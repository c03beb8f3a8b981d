//! Image re-encoding through an off-screen RGBA raster

use std::io::Cursor;

use async_trait::async_trait;
use image::{DynamicImage, GenericImageView, ImageFormat, Rgb, RgbImage, RgbaImage};

use super::image_format_for;
use crate::application::ports::{ConversionError, FormatConverter};
use crate::domain::content::{ContentType, OutputFile};

/// Converter that decodes the source into a raster at its natural size and
/// encodes that raster in the target format with codec defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct RasterConverter;

impl RasterConverter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FormatConverter for RasterConverter {
    async fn convert(
        &self,
        source: Vec<u8>,
        source_type: &ContentType,
        target_type: &ContentType,
    ) -> Result<OutputFile, ConversionError> {
        let format = image_format_for(target_type)
            .filter(|f| f.writing_enabled())
            .ok_or_else(|| ConversionError::UnsupportedTarget(target_type.clone()))?;

        let source_type = source_type.clone();
        let target_type = target_type.clone();

        // Decoding and encoding are CPU-bound, so run in spawn_blocking
        tokio::task::spawn_blocking(move || transcode(&source, &source_type, target_type, format))
            .await
            .map_err(|e| ConversionError::TaskFailed(e.to_string()))?
    }
}

fn transcode(
    source: &[u8],
    source_type: &ContentType,
    target_type: ContentType,
    format: ImageFormat,
) -> Result<OutputFile, ConversionError> {
    let decoded = image::load_from_memory(source).map_err(|e| ConversionError::Decode {
        content_type: source_type.clone(),
        message: e.to_string(),
    })?;

    let (width, height) = decoded.dimensions();
    let canvas = decoded.to_rgba8();

    let encodable = if format == ImageFormat::Jpeg {
        DynamicImage::ImageRgb8(flatten_onto_black(&canvas))
    } else {
        DynamicImage::ImageRgba8(canvas)
    };

    let mut encoded = Cursor::new(Vec::new());
    encodable
        .write_to(&mut encoded, format)
        .map_err(|e| ConversionError::Encode {
            content_type: target_type.clone(),
            message: e.to_string(),
        })?;

    let encoded = encoded.into_inner();
    log::debug!(
        "re-encoded {}x{} image from {} to {} ({} -> {} bytes)",
        width,
        height,
        source_type,
        target_type,
        source.len(),
        encoded.len()
    );

    Ok(OutputFile::new(target_type, encoded))
}

/// Drop the alpha channel the way a cleared canvas does: transparent
/// pixels end up black.
fn flatten_onto_black(canvas: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(canvas.width(), canvas.height(), |x, y| {
        let [r, g, b, a] = canvas.get_pixel(x, y).0;
        let scale = |c: u8| ((u16::from(c) * u16::from(a) + 127) / 255) as u8;
        Rgb([scale(r), scale(g), scale(b)])
    })
}
