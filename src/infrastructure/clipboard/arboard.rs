//! Cross-platform clipboard adapter using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland).

use std::io::Cursor;

use async_trait::async_trait;
use image::{ImageFormat, RgbaImage};

use super::memory::MemoryEntry;
use crate::application::ports::{ClipboardEntry, ClipboardError, ClipboardSource};
use crate::domain::content::{mime, ContentType};

/// Cross-platform clipboard adapter using arboard.
///
/// The system clipboard holds a single item, so reads yield at most one
/// entry. It offers `image/png`, `text/html` and `text/plain`, in that
/// order, for whichever flavors are present.
pub struct ArboardClipboard;

impl ArboardClipboard {
    /// Create a new arboard clipboard adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardSource for ArboardClipboard {
    async fn read(
        &self,
        accepted: &[ContentType],
    ) -> Result<Vec<Box<dyn ClipboardEntry>>, ClipboardError> {
        let wants_images = accepted.iter().any(ContentType::is_image);

        // arboard operations are blocking, so run in spawn_blocking
        let entry = tokio::task::spawn_blocking(move || read_entry(wants_images))
            .await
            .map_err(|e| ClipboardError::ReadFailed(format!("Task join error: {}", e)))??;

        if entry.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![Box::new(entry) as Box<dyn ClipboardEntry>])
    }
}

fn read_entry(wants_images: bool) -> Result<MemoryEntry, ClipboardError> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| ClipboardError::ClipboardUnavailable(e.to_string()))?;

    let image = if wants_images {
        available(clipboard.get_image())?
            .map(encode_png)
            .transpose()?
    } else {
        None
    };
    let html = available(clipboard.get().html())?;
    let text = available(clipboard.get_text())?;

    let entry = assemble_entry(image, html, text);

    let offered: Vec<&str> = entry.types().iter().map(ContentType::as_str).collect();
    log::debug!("system clipboard offers [{}]", offered.join(", "));

    Ok(entry)
}

/// Treat a missing flavor as absent rather than as a failure
fn available<T>(result: Result<T, arboard::Error>) -> Result<Option<T>, ClipboardError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(arboard::Error::ContentNotAvailable) => Ok(None),
        Err(e) => Err(ClipboardError::ReadFailed(e.to_string())),
    }
}

/// Build the entry in offer order: image, HTML, plain text.
/// Empty payloads are not offered.
fn assemble_entry(
    png: Option<Vec<u8>>,
    html: Option<String>,
    text: Option<String>,
) -> MemoryEntry {
    let mut entry = MemoryEntry::new();

    if let Some(png) = png.filter(|p| !p.is_empty()) {
        entry.push(mime::IMAGE_PNG, png);
    }
    if let Some(html) = html.filter(|h| !h.is_empty()) {
        entry.push(mime::TEXT_HTML, html);
    }
    if let Some(text) = text.filter(|t| !t.is_empty()) {
        entry.push(mime::TEXT_PLAIN, text);
    }

    entry
}

/// arboard hands out raw RGBA pixels; the clipboard convention is PNG.
fn encode_png(image: arboard::ImageData<'_>) -> Result<Vec<u8>, ClipboardError> {
    let too_large = |_| {
        ClipboardError::ReadFailed(format!(
            "clipboard image of {}x{} is too large",
            image.width, image.height
        ))
    };
    let width = u32::try_from(image.width).map_err(too_large)?;
    let height = u32::try_from(image.height).map_err(too_large)?;

    let pixels = RgbaImage::from_raw(width, height, image.bytes.into_owned()).ok_or_else(|| {
        ClipboardError::ReadFailed(format!(
            "clipboard image buffer does not match {}x{}",
            width, height
        ))
    })?;

    let mut png = Cursor::new(Vec::new());
    pixels
        .write_to(&mut png, ImageFormat::Png)
        .map_err(|e| ClipboardError::ReadFailed(format!("PNG encoding failed: {}", e)))?;
    Ok(png.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[test]
    fn clipboard_creates_successfully() {
        let _clipboard = ArboardClipboard::new();
    }

    #[test]
    fn encode_png_produces_png() {
        let image = arboard::ImageData {
            width: 2,
            height: 2,
            bytes: Cow::Owned(vec![255u8; 16]),
        };
        let png = encode_png(image).unwrap();
        assert_eq!(image::guess_format(&png).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn encode_png_rejects_short_buffer() {
        let image = arboard::ImageData {
            width: 4,
            height: 4,
            bytes: Cow::Owned(vec![0u8; 10]),
        };
        assert!(encode_png(image).is_err());
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn encode_png_rejects_oversized_dimensions() {
        let image = arboard::ImageData {
            width: u32::MAX as usize + 1,
            height: 1,
            bytes: Cow::Owned(Vec::new()),
        };
        assert!(matches!(
            encode_png(image),
            Err(ClipboardError::ReadFailed(msg)) if msg.contains("too large")
        ));
    }

    #[test]
    fn entry_offers_image_then_html_then_text() {
        let entry = assemble_entry(
            Some(vec![0x89, b'P']),
            Some("<b>hi</b>".to_string()),
            Some("hi".to_string()),
        );
        assert_eq!(
            entry.types(),
            &[
                ContentType::from("image/png"),
                ContentType::from("text/html"),
                ContentType::from("text/plain"),
            ]
        );
    }

    #[tokio::test]
    async fn rich_text_copy_offers_html() {
        let entry = assemble_entry(None, Some("<p>x</p>".to_string()), Some("x".to_string()));
        assert_eq!(
            entry.types(),
            &[ContentType::from("text/html"), ContentType::from("text/plain")]
        );
        assert_eq!(
            entry.fetch(&ContentType::from("text/html")).await.unwrap(),
            b"<p>x</p>"
        );
    }

    #[test]
    fn empty_flavors_are_not_offered() {
        let entry = assemble_entry(None, Some(String::new()), Some("plain".to_string()));
        assert_eq!(entry.types(), &[ContentType::from("text/plain")]);
        assert!(assemble_entry(None, None, None).is_empty());
    }

    #[test]
    fn missing_flavor_is_absent_not_an_error() {
        assert_eq!(
            available::<String>(Err(arboard::Error::ContentNotAvailable)).unwrap(),
            None
        );
        assert_eq!(available(Ok(3)).unwrap(), Some(3));
        assert!(matches!(
            available::<String>(Err(arboard::Error::ClipboardOccupied)),
            Err(ClipboardError::ReadFailed(_))
        ));
    }
}
