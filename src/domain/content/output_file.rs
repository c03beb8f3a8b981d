//! Output file value object

use super::content_type::ContentType;

/// A named file ready to be attached.
///
/// The file name is always derived from the content type, so the declared
/// type and the name cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    name: &'static str,
    content_type: ContentType,
    data: Vec<u8>,
}

impl OutputFile {
    /// Create an output file for bytes of the given type
    pub fn new(content_type: ContentType, data: Vec<u8>) -> Self {
        Self {
            name: content_type.file_name(),
            content_type,
            data,
        }
    }

    /// File name derived from the content type
    pub fn name(&self) -> &str {
        self.name
    }

    /// Declared content type of the payload
    pub fn content_type(&self) -> &ContentType {
        &self.content_type
    }

    /// Get the payload
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume and return the payload
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.size_bytes();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_follows_type() {
        let file = OutputFile::new(ContentType::from("image/webp"), vec![1, 2, 3]);
        assert_eq!(file.name(), "document.webp");
        assert_eq!(file.content_type(), &ContentType::from("image/webp"));
        assert_eq!(file.data(), &[1, 2, 3]);
    }

    #[test]
    fn unknown_type_is_named_txt() {
        let file = OutputFile::new(ContentType::from("application/x-custom"), vec![0]);
        assert_eq!(file.name(), "document.txt");
    }

    #[test]
    fn human_readable_size_bytes() {
        let file = OutputFile::new(ContentType::from("text/plain"), vec![0u8; 500]);
        assert_eq!(file.human_readable_size(), "500 B");
    }

    #[test]
    fn human_readable_size_kb() {
        let file = OutputFile::new(ContentType::from("text/plain"), vec![0u8; 2048]);
        assert_eq!(file.human_readable_size(), "2.0 KB");
    }

    #[test]
    fn human_readable_size_mb() {
        let file = OutputFile::new(ContentType::from("text/plain"), vec![0u8; 2 * 1024 * 1024]);
        assert_eq!(file.human_readable_size(), "2.0 MB");
    }

    #[test]
    fn into_data_returns_payload() {
        let file = OutputFile::new(ContentType::from("text/html"), b"<b>x</b>".to_vec());
        assert_eq!(file.into_data(), b"<b>x</b>".to_vec());
    }
}
