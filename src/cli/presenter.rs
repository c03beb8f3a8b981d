//! CLI presenter for output formatting

use colored::*;

use crate::application::AttachedFile;
use crate::domain::content::ContentType;

/// Presenter for CLI output formatting.
///
/// Status goes to stderr; the attachment summary goes to stdout uncolored so
/// it can be piped.
#[derive(Debug, Clone, Copy, Default)]
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Announce an image re-encode
    pub fn converting(&self, from: &ContentType, to: &ContentType) {
        eprintln!("{} Converting {} to {}", "⠋".cyan(), from, to);
    }

    /// Print one attachment line to stdout
    pub fn attachment(&self, file: &AttachedFile) {
        self.output(&format_attachment(file));
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}

/// `name  type  size  [converted from X]`
pub fn format_attachment(file: &AttachedFile) -> String {
    let mut line = format!("{}  {}  {}", file.name, file.content_type, file.size);
    if let Some(ref from) = file.converted_from {
        line.push_str(&format!("  [converted from {}]", from));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attached(converted_from: Option<&str>) -> AttachedFile {
        AttachedFile {
            name: "document.jpg".to_string(),
            content_type: ContentType::from("image/jpeg"),
            size: "1.5 KB".to_string(),
            converted_from: converted_from.map(ContentType::from),
            location: None,
        }
    }

    #[test]
    fn attachment_line_as_is() {
        assert_eq!(
            format_attachment(&attached(None)),
            "document.jpg  image/jpeg  1.5 KB"
        );
    }

    #[test]
    fn attachment_line_converted() {
        assert_eq!(
            format_attachment(&attached(Some("image/png"))),
            "document.jpg  image/jpeg  1.5 KB  [converted from image/png]"
        );
    }
}
