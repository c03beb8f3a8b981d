//! In-memory clipboard entry

use async_trait::async_trait;

use crate::application::ports::{ClipboardEntry, ClipboardError};
use crate::domain::content::ContentType;

/// A clipboard entry whose representations are already read into memory
#[derive(Debug, Clone, Default)]
pub struct MemoryEntry {
    types: Vec<ContentType>,
    data: Vec<Vec<u8>>,
}

impl MemoryEntry {
    /// Create an entry with no representations
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`MemoryEntry::push`]
    pub fn with(mut self, content_type: impl Into<ContentType>, data: impl Into<Vec<u8>>) -> Self {
        self.push(content_type, data);
        self
    }

    /// Add a representation. A type that is already present is replaced
    /// in place, keeping its position.
    pub fn push(&mut self, content_type: impl Into<ContentType>, data: impl Into<Vec<u8>>) {
        let content_type = content_type.into();
        let data = data.into();
        match self.types.iter().position(|ct| *ct == content_type) {
            Some(i) => self.data[i] = data,
            None => {
                self.types.push(content_type);
                self.data.push(data);
            }
        }
    }

    /// Whether the entry offers no representations
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[async_trait]
impl ClipboardEntry for MemoryEntry {
    fn types(&self) -> &[ContentType] {
        &self.types
    }

    async fn fetch(&self, content_type: &ContentType) -> Result<Vec<u8>, ClipboardError> {
        self.types
            .iter()
            .position(|ct| ct == content_type)
            .map(|i| self.data[i].clone())
            .ok_or_else(|| ClipboardError::TypeNotOffered(content_type.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fetch_returns_pushed_bytes() {
        let entry = MemoryEntry::new()
            .with("text/html", "<b>hi</b>")
            .with("text/plain", "hi");

        assert_eq!(entry.types(), &[ContentType::from("text/html"), ContentType::from("text/plain")]);
        assert_eq!(entry.fetch(&"text/plain".into()).await.unwrap(), b"hi");
    }

    #[tokio::test]
    async fn fetch_unknown_type_fails() {
        let entry = MemoryEntry::new().with("text/plain", "hi");
        let result = entry.fetch(&"image/png".into()).await;
        assert!(matches!(result, Err(ClipboardError::TypeNotOffered(_))));
    }

    #[test]
    fn push_replaces_existing_type() {
        let mut entry = MemoryEntry::new().with("text/plain", "a").with("text/html", "b");
        entry.push("text/plain", "c");
        assert_eq!(entry.types().len(), 2);
        assert_eq!(entry.types()[0], "text/plain");
    }

    #[test]
    fn new_entry_is_empty() {
        assert!(MemoryEntry::new().is_empty());
        assert!(!MemoryEntry::new().with("text/plain", "").is_empty());
    }
}
