//! In-memory preference store

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{PreferenceError, PreferenceStore};

/// Preference store that lives for the process only.
///
/// Used for one-off overrides (such as a command-line format) where nothing
/// should be persisted.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryPreferences {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a single value
    pub fn with(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(key.into(), value.into());
        Self {
            values: RwLock::new(values),
        }
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferences {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), PreferenceError> {
        self.values.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_missing_is_none() {
        let store = MemoryPreferences::new();
        assert_eq!(store.get("preferred_image_format").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_get_remove() {
        let store = MemoryPreferences::new();
        store.set("preferred_image_format", "image/webp").await.unwrap();
        assert_eq!(
            store.get("preferred_image_format").await.unwrap(),
            Some("image/webp".to_string())
        );

        store.remove("preferred_image_format").await.unwrap();
        assert_eq!(store.get("preferred_image_format").await.unwrap(), None);
    }

    #[tokio::test]
    async fn remove_unset_key_is_ok() {
        let store = MemoryPreferences::new();
        assert!(store.remove("anything").await.is_ok());
    }

    #[tokio::test]
    async fn with_seeds_value() {
        let store = MemoryPreferences::with("preferred_image_format", "image/gif");
        assert_eq!(
            store.get("preferred_image_format").await.unwrap(),
            Some("image/gif".to_string())
        );
    }
}
