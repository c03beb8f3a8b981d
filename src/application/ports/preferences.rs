//! Preference store port interface

use async_trait::async_trait;
use thiserror::Error;

/// Preference store errors
#[derive(Debug, Clone, Error)]
pub enum PreferenceError {
    #[error("Failed to read preferences: {0}")]
    ReadFailed(String),

    #[error("Failed to write preferences: {0}")]
    WriteFailed(String),

    #[error("Unknown preference key: {0}")]
    UnknownKey(String),
}

/// Port for a persistent key/value preference store
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Get a value, `None` when the key is not set
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Set a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;

    /// Remove a key; removing an unset key is not an error
    async fn remove(&self, key: &str) -> Result<(), PreferenceError>;
}

/// Blanket implementation for boxed preference stores
#[async_trait]
impl PreferenceStore for Box<dyn PreferenceStore> {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        self.as_ref().get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.as_ref().set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), PreferenceError> {
        self.as_ref().remove(key).await
    }
}
