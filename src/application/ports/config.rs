//! Configuration port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for configuration storage
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the stored configuration.
    /// A missing file loads as an empty config.
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Persist the full configuration, replacing what is stored.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Location of the backing file
    fn path(&self) -> PathBuf;

    /// Whether the backing file exists
    fn exists(&self) -> bool;

    /// Write the default configuration.
    /// Fails with [`ConfigError::AlreadyExists`] rather than overwriting.
    async fn init(&self) -> Result<(), ConfigError>;
}
