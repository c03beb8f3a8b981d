//! XDG config store adapter

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{ConfigStore, PreferenceError, PreferenceStore};
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// XDG-compliant config store.
///
/// Also serves as the persistent preference store: preference keys are
/// config keys, so `config set` and the insert pipeline see the same values.
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    /// Create a new XDG config store with default path
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("paste-attach");

        Self {
            path: config_dir.join("config.toml"),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse TOML content into AppConfig
    fn parse_toml(content: &str) -> Result<AppConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Serialize AppConfig to TOML
    fn to_toml(config: &AppConfig) -> Result<String, ConfigError> {
        toml::to_string_pretty(config).map_err(|e| ConfigError::WriteError(e.to_string()))
    }

    async fn update(&self, key: &str, value: Option<String>) -> Result<(), PreferenceError> {
        if !AppConfig::is_valid_key(key) {
            return Err(PreferenceError::UnknownKey(key.to_string()));
        }

        let mut config = self.load().await.map_err(read_failed)?;
        config.set_value(key, value).map_err(read_failed)?;
        self.save(&config)
            .await
            .map_err(|e| PreferenceError::WriteFailed(e.to_string()))
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.exists() {
            // Return empty config if file doesn't exist
            return Ok(AppConfig::empty());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Self::parse_toml(&content)
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let content = Self::to_toml(config)?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;

        Ok(())
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    async fn init(&self) -> Result<(), ConfigError> {
        if self.exists() {
            return Err(ConfigError::AlreadyExists(
                self.path.to_string_lossy().to_string(),
            ));
        }

        let defaults = AppConfig::defaults();
        self.save(&defaults).await
    }
}

#[async_trait]
impl PreferenceStore for XdgConfigStore {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        if !AppConfig::is_valid_key(key) {
            return Err(PreferenceError::UnknownKey(key.to_string()));
        }

        let config = self.load().await.map_err(read_failed)?;
        config.value(key).map_err(read_failed)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.update(key, Some(value.to_string())).await
    }

    async fn remove(&self, key: &str) -> Result<(), PreferenceError> {
        self.update(key, None).await
    }
}

fn read_failed(e: ConfigError) -> PreferenceError {
    PreferenceError::ReadFailed(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::PREFERRED_IMAGE_FORMAT_KEY;

    #[test]
    fn default_path_is_xdg() {
        let store = XdgConfigStore::new();
        let path = ConfigStore::path(&store);
        assert!(path.to_string_lossy().contains("paste-attach"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn custom_path() {
        let store = XdgConfigStore::with_path("/custom/path/config.toml");
        assert_eq!(
            ConfigStore::path(&store),
            PathBuf::from("/custom/path/config.toml")
        );
    }

    #[test]
    fn parse_toml_flat_format() {
        let content = r#"
preferred_image_format = "image/webp"
mode = "legacy"
output_dir = "/tmp/attachments"
"#;

        let config = XdgConfigStore::parse_toml(content).unwrap();
        assert_eq!(config.preferred_image_format, Some("image/webp".to_string()));
        assert_eq!(config.mode, Some("legacy".to_string()));
        assert_eq!(config.output_dir, Some("/tmp/attachments".to_string()));
    }

    #[test]
    fn parse_toml_rejects_garbage() {
        assert!(matches!(
            XdgConfigStore::parse_toml("mode = ["),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn to_toml_round_trip() {
        let config = AppConfig {
            preferred_image_format: Some("image/jpeg".to_string()),
            mode: Some("convert".to_string()),
            ..Default::default()
        };

        let toml = XdgConfigStore::to_toml(&config).unwrap();
        let parsed = XdgConfigStore::parse_toml(&toml).unwrap();
        assert_eq!(config, parsed);
    }

    #[tokio::test]
    async fn load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        assert_eq!(store.load().await.unwrap(), AppConfig::empty());
    }

    #[tokio::test]
    async fn init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("nested").join("config.toml"));

        store.init().await.unwrap();
        assert_eq!(store.load().await.unwrap(), AppConfig::defaults());
        assert!(matches!(
            store.init().await,
            Err(ConfigError::AlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn preferences_persist_through_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let store = XdgConfigStore::with_path(&path);

        assert_eq!(store.get(PREFERRED_IMAGE_FORMAT_KEY).await.unwrap(), None);

        store
            .set(PREFERRED_IMAGE_FORMAT_KEY, "image/webp")
            .await
            .unwrap();

        // A fresh store sees the value
        let reopened = XdgConfigStore::with_path(&path);
        assert_eq!(
            reopened.get(PREFERRED_IMAGE_FORMAT_KEY).await.unwrap(),
            Some("image/webp".to_string())
        );

        reopened.remove(PREFERRED_IMAGE_FORMAT_KEY).await.unwrap();
        assert_eq!(store.get(PREFERRED_IMAGE_FORMAT_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn preference_set_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        store
            .save(&AppConfig {
                mode: Some("legacy".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        store
            .set(PREFERRED_IMAGE_FORMAT_KEY, "image/gif")
            .await
            .unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(config.mode, Some("legacy".to_string()));
        assert_eq!(config.preferred_image_format, Some("image/gif".to_string()));
    }

    #[tokio::test]
    async fn unknown_preference_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        assert!(matches!(
            store.get("api_key").await,
            Err(PreferenceError::UnknownKey(_))
        ));
        assert!(matches!(
            store.set("api_key", "x").await,
            Err(PreferenceError::UnknownKey(_))
        ));
    }
}
