//! Configuration value objects

pub mod app_config;

pub use app_config::{AppConfig, PREFERRED_IMAGE_FORMAT_KEY, VALID_CONFIG_KEYS};
