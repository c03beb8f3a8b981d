//! Config command handler

use crate::application::ports::{ConfigStore, FormatSupport};
use crate::domain::config::{AppConfig, PREFERRED_IMAGE_FORMAT_KEY, VALID_CONFIG_KEYS};
use crate::domain::content::{ContentType, InsertMode};
use crate::domain::error::ConfigError;
use crate::infrastructure::CodecFormatSupport;

use super::args::{ConfigAction, FORMAT_DEFAULT};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::Unset { key } => handle_unset(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    validate_key(key)?;
    let normalized = normalize_config_value(key, value)?;

    let mut config = store.load().await?;
    config.set_value(key, normalized.clone())?;
    store.save(&config).await?;

    match normalized {
        Some(v) => presenter.success(&format!("{} = {}", key, v)),
        None => presenter.success(&format!("{} reset to default", key)),
    }

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    validate_key(key)?;

    let config = store.load().await?;
    match config.value(key)? {
        Some(v) => presenter.output(&v),
        None => presenter.output(NOT_SET),
    }

    Ok(())
}

async fn handle_unset<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    validate_key(key)?;

    let mut config = store.load().await?;
    config.set_value(key, None)?;
    store.save(&config).await?;
    presenter.success(&format!("{} unset", key));

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        let value = config.value(key)?;
        presenter.key_value(key, value.as_deref().unwrap_or(NOT_SET));
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn validate_key(key: &str) -> Result<(), ConfigError> {
    if AppConfig::is_valid_key(key) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        })
    }
}

/// Validate a config value and return what should be stored.
/// `None` means the key is cleared.
fn normalize_config_value(key: &str, value: &str) -> Result<Option<String>, ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        PREFERRED_IMAGE_FORMAT_KEY => {
            parse_format_value(value).map(|ct| ct.map(|ct| ct.to_string())).map_err(invalid)
        }
        "mode" => value
            .parse::<InsertMode>()
            .map(|mode| Some(mode.to_string()))
            .map_err(|e| invalid(e.to_string())),
        "output_dir" => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Err(invalid("Value must not be empty".to_string()))
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
        _ => Err(invalid("Unknown key".to_string())),
    }
}

/// Parse a preferred image format as typed by the user.
///
/// `"default"` yields `None`. Anything else must be a preferable image type
/// the local codecs can write.
pub fn parse_format_value(value: &str) -> Result<Option<ContentType>, String> {
    if value.trim().eq_ignore_ascii_case(FORMAT_DEFAULT) {
        return Ok(None);
    }

    let content_type = ContentType::parse_preferred_image(value).map_err(|e| e.to_string())?;
    if !CodecFormatSupport::new().supports(&content_type) {
        return Err(format!("{} cannot be encoded on this system", content_type));
    }

    Ok(Some(content_type))
}
