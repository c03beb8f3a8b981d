//! Main app runner for the insert command

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::application::ports::{ConfigStore, PreferenceStore};
use crate::application::{AttachedFile, InsertCallbacks, InsertFromClipboardUseCase, InsertInput};
use crate::domain::config::{AppConfig, PREFERRED_IMAGE_FORMAT_KEY};
use crate::domain::content::{ContentType, InsertMode};
use crate::infrastructure::{
    create_clipboard, CodecFormatSupport, DirectoryAttachmentSink, MemoryPreferences,
    RasterConverter, XdgConfigStore,
};

use super::args::{InsertOptions, PreferenceSource};
use super::config_cmd::parse_format_value;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable overriding the attachment directory
pub const ENV_OUTPUT_DIR: &str = "PASTE_ATTACH_OUTPUT_DIR";

/// Environment variable overriding the preferred image format
pub const ENV_PREFERRED_FORMAT: &str = "PASTE_ATTACH_PREFERRED_FORMAT";

/// Run one insert from the clipboard (or the given files)
pub async fn run_insert(options: InsertOptions) -> ExitCode {
    let presenter = Presenter::new();

    let preferences: Box<dyn PreferenceStore> = match options.preference {
        PreferenceSource::Stored => Box::new(XdgConfigStore::new()),
        PreferenceSource::Override(Some(ref ct)) => Box::new(MemoryPreferences::with(
            PREFERRED_IMAGE_FORMAT_KEY,
            ct.as_str(),
        )),
        PreferenceSource::Override(None) => Box::new(MemoryPreferences::new()),
    };

    log::debug!(
        "session {}, mode {}, output {}",
        options.session_id,
        options.mode,
        options.output_dir.display()
    );

    // Create use case
    let use_case = InsertFromClipboardUseCase::new(
        create_clipboard(options.from),
        CodecFormatSupport::new(),
        preferences,
        RasterConverter::new(),
        DirectoryAttachmentSink::new(options.output_dir),
    );

    let input = InsertInput {
        session_id: options.session_id,
        mode: options.mode,
    };

    // Lines are printed as attachments land so a later failure keeps them visible
    let callbacks = InsertCallbacks {
        on_type_selected: None,
        on_converting: Some(Box::new(move |from: &ContentType, to: &ContentType| {
            presenter.converting(from, to);
        })),
        on_attached: Some(Box::new(move |file: &AttachedFile| {
            presenter.attachment(file);
        })),
    };

    match use_case.execute(input, callbacks).await {
        Ok(output) => {
            if output.attached.is_empty() {
                presenter.warn("Nothing to attach");
            } else {
                presenter.success(&format!("{} attached", plural(output.attached.len())));
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring config file: {}", e);
            AppConfig::empty()
        }
    };

    // Build env config
    let env_config = AppConfig {
        output_dir: env_value(ENV_OUTPUT_DIR),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

/// Resolve the options for a run.
///
/// A `--format` value wins over the environment; without either the stored
/// preference is used. Legacy mode takes no format. Errors are usage errors.
pub fn resolve_options(
    session_id: String,
    format: Option<String>,
    from: Vec<PathBuf>,
    config: &AppConfig,
) -> Result<InsertOptions, String> {
    let mode = match config.mode.as_deref() {
        Some(raw) => raw.parse::<InsertMode>().map_err(|e| e.to_string())?,
        None => InsertMode::default(),
    };

    let preference = match (format, env_value(ENV_PREFERRED_FORMAT)) {
        (Some(raw), _) if !mode.honors_preference() => {
            return Err(format!("--format {} cannot be used in {} mode", raw, mode));
        }
        (None, Some(raw)) if !mode.honors_preference() => {
            log::warn!("ignoring {}={} in {} mode", ENV_PREFERRED_FORMAT, raw, mode);
            PreferenceSource::Stored
        }
        (Some(raw), _) | (None, Some(raw)) => {
            PreferenceSource::Override(parse_format_value(&raw)?)
        }
        (None, None) => PreferenceSource::Stored,
    };

    Ok(InsertOptions {
        session_id,
        output_dir: config.output_dir_or_default(),
        mode,
        preference,
        from,
    })
}

fn env_value(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.trim().is_empty())
}

fn plural(count: usize) -> String {
    if count == 1 {
        "1 attachment".to_string()
    } else {
        format!("{} attachments", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(mode: Option<&str>) -> AppConfig {
        AppConfig {
            mode: mode.map(str::to_string),
            output_dir: Some("/tmp/attachments".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn resolve_uses_stored_preference_by_default() {
        let options =
            resolve_options("s".to_string(), None, Vec::new(), &config(Some("convert"))).unwrap();
        assert_eq!(options.mode, InsertMode::Convert);
        assert_eq!(options.preference, PreferenceSource::Stored);
        assert_eq!(options.output_dir, PathBuf::from("/tmp/attachments"));
    }

    #[test]
    fn resolve_format_override() {
        let options = resolve_options(
            "s".to_string(),
            Some("image/jpeg".to_string()),
            Vec::new(),
            &config(None),
        )
        .unwrap();
        assert_eq!(
            options.preference,
            PreferenceSource::Override(Some(ContentType::from("image/jpeg")))
        );
    }

    #[test]
    fn resolve_format_default_means_no_preference() {
        let options = resolve_options(
            "s".to_string(),
            Some("default".to_string()),
            Vec::new(),
            &config(None),
        )
        .unwrap();
        assert_eq!(options.preference, PreferenceSource::Override(None));
    }

    #[test]
    fn resolve_rejects_bad_format() {
        let result = resolve_options(
            "s".to_string(),
            Some("text/html".to_string()),
            Vec::new(),
            &config(None),
        );
        assert!(result.is_err());
    }

    #[test]
    fn resolve_rejects_bad_mode() {
        let result = resolve_options("s".to_string(), None, Vec::new(), &config(Some("turbo")));
        assert!(result.is_err());
    }

    #[test]
    fn resolve_legacy_mode() {
        let options =
            resolve_options("s".to_string(), None, Vec::new(), &config(Some("legacy"))).unwrap();
        assert_eq!(options.mode, InsertMode::Legacy);
    }

    #[test]
    fn resolve_rejects_format_in_configured_legacy_mode() {
        let result = resolve_options(
            "s".to_string(),
            Some("image/png".to_string()),
            Vec::new(),
            &config(Some("legacy")),
        );
        let message = result.unwrap_err();
        assert!(message.contains("legacy"), "unexpected message: {}", message);
    }

    #[test]
    fn plural_wording() {
        assert_eq!(plural(1), "1 attachment");
        assert_eq!(plural(3), "3 attachments");
    }
}
