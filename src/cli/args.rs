//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::domain::content::{ContentType, InsertMode};

/// Session used when none is given
pub const DEFAULT_SESSION: &str = "compose";

/// `--format` value that drops the preferred image format for a run
pub const FORMAT_DEFAULT: &str = "default";

/// paste-attach - attach clipboard content to a compose session
#[derive(Parser, Debug)]
#[command(name = "paste-attach")]
#[command(version)]
#[command(about = "Attach clipboard content to a compose session, converting images on the way")]
#[command(long_about = None)]
pub struct Cli {
    /// Compose session receiving the attachments
    #[arg(short = 's', long, value_name = "ID", default_value = DEFAULT_SESSION)]
    pub session: String,

    /// Directory holding session attachment folders
    #[arg(short = 'o', long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Preferred image format for this run (e.g. image/jpeg), or "default" for none
    #[arg(short = 'f', long, value_name = "TYPE", conflicts_with = "legacy")]
    pub format: Option<String>,

    /// Attach content as-is: no preference, no conversion
    #[arg(long)]
    pub legacy: bool,

    /// Read entries from files instead of the system clipboard
    #[arg(long, value_name = "FILE", num_args = 1.., action = ArgAction::Append)]
    pub from: Vec<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value ("default" clears preferred_image_format)
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// Remove a config value
    Unset {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Where a run takes its preferred image format from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceSource {
    /// The persisted preference, re-read for every entry
    Stored,
    /// A fixed value for this run only; `None` means no preference
    Override(Option<ContentType>),
}

/// Parsed insert options
#[derive(Debug, Clone)]
pub struct InsertOptions {
    pub session_id: String,
    pub output_dir: PathBuf,
    pub mode: InsertMode,
    pub preference: PreferenceSource,
    pub from: Vec<PathBuf>,
}
