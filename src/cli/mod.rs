//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, the config command,
//! and the insert runner.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

// Re-export commonly used types
pub use app::{run_insert, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, InsertOptions, PreferenceSource};
pub use presenter::Presenter;
