//! paste-attach CLI entry point

use std::process::ExitCode;

use clap::Parser;

use paste_attach::cli::{
    app::{load_merged_config, resolve_options, run_insert, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use paste_attach::domain::config::AppConfig;
use paste_attach::domain::content::InsertMode;
use paste_attach::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        preferred_image_format: None, // read per entry from the preference store
        mode: cli.legacy.then(|| InsertMode::Legacy.to_string()),
        output_dir: cli.out.map(|p| p.to_string_lossy().into_owned()),
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    let options = match resolve_options(cli.session, cli.format, cli.from, &config) {
        Ok(options) => options,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    run_insert(options).await
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_module("paste_attach", log::LevelFilter::Debug);
    }
    builder.init();
}
