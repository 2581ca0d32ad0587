//! Tic Tac Toe - terminal entry point.

use anyhow::{Context, Result};
use clap::Parser;
use tic_tac_toe::{AppConfig, Cli, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply(AppConfig::load(cli.config.as_deref())?);

    init_logging(&config)?;
    info!(?config, "Configuration resolved");

    run_tui(&config)
}

/// Logs to a file so output does not interfere with the TUI.
fn init_logging(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}
