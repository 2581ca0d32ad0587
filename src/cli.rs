//! Command-line interface for tic_tac_toe.

use clap::Parser;
use std::path::PathBuf;

use crate::config::AppConfig;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tic_tac_toe")]
#[command(about = "Two players, one device. Take turns and win!", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File that receives log output
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Tracing filter (RUST_LOG still wins)
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Do not capture the mouse
    #[arg(long)]
    pub no_mouse: bool,

    /// Hide the hint under the status line
    #[arg(long)]
    pub no_hint: bool,
}

impl Cli {
    /// Applies command-line overrides on top of `config`.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(path) = &self.log_file {
            config = config.with_log_file(path.clone());
        }
        if let Some(filter) = &self.log_filter {
            config = config.with_log_filter(filter.clone());
        }
        if self.no_mouse {
            config = config.with_mouse(false);
        }
        if self.no_hint {
            config = config.with_show_hint(false);
        }
        config
    }
}
