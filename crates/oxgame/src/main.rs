//! OX game - tic-tac-toe with move history and time travel.

#![warn(missing_docs)]

mod cli;
mod config;
mod replay;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::OxConfig;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = OxConfig::load_or_default(&cli.config)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            initialize_file_tracing(&config)?;
            tui::run_tui(&config)
        }
        Command::Replay { json, tokens } => {
            initialize_stderr_tracing(&config);
            let output = replay::run(&tokens, json)?;
            print!("{}", output);
            Ok(())
        }
    }
}

fn env_filter(config: &OxConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs go to a file so they do not interfere with the TUI.
#[instrument(skip(config))]
fn initialize_file_tracing(config: &OxConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(log_file = %config.log_file().display(), "Tracing initialized");
    Ok(())
}

#[instrument(skip(config))]
fn initialize_stderr_tracing(config: &OxConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}
