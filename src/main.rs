//! Flotilla: spawn and supervise agent worker processes.
//!
//! This is the main entry point for the `flotilla` CLI. It parses arguments,
//! resolves configuration, dispatches to the appropriate command handler, and
//! handles errors with proper exit codes.

mod agent;
mod cli;
mod commands;
mod config;
mod error;
mod exit_codes;
mod workflow;

use cli::Cli;
use config::Config;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries previews and status lines.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();

    match run(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(cli: Cli) -> error::Result<()> {
    let cwd = std::env::current_dir().map_err(|e| {
        error::FlotillaError::UserError(format!("failed to get current working directory: {}", e))
    })?;
    let config = Config::resolve(cli.settings.as_deref(), &cwd)?;

    commands::dispatch(cli.command, &config)
}
