//! Command implementations for flotilla.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod batch;
mod spawn;

use crate::cli::Command;
use crate::config::Config;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Spawn(args) => spawn::cmd_spawn(args.into(), config),
        Command::Batch(args) => batch::cmd_batch(&args.workflow, args.dry_run, config),
    }
}
