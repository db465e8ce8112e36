//! CLI argument parsing for flotilla.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::agent::SpawnRequest;
use crate::config::CONFIG_ENV_VAR;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Flotilla: spawn and supervise agent worker processes.
///
/// Run a single ad-hoc task with `spawn`, or a workflow document of tasks
/// with `batch`, either one after another or all at once.
#[derive(Parser, Debug)]
#[command(name = "flotilla")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a flotilla.yaml config file.
    #[arg(long, global = true, env = CONFIG_ENV_VAR)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for flotilla.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Spawn one worker for an ad-hoc task.
    ///
    /// The worker is started with the task as its prompt, the allowed tool
    /// set, and the requested flags. flotilla reports when it exits.
    Spawn(SpawnArgs),

    /// Run every task of a workflow document.
    ///
    /// Tasks run one after another unless the workflow sets
    /// `"parallel": true`, in which case all are started at once.
    Batch(BatchArgs),
}

/// Arguments for the `spawn` command.
#[derive(Parser, Debug)]
pub struct SpawnArgs {
    /// Task description handed to the worker.
    pub task: String,

    /// Comma-separated allowed tools (default: config `default_tools`).
    #[arg(short, long)]
    pub tools: Option<String>,

    /// Let the worker skip permission prompts.
    #[arg(long)]
    pub no_permissions: bool,

    /// MCP config file passed to the worker.
    #[arg(short, long)]
    pub config: Option<String>,

    /// Development mode tag (e.g. full, backend-only, frontend-only, api-only).
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Enable parallel execution tools for the worker.
    #[arg(long)]
    pub parallel: bool,

    /// Enable web research tools for the worker.
    #[arg(long)]
    pub research: bool,

    /// Test coverage target in percent.
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub coverage: Option<u32>,

    /// Commit frequency (e.g. phase, feature, manual).
    #[arg(long)]
    pub commit: Option<String>,

    /// Pass --verbose to the worker.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the composed command without spawning.
    #[arg(short, long)]
    pub dry_run: bool,
}

impl From<SpawnArgs> for SpawnRequest {
    fn from(args: SpawnArgs) -> Self {
        SpawnRequest {
            task: args.task,
            tools: args.tools,
            no_permissions: args.no_permissions,
            mcp_config: args.config,
            mode: args.mode,
            parallel: args.parallel,
            research: args.research,
            coverage: args.coverage,
            commit: args.commit,
            verbose: args.verbose,
            dry_run: args.dry_run,
        }
    }
}

/// Arguments for the `batch` command.
#[derive(Parser, Debug)]
pub struct BatchArgs {
    /// Workflow document (JSON, or YAML with a .yaml/.yml extension).
    pub workflow: PathBuf,

    /// Print the composed commands without spawning.
    #[arg(short, long)]
    pub dry_run: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
