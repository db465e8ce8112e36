//! Implementation of the `flotilla spawn` command.

use crate::agent::dispatch::InstanceReport;
use crate::agent::preview::{render_command_line, render_spawn_preview};
use crate::agent::{ExecutionMode, SpawnRequest, compose_spawn, spawn_instance};
use crate::config::Config;
use crate::error::Result;
use tracing::info;

/// What a spawn invocation ended up doing.
#[derive(Debug)]
pub(crate) enum SpawnOutcome {
    /// Dry run; the preview was printed and nothing was spawned.
    Previewed,
    /// A spawn was attempted and its terminal state collected.
    Ran(InstanceReport),
}

/// Execute the `flotilla spawn` command.
///
/// 1. Composes the instance from the request and config defaults
/// 2. Prints a preview and stops if `--dry-run` was given
/// 3. Spawns the worker and waits for its observer to report
///
/// A failed spawn or non-zero worker exit is reported, not returned as an error.
pub fn cmd_spawn(request: SpawnRequest, config: &Config) -> Result<()> {
    execute_spawn(&request, config);
    Ok(())
}

pub(crate) fn execute_spawn(request: &SpawnRequest, config: &Config) -> SpawnOutcome {
    let instance = compose_spawn(request, config);

    if instance.mode == ExecutionMode::DryRun {
        print!("{}", render_spawn_preview(&instance));
        return SpawnOutcome::Previewed;
    }

    println!("Spawning worker {}...", instance.id);
    println!("  Command: {}", render_command_line(&instance));
    info!(instance = %instance.id, "spawning single task");

    // Keep the orchestrator alive until the exit observer has reported.
    SpawnOutcome::Ran(spawn_instance(instance).wait())
}
