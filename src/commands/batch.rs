//! Implementation of the `flotilla batch` command.

use crate::agent::dispatch::describe_outcome;
use crate::agent::preview::render_task_preview;
use crate::agent::{BatchSummary, ExecutionMode, Instance, compose_task, run_batch};
use crate::config::Config;
use crate::error::Result;
use crate::workflow::{Workflow, load_workflow};
use std::path::Path;
use tracing::info;

/// What a batch invocation ended up doing.
#[derive(Debug)]
pub(crate) enum BatchOutcome {
    /// The workflow has no tasks; nothing was spawned.
    Empty,
    /// Dry run; this many previews were printed.
    Previewed(usize),
    /// Workers were spawned and every outcome collected.
    Ran(BatchSummary),
}

/// Execute the `flotilla batch` command.
///
/// Load errors abort the command. Per-task spawn failures and non-zero exits
/// are reported and do not stop the remaining tasks.
pub fn cmd_batch(path: &Path, dry_run: bool, config: &Config) -> Result<()> {
    let workflow = load_workflow(path)?;
    execute_workflow(&workflow, dry_run, config);
    Ok(())
}

pub(crate) fn execute_workflow(
    workflow: &Workflow,
    dry_run: bool,
    config: &Config,
) -> BatchOutcome {
    println!("Workflow: {}", workflow.display_name());
    println!("  Tasks: {}", workflow.tasks.len());
    println!("  Mode:  {}", workflow.mode_label());
    println!();

    if workflow.tasks.is_empty() {
        println!("No tasks found in workflow; nothing to run.");
        return BatchOutcome::Empty;
    }

    let mode = ExecutionMode::from_dry_run(dry_run);
    let instances: Vec<Instance> = workflow
        .tasks
        .iter()
        .map(|task| compose_task(task, config, mode))
        .collect();

    if mode == ExecutionMode::DryRun {
        println!("DRY RUN - would execute:");
        for (index, instance) in instances.iter().enumerate() {
            print!("{}", render_task_preview(index + 1, instance));
        }
        return BatchOutcome::Previewed(instances.len());
    }

    info!(
        workflow = workflow.display_name(),
        tasks = instances.len(),
        parallel = workflow.parallel,
        "starting batch"
    );

    let run = run_batch(instances, workflow.parallel);
    if workflow.parallel {
        println!(
            "Issued {} spawn(s); waiting for workers to finish...",
            run.spawn_attempts()
        );
    }

    // Parallel workers finish on their own schedule; collect them so the
    // summary covers every task before the orchestrator exits.
    let summary = run.drain();
    print_summary(&summary);
    BatchOutcome::Ran(summary)
}

fn print_summary(summary: &BatchSummary) {
    println!();
    println!(
        "Batch finished: {} ran ({} succeeded, {} failed), {} could not be spawned",
        summary.spawned, summary.succeeded, summary.exited_nonzero, summary.spawn_failed
    );

    let failures: Vec<_> = summary.reports.iter().filter(|r| !r.is_success()).collect();
    if !failures.is_empty() {
        println!();
        for report in failures {
            println!("  - {}", describe_outcome(report));
        }
    }
}
