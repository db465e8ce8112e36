//! Worker process supervisor.
//!
//! Spawns one OS process per [`Instance`] and attaches an observer thread that
//! owns the child, waits for it to exit, reports the outcome, and sends exactly
//! one [`InstanceReport`] on the instance's channel.
//!
//! Per-instance lifecycle:
//!
//! ```text
//! pending -> spawned -> exited(code)
//!         \-> spawn-failed(error)
//! ```
//!
//! There is no retry, timeout, or kill path.

use super::report::{print_outcome, print_spawned};
use crate::agent::instance::Instance;
use crate::error::FlotillaError;
use std::process::Command;
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Terminal state of one instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceOutcome {
    /// The process ran and exited. `code` is `None` when killed by a signal.
    Exited { code: Option<i32> },
    /// The process could not be created.
    SpawnFailed { error: String },
}

/// Final report for one instance.
#[derive(Debug, Clone)]
pub struct InstanceReport {
    pub instance_id: String,
    pub label: String,
    /// When the spawn call returned; `None` if it failed.
    pub spawned_at: Option<Instant>,
    /// When the terminal state was observed.
    pub finished_at: Instant,
    pub outcome: InstanceOutcome,
}

impl InstanceReport {
    /// Check if the worker exited with code 0.
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, InstanceOutcome::Exited { code: Some(0) })
    }

    pub fn was_spawned(&self) -> bool {
        self.spawned_at.is_some()
    }

    /// Time between spawn and exit; `None` if the spawn failed.
    pub fn elapsed(&self) -> Option<Duration> {
        self.spawned_at
            .map(|spawned| self.finished_at.saturating_duration_since(spawned))
    }
}

/// A running instance whose outcome has not been collected yet.
#[derive(Debug)]
pub struct InstanceHandle {
    pub instance_id: String,
    pub label: String,
    pub spawned_at: Instant,
    outcome: Receiver<InstanceReport>,
    observer: JoinHandle<()>,
}

impl InstanceHandle {
    /// Block until the instance reaches its terminal state.
    pub fn wait(self) -> InstanceReport {
        let report = self.outcome.recv().unwrap_or_else(|_| InstanceReport {
            instance_id: self.instance_id.clone(),
            label: self.label.clone(),
            spawned_at: Some(self.spawned_at),
            finished_at: Instant::now(),
            outcome: InstanceOutcome::Exited { code: None },
        });
        if self.observer.join().is_err() {
            warn!(instance = %self.instance_id, "exit observer panicked");
        }
        report
    }
}

/// Result of issuing one spawn call.
#[derive(Debug)]
pub enum Launch {
    Spawned(InstanceHandle),
    Failed(InstanceReport),
}

impl Launch {
    /// Block until terminal, whichever way the spawn went.
    pub fn wait(self) -> InstanceReport {
        match self {
            Launch::Spawned(handle) => handle.wait(),
            Launch::Failed(report) => report,
        }
    }
}

/// Spawn one worker without waiting for it.
///
/// The environment overlay is applied to the child only. A spawn failure is
/// reported and returned as [`Launch::Failed`]; it never aborts the caller.
pub fn spawn_instance(instance: Instance) -> Launch {
    let Instance {
        id,
        label,
        program,
        args,
        env,
        ..
    } = instance;

    let mut command = Command::new(&program);
    command.args(&args).envs(env.iter());

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(source) => {
            let error = FlotillaError::Spawn { program, source }.to_string();
            let report = InstanceReport {
                instance_id: id,
                label,
                spawned_at: None,
                finished_at: Instant::now(),
                outcome: InstanceOutcome::SpawnFailed { error },
            };
            print_outcome(&report);
            return Launch::Failed(report);
        }
    };

    let spawned_at = Instant::now();
    let pid = child.id();
    debug!(instance = %id, pid, program = %program, "worker spawned");
    print_spawned(&id, &label, pid);

    let (sender, outcome) = mpsc::channel();
    let observer_id = id.clone();
    let observer_label = label.clone();
    let observer = thread::spawn(move || {
        let code = match child.wait() {
            Ok(status) => status.code(),
            Err(e) => {
                warn!(instance = %observer_id, "failed to wait for worker: {}", e);
                None
            }
        };
        let report = InstanceReport {
            instance_id: observer_id,
            label: observer_label,
            spawned_at: Some(spawned_at),
            finished_at: Instant::now(),
            outcome: InstanceOutcome::Exited { code },
        };
        print_outcome(&report);
        // The receiver may already be gone if the caller stopped listening.
        let _ = sender.send(report);
    });

    Launch::Spawned(InstanceHandle {
        instance_id: id,
        label,
        spawned_at,
        outcome,
        observer,
    })
}

/// Result of issuing a batch.
///
/// Sequential batches return with every report collected. Parallel batches
/// return as soon as every spawn call has been issued; running instances are
/// left in `pending`.
#[derive(Debug, Default)]
pub struct BatchRun {
    pub reports: Vec<InstanceReport>,
    pub pending: Vec<InstanceHandle>,
}

impl BatchRun {
    /// Number of spawn calls issued.
    pub fn spawn_attempts(&self) -> usize {
        self.reports.len() + self.pending.len()
    }

    /// Wait for every pending instance and summarize all outcomes.
    pub fn drain(self) -> BatchSummary {
        let mut reports = self.reports;
        reports.extend(self.pending.into_iter().map(InstanceHandle::wait));
        BatchSummary::from_reports(reports)
    }
}

/// Run instances in document order.
///
/// * `parallel == false` - spawn each instance and wait for it to reach a
///   terminal state before spawning the next
/// * `parallel == true` - spawn all instances back-to-back and return
pub fn run_batch(instances: Vec<Instance>, parallel: bool) -> BatchRun {
    let mut run = BatchRun::default();

    for instance in instances {
        let launch = spawn_instance(instance);
        if parallel {
            match launch {
                Launch::Spawned(handle) => run.pending.push(handle),
                Launch::Failed(report) => run.reports.push(report),
            }
        } else {
            run.reports.push(launch.wait());
        }
    }

    run
}

/// Aggregate counts over a set of instance reports.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub reports: Vec<InstanceReport>,
    pub spawned: usize,
    pub spawn_failed: usize,
    pub succeeded: usize,
    pub exited_nonzero: usize,
}

impl BatchSummary {
    pub fn from_reports(reports: Vec<InstanceReport>) -> Self {
        let mut summary = BatchSummary::default();
        for report in &reports {
            match &report.outcome {
                InstanceOutcome::SpawnFailed { .. } => summary.spawn_failed += 1,
                InstanceOutcome::Exited { .. } => {
                    summary.spawned += 1;
                    if report.is_success() {
                        summary.succeeded += 1;
                    } else {
                        summary.exited_nonzero += 1;
                    }
                }
            }
        }
        summary.reports = reports;
        summary
    }
}
