//! Status lines for instance lifecycle events.
//!
//! Observers print as outcomes arrive, so in parallel mode completions show
//! up in whatever order the workers finish.

use super::supervisor::{InstanceOutcome, InstanceReport};
use tracing::debug;

pub(crate) fn print_spawned(instance_id: &str, label: &str, pid: u32) {
    println!("Spawned {} (pid {}): {}", instance_id, pid, label);
}

/// Print the outcome line. The tracing event is debug-level only.
pub(crate) fn print_outcome(report: &InstanceReport) {
    println!("{}", describe_outcome(report));
    match &report.outcome {
        InstanceOutcome::Exited { code: Some(0) } => {
            debug!(instance = %report.instance_id, elapsed = ?report.elapsed(), "worker completed");
        }
        InstanceOutcome::Exited { code } => {
            debug!(instance = %report.instance_id, ?code, elapsed = ?report.elapsed(), "worker failed");
        }
        InstanceOutcome::SpawnFailed { error } => {
            debug!(instance = %report.instance_id, %error, "worker spawn failed");
        }
    }
}

/// One-line description of a terminal state.
pub fn describe_outcome(report: &InstanceReport) -> String {
    match &report.outcome {
        InstanceOutcome::Exited { code: Some(0) } => format!(
            "Completed {} ({}) successfully",
            report.instance_id, report.label
        ),
        InstanceOutcome::Exited { code: Some(code) } => format!(
            "Failed {} ({}): exited with code {}",
            report.instance_id, report.label, code
        ),
        InstanceOutcome::Exited { code: None } => format!(
            "Failed {} ({}): terminated without an exit code",
            report.instance_id, report.label
        ),
        InstanceOutcome::SpawnFailed { error } => format!(
            "Failed {} ({}): {}",
            report.instance_id, report.label, error
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use std::time::Instant;
    use tracing_subscriber::EnvFilter;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn report(outcome: InstanceOutcome) -> InstanceReport {
        InstanceReport {
            instance_id: "task-1".to_string(),
            label: "lint".to_string(),
            spawned_at: None,
            finished_at: Instant::now(),
            outcome,
        }
    }

    #[test]
    fn test_describe_outcomes() {
        assert_eq!(
            describe_outcome(&report(InstanceOutcome::Exited { code: Some(0) })),
            "Completed task-1 (lint) successfully"
        );
        assert_eq!(
            describe_outcome(&report(InstanceOutcome::Exited { code: Some(2) })),
            "Failed task-1 (lint): exited with code 2"
        );
        assert!(
            describe_outcome(&report(InstanceOutcome::Exited { code: None }))
                .contains("without an exit code")
        );
        assert_eq!(
            describe_outcome(&report(InstanceOutcome::SpawnFailed {
                error: "failed to spawn 'claude': not found".to_string()
            })),
            "Failed task-1 (lint): failed to spawn 'claude': not found"
        );
    }

    fn logged_at(filter: &str) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            print_outcome(&report(InstanceOutcome::Exited { code: Some(1) }));
            print_outcome(&report(InstanceOutcome::SpawnFailed {
                error: "not found".to_string(),
            }));
        });

        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_failures_logged_only_at_debug() {
        assert_eq!(logged_at("warn"), "");

        let logs = logged_at("debug");
        assert!(logs.contains("worker failed"));
        assert!(logs.contains("worker spawn failed"));
    }
}
