//! Composed worker invocations.

use std::collections::BTreeMap;

/// Instance id exported to single-task workers.
pub const ENV_INSTANCE_ID: &str = "CLAUDE_INSTANCE_ID";
/// Mode tag exported to single-task workers.
pub const ENV_MODE: &str = "CLAUDE_FLOW_MODE";
/// Coverage target exported to single-task workers.
pub const ENV_COVERAGE: &str = "CLAUDE_FLOW_COVERAGE";
/// Commit frequency exported to single-task workers.
pub const ENV_COMMIT: &str = "CLAUDE_FLOW_COMMIT";
/// Task id exported to batch workers.
pub const ENV_TASK_ID: &str = "CLAUDE_TASK_ID";
/// Task type exported to batch workers.
pub const ENV_TASK_TYPE: &str = "CLAUDE_TASK_TYPE";

/// Whether an instance is meant to be spawned or only previewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    #[default]
    Real,
    DryRun,
}

impl ExecutionMode {
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run {
            ExecutionMode::DryRun
        } else {
            ExecutionMode::Real
        }
    }
}

/// Environment variables layered over the inherited environment of one worker.
///
/// The overlay is handed to the spawn call; the orchestrator's own environment
/// is never modified. Keys iterate in sorted order so previews are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverlay {
    vars: BTreeMap<String, String>,
}

impl EnvOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a variable.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// One composed worker invocation.
///
/// Created per task by the composer, then either previewed or handed to the
/// supervisor, which consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    /// Generated unique identifier.
    pub id: String,
    /// Short label for status lines (task name or prompt).
    pub label: String,
    /// Executable to spawn.
    pub program: String,
    /// Arguments in the exact order they are passed to `program`.
    pub args: Vec<String>,
    /// Serialized tool-flag string, if the worker receives one.
    pub tools: Option<String>,
    pub env: EnvOverlay,
    pub mode: ExecutionMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_overlay_sorted_and_replacing() {
        let env = EnvOverlay::new()
            .with("B", "2")
            .with("A", "1")
            .with("B", "3");

        let pairs: Vec<_> = env.iter().collect();
        assert_eq!(pairs, vec![("A", "1"), ("B", "3")]);
        assert_eq!(env.get("B"), Some("3"));
        assert_eq!(env.get("C"), None);
    }

    #[test]
    fn test_execution_mode_from_dry_run() {
        assert_eq!(ExecutionMode::from_dry_run(true), ExecutionMode::DryRun);
        assert_eq!(ExecutionMode::from_dry_run(false), ExecutionMode::Real);
        assert_eq!(ExecutionMode::default(), ExecutionMode::Real);
    }
}
