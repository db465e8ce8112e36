//! Config struct definition and default implementation.

use super::types::*;
use serde::Deserialize;

/// Configuration for flotilla.
///
/// This struct represents the contents of `flotilla.yaml`. Every field is
/// optional in the file; command-line flags override the defaults here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Worker executable spawned for every instance (default: "claude").
    #[serde(default = "default_executable")]
    pub executable: String,

    /// Baseline tool-flag string for `spawn` when `--tools` is not given.
    #[serde(default = "default_tools")]
    pub default_tools: String,

    /// Mode tag exported to single-task workers.
    #[serde(default = "default_mode")]
    pub default_mode: String,

    /// Coverage target exported to single-task workers.
    #[serde(default = "default_coverage")]
    pub default_coverage: u32,

    /// Commit frequency tag exported to single-task workers.
    #[serde(default = "default_commit")]
    pub default_commit: String,

    /// Task type exported to batch workers whose task has no `type`.
    #[serde(default = "default_task_type")]
    pub default_task_type: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            executable: default_executable(),
            default_tools: default_tools(),
            default_mode: default_mode(),
            default_coverage: default_coverage(),
            default_commit: default_commit(),
            default_task_type: default_task_type(),
        }
    }
}
