//! Configuration constants and default value functions.

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "FLOTILLA_CONFIG";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "flotilla.yaml";

// Default value functions for serde
pub(crate) fn default_executable() -> String {
    "claude".to_string()
}
pub(crate) fn default_tools() -> String {
    "View,Edit,Replace,GlobTool,GrepTool,LS,Bash".to_string()
}
pub(crate) fn default_mode() -> String {
    "full".to_string()
}
pub(crate) fn default_coverage() -> u32 {
    80
}
pub(crate) fn default_commit() -> String {
    "phase".to_string()
}
pub(crate) fn default_task_type() -> String {
    "general".to_string()
}
