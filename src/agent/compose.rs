//! Argument and tool-flag composition.
//!
//! Turns a single-task request or a workflow task into an [`Instance`]:
//! the worker's positional prompt, its tool flag, the optional flags in a
//! fixed order, and the environment overlay.
//!
//! # Argument order
//!
//! ```text
//! <prompt> [--allowedTools <tools>] [--dangerously-skip-permissions] [--mcp-config <path>] [--verbose]
//! ```
//!
//! # Tool-flag derivations
//!
//! Single-task spawns may request parallel support (appends
//! `,BatchTool,dispatch_agent`) and research support (appends
//! `,WebFetchTool`). Each append is skipped when the serialized tool string
//! already *contains* the sentinel as a substring, so a token such as
//! `BatchToolbox` also suppresses the parallel append.

use super::ids::generate_id;
use super::instance::{
    ENV_COMMIT, ENV_COVERAGE, ENV_INSTANCE_ID, ENV_MODE, ENV_TASK_ID, ENV_TASK_TYPE, EnvOverlay,
    ExecutionMode, Instance,
};
use crate::config::Config;
use crate::workflow::TaskSpec;
use tracing::debug;

/// Presence of this text marks parallel support as already enabled.
pub const PARALLEL_SENTINEL: &str = "BatchTool";
/// Dispatch token appended alongside the parallel sentinel.
pub const DISPATCH_SENTINEL: &str = "dispatch_agent";
/// Presence of this text marks research support as already enabled.
pub const RESEARCH_SENTINEL: &str = "WebFetchTool";

pub const FLAG_ALLOWED_TOOLS: &str = "--allowedTools";
pub const FLAG_SKIP_PERMISSIONS: &str = "--dangerously-skip-permissions";
pub const FLAG_MCP_CONFIG: &str = "--mcp-config";
pub const FLAG_VERBOSE: &str = "--verbose";

/// Comma-serialized tool-flag set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolFlags(String);

impl ToolFlags {
    pub fn new(serialized: impl Into<String>) -> Self {
        Self(serialized.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substring check on the serialized form, not token membership.
    pub fn mentions(&self, sentinel: &str) -> bool {
        self.0.contains(sentinel)
    }

    /// Enable parallel execution support unless the sentinel is already mentioned.
    pub fn with_parallel(mut self) -> Self {
        if !self.mentions(PARALLEL_SENTINEL) {
            self.0.push(',');
            self.0.push_str(PARALLEL_SENTINEL);
            self.0.push(',');
            self.0.push_str(DISPATCH_SENTINEL);
        }
        self
    }

    /// Enable research support unless the sentinel is already mentioned.
    pub fn with_research(mut self) -> Self {
        if !self.mentions(RESEARCH_SENTINEL) {
            self.0.push(',');
            self.0.push_str(RESEARCH_SENTINEL);
        }
        self
    }
}

/// Worker arguments before serialization into a flat list.
#[derive(Debug, Clone, Default)]
pub struct ArgumentSet<'a> {
    pub prompt: &'a str,
    pub tools: Option<&'a str>,
    pub skip_permissions: bool,
    pub mcp_config: Option<&'a str>,
    pub verbose: bool,
}

impl ArgumentSet<'_> {
    /// Flatten into the exact argument order the worker receives.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![self.prompt.to_string()];

        if let Some(tools) = self.tools {
            args.push(FLAG_ALLOWED_TOOLS.to_string());
            args.push(tools.to_string());
        }
        if self.skip_permissions {
            args.push(FLAG_SKIP_PERMISSIONS.to_string());
        }
        if let Some(path) = self.mcp_config {
            args.push(FLAG_MCP_CONFIG.to_string());
            args.push(path.to_string());
        }
        if self.verbose {
            args.push(FLAG_VERBOSE.to_string());
        }

        args
    }
}

/// Options for a single ad-hoc task, already detached from the CLI parser.
#[derive(Debug, Clone, Default)]
pub struct SpawnRequest {
    pub task: String,
    pub tools: Option<String>,
    pub no_permissions: bool,
    pub mcp_config: Option<String>,
    pub mode: Option<String>,
    pub parallel: bool,
    pub research: bool,
    pub coverage: Option<u32>,
    pub commit: Option<String>,
    pub verbose: bool,
    pub dry_run: bool,
}

/// Compose the instance for `flotilla spawn`.
pub fn compose_spawn(request: &SpawnRequest, config: &Config) -> Instance {
    let id = generate_id("claude");

    let mut tools =
        ToolFlags::new(non_empty(request.tools.as_deref()).unwrap_or(&config.default_tools));
    if request.parallel {
        tools = tools.with_parallel();
    }
    if request.research {
        tools = tools.with_research();
    }
    let tools = tools.as_str().to_string();

    let args = ArgumentSet {
        prompt: &request.task,
        tools: Some(&tools),
        skip_permissions: request.no_permissions,
        mcp_config: non_empty(request.mcp_config.as_deref()),
        verbose: request.verbose,
    }
    .to_args();

    let coverage = request.coverage.unwrap_or(config.default_coverage);
    let env = EnvOverlay::new()
        .with(ENV_INSTANCE_ID, id.clone())
        .with(
            ENV_MODE,
            non_empty(request.mode.as_deref()).unwrap_or(&config.default_mode),
        )
        .with(ENV_COVERAGE, coverage.to_string())
        .with(
            ENV_COMMIT,
            non_empty(request.commit.as_deref()).unwrap_or(&config.default_commit),
        );

    debug!(instance = %id, ?args, "composed spawn instance");

    Instance {
        id,
        label: request.task.clone(),
        program: config.executable.clone(),
        args,
        tools: Some(tools),
        env,
        mode: ExecutionMode::from_dry_run(request.dry_run),
    }
}

/// Compose the instance for one workflow task.
///
/// Empty strings in the task are treated like absent fields. Batch tasks never receive the parallel or research derivations and never
/// get `--verbose`; their tool flag is omitted when the task lists no tools.
pub fn compose_task(task: &TaskSpec, config: &Config, mode: ExecutionMode) -> Instance {
    let task_id = match non_empty(task.id.as_deref()) {
        Some(id) => id.to_string(),
        None => generate_id("task"),
    };

    let tools = task
        .tools
        .as_ref()
        .map(|t| t.to_flag_value())
        .filter(|t| !t.is_empty());

    let args = ArgumentSet {
        prompt: task.prompt(),
        tools: tools.as_deref(),
        skip_permissions: task.skips_permissions(),
        mcp_config: non_empty(task.config.as_deref()),
        verbose: false,
    }
    .to_args();

    let env = EnvOverlay::new().with(ENV_TASK_ID, task_id.clone()).with(
        ENV_TASK_TYPE,
        non_empty(task.task_type.as_deref()).unwrap_or(&config.default_task_type),
    );

    debug!(task = %task_id, ?args, "composed task instance");

    Instance {
        id: task_id,
        label: task.label().to_string(),
        program: config.executable.clone(),
        args,
        tools,
        env,
        mode,
    }
}

/// Empty option values count as absent.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
