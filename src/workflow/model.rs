//! Workflow and task descriptor types.

use serde::{Deserialize, Deserializer};

/// A loaded workflow document. Read-only after load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Workflow {
    /// Display name of the workflow.
    pub name: Option<String>,

    /// Tasks in document order. Absent or `null` means no tasks.
    #[serde(deserialize_with = "null_as_default")]
    pub tasks: Vec<TaskSpec>,

    /// Spawn all tasks without waiting on each other. Absent or `null` means sequential.
    #[serde(deserialize_with = "null_as_default")]
    pub parallel: bool,
}

impl Workflow {
    /// Name shown in batch summaries.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "unnamed workflow",
        }
    }

    /// Human-readable ordering mode.
    pub fn mode_label(&self) -> &'static str {
        if self.parallel { "parallel" } else { "sequential" }
    }
}

/// One task descriptor inside a workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSpec {
    /// Explicit task id. A fresh `task-…` id is generated when absent.
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Tools the worker may use, as a list or a comma-delimited string.
    #[serde(default)]
    pub tools: Option<ToolList>,

    #[serde(default)]
    pub skip_permissions: Option<bool>,

    /// Path handed to the worker as its MCP config.
    #[serde(default)]
    pub config: Option<String>,

    #[serde(rename = "type", default)]
    pub task_type: Option<String>,
}

impl TaskSpec {
    /// Positional prompt for the worker: the description, falling back to the name.
    ///
    /// Returns an empty string only for tasks the loader would reject.
    pub fn prompt(&self) -> &str {
        [self.description.as_deref(), self.name.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or("")
    }

    /// Short label for status lines.
    pub fn label(&self) -> &str {
        match (self.name.as_deref(), self.id.as_deref()) {
            (Some(name), _) if !name.is_empty() => name,
            (_, Some(id)) if !id.is_empty() => id,
            _ => self.prompt(),
        }
    }

    pub fn skips_permissions(&self) -> bool {
        self.skip_permissions.unwrap_or(false)
    }
}

/// Tool list as written in a workflow document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ToolList {
    List(Vec<String>),
    Delimited(String),
}

impl ToolList {
    /// Serialized form passed to the worker's tool flag.
    pub fn to_flag_value(&self) -> String {
        match self {
            ToolList::List(tools) => tools.join(","),
            ToolList::Delimited(tools) => tools.clone(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
