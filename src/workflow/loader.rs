//! Workflow document loading and validation.

use super::model::Workflow;
use crate::error::{FlotillaError, Result};
use std::path::Path;
use tracing::debug;

/// Serialization format of a workflow document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// `.yaml` / `.yml` files are YAML; everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            _ => DocumentFormat::Json,
        }
    }
}

/// Read and validate a workflow document.
///
/// # Returns
///
/// * `Ok(Workflow)` - Loaded workflow (possibly with zero tasks)
/// * `Err(FlotillaError::WorkflowIo)` - File missing or unreadable
/// * `Err(FlotillaError::WorkflowParse)` - Malformed document or invalid task
pub fn load_workflow(path: &Path) -> Result<Workflow> {
    let content = std::fs::read_to_string(path).map_err(|source| FlotillaError::WorkflowIo {
        path: path.to_path_buf(),
        source,
    })?;

    let workflow = parse_workflow(&content, DocumentFormat::from_path(path)).map_err(|message| {
        FlotillaError::WorkflowParse {
            path: path.to_path_buf(),
            message,
        }
    })?;

    debug!(
        path = %path.display(),
        tasks = workflow.tasks.len(),
        parallel = workflow.parallel,
        "workflow loaded"
    );
    Ok(workflow)
}

/// Parse and validate workflow text.
///
/// Errors are returned as plain messages; [`load_workflow`] attaches the path.
pub fn parse_workflow(
    content: &str,
    format: DocumentFormat,
) -> std::result::Result<Workflow, String> {
    // Derived struct deserializers also accept positional sequences, so the
    // document shape is checked on the untyped value first.
    let workflow: Workflow = match format {
        DocumentFormat::Json => {
            let value: serde_json::Value =
                serde_json::from_str(content).map_err(|e| e.to_string())?;
            check_json_shape(&value)?;
            serde_json::from_value(value).map_err(|e| e.to_string())?
        }
        DocumentFormat::Yaml => {
            let value: serde_yaml::Value =
                serde_yaml::from_str(content).map_err(|e| e.to_string())?;
            check_yaml_shape(&value)?;
            serde_yaml::from_value(value).map_err(|e| e.to_string())?
        }
    };

    validate(&workflow)?;
    Ok(workflow)
}

fn check_json_shape(value: &serde_json::Value) -> std::result::Result<(), String> {
    let document = value
        .as_object()
        .ok_or_else(|| "workflow document must be an object".to_string())?;
    if let Some(tasks) = document.get("tasks").and_then(|t| t.as_array()) {
        check_task_entries(tasks.iter().map(|t| t.is_object()))?;
    }
    Ok(())
}

fn check_yaml_shape(value: &serde_yaml::Value) -> std::result::Result<(), String> {
    if !value.is_mapping() {
        return Err("workflow document must be a mapping".to_string());
    }
    if let Some(tasks) = value.get("tasks").and_then(|t| t.as_sequence()) {
        check_task_entries(tasks.iter().map(|t| t.is_mapping()))?;
    }
    Ok(())
}

fn check_task_entries(
    is_mapping: impl Iterator<Item = bool>,
) -> std::result::Result<(), String> {
    for (index, ok) in is_mapping.enumerate() {
        if !ok {
            return Err(format!("task {} must be an object", index + 1));
        }
    }
    Ok(())
}

fn validate(workflow: &Workflow) -> std::result::Result<(), String> {
    for (index, task) in workflow.tasks.iter().enumerate() {
        if task.prompt().is_empty() {
            let which = match task.id.as_deref() {
                Some(id) => format!("task {} ('{}')", index + 1, id),
                None => format!("task {}", index + 1),
            };
            return Err(format!(
                "{} needs a non-empty name or description",
                which
            ));
        }
    }
    Ok(())
}
