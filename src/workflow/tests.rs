//! Tests for workflow loading.

use super::*;
use crate::error::FlotillaError;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_full_workflow() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(
        &temp_dir,
        "wf.json",
        r#"{
            "name": "rollout",
            "parallel": true,
            "tasks": [
                {
                    "id": "api",
                    "name": "Build API",
                    "description": "Implement the REST API",
                    "tools": ["View", "Edit", "Bash"],
                    "skipPermissions": true,
                    "config": "mcp.json",
                    "type": "backend"
                },
                { "name": "Write docs", "tools": "View,Edit" }
            ]
        }"#,
    );

    let workflow = load_workflow(&path).unwrap();

    assert_eq!(workflow.name.as_deref(), Some("rollout"));
    assert!(workflow.parallel);
    assert_eq!(workflow.tasks.len(), 2);

    let api = &workflow.tasks[0];
    assert_eq!(api.id.as_deref(), Some("api"));
    assert_eq!(api.prompt(), "Implement the REST API");
    assert_eq!(
        api.tools,
        Some(ToolList::List(vec![
            "View".to_string(),
            "Edit".to_string(),
            "Bash".to_string()
        ]))
    );
    assert!(api.skips_permissions());
    assert_eq!(api.config.as_deref(), Some("mcp.json"));
    assert_eq!(api.task_type.as_deref(), Some("backend"));

    let docs = &workflow.tasks[1];
    assert_eq!(docs.id, None);
    assert_eq!(docs.prompt(), "Write docs");
    assert_eq!(docs.tools, Some(ToolList::Delimited("View,Edit".to_string())));
    assert!(!docs.skips_permissions());
}

#[test]
fn test_parallel_defaults_to_false() {
    let workflow =
        parse_workflow(r#"{"tasks": [{"name": "a"}]}"#, DocumentFormat::Json).unwrap();
    assert!(!workflow.parallel);
    assert_eq!(workflow.mode_label(), "sequential");

    let workflow = parse_workflow(
        r#"{"parallel": null, "tasks": [{"name": "a"}]}"#,
        DocumentFormat::Json,
    )
    .unwrap();
    assert!(!workflow.parallel);
}

#[test]
fn test_absent_or_null_tasks_is_empty_workflow() {
    let workflow = parse_workflow(r#"{"name": "empty"}"#, DocumentFormat::Json).unwrap();
    assert!(workflow.tasks.is_empty());

    let workflow = parse_workflow(r#"{"tasks": null}"#, DocumentFormat::Json).unwrap();
    assert!(workflow.tasks.is_empty());

    let workflow = parse_workflow(r#"{"tasks": []}"#, DocumentFormat::Json).unwrap();
    assert!(workflow.tasks.is_empty());
    assert_eq!(workflow.display_name(), "unnamed workflow");
}

#[test]
fn test_invalid_json_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(&temp_dir, "broken.json", "{ \"tasks\": [ ");

    let err = load_workflow(&path).unwrap_err();
    assert!(matches!(err, FlotillaError::WorkflowParse { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn test_wrong_field_type_is_parse_error() {
    let result = parse_workflow(r#"{"parallel": "yes"}"#, DocumentFormat::Json);
    assert!(result.is_err());

    let result = parse_workflow(r#"{"tasks": {"name": "a"}}"#, DocumentFormat::Json);
    assert!(result.is_err());

    let result = parse_workflow(r#"[]"#, DocumentFormat::Json);
    assert!(result.is_err());
}

#[test]
fn test_positional_document_rejected() {
    let err = parse_workflow(
        r#"["wf", [{"name": "a"}, {"name": "b"}], true]"#,
        DocumentFormat::Json,
    )
    .unwrap_err();
    assert!(err.contains("must be an object"));

    let result = parse_workflow(r#""just a string""#, DocumentFormat::Json);
    assert!(result.is_err());

    let result = parse_workflow("- wf\n- []\n- true\n", DocumentFormat::Yaml);
    assert!(result.is_err());
}

#[test]
fn test_positional_task_entry_rejected() {
    let err = parse_workflow(
        r#"{"tasks": [{"name": "ok"}, ["id", "Build API"]]}"#,
        DocumentFormat::Json,
    )
    .unwrap_err();
    assert_eq!(err, "task 2 must be an object");

    let err = parse_workflow(
        "tasks:\n  - name: ok\n  - [id, Build API]\n",
        DocumentFormat::Yaml,
    )
    .unwrap_err();
    assert_eq!(err, "task 2 must be an object");
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.json");

    let err = load_workflow(&path).unwrap_err();
    assert!(matches!(err, FlotillaError::WorkflowIo { .. }));
}

#[test]
fn test_task_without_name_or_description_rejected() {
    let err = parse_workflow(
        r#"{"tasks": [{"name": "ok"}, {"id": "ghost", "tools": "View"}]}"#,
        DocumentFormat::Json,
    )
    .unwrap_err();
    assert!(err.contains("task 2"));
    assert!(err.contains("ghost"));

    let err = parse_workflow(
        r#"{"tasks": [{"name": "", "description": ""}]}"#,
        DocumentFormat::Json,
    )
    .unwrap_err();
    assert!(err.contains("task 1"));
}

#[test]
fn test_empty_description_falls_back_to_name() {
    let workflow = parse_workflow(
        r#"{"tasks": [{"name": "Refactor", "description": ""}]}"#,
        DocumentFormat::Json,
    )
    .unwrap();
    assert_eq!(workflow.tasks[0].prompt(), "Refactor");
}

#[test]
fn test_yaml_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(
        &temp_dir,
        "wf.yml",
        r#"
name: nightly
parallel: true
tasks:
  - name: lint
    tools: [View, Bash]
    type: chore
"#,
    );

    let workflow = load_workflow(&path).unwrap();
    assert_eq!(workflow.display_name(), "nightly");
    assert!(workflow.parallel);
    assert_eq!(
        workflow.tasks[0].tools.as_ref().map(ToolList::to_flag_value),
        Some("View,Bash".to_string())
    );
}

#[test]
fn test_document_format_from_path() {
    assert_eq!(
        DocumentFormat::from_path(&PathBuf::from("a.json")),
        DocumentFormat::Json
    );
    assert_eq!(
        DocumentFormat::from_path(&PathBuf::from("a.YAML")),
        DocumentFormat::Yaml
    );
    assert_eq!(
        DocumentFormat::from_path(&PathBuf::from("workflow")),
        DocumentFormat::Json
    );
}

#[test]
fn test_task_label_prefers_name_then_id() {
    let task = TaskSpec {
        id: Some("t1".to_string()),
        description: Some("do it".to_string()),
        ..Default::default()
    };
    assert_eq!(task.label(), "t1");

    let task = TaskSpec {
        name: Some("Named".to_string()),
        id: Some("t1".to_string()),
        ..Default::default()
    };
    assert_eq!(task.label(), "Named");
}
