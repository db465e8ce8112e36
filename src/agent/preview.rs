//! Dry-run rendering of composed instances.
//!
//! Previews never spawn and never touch supervisor state; they only format
//! what [`compose_spawn`](super::compose_spawn) and
//! [`compose_task`](super::compose_task) produced.

use super::instance::{ENV_COMMIT, ENV_COVERAGE, ENV_MODE, ENV_TASK_TYPE, Instance};
use std::fmt::Write;

/// The literal command line, shell-quoted so it can be pasted into a shell.
pub fn render_command_line(instance: &Instance) -> String {
    let words = std::iter::once(instance.program.as_str())
        .chain(instance.args.iter().map(String::as_str));
    shell_words::join(words)
}

/// Preview for `flotilla spawn --dry-run`.
pub fn render_spawn_preview(instance: &Instance) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "DRY RUN - would execute:");
    let _ = writeln!(out, "  Command:     {}", render_command_line(instance));
    let _ = writeln!(out, "  Instance ID: {}", instance.id);
    let _ = writeln!(out, "  Task:        {}", instance.label);
    let _ = writeln!(
        out,
        "  Tools:       {}",
        instance.tools.as_deref().unwrap_or("(none)")
    );
    let _ = writeln!(out, "  Mode:        {}", env_or_dash(instance, ENV_MODE));
    let _ = writeln!(out, "  Coverage:    {}%", env_or_dash(instance, ENV_COVERAGE));
    let _ = writeln!(out, "  Commit:      {}", env_or_dash(instance, ENV_COMMIT));
    out
}

/// Preview for one task of `flotilla batch --dry-run`. `position` is 1-based.
pub fn render_task_preview(position: usize, instance: &Instance) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}] {}", position, instance.label);
    let _ = writeln!(out, "  Command:   {}", render_command_line(instance));
    let _ = writeln!(out, "  Task ID:   {}", instance.id);
    let _ = writeln!(out, "  Task type: {}", env_or_dash(instance, ENV_TASK_TYPE));
    out
}

fn env_or_dash<'a>(instance: &'a Instance, key: &str) -> &'a str {
    instance.env.get(key).unwrap_or("-")
}
