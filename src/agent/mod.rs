//! Agent instance composition, supervision, and preview.
//!
//! - **Compose**: task or options → [`Instance`] (arguments, tool flags, env overlay)
//! - **Dispatch**: spawn instances and observe their exits
//! - **Preview**: render instances for `--dry-run` without spawning
//!
//! Workers are plain subprocesses. Nothing here knows what the worker does
//! with its arguments.

mod compose;
pub mod dispatch;
mod ids;
mod instance;
pub mod preview;

// Re-export public API
pub use compose::{SpawnRequest, compose_spawn, compose_task};
pub use dispatch::{BatchSummary, run_batch, spawn_instance};
pub use instance::{ExecutionMode, Instance};
