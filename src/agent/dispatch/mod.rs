//! Worker subprocess dispatch.
//!
//! This module provides:
//!
//! - Non-blocking spawn with a per-instance exit observer
//! - Sequential (barrier) and parallel (fan-out) batch ordering
//! - Per-instance outcome reports and batch summaries

mod report;
mod supervisor;

pub use report::describe_outcome;
pub use supervisor::{BatchSummary, InstanceReport, run_batch, spawn_instance};
