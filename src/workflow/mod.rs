//! Workflow documents for `flotilla batch`.
//!
//! A workflow is a named, ordered list of task descriptors plus a single
//! `parallel` flag:
//!
//! ```json
//! {
//!   "name": "feature rollout",
//!   "parallel": false,
//!   "tasks": [
//!     { "id": "api", "name": "Build API", "description": "Implement the REST API",
//!       "tools": ["View", "Edit", "Bash"], "skipPermissions": true, "type": "backend" },
//!     { "name": "Write docs", "tools": "View,Edit", "config": "mcp.json" }
//!   ]
//! }
//! ```
//!
//! Documents are validated completely at load time; the executor never sees a
//! task without a usable prompt.

mod loader;
mod model;

#[cfg(test)]
mod tests;

pub use loader::load_workflow;
pub use model::{TaskSpec, Workflow};

#[cfg(test)]
pub(crate) use loader::{DocumentFormat, parse_workflow};
#[cfg(test)]
pub(crate) use model::ToolList;
