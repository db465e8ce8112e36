//! Error types for the flotilla CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Load-time failures abort the whole command; spawn failures are reported per
//! instance by the supervisor and never reach `main`.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for flotilla operations.
#[derive(Error, Debug)]
pub enum FlotillaError {
    /// User provided invalid arguments.
    #[error("{0}")]
    UserError(String),

    /// Config file is unreadable, malformed, or has invalid values.
    #[error("invalid config: {0}")]
    Config(String),

    /// Workflow document could not be read.
    #[error("failed to read workflow '{}': {source}", .path.display())]
    WorkflowIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Workflow document is not a valid workflow.
    #[error("failed to parse workflow '{}': {message}", .path.display())]
    WorkflowParse { path: PathBuf, message: String },

    /// The OS refused to create the worker process.
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl FlotillaError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            FlotillaError::UserError(_) | FlotillaError::Config(_) => exit_codes::USER_ERROR,
            FlotillaError::WorkflowIo { .. } | FlotillaError::WorkflowParse { .. } => {
                exit_codes::WORKFLOW_FAILURE
            }
            // Spawn errors are per-instance; if one ever surfaces here it is a user problem.
            FlotillaError::Spawn { .. } => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for flotilla operations.
pub type Result<T> = std::result::Result<T, FlotillaError>;
