//! Exit code constants for the flotilla CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config)
//! - 2: Workflow document could not be read or parsed
//!
//! Exit codes of spawned workers are never propagated.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an invalid config file.
pub const USER_ERROR: i32 = 1;

/// Workflow failure: the workflow document is unreadable or malformed.
pub const WORKFLOW_FAILURE: i32 = 2;
