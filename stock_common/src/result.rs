//! Result type alias shared across the workspace.
//!
//! Defaults the error type to `CheckError`, so functions can simply return `Result<T>`.
use crate::error::CheckError;

/// Workspace-wide `Result` alias with `CheckError` as the default error.
pub type Result<T, E = CheckError> = std::result::Result<T, E>;
