//! Error types for compdoc.

use std::path::PathBuf;

use crate::output::OutputError;
use crate::walker::WalkError;

/// Top-level error type for compdoc operations.
///
/// Only fatal conditions are represented here. Per-component read failures
/// are absorbed by the analyzer and never surface as errors.
#[derive(Debug, thiserror::Error)]
pub enum CompdocError {
    #[error("Components directory not found: {0}")]
    ComponentsDirNotFound(PathBuf),

    #[error("walk error: {0}")]
    Walk(WalkError),

    #[error("output error: {0}")]
    Output(#[from] OutputError),
}

impl From<WalkError> for CompdocError {
    fn from(error: WalkError) -> Self {
        match error {
            WalkError::NotFound { path } => CompdocError::ComponentsDirNotFound(path),
            other => CompdocError::Walk(other),
        }
    }
}

/// Map an error to its exit code.
pub fn exit_code(error: &CompdocError) -> i32 {
    match error {
        CompdocError::ComponentsDirNotFound(_) => 1,
        CompdocError::Walk(_) => 1,
        CompdocError::Output(_) => 1,
    }
}
