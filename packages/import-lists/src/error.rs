// ABOUTME: Error types for import list settings
// ABOUTME: Wraps parse faults and failed validation for callers that want a Result

use marquee_core::{CoreError, ValidationResult};
use thiserror::Error;

pub type ImportListResult<T> = Result<T, ImportListError>;

#[derive(Error, Debug)]
pub enum ImportListError {
    #[error("Invalid settings: {0}")]
    Validation(ValidationResult),

    #[error("Settings payload error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}
