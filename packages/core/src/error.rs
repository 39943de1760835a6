// ABOUTME: Error types for core settings helpers
// ABOUTME: Faults that are not user-data validation failures

use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
