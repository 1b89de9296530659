use thiserror::Error;

use minierp_sql::SQLError;

/// Repository-level failures. `NotFound` is an explicit value-level
/// outcome here, not an exception: callers branch on it.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("storage: {0}")]
    Backend(String),

    #[error("codec: {0}")]
    Codec(String),
}

impl From<SQLError> for StoreError {
    fn from(e: SQLError) -> Self {
        StoreError::Backend(e.to_string())
    }
}
