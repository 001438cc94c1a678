//! Store error types.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem error while reading or writing the backing file
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error while encoding records
    #[error("store encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    /// Record not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
