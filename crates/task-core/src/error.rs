//! Error types for the storage boundary.
//!
//! Everything else in the crate treats bad input as a no-op.

use thiserror::Error;

/// Failures from a key-value backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read key {key}: {message}")]
    Read { key: String, message: String },
    #[error("failed to write key {key}: {message}")]
    Write { key: String, message: String },
}

/// Failures while flushing state to storage
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to encode {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type PersistResult<T> = Result<T, PersistError>;
