//! Error Types
//!
//! Validation failures are shown to the user; storage failures are logged.

use thiserror::Error;

/// Rejected attempt to add (or restore) an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Cannot add empty todo.")]
    EmptyText,
    #[error("Cannot add duplicate todo.")]
    DuplicateText,
}

/// Failure reading or writing the persisted lists
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage backend failed on key `{key}`: {message}")]
    Backend { key: String, message: String },
    #[error("malformed data under key `{key}`: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode key `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type StorageResult<T> = Result<T, StorageError>;
