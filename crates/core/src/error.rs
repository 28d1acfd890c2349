//! Session and storage error types

use thiserror::Error;

/// A storage backend refused an operation (quota exceeded, storage disabled, ...)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Storage {operation} failed for key '{key}': {message}")]
pub struct StorageError {
    pub operation: &'static str,
    pub key: String,
    pub message: String,
}

impl StorageError {
    /// Create a storage error for the given operation and key
    pub fn new(operation: &'static str, key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            operation,
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Session store errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// The stored record could not be decoded
    #[error("Malformed session record: {0}")]
    MalformedSessionRecord(#[source] serde_json::Error),

    /// The session could not be encoded for storage
    #[error("Failed to encode session: {0}")]
    Encode(#[source] serde_json::Error),

    /// Backend failure
    #[error(transparent)]
    Storage(#[from] StorageError),
}
