//! Storage error types.

use thiserror::Error;

/// Errors raised by durable key-value stores.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store could not be opened.
    #[error("failed to open store: {0}")]
    Open(String),

    /// A read against the backing store failed.
    #[error("failed to read key {key}: {message}")]
    Read { key: String, message: String },

    /// A write against the backing store failed.
    #[error("failed to write key {key}: {message}")]
    Write { key: String, message: String },

    /// A stored value could not be serialized or deserialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
