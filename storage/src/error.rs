//! Storage error types.
//!
//! Used by event log implementations and callers of storage APIs.

use thiserror::Error;

/// Errors that can occur when reading or appending to the event log.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
