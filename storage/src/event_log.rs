use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::EventRecord;

/// Ordered, append-only sequence of [`EventRecord`]s.
#[async_trait]
pub trait EventLog: Send + Sync {
    /// Adds `record` after every record already in the log.
    async fn append(&self, record: EventRecord) -> Result<(), StorageError>;
    /// Returns every record in append order; empty when nothing has been logged yet.
    async fn read_all(&self) -> Result<Vec<EventRecord>, StorageError>;
}
