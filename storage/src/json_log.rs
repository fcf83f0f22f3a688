//! JSON file event log: the whole history is one pretty-printed JSON array.
//!
//! `append` is read-modify-write of the full file. A mutex serializes appends and reads made
//! through the same [`JsonFileLog`] so concurrent handler tasks never drop each other's records
//! or observe a half-written file.
//! Separate instances (or processes) pointing at the same file are not coordinated.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use crate::error::StorageError;
use crate::event_log::EventLog;
use crate::models::EventRecord;

/// Default log location, relative to the working directory.
pub const DEFAULT_HISTORY_FILE: &str = "./chat_history.json";

pub struct JsonFileLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileLog {
    /// Uses `path` as the log file. Nothing is created until the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file and empty (or whitespace-only) file both read as an empty history.
    async fn load(&self) -> Result<Vec<EventRecord>, StorageError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "History file not found, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    async fn store(&self, records: &[EventRecord]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(records)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[async_trait]
impl EventLog for JsonFileLog {
    #[instrument(skip(self, record), fields(path = %self.path.display()))]
    async fn append(&self, record: EventRecord) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.load().await?;
        records.push(record);
        self.store(&records).await?;

        info!(total = records.len(), "Appended event record");
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<EventRecord>, StorageError> {
        let _guard = self.write_lock.lock().await;
        let records = self.load().await?;
        debug!(path = %self.path.display(), total = records.len(), "Read event log");
        Ok(records)
    }
}
