//! Storage crate: the append-only chat event log.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – EventRecord, RecordKind, Sender
//! - [`event_log`] – EventLog trait
//! - [`json_log`] – JsonFileLog (single JSON array file)

mod error;
mod event_log;
mod json_log;
mod models;

pub use error::StorageError;
pub use event_log::EventLog;
pub use json_log::{JsonFileLog, DEFAULT_HISTORY_FILE};
pub use models::{EventRecord, RecordKind, Sender};
