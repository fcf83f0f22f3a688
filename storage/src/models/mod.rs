mod event_record;

pub use event_record::{EventRecord, RecordKind, Sender};
