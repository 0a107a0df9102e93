//! JSONL event store - append-only writer that guards the on-disk chain

use crate::error::EventError;
use crate::reader::EventReader;
use crate::record::{EventRecord, GENESIS_HASH};
use crate::sink::EventSink;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// File name of the log inside a log directory
pub const LOG_FILE_NAME: &str = "events.jsonl";

/// Append-only JSONL event store
///
/// Only records that extend the chain already on disk are written; anything
/// else is refused with `EventError::Discontinuous`, so two writers that
/// disagree about the chain head cannot interleave into one log.
pub struct EventStore {
    writer: BufWriter<File>,
    head: Option<EventRecord>,
}

impl EventStore {
    /// Open or create the log in `dir`, recovering the current chain head
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, EventError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let reader = EventReader::from_directory(dir);
        let head = reader.last_record()?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(reader.path())?;

        tracing::debug!(
            path = %reader.path().display(),
            head = head.as_ref().map_or(0, |r| r.sequence),
            "Opened event store"
        );

        Ok(Self {
            writer: BufWriter::new(file),
            head,
        })
    }

    /// Last record on disk, if any
    pub fn head(&self) -> Option<&EventRecord> {
        self.head.as_ref()
    }

    /// Append a record that directly follows the current head
    pub fn append(&mut self, record: &EventRecord) -> Result<(), EventError> {
        let (expected, prev_hash) = match &self.head {
            Some(head) => (head.sequence + 1, head.hash.as_str()),
            None => (1, GENESIS_HASH),
        };
        if record.sequence != expected || record.prev_hash != prev_hash {
            return Err(EventError::Discontinuous {
                expected,
                actual: record.sequence,
            });
        }

        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;

        self.head = Some(record.clone());
        Ok(())
    }
}

impl EventSink for EventStore {
    fn name(&self) -> &str {
        "jsonl"
    }

    fn record(&mut self, record: &EventRecord) -> Result<(), EventError> {
        self.append(record)
    }
}

impl Drop for EventStore {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}
