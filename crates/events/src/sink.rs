//! Event sinks and the hash-chaining event log that feeds them

use crate::error::EventError;
use crate::event::WalletEvent;
use crate::hash::calculate_record_hash;
use crate::record::{EventRecord, GENESIS_HASH};
use crate::store::EventStore;
use chrono::Utc;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Destination for committed event records
///
/// A sink failure never undoes the transition that produced the record.
/// It is logged and the remaining sinks still receive the record.
pub trait EventSink: Send {
    /// Sink name (for logging)
    fn name(&self) -> &str;

    /// Append one record
    fn record(&mut self, record: &EventRecord) -> Result<(), EventError>;
}

/// Sequences wallet events into a hash chain and fans them out to sinks
pub struct EventLog {
    sinks: Vec<Box<dyn EventSink>>,
    last_sequence: u64,
    last_hash: String,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLog {
    /// Create a log starting at genesis with no sinks
    pub fn new() -> Self {
        Self {
            sinks: Vec::new(),
            last_sequence: 0,
            last_hash: GENESIS_HASH.to_string(),
        }
    }

    /// Continue an existing chain after `last`
    pub fn resume_after(last: &EventRecord) -> Self {
        Self {
            sinks: Vec::new(),
            last_sequence: last.sequence,
            last_hash: last.hash.clone(),
        }
    }

    /// Open the JSONL log in `dir` and continue its chain
    ///
    /// An empty or missing directory starts at genesis; otherwise the next
    /// record follows the last one on disk.
    pub fn open_store(dir: impl AsRef<Path>) -> Result<Self, EventError> {
        let store = EventStore::open(dir)?;
        let log = match store.head() {
            Some(last) => Self::resume_after(last),
            None => Self::new(),
        };
        Ok(log.with_sink(Box::new(store)))
    }

    /// Register a sink
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Builder-style `add_sink`
    pub fn with_sink(mut self, sink: Box<dyn EventSink>) -> Self {
        self.add_sink(sink);
        self
    }

    /// Sequence number of the last emitted record (0 before the first)
    pub fn last_sequence(&self) -> u64 {
        self.last_sequence
    }

    /// Wrap `event` in the next record of the chain and deliver it
    pub fn emit(&mut self, event: WalletEvent) -> EventRecord {
        let mut record = EventRecord {
            sequence: self.last_sequence + 1,
            prev_hash: self.last_hash.clone(),
            hash: String::new(),
            timestamp: Utc::now(),
            event,
        };
        record.hash = calculate_record_hash(&record);

        self.last_sequence = record.sequence;
        self.last_hash = record.hash.clone();

        for sink in &mut self.sinks {
            if let Err(e) = sink.record(&record) {
                tracing::error!(
                    sink = sink.name(),
                    sequence = record.sequence,
                    event = record.event.kind(),
                    error = %e,
                    "Event sink failed"
                );
            }
        }

        record
    }
}

/// In-process sink; clones share the same buffer
#[derive(Clone, Default)]
pub struct MemoryLog {
    records: Arc<RwLock<Vec<EventRecord>>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every record received so far
    pub fn records(&self) -> Vec<EventRecord> {
        match self.records.read() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Snapshot of the events only
    pub fn events(&self) -> Vec<WalletEvent> {
        self.records().into_iter().map(|r| r.event).collect()
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for MemoryLog {
    fn name(&self) -> &str {
        "memory"
    }

    fn record(&mut self, record: &EventRecord) -> Result<(), EventError> {
        self.records
            .write()
            .map_err(|_| EventError::Poisoned(self.name().to_string()))?
            .push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multisig_core::Principal;

    struct FailingSink;

    impl EventSink for FailingSink {
        fn name(&self) -> &str {
            "failing"
        }

        fn record(&mut self, _record: &EventRecord) -> Result<(), EventError> {
            Err(EventError::Io(std::io::Error::other("disk full")))
        }
    }

    fn confirmed(index: u64) -> WalletEvent {
        WalletEvent::Confirmed {
            owner: Principal::from_bytes([1u8; 20]),
            action_index: index,
        }
    }

    #[test]
    fn test_emit_sequences_records() {
        let memory = MemoryLog::new();
        let mut log = EventLog::new().with_sink(Box::new(memory.clone()));

        let first = log.emit(confirmed(0));
        let second = log.emit(confirmed(1));

        assert_eq!(first.sequence, 1);
        assert_eq!(first.prev_hash, GENESIS_HASH);
        assert_eq!(second.sequence, 2);
        assert_eq!(second.prev_hash, first.hash);
        assert_eq!(log.last_sequence(), 2);
        assert_eq!(memory.len(), 2);
    }

    #[test]
    fn test_failing_sink_does_not_block_others() {
        let memory = MemoryLog::new();
        let mut log = EventLog::new()
            .with_sink(Box::new(FailingSink))
            .with_sink(Box::new(memory.clone()));

        let record = log.emit(confirmed(0));

        assert_eq!(record.sequence, 1);
        assert_eq!(memory.events(), vec![confirmed(0)]);
    }

    #[test]
    fn test_resume_after_continues_chain() {
        let mut log = EventLog::new();
        let last = log.emit(confirmed(0));

        let mut resumed = EventLog::resume_after(&last);
        let next = resumed.emit(confirmed(1));

        assert_eq!(next.sequence, 2);
        assert_eq!(next.prev_hash, last.hash);
    }
}
