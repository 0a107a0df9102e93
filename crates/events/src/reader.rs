//! Observer-side reader for a wallet log directory

use crate::error::EventError;
use crate::record::EventRecord;
use crate::store::LOG_FILE_NAME;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Reads back the records an `EventStore` wrote, in sequence order
pub struct EventReader {
    path: PathBuf,
}

impl EventReader {
    /// Reader over the log kept in `dir`. A missing log reads as empty.
    pub fn from_directory(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(LOG_FILE_NAME),
        }
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every record in the log, failing on the first line that does not parse
    pub fn read_all(&self) -> Result<Vec<EventRecord>, EventError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for (number, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record = serde_json::from_str(&line).map_err(|source| EventError::Corrupt {
                line: number + 1,
                source,
            })?;
            records.push(record);
        }

        Ok(records)
    }

    /// Chain head: the record a resumed log must continue from
    pub fn last_record(&self) -> Result<Option<EventRecord>, EventError> {
        Ok(self.read_all()?.pop())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::WalletEvent;
    use crate::hash::verify_chain;
    use crate::sink::EventLog;
    use multisig_core::{Payload, Principal, Value};
    use tempfile::TempDir;

    fn owner() -> Principal {
        Principal::from_bytes([0xaa; 20])
    }

    #[test]
    fn test_store_then_read_back() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let mut log = EventLog::open_store(dir.path())?;

        log.emit(WalletEvent::Proposed {
            proposer: owner(),
            action_index: 0,
            target: Principal::from_bytes([0xbb; 20]),
            value: Value::new(5),
            payload: Payload::empty(),
        });
        let last = log.emit(WalletEvent::Confirmed {
            owner: owner(),
            action_index: 0,
        });
        drop(log);

        let reader = EventReader::from_directory(dir.path());
        let records = reader.read_all()?;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].event.kind(), "Proposed");
        assert_eq!(reader.last_record()?, Some(last));
        assert!(verify_chain(&records).is_ok());
        Ok(())
    }

    #[test]
    fn test_missing_directory_reads_empty() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let reader = EventReader::from_directory(dir.path().join("absent"));
        assert!(reader.read_all()?.is_empty());
        assert!(reader.last_record()?.is_none());
        Ok(())
    }

    #[test]
    fn test_garbled_line_reports_its_number() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let mut log = EventLog::open_store(dir.path())?;
        log.emit(WalletEvent::Revoked {
            owner: owner(),
            action_index: 3,
        });
        drop(log);

        let reader = EventReader::from_directory(dir.path());
        let mut contents = std::fs::read_to_string(reader.path())?;
        contents.push_str("{\"sequence\":\n");
        std::fs::write(reader.path(), contents)?;

        assert!(matches!(
            reader.read_all(),
            Err(EventError::Corrupt { line: 2, .. })
        ));
        Ok(())
    }
}
