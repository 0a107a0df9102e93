//! Hash chain utilities for event log integrity

use crate::event::WalletEvent;
use crate::record::{EventRecord, GENESIS_HASH};
use sha2::{Digest, Sha256};

/// Calculate SHA256 hash of record content (excluding the hash field itself)
pub fn calculate_record_hash(record: &EventRecord) -> String {
    let mut hasher = Sha256::new();

    hasher.update(record.sequence.to_le_bytes());
    hasher.update(record.prev_hash.as_bytes());
    hasher.update(record.timestamp.to_rfc3339().as_bytes());
    hasher.update(record.event.kind().as_bytes());

    match &record.event {
        WalletEvent::Deposited {
            sender,
            amount,
            new_balance,
        } => {
            hasher.update(sender.as_bytes());
            hasher.update(amount.get().to_le_bytes());
            hasher.update(new_balance.get().to_le_bytes());
        }
        WalletEvent::Proposed {
            proposer,
            action_index,
            target,
            value,
            payload,
        } => {
            hasher.update(proposer.as_bytes());
            hasher.update(action_index.to_le_bytes());
            hasher.update(target.as_bytes());
            hasher.update(value.get().to_le_bytes());
            hasher.update((payload.len() as u64).to_le_bytes());
            hasher.update(payload.as_bytes());
        }
        WalletEvent::Confirmed {
            owner,
            action_index,
        }
        | WalletEvent::Revoked {
            owner,
            action_index,
        } => {
            hasher.update(owner.as_bytes());
            hasher.update(action_index.to_le_bytes());
        }
        WalletEvent::Executed {
            executor,
            action_index,
        } => {
            hasher.update(executor.as_bytes());
            hasher.update(action_index.to_le_bytes());
        }
    }

    hex::encode(hasher.finalize())
}

/// Verify hash chain integrity
pub fn verify_chain(records: &[EventRecord]) -> Result<(), ChainError> {
    let mut prev_hash = GENESIS_HASH.to_string();

    for (i, record) in records.iter().enumerate() {
        let expected_sequence = i as u64 + 1;
        if record.sequence != expected_sequence {
            return Err(ChainError::InvalidSequence {
                expected: expected_sequence,
                actual: record.sequence,
            });
        }

        if record.prev_hash != prev_hash {
            return Err(ChainError::BrokenLink {
                sequence: record.sequence,
                expected: prev_hash,
                actual: record.prev_hash.clone(),
            });
        }

        let calculated = calculate_record_hash(record);
        if record.hash != calculated {
            return Err(ChainError::InvalidHash {
                sequence: record.sequence,
                expected: calculated,
                actual: record.hash.clone(),
            });
        }

        prev_hash = record.hash.clone();
    }

    Ok(())
}

/// Errors in hash chain verification
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    #[error("Broken link at sequence {sequence}: expected prev_hash {expected}, got {actual}")]
    BrokenLink {
        sequence: u64,
        expected: String,
        actual: String,
    },

    #[error("Invalid hash at sequence {sequence}: expected {expected}, got {actual}")]
    InvalidHash {
        sequence: u64,
        expected: String,
        actual: String,
    },

    #[error("Invalid sequence: expected {expected}, got {actual}")]
    InvalidSequence { expected: u64, actual: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{EventLog, MemoryLog};
    use multisig_core::{Principal, Value};

    fn sample_records(n: u128) -> Vec<EventRecord> {
        let memory = MemoryLog::new();
        let mut log = EventLog::new();
        log.add_sink(Box::new(memory.clone()));

        let sender = Principal::from_bytes([7u8; 20]);
        for i in 1..=n {
            log.emit(WalletEvent::Deposited {
                sender,
                amount: Value::new(1),
                new_balance: Value::new(i),
            });
        }
        memory.records()
    }

    #[test]
    fn test_empty_chain_is_valid() {
        assert!(verify_chain(&[]).is_ok());
    }

    #[test]
    fn test_valid_chain() {
        let records = sample_records(3);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].prev_hash, GENESIS_HASH);
        assert_eq!(records[1].prev_hash, records[0].hash);
        assert!(verify_chain(&records).is_ok());
    }

    #[test]
    fn test_tampered_event_detected() {
        let mut records = sample_records(3);
        if let WalletEvent::Deposited { new_balance, .. } = &mut records[1].event {
            *new_balance = Value::new(1_000_000);
        }

        let result = verify_chain(&records);
        assert!(matches!(
            result,
            Err(ChainError::InvalidHash { sequence: 2, .. })
        ));
    }

    #[test]
    fn test_dropped_record_detected() {
        let mut records = sample_records(3);
        records.remove(1);

        let result = verify_chain(&records);
        assert_eq!(
            result,
            Err(ChainError::InvalidSequence {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn test_relinked_record_detected() {
        let mut records = sample_records(2);
        records[1].prev_hash = "0".repeat(64);

        let result = verify_chain(&records);
        assert!(matches!(
            result,
            Err(ChainError::BrokenLink { sequence: 2, .. })
        ));
    }
}
