//! Event record - sequenced, hash-chained envelope around a wallet event

use crate::event::WalletEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `prev_hash` of the first record in a log
pub const GENESIS_HASH: &str = "GENESIS";

/// A wallet event as it appears in the append-only log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Position in the log, starting at 1
    pub sequence: u64,

    /// Hash of the previous record, or `GENESIS`
    pub prev_hash: String,

    /// SHA256 over this record's content (excluding this field)
    pub hash: String,

    /// When the event was emitted
    pub timestamp: DateTime<Utc>,

    pub event: WalletEvent,
}
