//! Multisig Events - append-only wallet event log
//!
//! Every committed wallet transition produces one `WalletEvent`. The event is
//! wrapped in a hash-chained `EventRecord` and handed to the registered sinks.
//! Sinks are write-only from the wallet's point of view; `EventReader` exists
//! for external observers (audit, inspection) and for recovering the chain
//! head when a store is reopened. The wallet itself never reads the log.

pub mod error;
pub mod event;
pub mod hash;
pub mod reader;
pub mod record;
pub mod sink;
pub mod store;

pub use error::EventError;
pub use event::WalletEvent;
pub use hash::{verify_chain, ChainError};
pub use reader::EventReader;
pub use record::{EventRecord, GENESIS_HASH};
pub use sink::{EventLog, EventSink, MemoryLog};
pub use store::{EventStore, LOG_FILE_NAME};
