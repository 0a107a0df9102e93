//! Event log errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EventError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unreadable record on line {line}: {source}")]
    Corrupt {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Record {actual} does not extend the stored chain (next sequence is {expected})")]
    Discontinuous { expected: u64, actual: u64 },

    #[error("Event sink '{0}' is poisoned")]
    Poisoned(String),
}
