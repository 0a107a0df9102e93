//! Wallet errors

use crate::gateway::GatewayError;
use multisig_core::{Principal, Value};
use thiserror::Error;

/// Why an owner set / quorum pair was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Owner set is empty")]
    NoOwners,

    #[error("Duplicate owner: {0}")]
    DuplicateOwner(Principal),

    #[error("Null principal cannot be an owner")]
    NullOwner,

    #[error("Quorum {quorum} out of range 1..={owners}")]
    InvalidQuorum { quorum: u32, owners: usize },
}

/// Errors from wallet operations
///
/// Every error leaves the wallet exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Caller is not an owner: {0}")]
    Unauthorized(Principal),

    #[error("Action not found: {0}")]
    ActionNotFound(u64),

    #[error("Action {0} already executed")]
    AlreadyExecuted(u64),

    #[error("Owner {owner} already confirmed action {index}")]
    DuplicateConfirmation { index: u64, owner: Principal },

    #[error("Owner {owner} has not confirmed action {index}")]
    NotConfirmed { index: u64, owner: Principal },

    #[error("Action {index} has {confirmations} of {quorum} required confirmations")]
    QuorumNotMet {
        index: u64,
        confirmations: u32,
        quorum: u32,
    },

    #[error("Action {index} needs {requested} but the wallet holds {available}")]
    InsufficientBalance {
        index: u64,
        requested: Value,
        available: Value,
    },

    #[error("Execution of action {index} failed: {source}")]
    ExecutionFailed {
        index: u64,
        #[source]
        source: GatewayError,
    },

    #[error("Deposit would overflow the wallet balance")]
    BalanceOverflow,
}

/// Result type for wallet operations
pub type WalletResult<T> = Result<T, WalletError>;

impl WalletError {
    /// Check if this error came from the execution gateway
    pub fn is_execution_failure(&self) -> bool {
        matches!(self, WalletError::ExecutionFailed { .. })
    }
}
