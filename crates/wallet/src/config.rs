//! Wallet configuration
//!
//! The owner set and quorum are read from JSON, for example:
//!
//! ```json
//! {
//!   "owners": [
//!     "0x5b38da6a701c568545dcfcb03fcb875f56beddc4",
//!     "0xab8483f64d9c6d1ecf9b849ae677dd3315835cb2"
//!   ],
//!   "quorum": 2
//! }
//! ```

use crate::error::ConfigError;
use crate::registry::OwnerRegistry;
use multisig_core::Principal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors loading a config file
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Owner set and quorum as supplied by an operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletConfig {
    pub owners: Vec<Principal>,

    /// Confirmations required to execute; defaults to all owners
    #[serde(default)]
    pub quorum: Option<u32>,
}

impl WalletConfig {
    pub fn new(owners: Vec<Principal>, quorum: u32) -> Self {
        Self {
            owners,
            quorum: Some(quorum),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigFileError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigFileError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Effective quorum
    pub fn quorum(&self) -> u32 {
        self.quorum
            .unwrap_or_else(|| u32::try_from(self.owners.len()).unwrap_or(u32::MAX))
    }

    /// Validate into a frozen registry
    pub fn build_registry(&self) -> Result<OwnerRegistry, ConfigError> {
        OwnerRegistry::new(self.owners.clone(), self.quorum())
    }
}
