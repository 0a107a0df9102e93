//! # Multisig Wallet
//!
//! Multi-owner authorization gate for outgoing calls.
//!
//! ```text
//! propose ──► Action Ledger (count = 0)
//!                │
//!      confirm / revoke (owners only, one vote each)
//!                │
//!                ▼
//! execute ──► count >= quorum? ──► Execution Gateway ──► commit + Executed event
//!                                        │
//!                                     failure ──► nothing changes
//! ```
//!
//! ## Components
//! - `OwnerRegistry`: frozen owner set and quorum
//! - `ActionLedger`: append-only list of proposed actions
//! - `ConfirmationTracker`: who currently confirms which action
//! - `MultiSigWallet`: the state machine tying them together
//! - `ExecutionGateway`: boundary to whatever performs the call
//! - `SharedWallet`: mutex-guarded handle for concurrent callers

mod action;
mod config;
mod error;
mod gateway;
mod registry;
mod shared;
mod tracker;
mod wallet;

pub use action::{Action, ActionLedger};
pub use config::{ConfigFileError, WalletConfig};
pub use error::{ConfigError, WalletError, WalletResult};
pub use gateway::{Call, ExecutionGateway, GatewayError, RecordingGateway, RejectingGateway};
pub use registry::OwnerRegistry;
pub use shared::SharedWallet;
pub use tracker::ConfirmationTracker;
pub use wallet::{ExecutionReceipt, MultiSigWallet};
