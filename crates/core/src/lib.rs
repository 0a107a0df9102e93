//! Multisig Core - Domain types
//!
//! This crate contains the fundamental types shared by the wallet and its event log:
//! - `Principal`: 20-byte account address of an owner, target or executor
//! - `Value`: Non-negative integer amount moved by an action
//! - `Payload`: Opaque call data attached to an action

pub mod payload;
pub mod principal;
pub mod value;

pub use payload::Payload;
pub use principal::{Principal, PrincipalError};
pub use value::Value;
