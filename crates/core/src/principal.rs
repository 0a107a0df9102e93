//! Principal - account address of an owner, target or caller
//!
//! Textual form is `0x` followed by 40 hex digits. Input is case-insensitive,
//! output is always lowercase.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Length of a principal address in bytes
pub const PRINCIPAL_LEN: usize = 20;

/// Errors that can occur when parsing a principal
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrincipalError {
    #[error("Principal must start with 0x: {0}")]
    MissingPrefix(String),

    #[error("Principal must be {expected} hex digits, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Principal is not valid hex: {0}")]
    InvalidHex(String),
}

/// A 20-byte account address.
///
/// The all-zero address is the null principal. It parses fine (observers may
/// see it in logs), but the owner registry refuses it.
///
/// # Example
/// ```
/// use multisig_core::Principal;
///
/// let p: Principal = "0x00000000000000000000000000000000000000aa".parse().unwrap();
/// assert!(!p.is_null());
/// assert!(Principal::NULL.is_null());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Principal([u8; PRINCIPAL_LEN]);

impl Principal {
    /// The null (all-zero) principal
    pub const NULL: Self = Self([0u8; PRINCIPAL_LEN]);

    /// Create a principal from raw bytes
    #[inline]
    pub const fn from_bytes(bytes: [u8; PRINCIPAL_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw address bytes
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; PRINCIPAL_LEN] {
        &self.0
    }

    /// Check if this is the null principal
    pub fn is_null(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl FromStr for Principal {
    type Err = PrincipalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| PrincipalError::MissingPrefix(s.to_string()))?;

        if digits.len() != PRINCIPAL_LEN * 2 {
            return Err(PrincipalError::InvalidLength {
                expected: PRINCIPAL_LEN * 2,
                actual: digits.len(),
            });
        }

        let mut bytes = [0u8; PRINCIPAL_LEN];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| PrincipalError::InvalidHex(s.to_string()))?;

        Ok(Self(bytes))
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl TryFrom<String> for Principal {
    type Error = PrincipalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Principal> for String {
    fn from(principal: Principal) -> Self {
        principal.to_string()
    }
}
