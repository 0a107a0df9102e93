//! Value - non-negative integer amount moved by an action
//!
//! Values are unsigned, so negativity is ruled out by the type itself.
//! Arithmetic is checked; callers decide what overflow or underflow means.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative amount in the wallet's smallest unit.
///
/// # Example
/// ```
/// use multisig_core::Value;
///
/// let a = Value::new(100);
/// let b = Value::new(30);
/// assert_eq!(a.checked_sub(b), Some(Value::new(70)));
/// assert_eq!(b.checked_sub(a), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Value(u128);

impl Value {
    /// Zero value constant
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Get the inner integer
    #[inline]
    pub const fn get(&self) -> u128 {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition - returns None on overflow
    pub fn checked_add(self, other: Value) -> Option<Value> {
        self.0.checked_add(other.0).map(Value)
    }

    /// Checked subtraction - returns None if the result would be negative
    pub fn checked_sub(self, other: Value) -> Option<Value> {
        self.0.checked_sub(other.0).map(Value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u128> for Value {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl From<Value> for u128 {
    fn from(value: Value) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_zero() {
        assert!(Value::ZERO.is_zero());
        assert_eq!(Value::default(), Value::ZERO);
    }

    #[test]
    fn test_checked_add_overflow() {
        let max = Value::new(u128::MAX);
        assert!(max.checked_add(Value::new(1)).is_none());
        assert_eq!(Value::new(2).checked_add(Value::new(3)), Some(Value::new(5)));
    }

    #[test]
    fn test_checked_sub_prevents_negative() {
        let a = Value::new(50);
        let b = Value::new(100);
        assert!(a.checked_sub(b).is_none());
    }

    #[test]
    fn test_serde_transparent() {
        let v = Value::new(12345);
        assert_eq!(serde_json::to_string(&v).unwrap(), "12345");
    }
}
