//! Actions and the append-only action ledger

use multisig_core::{Payload, Principal, Value};
use serde::{Deserialize, Serialize};

/// A proposed call awaiting (or past) committee approval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub target: Principal,
    pub value: Value,
    pub payload: Payload,
    /// Terminal flag; false -> true at most once
    pub executed: bool,
    /// Number of owners currently confirming
    pub confirmations: u32,
}

impl Action {
    fn new(target: Principal, value: Value, payload: Payload) -> Self {
        Self {
            target,
            value,
            payload,
            executed: false,
            confirmations: 0,
        }
    }

    /// Quorum predicate, evaluated at execute time
    pub fn meets_quorum(&self, quorum: u32) -> bool {
        self.confirmations >= quorum
    }
}

/// Ordered, append-only sequence of actions.
///
/// Indices are assigned in submission order and never reused; nothing is
/// ever removed. Only the wallet holds a mutable handle.
#[derive(Debug, Clone, Default)]
pub struct ActionLedger {
    actions: Vec<Action>,
}

impl ActionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fresh action and return its index
    pub fn append(&mut self, target: Principal, value: Value, payload: Payload) -> u64 {
        let index = self.actions.len() as u64;
        self.actions.push(Action::new(target, value, payload));
        index
    }

    pub fn get(&self, index: u64) -> Option<&Action> {
        usize::try_from(index).ok().and_then(|i| self.actions.get(i))
    }

    pub(crate) fn get_mut(&mut self, index: u64) -> Option<&mut Action> {
        usize::try_from(index).ok().and_then(|i| self.actions.get_mut(i))
    }

    /// Number of actions ever proposed; also the next index
    pub fn count(&self) -> u64 {
        self.actions.len() as u64
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &Action)> {
        self.actions.iter().enumerate().map(|(i, a)| (i as u64, a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> Principal {
        Principal::from_bytes([0xdd; 20])
    }

    #[test]
    fn test_append_assigns_sequential_indices() {
        let mut ledger = ActionLedger::new();
        assert_eq!(ledger.count(), 0);

        let first = ledger.append(target(), Value::new(5), Payload::empty());
        let second = ledger.append(target(), Value::new(7), Payload::from(vec![1, 2]));

        assert_eq!(first, 0);
        assert_eq!(second, 1);
        assert_eq!(ledger.count(), 2);

        let action = ledger.get(1).unwrap();
        assert_eq!(action.value, Value::new(7));
        assert_eq!(action.confirmations, 0);
        assert!(!action.executed);
    }

    #[test]
    fn test_get_out_of_range() {
        let mut ledger = ActionLedger::new();
        ledger.append(target(), Value::ZERO, Payload::empty());
        assert!(ledger.get(1).is_none());
        assert!(ledger.get(u64::MAX).is_none());
    }

    #[test]
    fn test_meets_quorum_is_inclusive() {
        let mut action = Action::new(target(), Value::ZERO, Payload::empty());
        action.confirmations = 1;
        assert!(!action.meets_quorum(2));
        action.confirmations = 2;
        assert!(action.meets_quorum(2));
        action.confirmations = 3;
        assert!(action.meets_quorum(2));
    }
}
