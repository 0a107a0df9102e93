//! Confirmation tracker - (action index, owner) -> confirmed

use multisig_core::Principal;
use std::collections::{HashMap, HashSet};

/// Records which owners currently confirm which action.
///
/// The number of entries for an index must always equal that action's
/// `confirmations` count; the wallet updates both in the same step.
#[derive(Debug, Clone, Default)]
pub struct ConfirmationTracker {
    confirmed: HashMap<u64, HashSet<Principal>>,
}

impl ConfirmationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_confirmed(&self, index: u64, owner: &Principal) -> bool {
        self.confirmed
            .get(&index)
            .is_some_and(|owners| owners.contains(owner))
    }

    /// Mark `owner` as confirming `index`. Returns false if already set.
    pub fn set(&mut self, index: u64, owner: Principal) -> bool {
        self.confirmed.entry(index).or_default().insert(owner)
    }

    /// Clear `owner`'s confirmation of `index`. Returns false if it was not set.
    pub fn clear(&mut self, index: u64, owner: &Principal) -> bool {
        let Some(owners) = self.confirmed.get_mut(&index) else {
            return false;
        };
        let removed = owners.remove(owner);
        if owners.is_empty() {
            self.confirmed.remove(&index);
        }
        removed
    }

    /// Number of owners currently confirming `index`
    pub fn count(&self, index: u64) -> usize {
        self.confirmed.get(&index).map_or(0, HashSet::len)
    }
}
