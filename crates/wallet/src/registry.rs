//! Owner registry - frozen owner set and quorum

use crate::error::ConfigError;
use multisig_core::Principal;
use std::collections::HashSet;

/// The committee allowed to propose, confirm and revoke.
///
/// Built once and never mutated; there is no add/remove/change-quorum path.
#[derive(Debug, Clone)]
pub struct OwnerRegistry {
    /// Owners in the order they were supplied
    owners: Vec<Principal>,
    /// Membership index
    lookup: HashSet<Principal>,
    quorum: u32,
}

impl OwnerRegistry {
    /// Validate and freeze an owner set.
    ///
    /// Fails on an empty set, a duplicate or null owner, or a quorum outside
    /// `1..=owners.len()`.
    pub fn new(owners: Vec<Principal>, quorum: u32) -> Result<Self, ConfigError> {
        if owners.is_empty() {
            return Err(ConfigError::NoOwners);
        }

        let mut lookup = HashSet::with_capacity(owners.len());
        for owner in &owners {
            if owner.is_null() {
                return Err(ConfigError::NullOwner);
            }
            if !lookup.insert(*owner) {
                return Err(ConfigError::DuplicateOwner(*owner));
            }
        }

        if quorum == 0 || quorum as usize > owners.len() {
            return Err(ConfigError::InvalidQuorum {
                quorum,
                owners: owners.len(),
            });
        }

        Ok(Self {
            owners,
            lookup,
            quorum,
        })
    }

    #[inline]
    pub fn is_owner(&self, principal: &Principal) -> bool {
        self.lookup.contains(principal)
    }

    /// Owners in registration order
    pub fn owners(&self) -> &[Principal] {
        &self.owners
    }

    pub fn quorum(&self) -> u32 {
        self.quorum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(n: u8) -> Principal {
        Principal::from_bytes([n; 20])
    }

    #[test]
    fn test_valid_registry() {
        let registry = OwnerRegistry::new(vec![p(1), p(2), p(3)], 2).unwrap();
        assert_eq!(registry.quorum(), 2);
        assert_eq!(registry.owners(), &[p(1), p(2), p(3)]);
        assert!(registry.is_owner(&p(2)));
        assert!(!registry.is_owner(&p(9)));
    }

    #[test]
    fn test_empty_owner_set_rejected() {
        assert_eq!(OwnerRegistry::new(vec![], 1).unwrap_err(), ConfigError::NoOwners);
    }

    #[test]
    fn test_duplicate_owner_rejected() {
        let result = OwnerRegistry::new(vec![p(1), p(2), p(1)], 2);
        assert_eq!(result.unwrap_err(), ConfigError::DuplicateOwner(p(1)));
    }

    #[test]
    fn test_null_owner_rejected() {
        let result = OwnerRegistry::new(vec![p(1), Principal::NULL], 1);
        assert_eq!(result.unwrap_err(), ConfigError::NullOwner);
    }

    #[test]
    fn test_quorum_bounds() {
        assert!(matches!(
            OwnerRegistry::new(vec![p(1), p(2)], 0),
            Err(ConfigError::InvalidQuorum { quorum: 0, owners: 2 })
        ));
        assert!(matches!(
            OwnerRegistry::new(vec![p(1), p(2)], 3),
            Err(ConfigError::InvalidQuorum { quorum: 3, owners: 2 })
        ));
        assert!(OwnerRegistry::new(vec![p(1), p(2)], 2).is_ok());
        assert!(OwnerRegistry::new(vec![p(1)], 1).is_ok());
    }
}
