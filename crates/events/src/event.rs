//! Wallet events emitted by committed transitions

use multisig_core::{Payload, Principal, Value};
use serde::{Deserialize, Serialize};

/// One observable wallet transition.
///
/// Emitted only after the transition has been committed; a rejected call
/// produces no event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WalletEvent {
    /// Funds were received by the wallet
    Deposited {
        sender: Principal,
        amount: Value,
        new_balance: Value,
    },

    /// An owner submitted a new action
    Proposed {
        proposer: Principal,
        action_index: u64,
        target: Principal,
        value: Value,
        payload: Payload,
    },

    /// An owner approved an action
    Confirmed { owner: Principal, action_index: u64 },

    /// An owner withdrew an earlier approval
    Revoked { owner: Principal, action_index: u64 },

    /// An action's effect was performed
    Executed { executor: Principal, action_index: u64 },
}

impl WalletEvent {
    /// Short event name used in logs and hashing
    pub fn kind(&self) -> &'static str {
        match self {
            WalletEvent::Deposited { .. } => "Deposited",
            WalletEvent::Proposed { .. } => "Proposed",
            WalletEvent::Confirmed { .. } => "Confirmed",
            WalletEvent::Revoked { .. } => "Revoked",
            WalletEvent::Executed { .. } => "Executed",
        }
    }

    /// Index of the action this event refers to, if any
    pub fn action_index(&self) -> Option<u64> {
        match self {
            WalletEvent::Deposited { .. } => None,
            WalletEvent::Proposed { action_index, .. }
            | WalletEvent::Confirmed { action_index, .. }
            | WalletEvent::Revoked { action_index, .. }
            | WalletEvent::Executed { action_index, .. } => Some(*action_index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(last: u8) -> Principal {
        let mut bytes = [0u8; 20];
        bytes[19] = last;
        Principal::from_bytes(bytes)
    }

    #[test]
    fn test_action_index() {
        let deposited = WalletEvent::Deposited {
            sender: principal(1),
            amount: Value::new(10),
            new_balance: Value::new(10),
        };
        assert_eq!(deposited.action_index(), None);

        let confirmed = WalletEvent::Confirmed {
            owner: principal(1),
            action_index: 7,
        };
        assert_eq!(confirmed.action_index(), Some(7));
        assert_eq!(confirmed.kind(), "Confirmed");
    }

    #[test]
    fn test_proposed_json_shape() {
        let event = WalletEvent::Proposed {
            proposer: principal(1),
            action_index: 0,
            target: principal(2),
            value: Value::new(5),
            payload: Payload::from(vec![0xab]),
        };
        let json = serde_json::to_value(&event).unwrap();
        let body = &json["Proposed"];
        assert_eq!(body["action_index"], 0);
        assert_eq!(body["value"], 5);
        assert_eq!(body["payload"], "0xab");
        assert_eq!(body["target"], "0x0000000000000000000000000000000000000002");
    }
}
