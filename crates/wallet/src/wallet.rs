//! Authorization state machine
//!
//! Per action: `Proposed` (any count) -> `Executed` (terminal). Quorum is not
//! a stored state; it is checked when `execute` is called.
//!
//! Every method validates all preconditions before touching state, so a
//! rejected call leaves the wallet untouched. Events are emitted only after
//! the state change is in place.

use std::sync::Arc;

use multisig_core::{Payload, Principal, Value};
use multisig_events::{EventLog, WalletEvent};

use crate::action::{Action, ActionLedger};
use crate::config::WalletConfig;
use crate::error::{WalletError, WalletResult};
use crate::gateway::{Call, ExecutionGateway};
use crate::registry::OwnerRegistry;
use crate::tracker::ConfirmationTracker;

/// Outcome of a successful `execute`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionReceipt {
    pub index: u64,
    pub executor: Principal,
    /// Data returned by the gateway
    pub return_data: Vec<u8>,
}

/// Multi-owner wallet: registry + ledger + tracker + treasury balance.
///
/// All mutation goes through `&mut self`, so one wallet value is its own
/// single-writer boundary. Use `SharedWallet` to share it between tasks.
pub struct MultiSigWallet {
    registry: OwnerRegistry,
    ledger: ActionLedger,
    tracker: ConfirmationTracker,
    balance: Value,
    gateway: Arc<dyn ExecutionGateway>,
    events: EventLog,
}

impl MultiSigWallet {
    /// Create a wallet over a validated registry
    pub fn new(
        registry: OwnerRegistry,
        gateway: Arc<dyn ExecutionGateway>,
        events: EventLog,
    ) -> Self {
        tracing::info!(
            owners = registry.owners().len(),
            quorum = registry.quorum(),
            gateway = gateway.name(),
            "Wallet created"
        );

        Self {
            registry,
            ledger: ActionLedger::new(),
            tracker: ConfirmationTracker::new(),
            balance: Value::ZERO,
            gateway,
            events,
        }
    }

    /// Validate `config` and create a wallet from it
    pub fn from_config(
        config: &WalletConfig,
        gateway: Arc<dyn ExecutionGateway>,
        events: EventLog,
    ) -> WalletResult<Self> {
        let registry = config.build_registry()?;
        Ok(Self::new(registry, gateway, events))
    }

    // === Transitions ===

    /// Receive funds. Anyone may deposit.
    pub fn deposit(&mut self, sender: Principal, amount: Value) -> WalletResult<Value> {
        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| reject("deposit", WalletError::BalanceOverflow))?;

        self.balance = new_balance;
        tracing::debug!(%sender, %amount, %new_balance, "Deposit received");

        self.events.emit(WalletEvent::Deposited {
            sender,
            amount,
            new_balance,
        });

        Ok(new_balance)
    }

    /// Submit a new action. Owners only.
    pub fn propose(
        &mut self,
        caller: Principal,
        target: Principal,
        value: Value,
        payload: Payload,
    ) -> WalletResult<u64> {
        self.require_owner("propose", &caller)?;

        let index = self.ledger.append(target, value, payload.clone());
        tracing::debug!(proposer = %caller, index, %target, %value, "Action proposed");

        self.events.emit(WalletEvent::Proposed {
            proposer: caller,
            action_index: index,
            target,
            value,
            payload,
        });

        Ok(index)
    }

    /// Record the caller's approval of `index`. Owners only, once each.
    ///
    /// Confirmations past quorum are accepted.
    pub fn confirm(&mut self, caller: Principal, index: u64) -> WalletResult<u32> {
        self.require_owner("confirm", &caller)?;
        self.require_pending("confirm", index)?;

        if self.tracker.is_confirmed(index, &caller) {
            return Err(reject(
                "confirm",
                WalletError::DuplicateConfirmation {
                    index,
                    owner: caller,
                },
            ));
        }

        let count = self.bump(index, caller, true)?;
        tracing::debug!(owner = %caller, index, confirmations = count, "Action confirmed");

        self.events.emit(WalletEvent::Confirmed {
            owner: caller,
            action_index: index,
        });

        Ok(count)
    }

    /// Withdraw the caller's earlier approval of `index`. Owners only.
    pub fn revoke(&mut self, caller: Principal, index: u64) -> WalletResult<u32> {
        self.require_owner("revoke", &caller)?;
        self.require_pending("revoke", index)?;

        if !self.tracker.is_confirmed(index, &caller) {
            return Err(reject(
                "revoke",
                WalletError::NotConfirmed {
                    index,
                    owner: caller,
                },
            ));
        }

        let count = self.bump(index, caller, false)?;
        tracing::debug!(owner = %caller, index, confirmations = count, "Confirmation revoked");

        self.events.emit(WalletEvent::Revoked {
            owner: caller,
            action_index: index,
        });

        Ok(count)
    }

    /// Perform action `index` through the gateway. Anyone may call.
    ///
    /// State is committed only after the gateway returns success. On any
    /// failure the action stays pending with its count and the balance
    /// unchanged, and the caller may retry.
    pub async fn execute(
        &mut self,
        caller: Principal,
        index: u64,
    ) -> WalletResult<ExecutionReceipt> {
        let action = self.require_pending("execute", index)?;
        let quorum = self.registry.quorum();

        if !action.meets_quorum(quorum) {
            return Err(reject(
                "execute",
                WalletError::QuorumNotMet {
                    index,
                    confirmations: action.confirmations,
                    quorum,
                },
            ));
        }

        let call = Call {
            target: action.target,
            value: action.value,
            payload: action.payload.clone(),
        };

        let remaining = self.balance.checked_sub(call.value).ok_or_else(|| {
            reject(
                "execute",
                WalletError::InsufficientBalance {
                    index,
                    requested: call.value,
                    available: self.balance,
                },
            )
        })?;

        let return_data = match self.gateway.perform(&call).await {
            Ok(data) => data,
            Err(source) => {
                return Err(reject(
                    "execute",
                    WalletError::ExecutionFailed { index, source },
                ))
            }
        };

        // Commit: nothing above this line has touched wallet state.
        let action = self
            .ledger
            .get_mut(index)
            .ok_or(WalletError::ActionNotFound(index))?;
        action.executed = true;
        self.balance = remaining;

        tracing::info!(
            executor = %caller,
            index,
            target = %call.target,
            value = %call.value,
            gateway = self.gateway.name(),
            "Action executed"
        );

        self.events.emit(WalletEvent::Executed {
            executor: caller,
            action_index: index,
        });

        Ok(ExecutionReceipt {
            index,
            executor: caller,
            return_data,
        })
    }

    // === Queries ===

    /// Owners in registration order
    pub fn list_owners(&self) -> &[Principal] {
        self.registry.owners()
    }

    pub fn is_owner(&self, principal: &Principal) -> bool {
        self.registry.is_owner(principal)
    }

    pub fn quorum(&self) -> u32 {
        self.registry.quorum()
    }

    pub fn action_count(&self) -> u64 {
        self.ledger.count()
    }

    pub fn get_action(&self, index: u64) -> WalletResult<&Action> {
        self.ledger
            .get(index)
            .ok_or(WalletError::ActionNotFound(index))
    }

    pub fn is_confirmed(&self, index: u64, owner: &Principal) -> bool {
        self.tracker.is_confirmed(index, owner)
    }

    /// Owners currently confirming `index`, in registration order
    pub fn confirmations(&self, index: u64) -> WalletResult<Vec<Principal>> {
        self.get_action(index)?;
        Ok(self
            .registry
            .owners()
            .iter()
            .filter(|owner| self.tracker.is_confirmed(index, owner))
            .copied()
            .collect())
    }

    pub fn balance(&self) -> Value {
        self.balance
    }

    pub fn ledger(&self) -> &ActionLedger {
        &self.ledger
    }

    /// Number of tracked confirmations for `index`, straight from the tracker
    pub fn tracked_confirmations(&self, index: u64) -> usize {
        self.tracker.count(index)
    }

    // === Guards ===

    fn require_owner(&self, op: &'static str, caller: &Principal) -> WalletResult<()> {
        if self.registry.is_owner(caller) {
            Ok(())
        } else {
            Err(reject(op, WalletError::Unauthorized(*caller)))
        }
    }

    /// Existing, not-yet-executed action
    fn require_pending(&self, op: &'static str, index: u64) -> WalletResult<&Action> {
        let action = self
            .ledger
            .get(index)
            .ok_or_else(|| reject(op, WalletError::ActionNotFound(index)))?;

        if action.executed {
            return Err(reject(op, WalletError::AlreadyExecuted(index)));
        }

        Ok(action)
    }

    /// Flip the tracker entry and move the count with it
    fn bump(&mut self, index: u64, owner: Principal, confirm: bool) -> WalletResult<u32> {
        let action = self
            .ledger
            .get_mut(index)
            .ok_or(WalletError::ActionNotFound(index))?;

        if confirm {
            self.tracker.set(index, owner);
            action.confirmations += 1;
        } else {
            self.tracker.clear(index, &owner);
            action.confirmations -= 1;
        }

        debug_assert_eq!(action.confirmations as usize, self.tracker.count(index));
        Ok(action.confirmations)
    }
}

fn reject(op: &'static str, err: WalletError) -> WalletError {
    tracing::warn!(op, error = %err, "Wallet operation rejected");
    err
}
