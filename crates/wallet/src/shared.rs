//! Shared wallet handle for concurrent callers

use std::sync::Arc;

use multisig_core::{Payload, Principal, Value};
use tokio::sync::Mutex;

use crate::action::Action;
use crate::error::WalletResult;
use crate::wallet::{ExecutionReceipt, MultiSigWallet};

/// Cloneable handle that linearizes every operation on one wallet.
///
/// The lock is held across the gateway call in `execute`, so no other
/// transition can observe or interleave with a half-finished execution.
#[derive(Clone)]
pub struct SharedWallet {
    inner: Arc<Mutex<MultiSigWallet>>,
}

impl SharedWallet {
    pub fn new(wallet: MultiSigWallet) -> Self {
        Self {
            inner: Arc::new(Mutex::new(wallet)),
        }
    }

    pub async fn deposit(&self, sender: Principal, amount: Value) -> WalletResult<Value> {
        self.inner.lock().await.deposit(sender, amount)
    }

    pub async fn propose(
        &self,
        caller: Principal,
        target: Principal,
        value: Value,
        payload: Payload,
    ) -> WalletResult<u64> {
        self.inner
            .lock()
            .await
            .propose(caller, target, value, payload)
    }

    pub async fn confirm(&self, caller: Principal, index: u64) -> WalletResult<u32> {
        self.inner.lock().await.confirm(caller, index)
    }

    pub async fn revoke(&self, caller: Principal, index: u64) -> WalletResult<u32> {
        self.inner.lock().await.revoke(caller, index)
    }

    pub async fn execute(&self, caller: Principal, index: u64) -> WalletResult<ExecutionReceipt> {
        let mut wallet = self.inner.lock().await;
        wallet.execute(caller, index).await
    }

    pub async fn list_owners(&self) -> Vec<Principal> {
        self.inner.lock().await.list_owners().to_vec()
    }

    pub async fn is_owner(&self, principal: &Principal) -> bool {
        self.inner.lock().await.is_owner(principal)
    }

    pub async fn quorum(&self) -> u32 {
        self.inner.lock().await.quorum()
    }

    pub async fn action_count(&self) -> u64 {
        self.inner.lock().await.action_count()
    }

    pub async fn get_action(&self, index: u64) -> WalletResult<Action> {
        self.inner.lock().await.get_action(index).cloned()
    }

    pub async fn is_confirmed(&self, index: u64, owner: &Principal) -> bool {
        self.inner.lock().await.is_confirmed(index, owner)
    }

    /// Owners currently confirming `index`, read under the same lock as writers
    pub async fn confirmations(&self, index: u64) -> WalletResult<Vec<Principal>> {
        self.inner.lock().await.confirmations(index)
    }

    pub async fn balance(&self) -> Value {
        self.inner.lock().await.balance()
    }
}
