//! Execution gateway - the boundary that performs an approved call
//!
//! The wallet never moves value itself. Once an action has quorum the wallet
//! hands a `Call` to its gateway and commits only if the gateway reports
//! success. A gateway must be all-or-nothing: either the effect happened and
//! `Ok` is returned, or nothing happened and `Err` is returned.

use async_trait::async_trait;
use multisig_core::{Payload, Principal, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::RwLock;
use thiserror::Error;

/// The effect requested by an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    pub target: Principal,
    pub value: Value,
    pub payload: Payload,
}

/// Errors reported by a gateway
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("Call rejected by target: {0}")]
    Rejected(String),

    #[error("Gateway unavailable: {0}")]
    Unavailable(String),
}

/// Performs approved calls.
///
/// Implementations receive no handle to the wallet, so they cannot re-enter
/// it while a call is outstanding.
#[async_trait]
pub trait ExecutionGateway: Send + Sync {
    /// Gateway name for logging
    fn name(&self) -> &str;

    /// Perform `call`, returning the target's return data on success
    async fn perform(&self, call: &Call) -> Result<Vec<u8>, GatewayError>;
}

/// In-process gateway that records every successful call.
///
/// Targets can be marked as failing to exercise the rollback path.
#[derive(Default)]
pub struct RecordingGateway {
    performed: RwLock<Vec<Call>>,
    failing_targets: RwLock<HashSet<Principal>>,
    return_data: Vec<u8>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `data` from every successful call
    pub fn with_return_data(mut self, data: Vec<u8>) -> Self {
        self.return_data = data;
        self
    }

    /// Make calls to `target` fail until cleared
    pub fn fail_target(&self, target: Principal) {
        if let Ok(mut failing) = self.failing_targets.write() {
            failing.insert(target);
        }
    }

    pub fn clear_failure(&self, target: &Principal) {
        if let Ok(mut failing) = self.failing_targets.write() {
            failing.remove(target);
        }
    }

    /// Calls performed so far, in order
    pub fn calls(&self) -> Vec<Call> {
        self.performed
            .read()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn is_failing(&self, target: &Principal) -> bool {
        self.failing_targets
            .read()
            .map(|failing| failing.contains(target))
            .unwrap_or(false)
    }
}

#[async_trait]
impl ExecutionGateway for RecordingGateway {
    fn name(&self) -> &str {
        "recording"
    }

    async fn perform(&self, call: &Call) -> Result<Vec<u8>, GatewayError> {
        if self.is_failing(&call.target) {
            return Err(GatewayError::Rejected(format!(
                "target {} reverted",
                call.target
            )));
        }

        self.performed
            .write()
            .map_err(|_| GatewayError::Unavailable("call log poisoned".to_string()))?
            .push(call.clone());

        Ok(self.return_data.clone())
    }
}

/// Gateway that refuses every call
pub struct RejectingGateway {
    reason: String,
}

impl RejectingGateway {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl ExecutionGateway for RejectingGateway {
    fn name(&self) -> &str {
        "rejecting"
    }

    async fn perform(&self, _call: &Call) -> Result<Vec<u8>, GatewayError> {
        Err(GatewayError::Rejected(self.reason.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call_to(n: u8) -> Call {
        Call {
            target: Principal::from_bytes([n; 20]),
            value: Value::new(10),
            payload: Payload::empty(),
        }
    }

    #[tokio::test]
    async fn test_recording_gateway_records_calls() {
        let gateway = RecordingGateway::new().with_return_data(vec![0x01]);

        let data = gateway.perform(&call_to(1)).await.unwrap();

        assert_eq!(data, vec![0x01]);
        assert_eq!(gateway.calls(), vec![call_to(1)]);
    }

    #[tokio::test]
    async fn test_failing_target_not_recorded() {
        let gateway = RecordingGateway::new();
        gateway.fail_target(call_to(2).target);

        let result = gateway.perform(&call_to(2)).await;
        assert!(matches!(result, Err(GatewayError::Rejected(_))));
        assert!(gateway.calls().is_empty());

        gateway.clear_failure(&call_to(2).target);
        assert!(gateway.perform(&call_to(2)).await.is_ok());
        assert_eq!(gateway.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_rejecting_gateway() {
        let gateway = RejectingGateway::new("paused");
        let result = gateway.perform(&call_to(1)).await;
        assert_eq!(result, Err(GatewayError::Rejected("paused".to_string())));
    }
}
