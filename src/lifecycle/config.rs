use crate::checkout::CheckoutSettings;
use crate::framework::StepPolicy;
use serde::{Deserialize, Serialize};

/// Settings applied when a [`WorkflowSystem`](super::WorkflowSystem) is started.
///
/// Every field has a default, so a partial document deserializes cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Capacity of each host's request channel.
    pub buffer_size: usize,
    /// Transition policy enforced by the hosts.
    pub step_policy: StepPolicy,
    pub checkout: CheckoutSettings,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            step_policy: StepPolicy::Permissive,
            checkout: CheckoutSettings::default(),
        }
    }
}

impl WorkflowConfig {
    pub fn with_step_policy(mut self, step_policy: StepPolicy) -> Self {
        self.step_policy = step_policy;
        self
    }

    pub fn with_checkout(mut self, checkout: CheckoutSettings) -> Self {
        self.checkout = checkout;
        self
    }
}
