use super::{CheckoutError, CheckoutGateway, CheckoutOptions, CheckoutOutcome};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// A gateway that replays queued results instead of talking to a vendor.
///
/// With an empty queue every checkout succeeds with a generated payment id. Every
/// `open` call is recorded so tests can check the amount and description sent.
#[derive(Debug, Default)]
pub struct ScriptedGateway {
    load_failure: Option<String>,
    outcomes: Mutex<VecDeque<Result<CheckoutOutcome, CheckoutError>>>,
    opened: Mutex<Vec<CheckoutOptions>>,
}

fn lock<V>(mutex: &Mutex<V>) -> MutexGuard<'_, V> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// A gateway whose script never loads.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            load_failure: Some(reason.into()),
            ..Self::default()
        }
    }

    pub fn push_outcome(&self, outcome: Result<CheckoutOutcome, CheckoutError>) -> &Self {
        lock(&self.outcomes).push_back(outcome);
        self
    }

    pub fn pay_with(&self, payment_id: impl Into<String>) -> &Self {
        self.push_outcome(Ok(CheckoutOutcome::Paid { payment_id: payment_id.into() }))
    }

    pub fn dismiss(&self) -> &Self {
        self.push_outcome(Ok(CheckoutOutcome::Dismissed))
    }

    /// Options passed to `open`, oldest first.
    pub fn opened(&self) -> Vec<CheckoutOptions> {
        lock(&self.opened).clone()
    }
}

#[async_trait]
impl CheckoutGateway for ScriptedGateway {
    async fn load(&self) -> Result<(), CheckoutError> {
        match &self.load_failure {
            Some(reason) => Err(CheckoutError::ScriptLoad(reason.clone())),
            None => Ok(()),
        }
    }

    async fn open(&self, options: CheckoutOptions) -> Result<CheckoutOutcome, CheckoutError> {
        debug!(?options, "Checkout opened");
        let mut opened = lock(&self.opened);
        opened.push(options);
        let fallback_id = format!("pay_{}", opened.len());
        drop(opened);

        lock(&self.outcomes)
            .pop_front()
            .unwrap_or(Ok(CheckoutOutcome::Paid { payment_id: fallback_id }))
    }
}
