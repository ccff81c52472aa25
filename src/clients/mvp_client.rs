use crate::catalog::preview_package;
use crate::checkout::{CheckoutGateway, CheckoutOutcome, CheckoutSettings, Notification};
use crate::clients::workflow_client::WorkflowClient;
use crate::framework::{FrameworkError, SessionClient};
use crate::model::{
    BuildStatus, IdeaUpdate, MvpEvent, MvpState, MvpStep, PaymentsUpdate, PreviewTier, PreviewUpdate,
};
use crate::mvp_workflow::{validate_idea, MvpError};
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

/// Client for driving MVP wizard sessions.
///
/// Each method dispatches one named transition and returns the resulting snapshot.
#[derive(Clone)]
pub struct MvpClient {
    inner: SessionClient<MvpState>,
    checkout: CheckoutSettings,
}

#[async_trait]
impl WorkflowClient<MvpState> for MvpClient {
    type Error = MvpError;

    fn inner(&self) -> &SessionClient<MvpState> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => MvpError::NotFound(id),
            FrameworkError::Rejected(reason) => MvpError::Rejected(reason),
            other => MvpError::HostCommunication(other.to_string()),
        }
    }
}

impl MvpClient {
    pub fn new(inner: SessionClient<MvpState>) -> Self {
        Self {
            inner,
            checkout: CheckoutSettings::default(),
        }
    }

    pub fn with_checkout(mut self, checkout: CheckoutSettings) -> Self {
        self.checkout = checkout;
        self
    }

    /// Starts a session with the default state.
    #[instrument(skip(self))]
    pub async fn start(&self) -> Result<String, MvpError> {
        debug!("Sending request");
        self.inner.start(()).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn dispatch(&self, id: String, event: MvpEvent) -> Result<MvpState, MvpError> {
        debug!(event_type = event.event_type(), "Sending request");
        self.inner.dispatch(id, event).await.map_err(Self::map_error)
    }

    pub async fn set_step(&self, id: String, step: MvpStep) -> Result<MvpState, MvpError> {
        self.dispatch(id, MvpEvent::SetStep(step)).await
    }

    pub async fn update_idea(&self, id: String, update: IdeaUpdate) -> Result<MvpState, MvpError> {
        self.dispatch(id, MvpEvent::UpdateIdea(update)).await
    }

    pub async fn set_preview(&self, id: String, update: PreviewUpdate) -> Result<MvpState, MvpError> {
        self.dispatch(id, MvpEvent::SetPreview(update)).await
    }

    pub async fn update_payments(&self, id: String, update: PaymentsUpdate) -> Result<MvpState, MvpError> {
        self.dispatch(id, MvpEvent::UpdatePayments(update)).await
    }

    pub async fn set_status(&self, id: String, status: BuildStatus) -> Result<MvpState, MvpError> {
        self.dispatch(id, MvpEvent::SetStatus(status)).await
    }

    pub async fn add_audience(&self, id: String, tag: impl Into<String>) -> Result<MvpState, MvpError> {
        self.dispatch(id, MvpEvent::AddAudience(tag.into())).await
    }

    pub async fn remove_audience(&self, id: String, tag: impl Into<String>) -> Result<MvpState, MvpError> {
        self.dispatch(id, MvpEvent::RemoveAudience(tag.into())).await
    }

    async fn require(&self, id: &str) -> Result<MvpState, MvpError> {
        self.snapshot(id.to_string())
            .await?
            .ok_or_else(|| MvpError::NotFound(id.to_string()))
    }

    /// Validates the idea and, only if it passes, moves the session to the preview step.
    #[instrument(skip(self))]
    pub async fn submit_idea(&self, id: String) -> Result<MvpState, MvpError> {
        let state = self.require(&id).await?;
        if let Err(validation) = validate_idea(&state.idea) {
            warn!(%id, errors = validation.errors.len(), "Idea rejected");
            return Err(MvpError::Validation(validation));
        }
        info!(%id, "Idea accepted");
        self.set_step(id, MvpStep::Preview).await
    }

    /// Selects a preview package, running checkout for paid tiers.
    ///
    /// Returns the notification to show. Checkout failures and dismissals are reported
    /// through the notification only; the session is left unchanged in that case.
    ///
    /// The unlock events are checked against the session before the gateway is touched, so
    /// an unknown session or a refused step change never reaches the payment dialog.
    #[instrument(skip(self, gateway))]
    pub async fn purchase_preview(
        &self,
        id: String,
        tier: PreviewTier,
        gateway: &dyn CheckoutGateway,
    ) -> Result<Notification, MvpError> {
        let package = preview_package(tier);

        if !tier.is_paid() {
            self.inner
                .dispatch_all(id, unlock_events(tier, None))
                .await
                .map_err(Self::map_error)?;
            return Ok(Notification::info("Demo Unlocked", "Your basic demo is now available."));
        }

        self.inner
            .check_all(id.clone(), unlock_events(tier, None))
            .await
            .map_err(Self::map_error)?;

        if let Err(e) = gateway.load().await {
            warn!(%id, error = %e, "Checkout unavailable");
            return Ok(Notification::error(
                "Payment Error",
                "Failed to load payment gateway. Please try again.",
            ));
        }

        let options = self.checkout.options(package.amount_minor(), package.title);
        match gateway.open(options).await {
            Ok(CheckoutOutcome::Paid { payment_id }) => {
                info!(%id, %payment_id, ?tier, "Payment succeeded");
                self.inner
                    .dispatch_all(id, unlock_events(tier, Some(payment_id)))
                    .await
                    .map_err(Self::map_error)?;
                Ok(Notification::info(
                    "Payment Successful!",
                    format!("Your {} has been unlocked.", package.title),
                ))
            }
            Ok(CheckoutOutcome::Dismissed) => {
                warn!(%id, "Checkout dismissed");
                Ok(Notification::error("Payment Cancelled", "Payment was cancelled by user."))
            }
            Err(e) => {
                warn!(%id, error = %e, "Checkout failed");
                Ok(Notification::error("Payment Error", e.to_string()))
            }
        }
    }
}

/// Events that unlock a preview and move the session on to tracking.
fn unlock_events(tier: PreviewTier, payment_id: Option<String>) -> Vec<MvpEvent> {
    let mut events = vec![MvpEvent::SetPreview(PreviewUpdate {
        tier: Some(tier),
        access_token: payment_id.map(Some),
    })];
    if tier.is_paid() {
        events.push(MvpEvent::UpdatePayments(PaymentsUpdate {
            prototype: Some(true),
            ..Default::default()
        }));
    }
    events.push(MvpEvent::SetStep(MvpStep::Tracking));
    events
}
