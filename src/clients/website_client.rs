use crate::catalog::website_template;
use crate::clients::workflow_client::WorkflowClient;
use crate::framework::{FrameworkError, SessionClient};
use crate::model::{
    WebsiteDetailsUpdate, WebsiteEvent, WebsiteState, WebsiteStep, WebsiteSubmission,
};
use crate::website_workflow::{step_requirements, WebsiteError};
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

/// Client for driving website configuration sessions.
#[derive(Clone)]
pub struct WebsiteClient {
    inner: SessionClient<WebsiteState>,
}

#[async_trait]
impl WorkflowClient<WebsiteState> for WebsiteClient {
    type Error = WebsiteError;

    fn inner(&self) -> &SessionClient<WebsiteState> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => WebsiteError::NotFound(id),
            FrameworkError::Rejected(reason) => WebsiteError::Rejected(reason),
            other => WebsiteError::HostCommunication(other.to_string()),
        }
    }
}

impl WebsiteClient {
    pub fn new(inner: SessionClient<WebsiteState>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn start(&self, niche: Option<String>) -> Result<String, WebsiteError> {
        debug!("Sending request");
        self.inner.start(niche).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn dispatch(&self, id: String, event: WebsiteEvent) -> Result<WebsiteState, WebsiteError> {
        debug!("Sending request");
        self.inner.dispatch(id, event).await.map_err(Self::map_error)
    }

    pub async fn update_details(
        &self,
        id: String,
        update: WebsiteDetailsUpdate,
    ) -> Result<WebsiteState, WebsiteError> {
        self.dispatch(id, WebsiteEvent::UpdateDetails(update)).await
    }

    pub async fn select_niche(&self, id: String, niche: impl Into<String>) -> Result<WebsiteState, WebsiteError> {
        self.dispatch(id, WebsiteEvent::SelectNiche(niche.into())).await
    }

    pub async fn select_template(
        &self,
        id: String,
        template: impl Into<String>,
    ) -> Result<WebsiteState, WebsiteError> {
        self.dispatch(id, WebsiteEvent::SelectTemplate(template.into())).await
    }

    pub async fn toggle_feature(&self, id: String, feature: impl Into<String>) -> Result<WebsiteState, WebsiteError> {
        self.dispatch(id, WebsiteEvent::ToggleFeature(feature.into())).await
    }

    async fn require(&self, id: &str) -> Result<WebsiteState, WebsiteError> {
        self.snapshot(id.to_string())
            .await?
            .ok_or_else(|| WebsiteError::NotFound(id.to_string()))
    }

    /// Moves to the next step once the current one is complete.
    #[instrument(skip(self))]
    pub async fn next(&self, id: String) -> Result<WebsiteState, WebsiteError> {
        let state = self.require(&id).await?;
        let Some(next) = state.step.next() else {
            return Err(WebsiteError::AtFinalStep);
        };
        if let Err(missing) = step_requirements(&state) {
            warn!(%id, step = %state.step, ?missing, "Step incomplete");
            return Err(WebsiteError::Incomplete(missing));
        }
        self.dispatch(id, WebsiteEvent::SetStep(next)).await
    }

    /// Moves one step back; stays put on the first step.
    #[instrument(skip(self))]
    pub async fn back(&self, id: String) -> Result<WebsiteState, WebsiteError> {
        let state = self.require(&id).await?;
        match state.step.previous() {
            Some(previous) => self.dispatch(id, WebsiteEvent::SetStep(previous)).await,
            None => Ok(state),
        }
    }

    /// Builds the final summary. Business info and a template are required.
    #[instrument(skip(self))]
    pub async fn submit(&self, id: String) -> Result<WebsiteSubmission, WebsiteError> {
        let state = self.require(&id).await?;

        for step in [WebsiteStep::BusinessInfo, WebsiteStep::Template] {
            let probe = WebsiteState { step, ..state.clone() };
            step_requirements(&probe).map_err(WebsiteError::Incomplete)?;
        }

        let template = state
            .template
            .as_deref()
            .and_then(website_template)
            .ok_or_else(|| WebsiteError::Incomplete(vec!["Select a template to continue"]))?;

        info!(%id, template = template.id, features = state.features.len(), "Website submitted");
        Ok(WebsiteSubmission {
            niche: state.niche,
            template_id: template.id.to_string(),
            template_title: template.title.to_string(),
            price: template.price,
            features: state.features,
            details: state.details,
        })
    }
}
