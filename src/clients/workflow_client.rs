use crate::framework::{FrameworkError, SessionClient, WorkflowEntity};
use async_trait::async_trait;

/// Trait for wizard-specific clients to inherit the session operations every wizard shares.
///
/// Implementors supply the inner [`SessionClient`] and an error mapping; `snapshot` and
/// `finish` come for free.
#[async_trait]
pub trait WorkflowClient<T: WorkflowEntity>: Send + Sync {
    /// The wizard-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic SessionClient.
    fn inner(&self) -> &SessionClient<T>;

    /// Map framework errors to the wizard-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch the current state of a session.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot(id).await.map_err(Self::map_error)
    }

    /// Discard a session, e.g. when the user leaves the flow.
    #[tracing::instrument(skip(self))]
    async fn finish(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().finish(id).await.map_err(Self::map_error)
    }
}
