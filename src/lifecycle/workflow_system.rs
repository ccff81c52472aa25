use super::WorkflowConfig;
use crate::clients::{MvpClient, WebsiteClient};
use tracing::{error, info};

/// The runtime orchestrator that hosts every wizard kind.
///
/// `WorkflowSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the session hosts
/// - **Configuration**: handing the step policy and checkout settings to hosts and clients
///
/// # Example
///
/// ```ignore
/// let system = WorkflowSystem::new(WorkflowConfig::default());
///
/// let id = system.mvp_client.start().await?;
/// system.mvp_client.add_audience(id.clone(), "B2B").await?;
///
/// system.shutdown().await?;
/// ```
pub struct WorkflowSystem {
    /// Client for MVP idea sessions
    pub mvp_client: MvpClient,

    /// Client for website configuration sessions
    pub website_client: WebsiteClient,

    /// Task handles for the running hosts (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl WorkflowSystem {
    /// Spawns one host per wizard kind. Must be called inside a Tokio runtime.
    pub fn new(config: WorkflowConfig) -> Self {
        let (mvp_host, mvp_client) = crate::mvp_workflow::new(config.buffer_size);
        let (website_host, website_client) = crate::website_workflow::new(config.buffer_size);

        let mvp_handle = tokio::spawn(mvp_host.run(config.step_policy));
        let website_handle = tokio::spawn(website_host.run(config.step_policy));

        info!(policy = ?config.step_policy, "Workflow system started");

        Self {
            mvp_client: mvp_client.with_checkout(config.checkout),
            website_client,
            handles: vec![mvp_handle, website_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the clients closes the host channels; each host then drains and exits.
    /// Clones of the clients held elsewhere keep their host alive until they are dropped.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down workflow system...");

        drop(self.mvp_client);
        drop(self.website_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Session host task failed: {:?}", e);
                return Err(format!("Session host task failed: {:?}", e));
            }
        }

        info!("Workflow system stopped");
        Ok(())
    }
}
