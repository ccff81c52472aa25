//! Demo run: one MVP session from idea to paid preview, one website session to submission.

use idealaunch_workflow::checkout::ScriptedGateway;
use idealaunch_workflow::clients::WorkflowClient;
use idealaunch_workflow::lifecycle::{setup_tracing, WorkflowConfig, WorkflowSystem};
use idealaunch_workflow::model::{IdeaUpdate, Platform, PreviewTier, WebsiteDetailsUpdate};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting workflow demo");
    let system = WorkflowSystem::new(WorkflowConfig::default());

    // --- MVP wizard ---
    let span = tracing::info_span!("mvp_session");
    async {
        let mvp = &system.mvp_client;
        let id = mvp.start().await.map_err(|e| e.to_string())?;

        mvp.update_idea(
            id.clone(),
            IdeaUpdate {
                name: Some("Lumen".to_string()),
                description: Some(
                    "A habit tracker for remote teams that turns daily stand-ups into short async \
                     check-ins and surfaces blockers before they stall a sprint."
                        .to_string(),
                ),
                platform: Some(Platform::Cross),
                ..Default::default()
            },
        )
        .await
        .map_err(|e| e.to_string())?;

        // The first attempt fails: no audience yet.
        if let Err(e) = mvp.submit_idea(id.clone()).await {
            warn!(error = %e, "Submission refused");
        }

        mvp.add_audience(id.clone(), "Startups").await.map_err(|e| e.to_string())?;
        let state = mvp.submit_idea(id.clone()).await.map_err(|e| e.to_string())?;
        info!(step = %state.step, "Idea submitted");

        let gateway = ScriptedGateway::new();
        let notice = mvp
            .purchase_preview(id.clone(), PreviewTier::Interactive, &gateway)
            .await
            .map_err(|e| e.to_string())?;
        info!(title = %notice.title, description = %notice.description, "Notification");

        if let Some(state) = mvp.snapshot(id.clone()).await.map_err(|e| e.to_string())? {
            info!(step = %state.step, prototype_paid = state.payments.prototype, "MVP session state");
        }
        mvp.finish(id).await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    // --- Website wizard ---
    let span = tracing::info_span!("website_session");
    async {
        let web = &system.website_client;
        let id = web.start(Some("booking".to_string())).await.map_err(|e| e.to_string())?;

        web.update_details(
            id.clone(),
            WebsiteDetailsUpdate {
                business_name: Some("Harbor Dental".to_string()),
                industry: Some("healthcare".to_string()),
                description: Some("Family dentistry on the waterfront".to_string()),
                ..Default::default()
            },
        )
        .await
        .map_err(|e| e.to_string())?;
        web.next(id.clone()).await.map_err(|e| e.to_string())?;
        web.select_template(id.clone(), "booking-1").await.map_err(|e| e.to_string())?;
        web.next(id.clone()).await.map_err(|e| e.to_string())?;
        web.toggle_feature(id.clone(), "Online Booking/Appointments")
            .await
            .map_err(|e| e.to_string())?;
        web.next(id.clone()).await.map_err(|e| e.to_string())?;

        let submission = web.submit(id.clone()).await.map_err(|e| e.to_string())?;
        info!(template = %submission.template_title, price = submission.price, "Website submitted");
        web.finish(id).await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;
    info!("Demo completed successfully");
    Ok(())
}
