use idealaunch_workflow::clients::WorkflowClient;
use idealaunch_workflow::framework::StepPolicy;
use idealaunch_workflow::lifecycle::{WorkflowConfig, WorkflowSystem};
use idealaunch_workflow::model::{WebsiteDetailsUpdate, WebsiteEvent, WebsiteStep};
use idealaunch_workflow::website_workflow::WebsiteError;

fn business_details() -> WebsiteDetailsUpdate {
    WebsiteDetailsUpdate {
        business_name: Some("Harbor Dental".into()),
        industry: Some("healthcare".into()),
        description: Some("Family dentistry on the waterfront".into()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_website_wizard_end_to_end() {
    let system = WorkflowSystem::new(WorkflowConfig::default());
    let web = &system.website_client;

    let id = web.start(Some("ecommerce".into())).await.unwrap();
    assert_eq!(id, "website_1");

    let err = web.next(id.clone()).await.unwrap_err();
    let WebsiteError::Incomplete(missing) = err else {
        panic!("expected incomplete step, got {err:?}");
    };
    assert_eq!(missing.len(), 3);

    web.update_details(id.clone(), business_details()).await.unwrap();
    let state = web.next(id.clone()).await.unwrap();
    assert_eq!(state.step, WebsiteStep::Template);

    assert!(matches!(web.next(id.clone()).await, Err(WebsiteError::Incomplete(_))));
    let err = web.select_template(id.clone(), "portfolio-1").await.unwrap_err();
    assert!(matches!(err, WebsiteError::Rejected(_)), "template from another niche");

    web.select_template(id.clone(), "ecom-2").await.unwrap();
    web.next(id.clone()).await.unwrap();
    web.toggle_feature(id.clone(), "Payment Gateway Integration").await.unwrap();
    web.toggle_feature(id.clone(), "Customer Reviews").await.unwrap();
    web.toggle_feature(id.clone(), "Customer Reviews").await.unwrap();

    let state = web.next(id.clone()).await.unwrap();
    assert_eq!(state.step, WebsiteStep::Launch);
    assert_eq!(web.next(id.clone()).await.unwrap_err(), WebsiteError::AtFinalStep);

    web.update_details(
        id.clone(),
        WebsiteDetailsUpdate { domain: Some("harbordental.example".into()), ..Default::default() },
    )
    .await
    .unwrap();

    let submission = web.submit(id.clone()).await.unwrap();
    assert_eq!(submission.template_id, "ecom-2");
    assert_eq!(submission.template_title, "Fashion Boutique");
    assert_eq!(submission.price, 129);
    assert_eq!(submission.features, vec!["Payment Gateway Integration".to_string()]);
    assert_eq!(submission.details.domain, "harbordental.example");
    assert_eq!(submission.details.business_name, "Harbor Dental");

    web.finish(id).await.unwrap();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_back_navigation() {
    let system = WorkflowSystem::new(WorkflowConfig::default());
    let web = &system.website_client;
    let id = web.start(None).await.unwrap();

    let state = web.back(id.clone()).await.unwrap();
    assert_eq!(state.step, WebsiteStep::BusinessInfo);

    web.update_details(id.clone(), business_details()).await.unwrap();
    web.next(id.clone()).await.unwrap();
    let state = web.back(id.clone()).await.unwrap();
    assert_eq!(state.step, WebsiteStep::BusinessInfo);
    assert_eq!(state.details.business_name, "Harbor Dental");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_submit_requires_template_and_unknown_niche_fails() {
    let system = WorkflowSystem::new(WorkflowConfig::default());
    let web = &system.website_client;

    let id = web.start(None).await.unwrap();
    web.update_details(id.clone(), business_details()).await.unwrap();
    let err = web.submit(id.clone()).await.unwrap_err();
    assert_eq!(err, WebsiteError::Incomplete(vec!["Select a template to continue"]));

    assert!(web.start(Some("bakery".into())).await.is_err());
    assert!(matches!(
        web.next("website_404".into()).await,
        Err(WebsiteError::NotFound(_))
    ));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_forward_only_keeps_next_and_back() {
    let config = WorkflowConfig::default().with_step_policy(StepPolicy::ForwardOnly);
    let system = WorkflowSystem::new(config);
    let web = &system.website_client;
    let id = web.start(Some("booking".into())).await.unwrap();

    web.update_details(id.clone(), business_details()).await.unwrap();
    assert_eq!(web.next(id.clone()).await.unwrap().step, WebsiteStep::Template);
    assert_eq!(web.back(id.clone()).await.unwrap().step, WebsiteStep::BusinessInfo);

    web.next(id.clone()).await.unwrap();
    web.select_template(id.clone(), "booking-1").await.unwrap();
    assert_eq!(web.next(id.clone()).await.unwrap().step, WebsiteStep::Features);

    let err = web.toggle_feature(id.clone(), "Teleporter").await.unwrap_err();
    assert_eq!(err, WebsiteError::Rejected("Unknown feature: Teleporter".into()));

    let err = web.dispatch(id.clone(), WebsiteEvent::SetStep(WebsiteStep::BusinessInfo)).await.unwrap_err();
    assert!(matches!(err, WebsiteError::Rejected(_)), "two steps back is still a rewind");

    let state = web.back(id).await.unwrap();
    assert_eq!(state.step, WebsiteStep::Template);
    assert!(state.features.is_empty());

    system.shutdown().await.unwrap();
}
