use idealaunch_workflow::checkout::ScriptedGateway;
use idealaunch_workflow::clients::{MvpClient, WorkflowClient};
use idealaunch_workflow::framework::{mock::MockClient, FrameworkError, WorkflowEntity};
use idealaunch_workflow::model::{
    Idea, MvpEvent, MvpState, MvpStep, PaymentsUpdate, PreviewTier, PreviewUpdate,
};
use idealaunch_workflow::mvp_workflow::MvpError;

fn submittable() -> MvpState {
    MvpState {
        idea: Idea {
            name: "X".into(),
            description: "d".repeat(120),
            audience: vec!["B2B".into()],
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Client logic against a mocked host: the client must only dispatch the step change
/// after the snapshot passes validation.
#[tokio::test]
async fn test_submit_idea_dispatches_after_validation() {
    let mut mock = MockClient::<MvpState>::new();
    let state = submittable();
    mock.expect_snapshot("mvp_1".to_string()).return_ok(Some(state.clone()));
    mock.expect_dispatch("mvp_1".to_string())
        .return_ok(state.reduce(MvpEvent::SetStep(MvpStep::Preview)));

    let client = MvpClient::new(mock.client());
    let next = client.submit_idea("mvp_1".to_string()).await.unwrap();
    assert_eq!(next.step, MvpStep::Preview);

    assert_eq!(mock.dispatched(), vec![MvpEvent::SetStep(MvpStep::Preview)]);
    mock.verify();
}

#[tokio::test]
async fn test_invalid_idea_dispatches_nothing() {
    let mut mock = MockClient::<MvpState>::new();
    mock.expect_snapshot("mvp_1".to_string()).return_ok(Some(MvpState::default()));

    let client = MvpClient::new(mock.client());
    let err = client.submit_idea("mvp_1".to_string()).await.unwrap_err();
    assert!(matches!(err, MvpError::Validation(v) if v.errors.len() == 3));

    assert!(mock.dispatched().is_empty());
    mock.verify();
}

#[tokio::test]
async fn test_paid_checkout_dispatch_sequence() {
    let mut mock = MockClient::<MvpState>::new();
    mock.expect_check_all("mvp_7".to_string()).return_ok(MvpState::default());
    mock.expect_dispatch_all("mvp_7".to_string()).return_ok(MvpState::default());

    let gateway = ScriptedGateway::new();
    gateway.pay_with("pay_xyz");

    let client = MvpClient::new(mock.client());
    let notice = client
        .purchase_preview("mvp_7".to_string(), PreviewTier::Interactive, &gateway)
        .await
        .unwrap();
    assert_eq!(notice.description, "Your Interactive Prototype has been unlocked.");
    assert_eq!(gateway.opened()[0].amount, 4_900);
    assert_eq!(gateway.opened()[0].description, "Interactive Prototype");

    assert_eq!(
        mock.dispatched(),
        vec![
            MvpEvent::SetPreview(PreviewUpdate {
                tier: Some(PreviewTier::Interactive),
                access_token: Some(Some("pay_xyz".into())),
            }),
            MvpEvent::UpdatePayments(PaymentsUpdate { prototype: Some(true), ..Default::default() }),
            MvpEvent::SetStep(MvpStep::Tracking),
        ]
    );
    mock.verify();
}

#[tokio::test]
async fn test_host_errors_are_mapped() {
    let mut mock = MockClient::<MvpState>::new();
    mock.expect_snapshot("gone".to_string()).return_ok(None);
    mock.expect_dispatch("mvp_1".to_string())
        .return_err(FrameworkError::Rejected("step submit cannot move to delivery".into()));
    mock.expect_finish("mvp_1".to_string()).return_err(FrameworkError::HostClosed);

    let client = MvpClient::new(mock.client());

    let err = client.submit_idea("gone".to_string()).await.unwrap_err();
    assert_eq!(err, MvpError::NotFound("gone".into()));

    let err = client.set_step("mvp_1".to_string(), MvpStep::Delivery).await.unwrap_err();
    assert_eq!(err, MvpError::Rejected("step submit cannot move to delivery".into()));

    let err = client.finish("mvp_1".to_string()).await.unwrap_err();
    assert_eq!(err, MvpError::HostCommunication("Session host closed".into()));

    mock.verify();
}

#[tokio::test]
async fn test_unknown_session_is_never_charged() {
    let mut mock = MockClient::<MvpState>::new();
    mock.expect_check_all("mvp_404".to_string())
        .return_err(FrameworkError::NotFound("mvp_404".into()));

    let gateway = ScriptedGateway::new();
    let client = MvpClient::new(mock.client());
    let err = client
        .purchase_preview("mvp_404".to_string(), PreviewTier::Investor, &gateway)
        .await
        .unwrap_err();

    assert_eq!(err, MvpError::NotFound("mvp_404".into()));
    assert!(gateway.opened().is_empty());
    assert!(mock.dispatched().is_empty());
    mock.verify();
}

#[tokio::test]
async fn test_refused_unlock_is_never_charged() {
    let mut mock = MockClient::<MvpState>::new();
    mock.expect_check_all("mvp_1".to_string())
        .return_err(FrameworkError::Rejected("step submit cannot move to tracking".into()));

    let gateway = ScriptedGateway::new();
    let client = MvpClient::new(mock.client());
    let err = client
        .purchase_preview("mvp_1".to_string(), PreviewTier::Interactive, &gateway)
        .await
        .unwrap_err();

    assert_eq!(err, MvpError::Rejected("step submit cannot move to tracking".into()));
    assert!(gateway.opened().is_empty());
    mock.verify();
}

#[tokio::test]
async fn test_free_preview_is_one_batch() {
    let mut mock = MockClient::<MvpState>::new();
    mock.expect_dispatch_all("mvp_2".to_string()).return_ok(MvpState::default());

    let gateway = ScriptedGateway::new();
    let client = MvpClient::new(mock.client());
    let notice = client
        .purchase_preview("mvp_2".to_string(), PreviewTier::Free, &gateway)
        .await
        .unwrap();

    assert_eq!(notice.title, "Demo Unlocked");
    assert!(gateway.opened().is_empty());
    assert_eq!(
        mock.dispatched(),
        vec![
            MvpEvent::SetPreview(PreviewUpdate::tier(PreviewTier::Free)),
            MvpEvent::SetStep(MvpStep::Tracking),
        ]
    );
    mock.verify();
}
