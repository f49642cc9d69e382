//! End-to-end submission cycles through the flow controller.
//!
//! Timers are shortened via the config so the tests stay fast; the ordering
//! under test (banner before hand-off, hand-off before banner removal when
//! the delay is shorter) matches the deployed 1.5s/3s windows.

use foodie_flow::{
    Channel, FlowConfig, FlowController, FormInput, RenderOp, SubmitOutcome,
};

fn fast_config() -> FlowConfig {
    FlowConfig {
        banner_ms: 60,
        handoff_delay_ms: 20,
        ..Default::default()
    }
}

fn valid_order() -> FormInput {
    FormInput {
        name: "Jo".to_string(),
        phone: "+1 816-908-5572".to_string(),
        details: "Two large pizzas with extra cheese".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_valid_submission_runs_full_cycle() {
    let (controller, mut ops) = FlowController::new(fast_config());

    let outcome = controller.submit(&valid_order());
    let pending = match outcome {
        SubmitOutcome::Accepted(pending) => pending,
        SubmitOutcome::Rejected => panic!("valid submission was rejected"),
    };
    pending.settled().await;
    drop(controller);

    let mut seen = Vec::new();
    while let Some(op) = ops.recv().await {
        seen.push(op);
    }

    assert_eq!(seen[0], RenderOp::ClearAllErrors);
    assert!(matches!(seen[1], RenderOp::ShowBanner { .. }));

    // Hand-off delay (20ms) elapses before the banner window (60ms)
    let open_at = seen
        .iter()
        .position(|op| matches!(op, RenderOp::OpenLink { .. }))
        .expect("no OpenLink op emitted");
    let remove_at = seen
        .iter()
        .position(|op| matches!(op, RenderOp::RemoveBanner))
        .expect("no RemoveBanner op emitted");
    assert!(open_at < remove_at);

    if let RenderOp::OpenLink { url, .. } = &seen[open_at] {
        assert!(url.starts_with("https://wa.me/8169085572?text="));
        assert!(url.contains("Food%20Order"));
    }

    assert!(
        matches!(seen[open_at + 1], RenderOp::ResetForm { .. }),
        "form reset must follow the hand-off"
    );
}

#[tokio::test]
async fn test_invalid_submission_never_builds_a_link() {
    let (controller, mut ops) = FlowController::new(fast_config());

    let outcome = controller.submit(&FormInput::default());
    assert!(matches!(outcome, SubmitOutcome::Rejected));
    drop(controller);

    let mut saw_field_error = false;
    while let Some(op) = ops.recv().await {
        match op {
            RenderOp::ShowFieldError { .. } => saw_field_error = true,
            RenderOp::OpenLink { .. } | RenderOp::ShowBanner { .. } => {
                panic!("rejected submission must not advance: {op:?}")
            }
            _ => {}
        }
    }
    assert!(saw_field_error);
}

#[tokio::test]
async fn test_cancelled_handoff_is_suppressed() {
    let (controller, mut ops) = FlowController::new(fast_config());

    match controller.submit(&valid_order()) {
        SubmitOutcome::Accepted(pending) => {
            pending.cancel();
            pending.settled().await;
        }
        SubmitOutcome::Rejected => panic!("valid submission was rejected"),
    }
    drop(controller);

    while let Some(op) = ops.recv().await {
        assert!(
            !matches!(op, RenderOp::OpenLink { .. } | RenderOp::RemoveBanner),
            "cancelled timer still fired: {op:?}"
        );
    }
}

#[tokio::test]
async fn test_sms_channel_hands_off_via_sms_uri() {
    let config = FlowConfig {
        channel: Channel::Sms,
        ..fast_config()
    };
    let (controller, mut ops) = FlowController::new(config);

    match controller.submit(&valid_order()) {
        SubmitOutcome::Accepted(pending) => pending.settled().await,
        SubmitOutcome::Rejected => panic!("valid submission was rejected"),
    }
    drop(controller);

    let mut saw_sms_link = false;
    while let Some(op) = ops.recv().await {
        if let RenderOp::OpenLink { url, .. } = op {
            assert!(url.starts_with("sms:8169085572?body="));
            saw_sms_link = true;
        }
    }
    assert!(saw_sms_link);
}

#[tokio::test]
async fn test_editing_a_field_clears_its_error() {
    let (controller, mut ops) = FlowController::new(fast_config());

    controller.submit(&FormInput::default());
    controller.field_edited(foodie_flow::Field::Name);
    drop(controller);

    let mut seen = Vec::new();
    while let Some(op) = ops.recv().await {
        seen.push(op);
    }
    assert_eq!(
        seen.last(),
        Some(&RenderOp::ClearFieldError {
            field: foodie_flow::Field::Name
        })
    );
}
