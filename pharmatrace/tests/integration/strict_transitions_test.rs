//! Integration Test: 厳格モードでの順序外遷移の拒否

use std::sync::Arc;

use axum::http::StatusCode;
use pharmatrace::config::TransitionPolicy;
use pharmatrace::notify::NotificationOutcome;
use pharmatrace::types::ShipmentStatus;

use crate::support::{
    app::create_test_app_with,
    http::post_form,
    notifier::RecordingNotifier,
};

#[tokio::test]
async fn test_strict_mode_rejects_skipping_a_stage() {
    let notifier = Arc::new(RecordingNotifier::returning(NotificationOutcome::Sent {
        status_code: 202,
    }));
    let (app, state) = create_test_app_with(TransitionPolicy::Strict, notifier.clone()).await;

    post_form(
        &app,
        "/supplier/add",
        &[
            ("drug_id", "D7"),
            ("drug_name", "Heparin"),
            ("expiration_date", "2026-09-09"),
            ("recipient", "Depot"),
        ],
    )
    .await;
    let before = state.audit_log.len().await;

    let response = post_form(
        &app,
        "/distributor/update",
        &[("drug_id", "D7"), ("recipient", "Clinic")],
    )
    .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.json()["error"], "Invalid status transition");

    let response = post_form(
        &app,
        "/confirm_delivery",
        &[
            ("drug_id", "D7"),
            ("user_email", "x%40y.z"),
            ("drug_name", "Heparin"),
            ("amount", "1"),
        ],
    )
    .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    assert_eq!(state.audit_log.len().await, before);
    assert!(notifier.calls().is_empty());
    assert_eq!(
        state.workflow.find("D7").await.unwrap().unwrap().status,
        ShipmentStatus::Created
    );
}

#[tokio::test]
async fn test_strict_mode_unknown_drug_is_404() {
    let notifier = Arc::new(RecordingNotifier::returning(NotificationOutcome::Sent {
        status_code: 202,
    }));
    let (app, state) = create_test_app_with(TransitionPolicy::Strict, notifier).await;

    let response = post_form(
        &app,
        "/manufacturer/update",
        &[("drug_id", "ghost"), ("recipient", "M")],
    )
    .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(state.audit_log.len().await, 1);
}
