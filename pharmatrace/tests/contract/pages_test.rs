//! Contract Test: ロール別HTMLビューとフォーム送信

use axum::http::StatusCode;
use pharmatrace::types::ShipmentStatus;

use crate::support::{
    app::create_test_app,
    http::{get, post_form},
};

const D1_FORM: &[(&str, &str)] = &[
    ("drug_id", "D1"),
    ("drug_name", "Paracetamol"),
    ("expiration_date", "2026-06-30"),
    ("recipient", "Acme+Labs"),
];

#[tokio::test]
async fn test_root_and_supplier_render_intake_form() {
    let (app, _) = create_test_app().await;

    for uri in ["/", "/supplier"] {
        let response = get(&app, uri).await;
        assert_eq!(response.status, StatusCode::OK, "{}", uri);
        assert!(response.body.contains("action=\"/supplier/add\""));
        assert!(response.body.contains("name=\"expiration_date\""));
    }
}

#[tokio::test]
async fn test_supplier_add_redirects_and_records_creation() {
    let (app, state) = create_test_app().await;

    let response = post_form(&app, "/supplier/add", D1_FORM).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/supplier"));

    let record = state.workflow.find("D1").await.unwrap().unwrap();
    assert_eq!(record.status, ShipmentStatus::Created);
    assert_eq!(record.recipient, "Acme Labs");

    let entries = state.audit_log.snapshot().await;
    assert_eq!(entries.len(), 2);
    assert!(entries[1].data.contains("\"drug_name\":\"Paracetamol\""));
}

#[tokio::test]
async fn test_supplier_add_missing_field_is_rejected() {
    let (app, state) = create_test_app().await;

    let response = post_form(&app, "/supplier/add", &[("drug_id", "D1")]).await;
    assert!(response.status.is_client_error());
    assert_eq!(state.audit_log.len().await, 1);
}

#[tokio::test]
async fn test_duplicate_drug_id_is_conflict() {
    let (app, state) = create_test_app().await;

    post_form(&app, "/supplier/add", D1_FORM).await;
    let response = post_form(&app, "/supplier/add", D1_FORM).await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(state.audit_log.len().await, 2);
}

#[tokio::test]
async fn test_manufacturer_view_lists_all_and_update_redirects() {
    let (app, state) = create_test_app().await;
    post_form(&app, "/supplier/add", D1_FORM).await;

    let page = get(&app, "/manufacturer").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Paracetamol"));
    assert!(page.body.contains("Created"));

    let response = post_form(
        &app,
        "/manufacturer/update",
        &[("drug_id", "D1"), ("recipient", "Central+Pharma")],
    )
    .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/manufacturer"));

    let record = state.workflow.find("D1").await.unwrap().unwrap();
    assert_eq!(record.status, ShipmentStatus::ProcessedByManufacturer);
    assert_eq!(record.recipient, "Central Pharma");
    assert_eq!(
        state.audit_log.tail().await.unwrap().data,
        "Manufacturer updated D1"
    );
}

#[tokio::test]
async fn test_distributor_view_shows_only_processed() {
    let (app, _) = create_test_app().await;
    post_form(&app, "/supplier/add", D1_FORM).await;
    post_form(
        &app,
        "/supplier/add",
        &[
            ("drug_id", "D2"),
            ("drug_name", "Ibuprofen"),
            ("expiration_date", "2027-01-01"),
            ("recipient", "Acme"),
        ],
    )
    .await;
    post_form(
        &app,
        "/manufacturer/update",
        &[("drug_id", "D2"), ("recipient", "Central")],
    )
    .await;

    let page = get(&app, "/distributor").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Ibuprofen"));
    assert!(!page.body.contains("Paracetamol"));

    let response = post_form(
        &app,
        "/distributor/update",
        &[("drug_id", "D2"), ("recipient", "Clinic")],
    )
    .await;
    assert_eq!(response.location.as_deref(), Some("/distributor"));

    let page = get(&app, "/distributor").await;
    assert!(!page.body.contains("Ibuprofen"));
}

#[tokio::test]
async fn test_customer_dashboard_lists_every_hash() {
    let (app, state) = create_test_app().await;
    post_form(&app, "/supplier/add", D1_FORM).await;
    post_form(
        &app,
        "/manufacturer/update",
        &[("drug_id", "D1"), ("recipient", "M")],
    )
    .await;

    let page = get(&app, "/customer").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Genesis Block"));
    assert!(page.body.contains("action=\"/confirm_delivery\""));
    for entry in state.audit_log.snapshot().await {
        assert!(page.body.contains(&entry.hash), "missing {}", entry.hash);
    }
}

#[tokio::test]
async fn test_confirm_delivery_redirects_without_mail_key() {
    let (app, state) = create_test_app().await;
    post_form(&app, "/supplier/add", D1_FORM).await;

    let response = post_form(
        &app,
        "/confirm_delivery",
        &[
            ("drug_id", "D1"),
            ("user_email", "buyer%40example.com"),
            ("drug_name", "Paracetamol"),
            ("amount", "12.50"),
        ],
    )
    .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/customer"));
    assert_eq!(
        state.workflow.find("D1").await.unwrap().unwrap().status,
        ShipmentStatus::Delivered
    );
    assert_eq!(
        state.audit_log.tail().await.unwrap().data,
        "Delivery confirmed D1"
    );
}

#[tokio::test]
async fn test_progress_graph_is_inline_image() {
    let (app, _) = create_test_app().await;

    let response = get(&app, "/progress_graph").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .body
        .starts_with("<img src=\"data:image/svg+xml;base64,"));
}
