//! Contract Test: GET /api/ledger, GET /api/ledger/verify

use axum::http::StatusCode;

use crate::support::{
    app::create_test_app,
    http::{get, post_form},
};

#[tokio::test]
async fn test_ledger_starts_with_genesis() {
    let (app, _) = create_test_app().await;

    let response = get(&app, "/api/ledger").await;
    assert_eq!(response.status, StatusCode::OK);

    let entries = response.json();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["index"], 0);
    assert_eq!(entries[0]["data"], "Genesis Block");
    assert_eq!(entries[0]["previous_hash"], "0");
    assert_eq!(entries[0]["hash"].as_str().unwrap().len(), 16);
}

#[tokio::test]
async fn test_ledger_entries_are_chained() {
    let (app, _) = create_test_app().await;
    post_form(
        &app,
        "/supplier/add",
        &[
            ("drug_id", "D1"),
            ("drug_name", "Aspirin"),
            ("expiration_date", "2026-01-01"),
            ("recipient", "R"),
        ],
    )
    .await;
    post_form(
        &app,
        "/manufacturer/update",
        &[("drug_id", "D1"), ("recipient", "M")],
    )
    .await;

    let entries = get(&app, "/api/ledger").await.json();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    for i in 1..entries.len() {
        assert_eq!(entries[i]["index"], i as u64);
        assert_eq!(entries[i]["previous_hash"], entries[i - 1]["hash"]);
    }
}

#[tokio::test]
async fn test_verify_reports_valid_chain() {
    let (app, state) = create_test_app().await;
    state.audit_log.append("Manufacturer updated X").await.unwrap();

    let response = get(&app, "/api/ledger/verify").await;
    assert_eq!(response.status, StatusCode::OK);

    let body = response.json();
    assert_eq!(body["valid"], true);
    assert_eq!(body["entries_checked"], 2);
    assert!(body["tampered_index"].is_null());
}
