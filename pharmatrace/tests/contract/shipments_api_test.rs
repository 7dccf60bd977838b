//! Contract Test: GET /api/shipments, GET /api/shipments/:drug_id

use axum::http::StatusCode;
use pharmatrace::types::NewShipment;

use crate::support::{app::create_test_app, http::get};

fn shipment(drug_id: &str) -> NewShipment {
    NewShipment {
        drug_id: drug_id.to_string(),
        drug_name: "Metformin".to_string(),
        expiration_date: "2028-03-01".to_string(),
        recipient: "Warehouse 4".to_string(),
    }
}

#[tokio::test]
async fn test_list_and_filter_by_status() {
    let (app, state) = create_test_app().await;
    state.workflow.create_shipment(shipment("D1")).await.unwrap();
    state.workflow.create_shipment(shipment("D2")).await.unwrap();
    state
        .workflow
        .manufacturer_update("D2", "Plant".to_string())
        .await
        .unwrap();

    let all = get(&app, "/api/shipments").await.json();
    assert_eq!(all.as_array().unwrap().len(), 2);

    let processed = get(
        &app,
        "/api/shipments?status=Processed%20by%20Manufacturer",
    )
    .await
    .json();
    let processed = processed.as_array().unwrap();
    assert_eq!(processed.len(), 1);
    assert_eq!(processed[0]["drug_id"], "D2");
    assert_eq!(processed[0]["status"], "Processed by Manufacturer");
}

#[tokio::test]
async fn test_unknown_status_filter_is_400() {
    let (app, _) = create_test_app().await;

    let response = get(&app, "/api/shipments?status=Lost").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.json()["error"].is_string());
}

#[tokio::test]
async fn test_get_single_shipment() {
    let (app, state) = create_test_app().await;
    state.workflow.create_shipment(shipment("D1")).await.unwrap();

    let response = get(&app, "/api/shipments/D1").await;
    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["drug_name"], "Metformin");
    assert_eq!(body["status"], "Created");
}

#[tokio::test]
async fn test_missing_shipment_is_404() {
    let (app, _) = create_test_app().await;

    let response = get(&app, "/api/shipments/ghost").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["error"], "Not found");
}
