//! HTTPハンドラー
//!
//! ロール別のHTMLビュー、フォーム送信、台帳・出荷レコードのJSON API

pub mod error;
pub mod ledger;
pub mod pages;
pub mod shipments;

use crate::AppState;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

/// アプリケーションルーターを作成
pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Supplier
        .route("/", get(pages::supplier))
        .route("/supplier", get(pages::supplier))
        .route("/supplier/add", post(pages::add_drug))
        // Manufacturer
        .route("/manufacturer", get(pages::manufacturer))
        .route("/manufacturer/update", post(pages::manufacturer_update))
        // Distributor
        .route("/distributor", get(pages::distributor))
        .route("/distributor/update", post(pages::distributor_update))
        // Customer
        .route("/customer", get(pages::customer_dashboard))
        .route("/confirm_delivery", post(pages::confirm_delivery))
        .route("/progress_graph", get(pages::progress_graph))
        // JSON API
        .route("/api/health", get(health))
        .route("/api/version", get(version))
        .route("/api/ledger", get(ledger::list_entries))
        .route("/api/ledger/verify", get(ledger::verify))
        .route("/api/shipments", get(shipments::list_shipments))
        .route("/api/shipments/:drug_id", get(shipments::get_shipment))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /api/health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// GET /api/version
async fn version() -> Json<Value> {
    Json(json!({ "version": env!("CARGO_PKG_VERSION") }))
}
