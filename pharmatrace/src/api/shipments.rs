//! 出荷レコードJSON API

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::error::AppError;
use crate::common::error::TraceError;
use crate::types::{ShipmentRecord, ShipmentStatus};
use crate::AppState;

/// 一覧のクエリパラメータ
#[derive(Debug, Default, Deserialize)]
pub struct ShipmentQuery {
    /// ステータス表示文字列（例: `Processed by Manufacturer`）
    pub status: Option<String>,
}

/// GET /api/shipments
pub async fn list_shipments(
    State(state): State<AppState>,
    Query(query): Query<ShipmentQuery>,
) -> Result<Json<Vec<ShipmentRecord>>, AppError> {
    let records = match query.status.as_deref() {
        Some(raw) => {
            let status: ShipmentStatus = raw.parse()?;
            state.workflow.list_by_status(status).await?
        }
        None => state.workflow.list_all().await?,
    };
    Ok(Json(records))
}

/// GET /api/shipments/:drug_id
pub async fn get_shipment(
    State(state): State<AppState>,
    Path(drug_id): Path<String>,
) -> Result<Json<ShipmentRecord>, AppError> {
    let record = state
        .workflow
        .find(&drug_id)
        .await?
        .ok_or_else(|| TraceError::NotFound(format!("Shipment '{}' not found", drug_id)))?;
    Ok(Json(record))
}
