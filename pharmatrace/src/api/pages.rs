//! ロール別HTMLビューとフォーム送信ハンドラー
//!
//! フォーム送信は処理後に各ビューへ303でリダイレクトする。

use axum::{
    extract::{Form, State},
    response::{Html, Redirect},
};
use minijinja::context;
use serde::Deserialize;

use super::error::AppError;
use crate::chart;
use crate::templates;
use crate::types::{DeliveryConfirmation, NewShipment, ShipmentStatus};
use crate::AppState;

/// 製造業者・流通業者の更新フォーム
#[derive(Debug, Deserialize)]
pub struct StageUpdateForm {
    /// 薬剤ID
    pub drug_id: String,
    /// 新しい受取人
    pub recipient: String,
}

/// GET / , GET /supplier
pub async fn supplier(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(state.templates.render(templates::SUPPLIER, context! {})?))
}

/// POST /supplier/add
pub async fn add_drug(
    State(state): State<AppState>,
    Form(form): Form<NewShipment>,
) -> Result<Redirect, AppError> {
    state.workflow.create_shipment(form).await?;
    Ok(Redirect::to("/supplier"))
}

/// GET /manufacturer
pub async fn manufacturer(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let drugs = state.workflow.list_all().await?;
    Ok(Html(
        state
            .templates
            .render(templates::MANUFACTURER, context! { drugs => drugs })?,
    ))
}

/// POST /manufacturer/update
pub async fn manufacturer_update(
    State(state): State<AppState>,
    Form(form): Form<StageUpdateForm>,
) -> Result<Redirect, AppError> {
    state
        .workflow
        .manufacturer_update(&form.drug_id, form.recipient)
        .await?;
    Ok(Redirect::to("/manufacturer"))
}

/// GET /distributor
///
/// 製造業者の処理が済んだレコードのみ表示する。
pub async fn distributor(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let drugs = state
        .workflow
        .list_by_status(ShipmentStatus::ProcessedByManufacturer)
        .await?;
    Ok(Html(
        state
            .templates
            .render(templates::DISTRIBUTOR, context! { drugs => drugs })?,
    ))
}

/// POST /distributor/update
pub async fn distributor_update(
    State(state): State<AppState>,
    Form(form): Form<StageUpdateForm>,
) -> Result<Redirect, AppError> {
    state
        .workflow
        .distributor_update(&form.drug_id, form.recipient)
        .await?;
    Ok(Redirect::to("/distributor"))
}

/// GET /customer
pub async fn customer_dashboard(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let blockchain = state.audit_log.snapshot().await;
    Ok(Html(
        state
            .templates
            .render(templates::CUSTOMER, context! { blockchain => blockchain })?,
    ))
}

/// POST /confirm_delivery
pub async fn confirm_delivery(
    State(state): State<AppState>,
    Form(form): Form<DeliveryConfirmation>,
) -> Result<Redirect, AppError> {
    state.workflow.confirm_delivery(form).await?;
    Ok(Redirect::to("/customer"))
}

/// GET /progress_graph
pub async fn progress_graph(State(state): State<AppState>) -> Html<String> {
    let entries = state.audit_log.snapshot().await;
    Html(chart::progress_chart_img_tag(&entries))
}
