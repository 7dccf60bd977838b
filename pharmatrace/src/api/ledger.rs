//! 監査ログ（台帳）JSON API

use axum::{extract::State, Json};

use crate::audit::{AuditEntry, ChainVerificationResult};
use crate::AppState;

/// GET /api/ledger
pub async fn list_entries(State(state): State<AppState>) -> Json<Vec<AuditEntry>> {
    Json(state.audit_log.snapshot().await)
}

/// GET /api/ledger/verify
pub async fn verify(State(state): State<AppState>) -> Json<ChainVerificationResult> {
    let result = state.audit_log.verify().await;
    if !result.valid {
        tracing::warn!(
            tampered_index = ?result.tampered_index,
            message = ?result.message,
            "Audit chain verification failed"
        );
    }
    Json(result)
}
