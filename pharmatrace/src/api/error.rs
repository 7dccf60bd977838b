//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use axum::{response::IntoResponse, Json};
use serde_json::json;

use crate::common::error::{CommonError, TraceError};

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub TraceError);

impl From<TraceError> for AppError {
    fn from(err: TraceError) -> Self {
        AppError(err)
    }
}

impl From<CommonError> for AppError {
    fn from(err: CommonError) -> Self {
        AppError(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Use external_message() to avoid exposing drug ids or SQL details.
        // Full error details are logged separately for debugging
        let status = self.0.status_code();
        if status.is_server_error() {
            tracing::error!(status = %status, "Request failed: {}", self.0);
        } else {
            tracing::warn!(status = %status, "Request rejected: {}", self.0);
        }

        let payload = json!({
            "error": self.0.external_message()
        });

        (status, Json(payload)).into_response()
    }
}
