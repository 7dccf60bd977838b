//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! `TraceError`は`external_message()`と`status_code()`を提供し、
//! 内部詳細を漏らさないHTTPエラーレスポンスを生成できます。

use axum::http::StatusCode;
use thiserror::Error;

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// pharmatrace error type
#[derive(Debug, Error)]
pub enum TraceError {
    /// Common layer error
    #[error(transparent)]
    Common(#[from] CommonError),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Conflict error (e.g., duplicate drug_id)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// 監査ログが未初期化のまま追記された
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// 厳格モードで順序外のステータス遷移が要求された
    #[error("Invalid status transition for {drug_id}: {from} -> {to}")]
    InvalidTransition {
        /// 対象の薬剤ID
        drug_id: String,
        /// 現在のステータス
        from: String,
        /// 要求されたステータス
        to: String,
    },

    /// Template rendering error
    #[error("Template error: {0}")]
    Template(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TraceError {
    /// Returns a safe error message for external clients.
    ///
    /// Full details (drug ids, SQL errors) stay in the server logs via the
    /// `Display` implementation.
    pub fn external_message(&self) -> &'static str {
        match self {
            Self::Common(_) => "Request error",
            Self::NotFound(_) => "Not found",
            Self::Conflict(_) => "Resource conflict",
            Self::Database(_) => "Database error",
            Self::Precondition(_) => "Ledger not initialized",
            Self::InvalidTransition { .. } => "Invalid status transition",
            Self::Template(_) => "Rendering error",
            Self::Internal(_) => "Internal server error",
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Common(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Precondition(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidTransition { .. } => StatusCode::CONFLICT,
            Self::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<minijinja::Error> for TraceError {
    fn from(err: minijinja::Error) -> Self {
        Self::Template(err.to_string())
    }
}

/// Result type alias (pharmatrace)
pub type TraceResult<T> = Result<T, TraceError>;
