//! 受領通知（レシートメール）
//!
//! 通知の失敗はワークフローに伝播させない。送信結果は
//! `NotificationOutcome` として返し、呼び出し側はログに残すだけにする。

/// SendGrid v3 API経由の通知実装
pub mod sendgrid;

use async_trait::async_trait;
use serde::Serialize;

/// レシートメールの件名
pub const RECEIPT_SUBJECT: &str = "Your Product Receipt";

/// 通知の送信結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum NotificationOutcome {
    /// 送信成功（プロバイダーのHTTPステータス）
    Sent {
        /// HTTP status code returned by the provider
        status_code: u16,
    },
    /// 設定不足により送信しなかった
    Skipped {
        /// 理由
        reason: String,
    },
    /// 送信に失敗した（通信エラー・非2xx応答）
    Failed {
        /// 理由
        reason: String,
    },
}

/// 通知サービス
#[async_trait]
pub trait Notifier: Send + Sync {
    /// 配送完了のレシートを送る
    ///
    /// エラーは返さない。失敗は`NotificationOutcome::Failed`で表す。
    async fn send_receipt(&self, to: &str, product_name: &str, amount: &str)
        -> NotificationOutcome;
}
