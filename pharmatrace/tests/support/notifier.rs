//! 呼び出しを記録するテスト用通知サービス

use std::sync::Mutex;

use async_trait::async_trait;
use pharmatrace::notify::{NotificationOutcome, Notifier};

/// 送信要求を記録し、指定した結果を返す
pub struct RecordingNotifier {
    outcome: NotificationOutcome,
    calls: Mutex<Vec<(String, String, String)>>,
}

impl RecordingNotifier {
    /// 常に`outcome`を返す通知サービス
    #[allow(dead_code)]
    pub fn returning(outcome: NotificationOutcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// 記録された(to, product_name, amount)
    #[allow(dead_code)]
    pub fn calls(&self) -> Vec<(String, String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send_receipt(&self, to: &str, product_name: &str, amount: &str) -> NotificationOutcome {
        self.calls.lock().unwrap().push((
            to.to_string(),
            product_name.to_string(),
            amount.to_string(),
        ));
        self.outcome.clone()
    }
}
