//! SendGrid v3 Mail Send API クライアント

use async_trait::async_trait;
use serde_json::json;
use tracing::{error, info, warn};

use super::{NotificationOutcome, Notifier, RECEIPT_SUBJECT};
use crate::common::error::TraceResult;
use crate::config::NotificationConfig;
use crate::templates::Templates;

/// SendGrid経由でレシートを送信する通知サービス
#[derive(Clone)]
pub struct SendGridNotifier {
    config: NotificationConfig,
    client: reqwest::Client,
    templates: Templates,
}

impl SendGridNotifier {
    /// 設定から通知サービスを作成
    pub fn new(config: NotificationConfig, templates: Templates) -> Self {
        Self::with_client(config, reqwest::Client::new(), templates)
    }

    /// 共有HTTPクライアントを使って作成
    pub fn with_client(
        config: NotificationConfig,
        client: reqwest::Client,
        templates: Templates,
    ) -> Self {
        Self {
            config,
            client,
            templates,
        }
    }

    /// API keyが設定されているか
    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!("{}/v3/mail/send", self.config.api_base.trim_end_matches('/'))
    }

    fn build_payload(
        &self,
        to: &str,
        product_name: &str,
        amount: &str,
    ) -> TraceResult<serde_json::Value> {
        let body = self.templates.render_receipt(product_name, amount)?;
        Ok(json!({
            "personalizations": [{ "to": [{ "email": to }] }],
            "from": { "email": self.config.from_address },
            "subject": RECEIPT_SUBJECT,
            "content": [{
                "type": "text/html",
                "value": body,
            }],
        }))
    }
}

#[async_trait]
impl Notifier for SendGridNotifier {
    async fn send_receipt(
        &self,
        to: &str,
        product_name: &str,
        amount: &str,
    ) -> NotificationOutcome {
        let Some(api_key) = self.config.api_key.as_deref() else {
            warn!("SendGrid API key not set; skipping receipt email");
            return NotificationOutcome::Skipped {
                reason: "SendGrid API key not configured".to_string(),
            };
        };

        let payload = match self.build_payload(to, product_name, amount) {
            Ok(payload) => payload,
            Err(e) => {
                error!("Failed to render receipt email: {}", e);
                return NotificationOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .timeout(self.config.timeout)
            .json(&payload)
            .send()
            .await;

        match response {
            Ok(resp) if resp.status().is_success() => {
                let status_code = resp.status().as_u16();
                info!(status_code, to = %to, "Receipt email sent");
                NotificationOutcome::Sent { status_code }
            }
            Ok(resp) => {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                warn!(status = %status, body = %body, "SendGrid rejected receipt email");
                NotificationOutcome::Failed {
                    reason: format!("SendGrid responded with {}", status),
                }
            }
            Err(e) => {
                error!("Error sending receipt email: {}", e);
                NotificationOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
