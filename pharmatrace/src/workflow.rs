//! 出荷ワークフロー
//!
//! 各ステージ操作は「ストア更新 → 監査ログ追記」の2段階で実行する。
//! 両者はトランザクションで結合されていない。ストア更新が失敗した場合は
//! 何も追記しないが、追記が失敗した場合でもストア更新は残る。

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::audit::{AuditEntry, AuditLog, AuditPayload};
use crate::common::error::{TraceError, TraceResult};
use crate::config::TransitionPolicy;
use crate::db::traits::ShipmentRepository;
use crate::notify::{NotificationOutcome, Notifier};
use crate::types::{
    DeliveryConfirmation, NewShipment, ShipmentRecord, ShipmentStatus, ShipmentUpdate,
};

/// 受領確認の結果
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryReceipt {
    /// 追記された監査ログエントリ
    pub entry: AuditEntry,
    /// レシート送信結果
    pub notification: NotificationOutcome,
}

/// ステージ遷移を担うサービス
#[derive(Clone)]
pub struct WorkflowService {
    store: Arc<dyn ShipmentRepository>,
    audit_log: AuditLog,
    notifier: Arc<dyn Notifier>,
    policy: TransitionPolicy,
}

impl WorkflowService {
    /// 新しいワークフローサービスを作成
    pub fn new(
        store: Arc<dyn ShipmentRepository>,
        audit_log: AuditLog,
        notifier: Arc<dyn Notifier>,
        policy: TransitionPolicy,
    ) -> Self {
        Self {
            store,
            audit_log,
            notifier,
            policy,
        }
    }

    /// 適用中の遷移ポリシー
    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    /// サプライヤー: 出荷レコードを登録し、レコード全体を監査ログに記録
    pub async fn create_shipment(&self, new: NewShipment) -> TraceResult<AuditEntry> {
        let record = new.into_record();
        self.store.insert(&record).await?;
        info!(drug_id = %record.drug_id, "Shipment created");

        self.audit_log.append(AuditPayload::Shipment(record)).await
    }

    /// 製造業者: 受取人を更新し`Processed by Manufacturer`へ遷移
    pub async fn manufacturer_update(
        &self,
        drug_id: &str,
        recipient: String,
    ) -> TraceResult<AuditEntry> {
        self.transition(
            drug_id,
            Some(recipient),
            ShipmentStatus::ProcessedByManufacturer,
            format!("Manufacturer updated {}", drug_id),
        )
        .await
    }

    /// 流通業者: 受取人を更新し`Dispatched by Distributor`へ遷移
    pub async fn distributor_update(
        &self,
        drug_id: &str,
        recipient: String,
    ) -> TraceResult<AuditEntry> {
        self.transition(
            drug_id,
            Some(recipient),
            ShipmentStatus::DispatchedByDistributor,
            format!("Distributor updated {}", drug_id),
        )
        .await
    }

    /// 顧客: `Delivered`へ遷移し、レシートを送信
    ///
    /// 通知の失敗はエラーにしない。
    pub async fn confirm_delivery(
        &self,
        confirmation: DeliveryConfirmation,
    ) -> TraceResult<DeliveryReceipt> {
        let entry = self
            .transition(
                &confirmation.drug_id,
                None,
                ShipmentStatus::Delivered,
                format!("Delivery confirmed {}", confirmation.drug_id),
            )
            .await?;

        let notification = self
            .notifier
            .send_receipt(
                &confirmation.user_email,
                &confirmation.drug_name,
                &confirmation.amount,
            )
            .await;
        match &notification {
            NotificationOutcome::Sent { status_code } => {
                info!(drug_id = %confirmation.drug_id, status_code, "Receipt delivered")
            }
            NotificationOutcome::Skipped { reason } => {
                warn!(drug_id = %confirmation.drug_id, "Receipt skipped: {}", reason)
            }
            NotificationOutcome::Failed { reason } => {
                warn!(drug_id = %confirmation.drug_id, "Receipt failed: {}", reason)
            }
        }

        Ok(DeliveryReceipt {
            entry,
            notification,
        })
    }

    /// 全レコードを登録順に取得
    pub async fn list_all(&self) -> TraceResult<Vec<ShipmentRecord>> {
        self.store.find_all().await
    }

    /// ステータスで絞り込んで取得
    pub async fn list_by_status(&self, status: ShipmentStatus) -> TraceResult<Vec<ShipmentRecord>> {
        self.store.find_by_status(status).await
    }

    /// drug_idで取得
    pub async fn find(&self, drug_id: &str) -> TraceResult<Option<ShipmentRecord>> {
        self.store.find_by_id(drug_id).await
    }

    async fn transition(
        &self,
        drug_id: &str,
        recipient: Option<String>,
        target: ShipmentStatus,
        description: String,
    ) -> TraceResult<AuditEntry> {
        if self.policy.is_strict() {
            self.check_transition(drug_id, target).await?;
        }

        let update = ShipmentUpdate {
            recipient,
            status: Some(target),
        };
        let matched = self.store.update_fields(drug_id, &update).await?;
        if matched {
            info!(drug_id = %drug_id, status = %target, "Shipment status updated");
        } else {
            warn!(drug_id = %drug_id, status = %target, "No shipment matched update");
        }

        self.audit_log.append(description).await
    }

    async fn check_transition(&self, drug_id: &str, target: ShipmentStatus) -> TraceResult<()> {
        let current = self
            .store
            .find_by_id(drug_id)
            .await?
            .ok_or_else(|| TraceError::NotFound(format!("Shipment '{}' not found", drug_id)))?;

        if !current.status.can_transition_to(target) {
            warn!(
                drug_id = %drug_id,
                from = %current.status,
                to = %target,
                "Rejected out-of-order status transition"
            );
            return Err(TraceError::InvalidTransition {
                drug_id: drug_id.to_string(),
                from: current.status.to_string(),
                to: target.to_string(),
            });
        }
        Ok(())
    }
}
