//! Repository traitパターン定義
//!
//! DB操作を抽象化し、ワークフロー層をストア実装から切り離すためのtrait。

use async_trait::async_trait;

use crate::common::error::TraceResult;
use crate::types::{ShipmentRecord, ShipmentStatus, ShipmentUpdate};

// ---------------------------------------------------------------------------
// ShipmentRepository
// ---------------------------------------------------------------------------

/// 出荷レコード操作のRepository trait
///
/// 単一レコードの更新はアトミックであること。
#[async_trait]
pub trait ShipmentRepository: Send + Sync {
    /// レコードを登録（drug_id重複は`TraceError::Conflict`）
    async fn insert(&self, record: &ShipmentRecord) -> TraceResult<()>;
    /// 全レコードを登録順に取得
    async fn find_all(&self) -> TraceResult<Vec<ShipmentRecord>>;
    /// ステータスでフィルタして取得
    async fn find_by_status(&self, status: ShipmentStatus) -> TraceResult<Vec<ShipmentRecord>>;
    /// drug_idで取得
    async fn find_by_id(&self, drug_id: &str) -> TraceResult<Option<ShipmentRecord>>;
    /// 指定フィールドを更新し、該当レコードがあったかを返す
    async fn update_fields(&self, drug_id: &str, update: &ShipmentUpdate) -> TraceResult<bool>;
}
