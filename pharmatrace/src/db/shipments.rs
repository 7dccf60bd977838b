//! 出荷レコードのストレージ層
//!
//! SQLiteベースの出荷レコード永続化

use crate::common::error::{TraceError, TraceResult};
use crate::db::traits::ShipmentRepository;
use crate::types::{ShipmentRecord, ShipmentStatus, ShipmentUpdate};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::warn;

/// 出荷レコードストレージ
#[derive(Clone)]
pub struct ShipmentStorage {
    pool: SqlitePool,
}

impl ShipmentStorage {
    /// 新しいストレージインスタンスを作成
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShipmentRepository for ShipmentStorage {
    async fn insert(&self, record: &ShipmentRecord) -> TraceResult<()> {
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO shipments (drug_id, drug_name, expiration_date, recipient, status, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.drug_id)
        .bind(&record.drug_name)
        .bind(&record.expiration_date)
        .bind(&record.recipient)
        .bind(record.status.as_str())
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") {
                TraceError::Conflict(format!("Shipment '{}' already exists", record.drug_id))
            } else {
                TraceError::Database(format!("Failed to insert shipment: {}", e))
            }
        })?;

        Ok(())
    }

    async fn find_all(&self) -> TraceResult<Vec<ShipmentRecord>> {
        let rows = sqlx::query_as::<_, ShipmentRow>(
            "SELECT drug_id, drug_name, expiration_date, recipient, status FROM shipments ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TraceError::Database(format!("Failed to list shipments: {}", e)))?;

        Ok(rows.into_iter().filter_map(ShipmentRow::into_record).collect())
    }

    async fn find_by_status(&self, status: ShipmentStatus) -> TraceResult<Vec<ShipmentRecord>> {
        let rows = sqlx::query_as::<_, ShipmentRow>(
            "SELECT drug_id, drug_name, expiration_date, recipient, status FROM shipments WHERE status = ? ORDER BY rowid",
        )
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TraceError::Database(format!("Failed to list shipments by status: {}", e)))?;

        Ok(rows.into_iter().filter_map(ShipmentRow::into_record).collect())
    }

    async fn find_by_id(&self, drug_id: &str) -> TraceResult<Option<ShipmentRecord>> {
        let row = sqlx::query_as::<_, ShipmentRow>(
            "SELECT drug_id, drug_name, expiration_date, recipient, status FROM shipments WHERE drug_id = ?",
        )
        .bind(drug_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TraceError::Database(format!("Failed to find shipment: {}", e)))?;

        Ok(row.and_then(ShipmentRow::into_record))
    }

    async fn update_fields(&self, drug_id: &str, update: &ShipmentUpdate) -> TraceResult<bool> {
        // NULLバインドは既存値を維持（COALESCE）
        let result = sqlx::query(
            "UPDATE shipments
             SET recipient = COALESCE(?, recipient),
                 status = COALESCE(?, status),
                 updated_at = ?
             WHERE drug_id = ?",
        )
        .bind(update.recipient.as_deref())
        .bind(update.status.map(|s| s.as_str()))
        .bind(Utc::now().to_rfc3339())
        .bind(drug_id)
        .execute(&self.pool)
        .await
        .map_err(|e| TraceError::Database(format!("Failed to update shipment: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

// SQLiteからの行取得用の内部型
#[derive(sqlx::FromRow)]
struct ShipmentRow {
    drug_id: String,
    drug_name: String,
    expiration_date: String,
    recipient: String,
    status: String,
}

impl ShipmentRow {
    fn into_record(self) -> Option<ShipmentRecord> {
        let status = match self.status.parse::<ShipmentStatus>() {
            Ok(status) => status,
            Err(e) => {
                warn!(drug_id = %self.drug_id, "Skipping shipment row: {}", e);
                return None;
            }
        };

        Some(ShipmentRecord {
            drug_id: self.drug_id,
            drug_name: self.drug_name,
            expiration_date: self.expiration_date,
            recipient: self.recipient,
            status,
        })
    }
}
