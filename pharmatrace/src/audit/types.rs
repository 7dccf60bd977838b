//! 監査ログの型定義

use crate::types::ShipmentRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 監査ログに追記するペイロード
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditPayload {
    /// ジェネシスエントリ（固定文字列）
    Genesis,
    /// 新規作成時のレコードスナップショット
    Shipment(ShipmentRecord),
    /// 更新内容の説明文（例: "Manufacturer updated D1"）
    Event(String),
}

impl std::fmt::Display for AuditPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Genesis => f.write_str(super::hash_chain::GENESIS_DATA),
            Self::Shipment(record) => {
                // ShipmentRecordは文字列フィールドのみなので直列化は失敗しない
                let json = serde_json::to_string(record).map_err(|_| std::fmt::Error)?;
                f.write_str(&json)
            }
            Self::Event(description) => f.write_str(description),
        }
    }
}

impl From<ShipmentRecord> for AuditPayload {
    fn from(record: ShipmentRecord) -> Self {
        Self::Shipment(record)
    }
}

impl From<String> for AuditPayload {
    fn from(description: String) -> Self {
        Self::Event(description)
    }
}

impl From<&str> for AuditPayload {
    fn from(description: &str) -> Self {
        Self::Event(description.to_string())
    }
}

/// 監査ログエントリ（チェーンの1ブロック）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// 連番（ジェネシスが0）
    pub index: u64,
    /// 作成時刻（ハッシュ入力と同じ正規文字列で直列化）
    #[serde(with = "timestamp_format")]
    pub timestamp: DateTime<Utc>,
    /// ペイロードの文字列表現
    pub data: String,
    /// 直前エントリのハッシュ値（ジェネシスは"0"）
    pub previous_hash: String,
    /// このエントリのハッシュ値（16桁hex）
    pub hash: String,
}

mod timestamp_format {
    use crate::audit::hash_chain::canonical_timestamp;
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&canonical_timestamp(timestamp))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|timestamp| timestamp.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
