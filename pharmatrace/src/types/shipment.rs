//! 出荷レコードの型定義
//!
//! サプライヤーが作成し、製造業者・流通業者・配送確認の各ステージで
//! 更新される薬剤出荷レコード。

use crate::common::error::CommonError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 出荷ステータス
///
/// 表示文字列がそのままストアと監査ログに保存される。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ShipmentStatus {
    /// サプライヤーが登録した直後
    #[serde(rename = "Created")]
    Created,
    /// 製造業者が処理済み
    #[serde(rename = "Processed by Manufacturer")]
    ProcessedByManufacturer,
    /// 流通業者が発送済み
    #[serde(rename = "Dispatched by Distributor")]
    DispatchedByDistributor,
    /// 顧客が受領を確認
    #[serde(rename = "Delivered")]
    Delivered,
}

impl ShipmentStatus {
    /// 全ステータス（遷移順）
    pub const ALL: [ShipmentStatus; 4] = [
        Self::Created,
        Self::ProcessedByManufacturer,
        Self::DispatchedByDistributor,
        Self::Delivered,
    ];

    /// ShipmentStatusを文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::ProcessedByManufacturer => "Processed by Manufacturer",
            Self::DispatchedByDistributor => "Dispatched by Distributor",
            Self::Delivered => "Delivered",
        }
    }

    /// 線形ステートマシン上の直前のステータス
    pub fn predecessor(&self) -> Option<Self> {
        match self {
            Self::Created => None,
            Self::ProcessedByManufacturer => Some(Self::Created),
            Self::DispatchedByDistributor => Some(Self::ProcessedByManufacturer),
            Self::Delivered => Some(Self::DispatchedByDistributor),
        }
    }

    /// `self`から`next`への遷移が順序通りか
    pub fn can_transition_to(&self, next: Self) -> bool {
        next.predecessor() == Some(*self)
    }
}

impl FromStr for ShipmentStatus {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CommonError::Validation(format!("Unknown shipment status: '{}'", s)))
    }
}

impl std::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 出荷レコード
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShipmentRecord {
    /// 薬剤ID（一意キー）
    pub drug_id: String,
    /// 薬剤名
    pub drug_name: String,
    /// 有効期限（フォーム入力のまま保持）
    pub expiration_date: String,
    /// 受取人
    pub recipient: String,
    /// 現在のステータス
    pub status: ShipmentStatus,
}

/// サプライヤーの登録フォーム入力
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewShipment {
    /// 薬剤ID
    pub drug_id: String,
    /// 薬剤名
    pub drug_name: String,
    /// 有効期限
    pub expiration_date: String,
    /// 受取人
    pub recipient: String,
}

impl NewShipment {
    /// `Created`ステータスのレコードに変換
    pub fn into_record(self) -> ShipmentRecord {
        ShipmentRecord {
            drug_id: self.drug_id,
            drug_name: self.drug_name,
            expiration_date: self.expiration_date,
            recipient: self.recipient,
            status: ShipmentStatus::Created,
        }
    }
}

/// フィールド単位の更新内容（Noneは変更しない）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShipmentUpdate {
    /// 新しい受取人
    pub recipient: Option<String>,
    /// 新しいステータス
    pub status: Option<ShipmentStatus>,
}

/// 顧客の受領確認フォーム入力
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryConfirmation {
    /// 薬剤ID
    pub drug_id: String,
    /// 領収書の送信先
    pub user_email: String,
    /// 薬剤名（領収書表示用）
    pub drug_name: String,
    /// 金額（フォーム入力のまま）
    pub amount: String,
}
