//! 型定義モジュール
//!
//! ドメインエンティティの型定義を提供

/// 出荷レコード関連の型定義
pub mod shipment;

pub use shipment::{
    DeliveryConfirmation, NewShipment, ShipmentRecord, ShipmentStatus, ShipmentUpdate,
};
