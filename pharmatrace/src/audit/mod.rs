//! 監査ログシステム
//!
//! 出荷ステージの遷移をハッシュチェーン化した追記専用ログとして記録する

/// 監査ログの型定義
pub mod types;

/// SHA-256ハッシュチェーン（改ざん検知）
pub mod hash_chain;

/// インメモリ監査ログ本体
pub mod log;

pub use hash_chain::ChainVerificationResult;
pub use log::AuditLog;
pub use types::{AuditEntry, AuditPayload};
