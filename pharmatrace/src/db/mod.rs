//! データベースアクセス層
//!
//! SQLiteベースのデータ永続化

/// データベースマイグレーション
pub mod migrations;

/// 出荷レコード管理
pub mod shipments;

/// Repository traitパターン
pub mod traits;
