//! pharmatrace Server
//!
//! 医薬品の出荷をサプライヤー・製造業者・流通業者・顧客の各ステージで追跡し、
//! 各ステータス遷移をハッシュチェーン化した監査ログに記録するWebアプリケーション

#![warn(missing_docs)]

/// 共通型定義（エラー型）
pub mod common;

/// HTTPハンドラー（HTMLビュー・JSON API）
pub mod api;

/// 監査ログ（ハッシュチェーン）
pub mod audit;

/// サーバー初期化
pub mod bootstrap;

/// 進捗チャート描画
pub mod chart;

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// データベースアクセス
pub mod db;

/// ロギング初期化ユーティリティ
pub mod logging;

/// 受領通知（レシートメール）
pub mod notify;

/// axumサーバー起動
pub mod server;

/// HTMLテンプレート
pub mod templates;

/// 型定義
pub mod types;

/// 出荷ワークフロー
pub mod workflow;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// インメモリ監査ログ（ハンドル）
    pub audit_log: audit::AuditLog,
    /// ステージ遷移サービス
    pub workflow: workflow::WorkflowService,
    /// HTMLテンプレート
    pub templates: templates::Templates,
}
