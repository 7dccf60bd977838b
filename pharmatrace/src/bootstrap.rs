//! サーバー初期化ロジック
//!
//! データベース接続、マイグレーション、監査ログのジェネシス生成、通知サービスなど
//! サーバー起動に必要なコンポーネントの初期化を担当する。

use crate::audit::AuditLog;
use crate::common::error::{TraceError, TraceResult};
use crate::config::{NotificationConfig, TransitionPolicy};
use crate::db::shipments::ShipmentStorage;
use crate::notify::{sendgrid::SendGridNotifier, Notifier};
use crate::templates::Templates;
use crate::workflow::WorkflowService;
use crate::AppState;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};

/// サーバー初期化を実行する
///
/// DB接続とマイグレーションの後、監査ログをジェネシスエントリで初期化した
/// `AppState` を返す。監査ログの初期化はプロセスにつき一度だけ行われる。
pub async fn initialize(policy: TransitionPolicy) -> TraceResult<AppState> {
    info!("pharmatrace v{}", env!("CARGO_PKG_VERSION"));

    let database_url = crate::config::get_database_url();
    let db_pool = init_db_pool(&database_url).await?;
    crate::db::migrations::run_migrations(&db_pool).await?;
    info!("Database ready at {}", database_url);

    // HTTPクライアント（接続プーリング有効）を作成
    let http_client = reqwest::Client::builder()
        .pool_idle_timeout(std::time::Duration::from_secs(60))
        .build()
        .map_err(|e| TraceError::Internal(format!("Failed to create HTTP client: {}", e)))?;

    let templates = Templates::load()?;
    let notification_config = NotificationConfig::from_env();
    let notifier =
        SendGridNotifier::with_client(notification_config, http_client, templates.clone());
    if !notifier.is_configured() {
        warn!("SendGrid API key not set; delivery receipts will be skipped");
    }

    info!("Status transition policy: {:?}", policy);
    build_state(db_pool, templates, Arc::new(notifier), policy).await
}

/// 接続済みプール・テンプレート・通知サービスから `AppState` を組み立てる
///
/// 監査ログはここで生成・初期化する（再起動ごとにジェネシスから作り直し）。
pub async fn build_state(
    db_pool: sqlx::SqlitePool,
    templates: Templates,
    notifier: Arc<dyn Notifier>,
    policy: TransitionPolicy,
) -> TraceResult<AppState> {
    let audit_log = AuditLog::new();
    audit_log.initialize().await;

    let store = Arc::new(ShipmentStorage::new(db_pool));
    let workflow = WorkflowService::new(store, audit_log.clone(), notifier, policy);

    Ok(AppState {
        audit_log,
        workflow,
        templates,
    })
}

/// SQLite接続プールを作成する
///
/// ファイルDBの場合は親ディレクトリとファイルを必要に応じて作成する。
pub async fn init_db_pool(database_url: &str) -> TraceResult<sqlx::SqlitePool> {
    // SQLiteファイルはディレクトリが存在しないと作成できないため、先に作成しておく
    if let Some(path) = database_url.strip_prefix("sqlite:") {
        // `sqlite::memory:` のような特殊指定はスキップ
        if !path.starts_with(':') {
            // `sqlite://` 形式に備えてスラッシュを除去し、クエリ部分を除外
            let normalized = path.trim_start_matches("//");
            let path_without_params = normalized.split('?').next().unwrap_or(normalized);
            let db_path = std::path::Path::new(path_without_params);
            if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| {
                    TraceError::Database(format!(
                        "Failed to create database directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }
    }

    let connect_options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| TraceError::Database(format!("Invalid database URL: {}", e)))?
        .create_if_missing(true);

    sqlx::SqlitePool::connect_with(connect_options)
        .await
        .map_err(|e| TraceError::Database(format!("Failed to connect to database: {}", e)))
}
