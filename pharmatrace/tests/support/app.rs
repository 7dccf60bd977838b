//! テスト用AppStateとルーターの構築

use std::sync::Arc;

use axum::Router;
use pharmatrace::config::{NotificationConfig, TransitionPolicy};
use pharmatrace::notify::{sendgrid::SendGridNotifier, Notifier};
use pharmatrace::templates::Templates;
use pharmatrace::{api, bootstrap, AppState};

/// インメモリDBでAppStateを構築する
pub async fn build_state(policy: TransitionPolicy, notifier: Arc<dyn Notifier>) -> AppState {
    let db_pool = bootstrap::init_db_pool("sqlite::memory:")
        .await
        .expect("Failed to create test database");
    pharmatrace::db::migrations::run_migrations(&db_pool)
        .await
        .expect("Failed to run migrations");

    bootstrap::build_state(db_pool, test_templates(), notifier, policy)
        .await
        .expect("Failed to build AppState")
}

/// 埋め込みテンプレートを読み込む
pub fn test_templates() -> Templates {
    Templates::load().expect("Failed to load templates")
}

/// 通知なし・Permissiveでテスト用アプリを作成する（.oneshot()スタイルのテスト用）
pub async fn create_test_app() -> (Router, AppState) {
    create_test_app_with(
        TransitionPolicy::Permissive,
        Arc::new(SendGridNotifier::new(
            NotificationConfig::disabled(),
            test_templates(),
        )),
    )
    .await
}

/// ポリシーと通知サービスを指定してテスト用アプリを作成する
pub async fn create_test_app_with(
    policy: TransitionPolicy,
    notifier: Arc<dyn Notifier>,
) -> (Router, AppState) {
    let state = build_state(policy, notifier).await;
    (api::create_app(state.clone()), state)
}
