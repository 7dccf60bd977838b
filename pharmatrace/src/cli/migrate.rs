//! migrate サブコマンド
//!
//! データベースのマイグレーションのみを実行して終了します。

use clap::Args;

use crate::common::error::TraceResult;

/// migrate サブコマンドの引数
#[derive(Args, Debug, Clone)]
pub struct MigrateArgs {
    /// Database URL (defaults to PHARMATRACE_DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,
}

/// マイグレーションを実行
pub async fn execute(args: &MigrateArgs) -> TraceResult<()> {
    let database_url = args
        .database_url
        .clone()
        .unwrap_or_else(crate::config::get_database_url);
    let pool = crate::bootstrap::init_db_pool(&database_url).await?;
    crate::db::migrations::run_migrations(&pool).await?;
    pool.close().await;
    tracing::info!("Migrations applied to {}", database_url);
    Ok(())
}
