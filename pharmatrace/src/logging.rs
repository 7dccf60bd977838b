//! ロギング初期化
//!
//! 標準出力へのfmtレイヤーに加え、`PHARMATRACE_LOG_DIR` が設定されている場合は
//! 日次ローテーションのファイル出力を追加する。

use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

use crate::config::{get_env, get_env_or};

const LOG_FILE_PREFIX: &str = "pharmatrace";
const MAX_LOG_FILES: usize = 7;

/// ログレベル（EnvFilterディレクティブ）を取得
///
/// `PHARMATRACE_LOG_LEVEL`、未設定なら `info`。
pub fn log_level() -> String {
    get_env_or("PHARMATRACE_LOG_LEVEL", "info")
}

/// ログ出力先ディレクトリを取得（未設定ならファイル出力なし）
pub fn log_dir() -> Option<PathBuf> {
    get_env("PHARMATRACE_LOG_DIR")
        .filter(|dir| !dir.trim().is_empty())
        .map(PathBuf::from)
}

fn build_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive)
        .or_else(|_| EnvFilter::try_new("info"))
        .context("Failed to create env filter")
}

fn file_appender(dir: &Path) -> Result<RollingFileAppender> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .max_log_files(MAX_LOG_FILES)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .build(dir)
        .context("Failed to create log file appender")
}

/// グローバルsubscriberを初期化する
///
/// プロセス起動時に一度だけ呼ぶこと。二重初期化はエラーを返す。
pub fn init() -> Result<()> {
    let env_filter = build_filter(&log_level())?;

    let stdout_layer = fmt::layer().with_target(true);

    let file_layer = match log_dir() {
        Some(dir) => Some(
            fmt::layer()
                .with_target(true)
                .with_line_number(true)
                .with_ansi(false)
                .with_writer(file_appender(&dir)?),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}
