//! serve サブコマンド
//!
//! Webサーバーを起動します。

use clap::Args;

/// serve サブコマンドの引数
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Listen port
    #[arg(short, long, default_value = "5010", env = "PHARMATRACE_PORT")]
    pub port: u16,

    /// Bind address
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "PHARMATRACE_HOST")]
    pub host: String,

    /// Reject out-of-order status transitions (overrides PHARMATRACE_ENFORCE_TRANSITIONS)
    #[arg(long, default_value_t = false)]
    pub enforce_transitions: bool,
}

impl ServeArgs {
    /// サーバー設定に変換
    pub fn server_config(&self) -> crate::config::ServerConfig {
        crate::config::ServerConfig {
            host: self.host.clone(),
            port: self.port,
        }
    }

    /// 遷移ポリシーを決定（フラグ優先、なければ環境変数）
    pub fn transition_policy(&self) -> crate::config::TransitionPolicy {
        if self.enforce_transitions {
            crate::config::TransitionPolicy::Strict
        } else {
            crate::config::TransitionPolicy::from_env()
        }
    }
}
