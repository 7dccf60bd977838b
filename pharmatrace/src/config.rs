//! Configuration management via environment variables
//!
//! Provides helper functions for reading `PHARMATRACE_*` environment variables.
//! `SENDGRID_API_KEY` is still accepted as a deprecated alias of
//! `PHARMATRACE_SENDGRID_API_KEY`, with a warning log.

use std::time::Duration;

/// Get an environment variable with fallback to a deprecated name
///
/// If the new variable name is set, returns its value.
/// If only the old (deprecated) variable name is set, returns its value
/// and logs a deprecation warning.
///
/// # Arguments
/// * `new_name` - The new environment variable name (preferred)
/// * `old_name` - The deprecated environment variable name (fallback)
///
/// # Returns
/// * `Some(value)` - The environment variable value
/// * `None` - Neither variable is set
///
/// # Example
/// ```
/// use pharmatrace::config::get_env_with_fallback;
///
/// let key = get_env_with_fallback("PHARMATRACE_SENDGRID_API_KEY", "SENDGRID_API_KEY");
/// ```
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Get an environment variable
pub fn get_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Get an environment variable with default value
pub fn get_env_or(name: &str, default: &str) -> String {
    get_env(name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable, parsing to a specific type
///
/// Returns `default` if unset or parsing fails.
pub fn get_env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    get_env(name).and_then(|s| s.parse().ok()).unwrap_or(default)
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// デフォルトのデータベースURL
pub const DEFAULT_DATABASE_URL: &str = "sqlite://pharmatrace.db";

/// デフォルトの送信元メールアドレス
pub const DEFAULT_MAIL_FROM: &str = "noreply@pharmatrace.local";

/// デフォルトのSendGrid APIベースURL
pub const DEFAULT_SENDGRID_API_BASE: &str = "https://api.sendgrid.com";

/// データベースURLを取得
///
/// 環境変数 `PHARMATRACE_DATABASE_URL` から取得し、
/// 未設定の場合は `sqlite://pharmatrace.db` を返す。
pub fn get_database_url() -> String {
    get_env_or("PHARMATRACE_DATABASE_URL", DEFAULT_DATABASE_URL)
}

/// Server listen configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl ServerConfig {
    /// Load server configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: get_env_or("PHARMATRACE_HOST", "0.0.0.0"),
            port: get_env_parse("PHARMATRACE_PORT", 5010u16),
        }
    }

    /// `host:port` 形式のバインドアドレス
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// ステータス遷移の検証ポリシー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
    /// 任意のステータスから任意のステータスへの遷移を許可
    #[default]
    Permissive,
    /// 直前のステータスからの遷移のみ許可
    Strict,
}

impl TransitionPolicy {
    /// 環境変数 `PHARMATRACE_ENFORCE_TRANSITIONS` が
    /// `true/1/yes/on` のときに `Strict` を返す。
    pub fn from_env() -> Self {
        let strict = get_env("PHARMATRACE_ENFORCE_TRANSITIONS")
            .map(|value| is_truthy(&value))
            .unwrap_or(false);
        if strict {
            Self::Strict
        } else {
            Self::Permissive
        }
    }

    /// Strictモードか
    pub fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}

/// Receipt email configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationConfig {
    /// SendGrid API key. `None` disables sending.
    pub api_key: Option<String>,
    /// Sender address
    pub from_address: String,
    /// SendGrid API base URL (overridable for tests)
    pub api_base: String,
    /// Outbound request timeout
    pub timeout: Duration,
}

impl NotificationConfig {
    /// Load notification configuration from environment variables.
    pub fn from_env() -> Self {
        let api_key = get_env_with_fallback("PHARMATRACE_SENDGRID_API_KEY", "SENDGRID_API_KEY")
            .filter(|key| !key.trim().is_empty());
        let timeout_secs = get_env_parse("PHARMATRACE_SENDGRID_TIMEOUT_SECS", 10u64);

        Self {
            api_key,
            from_address: get_env_or("PHARMATRACE_MAIL_FROM", DEFAULT_MAIL_FROM),
            api_base: get_env_or("PHARMATRACE_SENDGRID_API_BASE", DEFAULT_SENDGRID_API_BASE),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// API keyなし（送信スキップ）の設定
    pub fn disabled() -> Self {
        Self {
            api_key: None,
            from_address: DEFAULT_MAIL_FROM.to_string(),
            api_base: DEFAULT_SENDGRID_API_BASE.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}
