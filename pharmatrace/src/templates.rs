//! HTMLテンプレート
//!
//! `templates/` をバイナリに埋め込み、起動時に minijinja 環境へ登録する。

use include_dir::{include_dir, Dir};
use minijinja::Environment;
use serde::Serialize;
use std::sync::Arc;

use crate::common::error::{TraceError, TraceResult};

static TEMPLATES_DIR: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// サプライヤー登録フォーム
pub const SUPPLIER: &str = "supplier_main.html";
/// 製造業者ビュー
pub const MANUFACTURER: &str = "manufacturer.html";
/// 流通業者ビュー
pub const DISTRIBUTOR: &str = "distributor.html";
/// 顧客ダッシュボード
pub const CUSTOMER: &str = "customer_dashboard.html";
/// レシートメール本文
pub const RECEIPT: &str = "receipt.html";

/// 登録済みテンプレート環境（Clone可能）
#[derive(Clone)]
pub struct Templates {
    env: Arc<Environment<'static>>,
}

impl Templates {
    /// 埋め込みテンプレートを全て登録して環境を作成
    pub fn load() -> TraceResult<Self> {
        let mut env = Environment::new();
        for file in TEMPLATES_DIR.files() {
            let name = file.path().to_str().ok_or_else(|| {
                TraceError::Template(format!("Non UTF-8 template path: {:?}", file.path()))
            })?;
            let source = file.contents_utf8().ok_or_else(|| {
                TraceError::Template(format!("Template '{}' is not valid UTF-8", name))
            })?;
            env.add_template(name, source)?;
        }
        tracing::debug!(count = TEMPLATES_DIR.files().count(), "Templates loaded");
        Ok(Self { env: Arc::new(env) })
    }

    /// テンプレートを描画
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> TraceResult<String> {
        let template = self.env.get_template(name)?;
        Ok(template.render(ctx)?)
    }

    /// レシートメールのHTML本文を描画
    pub fn render_receipt(&self, product_name: &str, amount: &str) -> TraceResult<String> {
        self.render(
            RECEIPT,
            minijinja::context! { product_name => product_name, amount => amount },
        )
    }
}
