//! インメモリ監査ログ（追記専用ハッシュチェーン）
//!
//! プロセスの生存期間中のみ保持され、再起動時はジェネシスエントリから
//! 作り直される。追記は書き込みロック下で行い、並行リクエストが同じ末尾を
//! 読んでチェーンが分岐することを防ぐ。

use crate::audit::hash_chain::{self, ChainVerificationResult, GENESIS_PREVIOUS_HASH};
use crate::audit::types::{AuditEntry, AuditPayload};
use crate::common::error::{TraceError, TraceResult};
use chrono::{SubsecRound, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// 監査ログ
///
/// Clone可能（内部はArc共有）。
#[derive(Clone, Default)]
pub struct AuditLog {
    entries: Arc<RwLock<Vec<AuditEntry>>>,
}

impl AuditLog {
    /// 空の監査ログを作成
    ///
    /// 追記前に`initialize()`を呼ぶこと。
    pub fn new() -> Self {
        Self::default()
    }

    /// ジェネシスエントリで初期化済みの監査ログを作成
    pub async fn initialized() -> Self {
        let log = Self::new();
        log.initialize().await;
        log
    }

    /// 空の場合のみジェネシスエントリを追加（冪等）
    pub async fn initialize(&self) {
        let mut entries = self.entries.write().await;
        if !entries.is_empty() {
            debug!("Audit log already initialized, skipping genesis");
            return;
        }

        let genesis = Self::build_entry(0, &AuditPayload::Genesis, GENESIS_PREVIOUS_HASH);
        info!(hash = %genesis.hash, "Audit log initialized with genesis entry");
        entries.push(genesis);
    }

    /// 末尾にエントリを追記
    ///
    /// 未初期化（空）の場合は`TraceError::Precondition`。
    pub async fn append(&self, payload: impl Into<AuditPayload>) -> TraceResult<AuditEntry> {
        let payload = payload.into();
        let mut entries = self.entries.write().await;

        let previous_hash = entries
            .last()
            .map(|tail| tail.hash.clone())
            .ok_or_else(|| {
                TraceError::Precondition(
                    "audit log is empty; initialize() must run before append".to_string(),
                )
            })?;

        let entry = Self::build_entry(entries.len() as u64, &payload, &previous_hash);
        info!(
            index = entry.index,
            hash = %entry.hash,
            previous_hash = %entry.previous_hash,
            "Appended audit log entry"
        );
        entries.push(entry.clone());
        Ok(entry)
    }

    /// 全エントリのコピーを取得（表示・チャート用）
    pub async fn snapshot(&self) -> Vec<AuditEntry> {
        self.entries.read().await.clone()
    }

    /// 末尾エントリを取得
    pub async fn tail(&self) -> Option<AuditEntry> {
        self.entries.read().await.last().cloned()
    }

    /// エントリ数
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// 空かどうか
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// 現在のチェーンを検証
    pub async fn verify(&self) -> ChainVerificationResult {
        let entries = self.entries.read().await;
        hash_chain::verify_chain(&entries)
    }

    fn build_entry(index: u64, payload: &AuditPayload, previous_hash: &str) -> AuditEntry {
        // 保存値・公開値・ハッシュ入力はいずれもマイクロ秒精度
        let timestamp = Utc::now().trunc_subsecs(6);
        let data = payload.to_string();
        let hash = hash_chain::compute_entry_hash(index, &timestamp, &data, previous_hash);
        AuditEntry {
            index,
            timestamp,
            data,
            previous_hash: previous_hash.to_string(),
            hash,
        }
    }
}
