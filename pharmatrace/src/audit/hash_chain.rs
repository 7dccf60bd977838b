//! SHA-256ハッシュチェーン
//!
//! 各エントリは`(index, timestamp, data, previous_hash)`を連結した文字列の
//! SHA-256ダイジェスト先頭16桁をハッシュとして持ち、直前エントリのハッシュを
//! 埋め込むことでチェーンを構成する。16桁（64bit）は表示用の短縮であり、
//! 敵対的な改ざん耐性は想定しない。

use crate::audit::types::AuditEntry;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::warn;

/// ジェネシスエントリのprevious_hash
pub const GENESIS_PREVIOUS_HASH: &str = "0";

/// ジェネシスエントリのデータ
pub const GENESIS_DATA: &str = "Genesis Block";

/// ハッシュ値のhex桁数
pub const HASH_HEX_LEN: usize = 16;

/// チェーン検証結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainVerificationResult {
    /// 検証が成功したか
    pub valid: bool,
    /// 検証したエントリ数
    pub entries_checked: u64,
    /// 不整合が検出されたエントリのindex（該当する場合）
    pub tampered_index: Option<u64>,
    /// エラーメッセージ（該当する場合）
    pub message: Option<String>,
}

/// タイムスタンプの正規文字列表現（ハッシュ入力・表示用）
///
/// 通常はマイクロ秒精度。マイクロ秒未満の値を持つ場合はナノ秒まで出力し、
/// 値が異なれば文字列も必ず異なるようにする。
pub fn canonical_timestamp(timestamp: &DateTime<Utc>) -> String {
    let format = if timestamp.timestamp_subsec_nanos() % 1_000 == 0 {
        SecondsFormat::Micros
    } else {
        SecondsFormat::Nanos
    };
    timestamp.to_rfc3339_opts(format, true)
}

/// エントリのハッシュを計算
///
/// `SHA-256(index || timestamp || data || previous_hash)` の先頭16桁
pub fn compute_entry_hash(
    index: u64,
    timestamp: &DateTime<Utc>,
    data: &str,
    previous_hash: &str,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(index.to_string().as_bytes());
    hasher.update(canonical_timestamp(timestamp).as_bytes());
    hasher.update(data.as_bytes());
    hasher.update(previous_hash.as_bytes());
    let mut digest = format!("{:x}", hasher.finalize());
    digest.truncate(HASH_HEX_LEN);
    digest
}

/// 保存済みフィールドからハッシュを再計算
pub fn recompute_hash(entry: &AuditEntry) -> String {
    compute_entry_hash(
        entry.index,
        &entry.timestamp,
        &entry.data,
        &entry.previous_hash,
    )
}

/// エントリ列のハッシュチェーンを検証
pub fn verify_chain(entries: &[AuditEntry]) -> ChainVerificationResult {
    let mut expected_previous_hash = GENESIS_PREVIOUS_HASH;

    for (position, entry) in entries.iter().enumerate() {
        let position = position as u64;

        if entry.index != position {
            warn!(
                position,
                index = entry.index,
                "Hash chain broken: index out of sequence"
            );
            return broken(position, format!("Index mismatch at position {}", position));
        }

        if entry.previous_hash != expected_previous_hash {
            warn!(
                index = entry.index,
                expected = %expected_previous_hash,
                actual = %entry.previous_hash,
                "Hash chain broken: previous_hash mismatch"
            );
            return broken(
                position,
                format!("Previous hash mismatch at entry {}", entry.index),
            );
        }

        let recomputed = recompute_hash(entry);
        if recomputed != entry.hash {
            warn!(
                index = entry.index,
                expected = %entry.hash,
                recomputed = %recomputed,
                "Hash chain broken: entry hash mismatch"
            );
            return broken(position, format!("Entry hash mismatch at entry {}", entry.index));
        }

        expected_previous_hash = entry.hash.as_str();
    }

    ChainVerificationResult {
        valid: true,
        entries_checked: entries.len() as u64,
        tampered_index: None,
        message: None,
    }
}

fn broken(position: u64, message: String) -> ChainVerificationResult {
    ChainVerificationResult {
        valid: false,
        entries_checked: position + 1,
        tampered_index: Some(position),
        message: Some(message),
    }
}
