//! 統合テスト用サポートモジュール

pub mod app;
pub mod http;
pub mod notifier;
