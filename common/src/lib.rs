//! Launch Monitor 共通ライブラリ
//!
//! サーバークレートとCLIで共有する型・エラー・設定

#![warn(missing_docs)]

/// 共通型定義（Project, Server, プローブ結果）
pub mod types;

/// APIペイロード定義
pub mod protocol;

/// エラー型定義
pub mod error;

/// 設定管理
pub mod config;
