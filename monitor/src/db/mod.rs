//! データベースアクセス層
//!
//! SQLiteベースのインベントリ永続化

/// データベースマイグレーション
pub mod migrations;

/// プロジェクト管理
pub mod projects;

/// サーバー管理
pub mod servers;

/// Repository traitパターン（テスタビリティ向上）
pub mod traits;

pub use migrations::initialize_database;
