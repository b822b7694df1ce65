//! Launch Monitor Server
//!
//! 外部アプリ起動ページの稼働状況をプローブし、
//! プロジェクト/サーバーのインベントリを保持するサーバー

#![warn(missing_docs)]

/// REST APIハンドラー
pub mod api;

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー、CLI上書き）
pub mod config;

/// データベースアクセス
pub mod db;

/// ロギング初期化ユーティリティ
pub mod logging;

/// ヘルスプローブ
pub mod probe;

/// 初期データ投入
pub mod seed;

/// axumサーバー起動・シャットダウンハンドリング
pub mod server;

use std::sync::Arc;

use launch_monitor_common::config::MonitorConfig;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// データベース接続プール
    pub db_pool: sqlx::SqlitePool,
    /// ヘルスプローブ（HTTPクライアント共有）
    pub probe: probe::HealthProbe,
    /// 実行時設定
    pub config: Arc<MonitorConfig>,
}

impl AppState {
    /// 設定とDBプールからアプリケーション状態を構築
    pub fn new(config: MonitorConfig, db_pool: sqlx::SqlitePool) -> Result<Self, probe::ProbeError> {
        let probe = probe::HealthProbe::new(config.probe_timeout())?;
        Ok(Self {
            db_pool,
            probe,
            config: Arc::new(config),
        })
    }
}
