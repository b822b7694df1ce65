use std::{io, net::SocketAddr};

use launch_monitor::db::initialize_database;
use launch_monitor::{server, AppState};
use launch_monitor_common::config::MonitorConfig;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

/// エフェメラルポートで起動したテスト用モニターサーバー
#[allow(dead_code)]
pub struct TestServer {
    addr: SocketAddr,
    pool: SqlitePool,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<Result<(), io::Error>>,
    _data_dir: TempDir,
}

#[allow(dead_code)]
impl TestServer {
    /// サーバーがバインドしているアドレスを返す
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// `path`へのURLを組み立てる
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// サーバーが使用しているDBプール
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// サーバーを停止し、バックグラウンドタスクの終了を待つ
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        let _ = self.handle.await;
    }
}

/// `target_url`をプローブ対象にしたモニターを起動する
pub async fn spawn_monitor(target_url: &str) -> TestServer {
    let data_dir = tempfile::tempdir().expect("failed to create temp dir");
    let database_url = format!("sqlite://{}", data_dir.path().join("monitor.db").display());
    let pool = initialize_database(&database_url)
        .await
        .expect("failed to initialize test database");

    let config = MonitorConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url,
        target_url: target_url.to_string(),
        probe_timeout_secs: 2,
    };
    let state = AppState::new(config, pool.clone()).expect("failed to build app state");

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().expect("failed to read local addr");
    let (tx, rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(server::serve(listener, state, async {
        let _ = rx.await;
    }));

    TestServer {
        addr,
        pool,
        shutdown: Some(tx),
        handle,
        _data_dir: data_dir,
    }
}
