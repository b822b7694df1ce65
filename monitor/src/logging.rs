//! ロギング初期化ユーティリティ
//!
//! 標準エラー出力に加え、`LAUNCH_MONITOR_LOG_DIR`が設定されていれば
//! 日次ローテーションのJSONファイルにも出力する。

use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// ログレベルを指定する環境変数
const LOG_LEVEL_ENV: &str = "LAUNCH_MONITOR_LOG_LEVEL";

/// ログファイルの出力先を指定する環境変数
const LOG_DIR_ENV: &str = "LAUNCH_MONITOR_LOG_DIR";

/// デフォルトのログレベル
const DEFAULT_LOG_LEVEL: &str = "info";

/// ログファイル名のプレフィックス
const LOG_FILE_PREFIX: &str = "launch-monitor.log";

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// ロギングを初期化する
///
/// 2回目以降の呼び出しは何もせず`Ok(None)`を返す。
/// 戻り値のガードはファイル出力を使う間、保持しておく必要がある。
pub fn init() -> Result<Option<WorkerGuard>, Box<dyn std::error::Error + Send + Sync>> {
    if LOGGER_INITIALIZED.set(()).is_err() {
        return Ok(None);
    }

    let filter = build_filter();
    // stdout is reserved for command output (`check`, `seed`)
    let console = fmt::layer().with_writer(std::io::stderr).with_target(true);

    let (file_layer, guard) = match std::env::var(LOG_DIR_ENV).ok().filter(|dir| !dir.is_empty()) {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    // Another subscriber (e.g. from a test harness) may already be installed.
    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .try_init()
    {
        tracing::debug!("Global tracing subscriber already initialized: {}", e);
    }

    Ok(guard)
}

fn build_filter() -> EnvFilter {
    let level = std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}
