//! 設定管理
//!
//! MonitorConfig 設定構造体と、TOMLファイル・環境変数からの読み込み

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CommonError, CommonResult};

/// 環境変数のプレフィックス（例: `LAUNCH_MONITOR_PORT`）
pub const ENV_PREFIX: &str = "LAUNCH_MONITOR";

/// 既定の設定ファイル名（存在しなければ無視）
pub const DEFAULT_CONFIG_FILE: &str = "launch-monitor.toml";

/// launch monitor設定
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonitorConfig {
    /// ホストアドレス (デフォルト: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// ポート番号 (デフォルト: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// データベースURL (デフォルト: "sqlite://launch-monitor.db")
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// プローブ対象URL
    #[serde(default = "default_target_url")]
    pub target_url: String,

    /// プローブのタイムアウト（秒）(デフォルト: 5)
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_database_url() -> String {
    "sqlite://launch-monitor.db".to_string()
}

fn default_target_url() -> String {
    "http://mniufscappvm14:7003/modeln/app/launchPage.html?autoLaunch=true".to_string()
}

fn default_probe_timeout() -> u64 {
    5
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_url: default_database_url(),
            target_url: default_target_url(),
            probe_timeout_secs: default_probe_timeout(),
        }
    }
}

impl MonitorConfig {
    /// 設定ファイルと環境変数から読み込む
    ///
    /// 優先順位（低→高）: デフォルト値、TOMLファイル、`LAUNCH_MONITOR_*` 環境変数。
    /// `path`を指定した場合はファイルが必須、未指定の場合は
    /// カレントディレクトリの`launch-monitor.toml`があれば読み込む。
    pub fn load(path: Option<&Path>) -> CommonResult<Self> {
        let file = match path {
            Some(path) => ::config::File::from(path).required(true),
            None => ::config::File::with_name(DEFAULT_CONFIG_FILE)
                .format(::config::FileFormat::Toml)
                .required(false),
        };

        let config: Self = ::config::Config::builder()
            .add_source(file)
            .add_source(::config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// 値の整合性を検証
    pub fn validate(&self) -> CommonResult<()> {
        if self.probe_timeout_secs == 0 {
            return Err(CommonError::Validation(
                "probe_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.target_url.trim().is_empty() {
            return Err(CommonError::Validation(
                "target_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// プローブのタイムアウト
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    /// バインドアドレス（"host:port"）
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
