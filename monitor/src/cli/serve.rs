//! serve サブコマンド
//!
//! DBを初期化してHTTPサーバーを起動します。

use std::path::Path;

use clap::Args;
use tracing::info;

use crate::config::{load_config, ConfigOverrides};
use crate::db::initialize_database;
use crate::seed::seed_default_projects;
use crate::{server, AppState};

/// serve サブコマンドの引数
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Listen port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Bind address
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Database URL
    #[arg(long)]
    pub database_url: Option<String>,

    /// Seed the default projects before serving
    #[arg(long, default_value_t = false)]
    pub seed: bool,
}

impl ServeArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            database_url: self.database_url.clone(),
            probe_timeout_secs: None,
        }
    }
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(config_path, &args.overrides())?;
    let pool = initialize_database(&config.database_url).await?;

    if args.seed {
        seed_default_projects(&pool).await?;
    }

    let bind_addr = config.bind_addr();
    info!(
        target_url = %config.target_url,
        probe_timeout_secs = config.probe_timeout_secs,
        "Starting launch monitor"
    );

    let state = AppState::new(config, pool)?;
    server::run(state, &bind_addr).await
}
