//! seed サブコマンド
//!
//! デフォルトのプロジェクト一覧をDBへ投入します。

use std::path::Path;

use clap::Args;

use crate::config::{load_config, ConfigOverrides};
use crate::db::initialize_database;
use crate::seed::{seed_default_projects, SeedSummary};

/// seed サブコマンドの引数
#[derive(Args, Debug, Clone, Default)]
pub struct SeedArgs {
    /// Database URL
    #[arg(long)]
    pub database_url: Option<String>,
}

/// Execute the seed command
pub async fn execute(args: &SeedArgs, config_path: Option<&Path>) -> anyhow::Result<SeedSummary> {
    let overrides = ConfigOverrides {
        database_url: args.database_url.clone(),
        ..ConfigOverrides::default()
    };
    let config = load_config(config_path, &overrides)?;
    let pool = initialize_database(&config.database_url).await?;

    let summary = seed_default_projects(&pool).await?;
    println!(
        "Seeded projects: {} created, {} unchanged",
        summary.created, summary.unchanged
    );
    Ok(summary)
}
