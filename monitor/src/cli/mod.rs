//! CLI module for launch-monitor
//!
//! Provides the command-line interface for the monitor server.

pub mod check;
pub mod seed;
pub mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Launch monitor - checks an app launch page and keeps a project/server inventory
#[derive(Parser, Debug)]
#[command(name = "launch-monitor")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    LAUNCH_MONITOR_CONFIG              Configuration file (default: ./launch-monitor.toml)
    LAUNCH_MONITOR_HOST                Bind address (default: 0.0.0.0)
    LAUNCH_MONITOR_PORT                Listen port (default: 3000)
    LAUNCH_MONITOR_DATABASE_URL        Database URL (default: sqlite://launch-monitor.db)
    LAUNCH_MONITOR_TARGET_URL          URL probed by /check_status
    LAUNCH_MONITOR_PROBE_TIMEOUT_SECS  Probe timeout in seconds (default: 5)
    LAUNCH_MONITOR_LOG_LEVEL           Log level (default: info)
    LAUNCH_MONITOR_LOG_DIR             Also write JSON logs to this directory
"#)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true, env = "LAUNCH_MONITOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Probe a URL once and print the result
    Check(check::CheckArgs),
    /// Seed the default projects into the database
    Seed(seed::SeedArgs),
}
