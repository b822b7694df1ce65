//! Launch Monitor Server Entry Point

use std::process::ExitCode;

use clap::Parser;
use launch_monitor::cli::{self, serve::ServeArgs, Cli, Commands};
use launch_monitor::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let _log_guard = match logging::init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: failed to initialize logging: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Commands::Check(args)) => match cli::check::execute(&args, config_path).await {
            Ok(code) => ExitCode::from(code),
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(cli::check::error_exit_code(&e))
            }
        },
        Some(Commands::Seed(args)) => match cli::seed::execute(&args, config_path).await {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
        Some(Commands::Serve(args)) => run_server(&args, config_path).await,
        // No subcommand - serve with configured defaults
        None => run_server(&ServeArgs::default(), config_path).await,
    }
}

async fn run_server(args: &ServeArgs, config_path: Option<&std::path::Path>) -> ExitCode {
    match cli::serve::execute(args, config_path).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Server error: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
