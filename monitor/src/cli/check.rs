//! check subcommand
//!
//! Probes a URL once and prints `Running` / `Not Running`.
//! Exit code: 0 running, 1 not running, 2 invalid URL or configuration,
//! 3 when the HTTP client itself fails.

use std::path::Path;

use clap::Args;
use launch_monitor_common::protocol::CheckStatusResponse;
use serde_json::json;

use crate::config::{load_config, ConfigOverrides};
use crate::probe::{HealthProbe, ProbeError, ProbeOutcome};

/// Exit code for an invalid URL or configuration
const EXIT_INVALID_INPUT: u8 = 2;

/// Exit code for HTTP client failures
const EXIT_CLIENT_ERROR: u8 = 3;

/// Arguments for the check subcommand
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// URL to probe (defaults to the configured target_url)
    pub url: Option<String>,

    /// Probe timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Execute the check command, returning the process exit code
pub async fn execute(args: &CheckArgs, config_path: Option<&Path>) -> anyhow::Result<u8> {
    let overrides = ConfigOverrides {
        probe_timeout_secs: args.timeout_secs,
        ..ConfigOverrides::default()
    };
    let config = load_config(config_path, &overrides)?;
    let target = args
        .url
        .clone()
        .unwrap_or_else(|| config.target_url.clone());

    let probe = HealthProbe::new(config.probe_timeout())?;
    let outcome = ProbeOutcome::try_from(probe.check_status(&target).await)?;

    match &outcome {
        ProbeOutcome::InvalidInput(_) => eprintln!("{}", render(&outcome, args.json)),
        _ => println!("{}", render(&outcome, args.json)),
    }
    Ok(outcome.exit_code())
}

/// Map an error returned by [`execute`] to the process exit code
pub fn error_exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<ProbeError>() {
        Some(ProbeError::Client(_)) => EXIT_CLIENT_ERROR,
        Some(ProbeError::InvalidUrl { .. }) | None => EXIT_INVALID_INPUT,
    }
}

fn render(outcome: &ProbeOutcome, as_json: bool) -> String {
    match outcome {
        ProbeOutcome::Running(report) | ProbeOutcome::NotRunning(report) => {
            if as_json {
                json!(CheckStatusResponse::from(report.clone())).to_string()
            } else {
                match &report.detail {
                    Some(detail) => {
                        format!("{}\t{}\t({})", report.status, report.observed_url, detail)
                    }
                    None => format!("{}\t{}", report.status, report.observed_url),
                }
            }
        }
        ProbeOutcome::InvalidInput(err) => {
            if as_json {
                json!({ "error": err.to_string() }).to_string()
            } else {
                format!("Error: {}", err)
            }
        }
    }
}
