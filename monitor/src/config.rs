//! Configuration loading
//!
//! Merges the file/env configuration with command-line overrides.

use std::path::Path;

use launch_monitor_common::config::MonitorConfig;
use launch_monitor_common::error::CommonResult;

/// Command-line overrides applied on top of the loaded configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Bind address
    pub host: Option<String>,
    /// Listen port
    pub port: Option<u16>,
    /// Database URL
    pub database_url: Option<String>,
    /// Probe timeout in seconds
    pub probe_timeout_secs: Option<u64>,
}

impl ConfigOverrides {
    /// Apply the overrides to a configuration
    pub fn apply(&self, mut config: MonitorConfig) -> CommonResult<MonitorConfig> {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(database_url) = &self.database_url {
            config.database_url = database_url.clone();
        }
        if let Some(timeout) = self.probe_timeout_secs {
            config.probe_timeout_secs = timeout;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Load the configuration (file, then `LAUNCH_MONITOR_*` env) and apply overrides
pub fn load_config(path: Option<&Path>, overrides: &ConfigOverrides) -> CommonResult<MonitorConfig> {
    let config = MonitorConfig::load(path)?;
    overrides.apply(config)
}
