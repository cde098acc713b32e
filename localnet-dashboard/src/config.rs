//! Configuration loading for localnet-dashboard.
//!
//! The dashboard polls a fixed set of services; the default topology is the
//! standard LocalNet compose layout (three relays, discovery, ledger).

use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration for localnet-dashboard.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Bind address for the HTTP server (default: 0.0.0.0:3000).
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Per-node timeout for health and log polling, in milliseconds.
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
    /// Timeout for proxied chaos updates, in milliseconds.
    #[serde(default = "default_proxy_timeout_ms")]
    pub proxy_timeout_ms: u64,
    /// The nodes to poll.
    #[serde(default = "default_services")]
    pub services: Vec<ServiceEntry>,
}

/// One polled node.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceEntry {
    /// Display name, also the key in aggregate responses.
    pub name: String,
    /// Base URL of the node.
    pub url: String,
    /// True if this node is a relay (a valid chaos-proxy target).
    #[serde(default)]
    pub relay: bool,
}

fn default_bind_address() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_probe_timeout_ms() -> u64 {
    1000
}

fn default_proxy_timeout_ms() -> u64 {
    2000
}

fn default_services() -> Vec<ServiceEntry> {
    let relay = |name: &str| ServiceEntry {
        name: name.to_string(),
        url: format!("http://{name}:8080"),
        relay: true,
    };
    vec![
        relay("relay1"),
        relay("relay2"),
        relay("relay3"),
        ServiceEntry {
            name: "discovery".to_string(),
            url: "http://discovery:8081".to_string(),
            relay: false,
        },
        ServiceEntry {
            name: "ledger".to_string(),
            url: "http://ledger:8082".to_string(),
            relay: false,
        },
    ]
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            probe_timeout_ms: default_probe_timeout_ms(),
            proxy_timeout_ms: default_proxy_timeout_ms(),
            services: default_services(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Failed to parse configuration file.
    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: toml::de::Error,
    },
}
