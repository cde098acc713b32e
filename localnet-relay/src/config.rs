//! Configuration loading for localnet-relay.
//!
//! Configuration is loaded from a TOML file (default: `relay.toml`). Every
//! field has a default, so an empty or missing file yields a quiet relay on
//! the standard port.

use localnet_types::{ChaosConfig, ChaosConfigError};
use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration for localnet-relay.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Initial chaos state.
    #[serde(default)]
    pub chaos: ChaosSection,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the HTTP server (default: 0.0.0.0:8080).
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Instance identifier reported by `/health`.
    ///
    /// Falls back to `$HOSTNAME`, then `"unknown"`, so that each container
    /// in a compose topology identifies itself without configuration.
    #[serde(default)]
    pub instance_id: Option<String>,
}

/// The `[chaos]` section: fault-injection state at startup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChaosSection {
    /// Initial failure probability (default 0.0).
    #[serde(default)]
    pub failure_rate: f64,
    /// Initial injected latency in milliseconds (default 0).
    #[serde(default)]
    pub latency_ms: u64,
    /// Initial corruption flag (default false).
    #[serde(default)]
    pub corrupt_bytes: bool,
    /// Seed for the failure-phase dice.
    ///
    /// With a seed, the accept/fail sequence is reproducible run over run;
    /// without one the dice are seeded from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl ChaosSection {
    /// The initial [`ChaosConfig`] described by this section.
    pub fn initial(&self) -> ChaosConfig {
        ChaosConfig {
            failure_rate: self.failure_rate,
            latency_ms: self.latency_ms,
            corrupt_bytes: self.corrupt_bytes,
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            instance_id: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            chaos: ChaosSection::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file and validate the chaos section.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// initial chaos state is out of range.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.chaos.initial().validated()?;
        Ok(config)
    }

    /// The instance identifier for `/health`, with fallbacks.
    pub fn instance_id(&self) -> String {
        self.server
            .instance_id
            .clone()
            .or_else(|| std::env::var("HOSTNAME").ok())
            .unwrap_or_else(|| "unknown".to_string())
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
    /// The initial chaos state is invalid.
    #[error("invalid chaos section: {0}")]
    Chaos(#[from] ChaosConfigError),
}
