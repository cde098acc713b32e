//! localnet-relay binary entry point.
//!
//! Usage:
//! ```bash
//! localnet-relay --config relay.toml
//! localnet-relay --bind 127.0.0.1:9001
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use localnet_relay::config::Config;
use localnet_relay::http;
use localnet_relay::node::RelayNode;
use std::path::PathBuf;
use std::sync::Arc;

/// Introspectable OATP mock relay with deterministic fault injection.
#[derive(Parser, Debug)]
#[command(name = "localnet-relay")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "relay.toml")]
    config: PathBuf,

    /// Override the configured bind address
    #[arg(long)]
    bind: Option<String>,

    /// Log verbosely
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    let mut config = if cli.config.exists() {
        Config::from_file(&cli.config)
            .with_context(|| format!("loading {}", cli.config.display()))?
    } else {
        tracing::info!(
            "config file {} not found, using defaults",
            cli.config.display()
        );
        Config::default()
    };
    if let Some(bind) = cli.bind {
        config.server.bind_address = bind;
    }

    http::health::init_start_time();

    let bind_address = config.server.bind_address.clone();
    let instance_id = config.instance_id();
    let node = Arc::new(RelayNode::new(config));
    let app = http::build_router(node);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("binding {bind_address}"))?;
    tracing::info!("relay {instance_id} listening on {bind_address}");

    axum::serve(listener, app).await.context("serving HTTP")?;
    Ok(())
}
