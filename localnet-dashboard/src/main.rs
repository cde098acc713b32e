//! localnet-dashboard binary entry point.

use anyhow::{Context, Result};
use clap::Parser;
use localnet_dashboard::{build_router, Dashboard, DashboardConfig};
use std::path::PathBuf;
use std::sync::Arc;

/// Polling status aggregator and chaos proxy for LocalNet.
#[derive(Parser, Debug)]
#[command(name = "localnet-dashboard")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "dashboard.toml")]
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
        DashboardConfig::from_file(&cli.config)
            .with_context(|| format!("loading {}", cli.config.display()))?
    } else {
        tracing::info!(
            "config file {} not found, using the default topology",
            cli.config.display()
        );
        DashboardConfig::default()
    };
    if let Some(bind) = cli.bind {
        config.bind_address = bind;
    }

    let bind_address = config.bind_address.clone();
    let dashboard = Arc::new(Dashboard::new(config).context("building HTTP client")?);
    let app = build_router(dashboard);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("binding {bind_address}"))?;
    tracing::info!("dashboard listening on {bind_address}");

    axum::serve(listener, app).await.context("serving HTTP")?;
    Ok(())
}
