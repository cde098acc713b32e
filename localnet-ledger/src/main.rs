//! localnet-ledger binary entry point.

use anyhow::{Context, Result};
use clap::Parser;
use localnet_ledger::{build_router, LedgerService};
use std::sync::Arc;

/// Mock balance ledger for LocalNet.
#[derive(Parser, Debug)]
#[command(name = "localnet-ledger")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Bind address for the HTTP server
    #[arg(long, default_value = "0.0.0.0:8082")]
    bind: String,

    /// Log verbosely
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    let app = build_router(Arc::new(LedgerService::new()));

    let listener = tokio::net::TcpListener::bind(&cli.bind)
        .await
        .with_context(|| format!("binding {}", cli.bind))?;
    tracing::info!("ledger listening on {}", cli.bind);

    axum::serve(listener, app).await.context("serving HTTP")?;
    Ok(())
}
