//! # localnet-dashboard
//!
//! Polling status aggregator and chaos proxy for LocalNet.
//!
//! The dashboard polls every configured node's `/health` and `/system/logs`
//! and exposes the aggregate under its own API, so a developer can watch the
//! whole topology from one place. It also proxies chaos updates to a chosen
//! relay instance.
//!
//! A node being slow, down, or broken is data, not an error: each probe
//! resolves to an explicit [`ProbeOutcome`] and the aggregate call always
//! succeeds.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;

pub use config::{ConfigError, DashboardConfig, ServiceEntry};

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use futures_util::future::join_all;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

/// The result of probing one node.
///
/// Replaces a catch-all "anything went wrong" with the three failure modes
/// an operator actually distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// 2xx response within the timeout.
    Online,
    /// The node answered with a non-2xx status.
    HttpError(u16),
    /// No answer within the probe timeout.
    Timeout,
    /// Connection refused or otherwise unreachable.
    Unreachable,
}

impl ProbeOutcome {
    /// The status string shown in the aggregate view.
    pub fn status_str(self) -> &'static str {
        match self {
            ProbeOutcome::Online => "online",
            ProbeOutcome::HttpError(_) => "error",
            ProbeOutcome::Timeout | ProbeOutcome::Unreachable => "offline",
        }
    }
}

fn classify_status(status: reqwest::StatusCode) -> ProbeOutcome {
    if status.is_success() {
        ProbeOutcome::Online
    } else {
        ProbeOutcome::HttpError(status.as_u16())
    }
}

fn classify_error(error: &reqwest::Error) -> ProbeOutcome {
    if error.is_timeout() {
        ProbeOutcome::Timeout
    } else {
        ProbeOutcome::Unreachable
    }
}

/// Dashboard errors surfaced to the caller.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// The requested chaos target is not a configured relay.
    #[error("invalid relay: {0}")]
    UnknownRelay(String),
    /// The selected relay did not accept the proxied request.
    #[error("relay unreachable: {0}")]
    Upstream(String),
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            DashboardError::UnknownRelay(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            DashboardError::Upstream(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

/// The dashboard: configuration plus one shared HTTP client.
#[derive(Debug)]
pub struct Dashboard {
    config: DashboardConfig,
    client: reqwest::Client,
}

impl Dashboard {
    /// Build a dashboard from its configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: DashboardConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { config, client })
    }

    /// The dashboard configuration.
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.config.probe_timeout_ms)
    }

    /// Probe one node's `/health`.
    pub async fn probe_health(&self, base_url: &str) -> ProbeOutcome {
        let result = self
            .client
            .get(format!("{base_url}/health"))
            .timeout(self.probe_timeout())
            .send()
            .await;

        match result {
            Ok(res) => classify_status(res.status()),
            Err(e) => classify_error(&e),
        }
    }

    /// Fetch one node's `/system/logs`; any failure reads as no lines.
    pub async fn fetch_logs(&self, base_url: &str) -> Vec<String> {
        let result = self
            .client
            .get(format!("{base_url}/system/logs"))
            .timeout(self.probe_timeout())
            .send()
            .await;

        match result {
            Ok(res) if res.status().is_success() => res.json().await.unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// Status of every configured node, probed concurrently.
    pub async fn aggregate_status(&self) -> BTreeMap<String, &'static str> {
        let probes = self.config.services.iter().map(|svc| async {
            let outcome = self.probe_health(&svc.url).await;
            (svc.name.clone(), outcome.status_str())
        });
        join_all(probes).await.into_iter().collect()
    }

    /// Log lines of every configured node, fetched concurrently.
    pub async fn aggregate_logs(&self) -> BTreeMap<String, Vec<String>> {
        let fetches = self.config.services.iter().map(|svc| async {
            (svc.name.clone(), self.fetch_logs(&svc.url).await)
        });
        join_all(fetches).await.into_iter().collect()
    }

    /// Forward a chaos update to the named relay.
    ///
    /// Returns the relay's status code and JSON body; the relay id must name
    /// a configured relay instance.
    pub async fn proxy_chaos(
        &self,
        relay_id: &str,
        body: serde_json::Value,
    ) -> Result<(StatusCode, serde_json::Value), DashboardError> {
        let target = self
            .config
            .services
            .iter()
            .find(|svc| svc.relay && svc.name == relay_id)
            .ok_or_else(|| DashboardError::UnknownRelay(relay_id.to_string()))?;

        let result = self
            .client
            .post(format!("{}/chaos", target.url))
            .timeout(Duration::from_millis(self.config.proxy_timeout_ms))
            .json(&body)
            .send()
            .await
            .map_err(|e| DashboardError::Upstream(e.to_string()))?;

        let status =
            StatusCode::from_u16(result.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
        let body = result.json().await.unwrap_or_else(|_| json!({}));
        Ok((status, body))
    }
}

/// Build the HTTP router for the dashboard API.
pub fn build_router(dashboard: Arc<Dashboard>) -> Router {
    Router::new()
        .route("/api/status", get(status_handler))
        .route("/api/logs", get(logs_handler))
        .route("/api/chaos/:relay_id", post(chaos_proxy_handler))
        .layer(Extension(dashboard))
}

async fn status_handler(
    Extension(dashboard): Extension<Arc<Dashboard>>,
) -> Json<BTreeMap<String, &'static str>> {
    Json(dashboard.aggregate_status().await)
}

async fn logs_handler(
    Extension(dashboard): Extension<Arc<Dashboard>>,
) -> Json<BTreeMap<String, Vec<String>>> {
    Json(dashboard.aggregate_logs().await)
}

async fn chaos_proxy_handler(
    Extension(dashboard): Extension<Arc<Dashboard>>,
    Path(relay_id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, DashboardError> {
    let (status, body) = dashboard.proxy_chaos(&relay_id, body).await?;
    Ok((status, Json(body)).into_response())
}
