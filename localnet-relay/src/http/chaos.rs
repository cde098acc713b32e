//! Chaos configuration and operational log endpoints.

use crate::error::ApiError;
use crate::node::RelayNode;
use axum::{Extension, Json};
use localnet_types::ChaosConfig;
use serde::Serialize;
use std::sync::atomic::Ordering;
use std::sync::Arc;

/// Response to an accepted chaos update.
#[derive(Debug, Serialize)]
pub struct ChaosUpdated {
    /// Always `"updated"`.
    pub status: &'static str,
    /// The configuration now in effect.
    pub config: ChaosConfig,
}

/// `POST /chaos` — validate and replace the fault-injection config.
pub async fn update_chaos_handler(
    Extension(node): Extension<Arc<RelayNode>>,
    Json(cfg): Json<ChaosConfig>,
) -> Result<Json<ChaosUpdated>, ApiError> {
    let cfg = cfg
        .validated()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let accepted = node.chaos().set(cfg).await;
    node.metrics().chaos_updates.fetch_add(1, Ordering::Relaxed);

    Ok(Json(ChaosUpdated {
        status: "updated",
        config: accepted,
    }))
}

/// `GET /system/logs` — retained log lines, oldest first.
pub async fn logs_handler(Extension(node): Extension<Arc<RelayNode>>) -> Json<Vec<String>> {
    Json(node.logs().snapshot().await)
}
