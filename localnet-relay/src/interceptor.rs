//! Fault-injection interceptor.
//!
//! Wraps every inbound request except the operational-control endpoints and
//! applies, in fixed order: the latency phase, then the failure phase.
//! Latency comes first so that even requests surviving the failure roll
//! observe realistic delay. A failed roll short-circuits before the handler
//! runs, so a chaos-failed request never mutates state.
//!
//! Payload corruption is deliberately not applied here: corruption models
//! data at rest and lives in the inbox path (see [`crate::store`]), which
//! lets a client distinguish a mangled transport call from a delivered but
//! corrupted payload.

use crate::error::ApiError;
use crate::node::RelayNode;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Extension;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

/// Paths whose prefix exempts a request from fault injection.
///
/// These are how an operator diagnoses and recovers the simulated fault
/// state, so they must stay reachable under full chaos.
const BYPASS_PREFIXES: [&str; 4] = ["/health", "/chaos", "/system", "/metrics"];

fn is_bypassed(path: &str) -> bool {
    BYPASS_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

/// Axum middleware applying the configured chaos to non-bypassed requests.
pub async fn chaos_middleware(
    Extension(node): Extension<Arc<RelayNode>>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_owned();
    if is_bypassed(&path) {
        return next.run(req).await;
    }

    let cfg = node.chaos().get().await;

    // Phase 1: latency. Suspends this request only; concurrent requests
    // proceed unhindered.
    if cfg.latency_ms > 0 {
        tokio::time::sleep(Duration::from_millis(cfg.latency_ms)).await;
    }

    // Phase 2: failure roll. A rate of exactly zero never rolls the dice,
    // so a quiet relay's seeded sequence is not consumed by passing traffic.
    if cfg.failure_rate > 0.0 {
        let roll = node.dice().roll().await;
        if roll < cfg.failure_rate {
            node.metrics().faults_injected.fetch_add(1, Ordering::Relaxed);
            node.logs()
                .append(format!(
                    "Chaos: simulated 500 for {} {}",
                    req.method(),
                    path
                ))
                .await;
            return ApiError::SimulatedFault.into_response();
        }
    }

    next.run(req).await
}
