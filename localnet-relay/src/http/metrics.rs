//! Prometheus metrics endpoint.

use crate::node::RelayNode;
use axum::{http::header::CONTENT_TYPE, response::IntoResponse, Extension};
use std::sync::atomic::Ordering;
use std::sync::Arc;

/// Prometheus metrics handler.
///
/// Returns metrics in Prometheus text format: counters since startup plus
/// gauges over the current in-memory state.
pub async fn metrics_handler(Extension(node): Extension<Arc<RelayNode>>) -> impl IntoResponse {
    let m = node.metrics();

    // Counters — monotonic since startup
    let received = m.messages_received.load(Ordering::Relaxed);
    let corrupted = m.messages_corrupted.load(Ordering::Relaxed);
    let faults = m.faults_injected.load(Ordering::Relaxed);
    let cleared = m.messages_cleared.load(Ordering::Relaxed);
    let chaos_updates = m.chaos_updates.load(Ordering::Relaxed);

    // Gauges — current state
    let stored = node.store().count().await;
    let log_entries = node.logs().len().await;

    let body = format!(
        r#"# HELP localnet_relay_info Relay instance information
# TYPE localnet_relay_info gauge
localnet_relay_info{{version="{version}",id="{id}"}} 1

# HELP localnet_relay_messages_received_total Messages accepted through /inbox
# TYPE localnet_relay_messages_received_total counter
localnet_relay_messages_received_total {received}

# HELP localnet_relay_messages_corrupted_total Messages corrupted at receipt
# TYPE localnet_relay_messages_corrupted_total counter
localnet_relay_messages_corrupted_total {corrupted}

# HELP localnet_relay_faults_injected_total Requests aborted by the failure phase
# TYPE localnet_relay_faults_injected_total counter
localnet_relay_faults_injected_total {faults}

# HELP localnet_relay_messages_cleared_total Messages removed via DELETE /messages
# TYPE localnet_relay_messages_cleared_total counter
localnet_relay_messages_cleared_total {cleared}

# HELP localnet_relay_chaos_updates_total Accepted chaos config updates
# TYPE localnet_relay_chaos_updates_total counter
localnet_relay_chaos_updates_total {chaos_updates}

# HELP localnet_relay_messages_stored Messages currently in the store
# TYPE localnet_relay_messages_stored gauge
localnet_relay_messages_stored {stored}

# HELP localnet_relay_log_entries Operational log lines currently retained
# TYPE localnet_relay_log_entries gauge
localnet_relay_log_entries {log_entries}
"#,
        version = env!("CARGO_PKG_VERSION"),
        id = node.instance_id(),
    );

    (
        [(CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
}
