//! HTTP surface of the relay node.
//!
//! Thin routing layer: request validation, dispatch to the node's
//! components, and response shaping. The only business logic outside the
//! components is the health-check payload.

pub mod chaos;
pub mod health;
mod inbox;
mod metrics;

use crate::interceptor;
use crate::node::RelayNode;
use axum::{
    middleware,
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;

pub use health::HealthStatus;

/// Build the HTTP router with all endpoints and the chaos interceptor.
///
/// The interceptor layer sits inside the Extension layer so it can reach
/// the node state; it exempts the operational-control endpoints itself.
pub fn build_router(node: Arc<RelayNode>) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/system/logs", get(chaos::logs_handler))
        .route("/chaos", post(chaos::update_chaos_handler))
        .route("/metrics", get(metrics::metrics_handler))
        .route("/inbox", post(inbox::receive_handler))
        .route(
            "/messages",
            get(inbox::list_handler).delete(inbox::clear_handler),
        )
        .layer(middleware::from_fn(interceptor::chaos_middleware))
        .layer(Extension(node))
}
