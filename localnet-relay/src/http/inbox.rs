//! Message intake and inspection endpoints.

use crate::node::RelayNode;
use crate::store::StoredMessage;
use axum::extract::Query;
use axum::{Extension, Json};
use localnet_types::MessageId;
use serde::{Deserialize, Serialize};
use std::sync::atomic::Ordering;
use std::sync::Arc;

/// Body of `POST /inbox`.
#[derive(Debug, Deserialize)]
pub struct InboxRequest {
    /// Message content.
    pub message: String,
    /// Addressee.
    pub recipient: String,
}

/// Response to an accepted message.
#[derive(Debug, Serialize)]
pub struct InboxAccepted {
    /// Always `"accepted"`.
    pub status: &'static str,
    /// Identifier assigned to the stored message.
    pub message_id: MessageId,
}

/// Query parameters of `GET /messages`.
#[derive(Debug, Deserialize)]
pub struct MessagesQuery {
    /// Restrict the listing to this recipient.
    pub recipient: Option<String>,
}

/// Response to `DELETE /messages`.
#[derive(Debug, Serialize)]
pub struct MessagesCleared {
    /// Always `"cleared"`.
    pub status: &'static str,
    /// Exact number of messages removed.
    pub removed: usize,
}

/// `POST /inbox` — store an inbound message.
///
/// At-rest corruption happens here (inside the store), not in the
/// interceptor; by the time this handler runs the request has already
/// survived the latency and failure phases.
pub async fn receive_handler(
    Extension(node): Extension<Arc<RelayNode>>,
    Json(req): Json<InboxRequest>,
) -> Json<InboxAccepted> {
    let chaos = node.chaos().get().await;
    let outcome = node
        .store()
        .insert(&req.recipient, req.message, &chaos, node.metrics())
        .await;

    Json(InboxAccepted {
        status: "accepted",
        message_id: outcome.message.id,
    })
}

/// `GET /messages` — snapshot of stored messages, optionally filtered.
pub async fn list_handler(
    Extension(node): Extension<Arc<RelayNode>>,
    Query(query): Query<MessagesQuery>,
) -> Json<Vec<StoredMessage>> {
    Json(node.store().list(query.recipient.as_deref()).await)
}

/// `DELETE /messages` — remove everything, reporting the count.
pub async fn clear_handler(
    Extension(node): Extension<Arc<RelayNode>>,
) -> Json<MessagesCleared> {
    let removed = node.store().clear().await;
    node.metrics()
        .messages_cleared
        .fetch_add(removed as u64, Ordering::Relaxed);

    Json(MessagesCleared {
        status: "cleared",
        removed,
    })
}
