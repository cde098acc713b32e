//! In-memory message store.
//!
//! Messages arrive through `POST /inbox`, are never mutated after storage,
//! and leave only through `DELETE /messages`. The store is a Vec behind one
//! RwLock: insertion order gives `list()` a stable order for a given store
//! state, and every mutation is a single critical section, so readers see a
//! consistent snapshot of completed inserts and clears.

use crate::node::RelayMetrics;
use localnet_types::{ChaosConfig, LogRing, MessageId};
use serde::{Deserialize, Serialize};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Character written over the tail of corrupted content.
const CORRUPTION_MARKER: char = 'X';

/// Content at or under this many characters is never corrupted.
const CORRUPTION_MIN_CHARS: usize = 5;

/// Terminal status of a stored message.
///
/// A stub left open for extension; messages undergo no transitions today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    /// The only status a message ever has.
    Stored,
}

/// A message held by the relay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredMessage {
    /// Unique identifier, assigned at receipt.
    pub id: MessageId,
    /// Addressee as submitted by the sender.
    pub recipient: String,
    /// Message content, possibly corrupted at receipt.
    pub content: String,
    /// Unix timestamp of receipt.
    pub received_at: i64,
    /// Always [`MessageStatus::Stored`].
    pub status: MessageStatus,
}

/// Result of an insert: the stored record plus whether chaos touched it.
#[derive(Debug, Clone)]
pub struct InsertOutcome {
    /// The message as stored.
    pub message: StoredMessage,
    /// True if the content was corrupted before storage.
    pub corrupted: bool,
}

/// Keyed in-memory store of received messages.
#[derive(Debug)]
pub struct MessageStore {
    messages: RwLock<Vec<StoredMessage>>,
    logs: Arc<LogRing>,
}

impl MessageStore {
    /// Create an empty store that logs to the given ring.
    pub fn new(logs: Arc<LogRing>) -> Self {
        Self {
            messages: RwLock::new(Vec::new()),
            logs,
        }
    }

    /// Store a message, applying at-rest corruption when the active chaos
    /// config asks for it.
    ///
    /// Corruption replaces the final character of content longer than
    /// [`CORRUPTION_MIN_CHARS`] characters; it operates on chars, so
    /// multi-byte content stays valid UTF-8. Shorter content is stored
    /// unchanged even with `corrupt_bytes` on.
    pub async fn insert(
        &self,
        recipient: &str,
        content: String,
        chaos: &ChaosConfig,
        metrics: &RelayMetrics,
    ) -> InsertOutcome {
        let id = MessageId::new();

        let mut content = content;
        let mut corrupted = false;
        if chaos.corrupt_bytes && content.chars().count() > CORRUPTION_MIN_CHARS {
            content.pop();
            content.push(CORRUPTION_MARKER);
            corrupted = true;
            metrics.messages_corrupted.fetch_add(1, Ordering::Relaxed);
            self.logs
                .append(format!("Chaos: corrupted message content for {id}"))
                .await;
        }

        let message = StoredMessage {
            id,
            recipient: recipient.to_string(),
            content,
            received_at: chrono::Utc::now().timestamp(),
            status: MessageStatus::Stored,
        };

        {
            let mut messages = self.messages.write().await;
            messages.push(message.clone());
        }
        metrics.messages_received.fetch_add(1, Ordering::Relaxed);
        self.logs
            .append(format!("Relay received message for {recipient}: {id}"))
            .await;

        InsertOutcome { message, corrupted }
    }

    /// Snapshot of stored messages, optionally filtered by recipient.
    ///
    /// Insertion order; never a live view.
    pub async fn list(&self, recipient: Option<&str>) -> Vec<StoredMessage> {
        let messages = self.messages.read().await;
        match recipient {
            Some(r) => messages.iter().filter(|m| m.recipient == r).cloned().collect(),
            None => messages.clone(),
        }
    }

    /// Number of stored messages.
    pub async fn count(&self) -> usize {
        self.messages.read().await.len()
    }

    /// Remove every message and return how many were removed.
    pub async fn clear(&self) -> usize {
        let removed = {
            let mut messages = self.messages.write().await;
            let removed = messages.len();
            messages.clear();
            removed
        };
        self.logs
            .append(format!("Cleared {removed} stored messages"))
            .await;
        removed
    }
}
