//! Bounded operational log shared by every LocalNet service.
//!
//! Each service keeps the last [`DEFAULT_LOG_CAPACITY`] notable events in
//! memory and serves them under `GET /system/logs` so the dashboard can show
//! what a node has been doing. Entries are immutable once appended; when the
//! ring is full the oldest entry is evicted first.
//!
//! Appends are also mirrored to the `tracing` subscriber, so the ring never
//! replaces structured logging — it is the introspection window on top of it.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use tokio::sync::Mutex;

/// How many entries a service ring retains.
pub const DEFAULT_LOG_CAPACITY: usize = 50;

/// One timestamped log line.
#[derive(Debug, Clone)]
struct LogEntry {
    at: DateTime<Utc>,
    text: String,
}

impl LogEntry {
    /// Render as the wire format: `[HH:MM:SS] text`.
    fn render(&self) -> String {
        format!("[{}] {}", self.at.format("%H:%M:%S"), self.text)
    }
}

/// Bounded, append-only ring of timestamped log lines.
///
/// Interior mutability so services can share one ring behind an `Arc`;
/// the mutex is held only for the push/evict or the snapshot copy.
#[derive(Debug)]
pub struct LogRing {
    capacity: usize,
    entries: Mutex<VecDeque<LogEntry>>,
}

impl Default for LogRing {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }
}

impl LogRing {
    /// Create a ring retaining at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Append a line stamped with the current time, evicting the oldest
    /// entry if the ring is full.
    pub async fn append(&self, text: impl Into<String>) {
        let text = text.into();
        tracing::info!("{text}");

        let mut entries = self.entries.lock().await;
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(LogEntry {
            at: Utc::now(),
            text,
        });
    }

    /// All retained lines, oldest first, rendered as `[HH:MM:SS] text`.
    pub async fn snapshot(&self) -> Vec<String> {
        let entries = self.entries.lock().await;
        entries.iter().map(LogEntry::render).collect()
    }

    /// Number of retained entries.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// True if nothing has been logged yet.
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}
