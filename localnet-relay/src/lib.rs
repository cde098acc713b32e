//! # localnet-relay
//!
//! Introspectable, in-memory OATP mock relay for LocalNet.
//!
//! This crate implements one relay node of the LocalNet test fixture:
//! - Accepts inbound messages over HTTP and stores them in memory
//! - Injects deterministic network faults (latency, failures, payload
//!   corruption) so clients can be exercised against an unreliable peer
//! - Keeps a bounded operational log for the dashboard
//!
//! ## Architecture
//!
//! ```text
//!             every request
//!                  │
//!        ┌─────────▼──────────┐
//!        │  chaos interceptor │  latency, then failure roll
//!        │  (bypass: /health  │
//!        │   /chaos /system   │
//!        │   /metrics)        │
//!        └─────────┬──────────┘
//!                  │
//!   ┌──────────────┼────────────────┐
//!   │         localnet-relay        │
//!   │  ┌──────────┐  ┌───────────┐  │
//!   │  │ message  │  │  log ring │  │
//!   │  │  store   │  │ (last 50) │  │
//!   │  └──────────┘  └───────────┘  │
//!   └───────────────────────────────┘
//! ```
//!
//! ## Endpoints
//!
//! - `GET /health` — liveness + instance id (never chaos-affected)
//! - `POST /chaos` — replace the fault-injection config
//! - `GET /system/logs` — last 50 operational log lines
//! - `GET /metrics` — Prometheus counters
//! - `POST /inbox` — receive a message (chaos-affected)
//! - `GET /messages` / `DELETE /messages` — inspect / reset stored state
//!
//! All state is process-scoped; restarting the relay loses everything,
//! which is the point of a test fixture.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chaos;
pub mod config;
pub mod error;
pub mod http;
pub mod interceptor;
pub mod node;
pub mod store;
