//! # localnet-types
//!
//! Shared vocabulary for the OATP LocalNet mock services.
//!
//! Every LocalNet service (relay, discovery, ledger, dashboard) shares a
//! small set of types:
//! - Identifiers: [`MessageId`] for stored messages, [`Did`] for ledger
//!   accounts and discovery contacts
//! - [`ChaosConfig`]: the fault-injection knobs accepted by a relay
//! - [`LogRing`]: the bounded operational log every service exposes under
//!   `/system/logs`
//!
//! Nothing in this crate touches the network; it is pure data plus the
//! in-memory log ring.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chaos;
pub mod ids;
pub mod logring;

pub use chaos::{ChaosConfig, ChaosConfigError};
pub use ids::{Did, MessageId};
pub use logring::{LogRing, DEFAULT_LOG_CAPACITY};
