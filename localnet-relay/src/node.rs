//! Relay node composition.
//!
//! [`RelayNode`] owns every piece of process-scoped state: the chaos
//! controller, the fault dice, the message store, the log ring, and the
//! operational counters. One instance is created at startup and shared with
//! every handler through an `Arc`.

use crate::chaos::{ChaosController, FaultDice};
use crate::config::Config;
use crate::store::MessageStore;
use localnet_types::LogRing;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

/// Operational counters for monitoring relay activity.
///
/// All counters are monotonically increasing (reset only on restart).
/// Thread-safe via `AtomicU64`, no locks needed for incrementing.
#[derive(Debug, Default)]
pub struct RelayMetrics {
    /// Messages accepted through `/inbox`.
    pub messages_received: AtomicU64,
    /// Messages whose content was corrupted at receipt.
    pub messages_corrupted: AtomicU64,
    /// Requests aborted by the failure phase of the interceptor.
    pub faults_injected: AtomicU64,
    /// Messages removed by `DELETE /messages`.
    pub messages_cleared: AtomicU64,
    /// Accepted `/chaos` updates.
    pub chaos_updates: AtomicU64,
}

/// One relay node: fault injection plus in-memory message intake.
#[derive(Debug)]
pub struct RelayNode {
    config: Config,
    logs: Arc<LogRing>,
    chaos: ChaosController,
    dice: FaultDice,
    store: MessageStore,
    metrics: RelayMetrics,
}

impl RelayNode {
    /// Build a node from its configuration.
    pub fn new(config: Config) -> Self {
        let logs = Arc::new(LogRing::default());
        let chaos = ChaosController::new(config.chaos.initial(), logs.clone());
        let dice = FaultDice::from_seed(config.chaos.seed);
        let store = MessageStore::new(logs.clone());

        Self {
            config,
            logs,
            chaos,
            dice,
            store,
            metrics: RelayMetrics::default(),
        }
    }

    /// The node configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The operational log ring.
    pub fn logs(&self) -> &Arc<LogRing> {
        &self.logs
    }

    /// The chaos controller.
    pub fn chaos(&self) -> &ChaosController {
        &self.chaos
    }

    /// The failure-phase dice.
    pub fn dice(&self) -> &FaultDice {
        &self.dice
    }

    /// The message store.
    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    /// The operational counters.
    pub fn metrics(&self) -> &RelayMetrics {
        &self.metrics
    }

    /// Instance identifier reported by `/health`.
    pub fn instance_id(&self) -> String {
        self.config.instance_id()
    }
}
