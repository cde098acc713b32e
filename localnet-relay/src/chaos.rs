//! Chaos state: the live fault-injection config and the failure dice.

use localnet_types::{ChaosConfig, LogRing};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Owner of the relay's current fault-injection configuration.
///
/// The config is a single value replaced wholesale on update; a concurrent
/// reader sees either the old or the new value, never a mix of fields.
#[derive(Debug)]
pub struct ChaosController {
    current: RwLock<ChaosConfig>,
    logs: Arc<LogRing>,
}

impl ChaosController {
    /// Create a controller with the given initial state.
    pub fn new(initial: ChaosConfig, logs: Arc<LogRing>) -> Self {
        Self {
            current: RwLock::new(initial),
            logs,
        }
    }

    /// Snapshot of the current configuration. Never blocks on writers for
    /// longer than the swap itself.
    pub async fn get(&self) -> ChaosConfig {
        *self.current.read().await
    }

    /// Replace the entire configuration and return the accepted value.
    ///
    /// Callers validate before handing the config over; the controller
    /// stores whatever it is given.
    pub async fn set(&self, cfg: ChaosConfig) -> ChaosConfig {
        {
            let mut current = self.current.write().await;
            *current = cfg;
        }
        self.logs
            .append(format!(
                "Chaos config updated: failure_rate={} latency_ms={} corrupt_bytes={}",
                cfg.failure_rate, cfg.latency_ms, cfg.corrupt_bytes
            ))
            .await;
        cfg
    }
}

/// Seedable random source for the failure phase.
///
/// With a seed the accept/fail sequence is reproducible across runs, which
/// is what a test fixture wants; without one the dice draw OS entropy.
pub struct FaultDice {
    rng: Mutex<StdRng>,
}

impl std::fmt::Debug for FaultDice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaultDice").finish_non_exhaustive()
    }
}

impl FaultDice {
    /// Create dice from an optional seed.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Draw one uniform value in [0, 1).
    pub async fn roll(&self) -> f64 {
        self.rng.lock().await.gen::<f64>()
    }
}
