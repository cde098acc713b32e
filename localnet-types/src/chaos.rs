//! Fault-injection configuration for a relay node.

use serde::{Deserialize, Serialize};

/// The fault-injection knobs of a relay node.
///
/// A relay holds exactly one of these at a time; `POST /chaos` replaces the
/// whole value atomically. No history is kept, last write wins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChaosConfig {
    /// Probability in [0.0, 1.0] that a non-bypassed request is aborted
    /// with a simulated 500.
    pub failure_rate: f64,
    /// Delay in milliseconds applied to every non-bypassed request before
    /// the failure roll. Zero disables the latency phase.
    pub latency_ms: u64,
    /// When true, inbound message content longer than five characters has
    /// its last character replaced before storage.
    pub corrupt_bytes: bool,
}

impl Default for ChaosConfig {
    fn default() -> Self {
        Self {
            failure_rate: 0.0,
            latency_ms: 0,
            corrupt_bytes: false,
        }
    }
}

impl ChaosConfig {
    /// Validate the configuration, consuming and returning it.
    ///
    /// `latency_ms` is unsigned so it cannot be out of range; only the
    /// failure rate needs a check. Non-finite values (NaN, infinities) are
    /// rejected along with anything outside [0.0, 1.0].
    ///
    /// # Errors
    ///
    /// Returns [`ChaosConfigError::FailureRateOutOfRange`] if the failure
    /// rate is not a probability.
    pub fn validated(self) -> Result<Self, ChaosConfigError> {
        if !self.failure_rate.is_finite() || !(0.0..=1.0).contains(&self.failure_rate) {
            return Err(ChaosConfigError::FailureRateOutOfRange {
                rate: self.failure_rate,
            });
        }
        Ok(self)
    }
}

/// Validation errors for [`ChaosConfig`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChaosConfigError {
    /// The failure rate is not a probability in [0.0, 1.0].
    #[error("failure_rate out of range: {rate} (expected 0.0..=1.0)")]
    FailureRateOutOfRange {
        /// The rejected value.
        rate: f64,
    },
}
