//! Timestep configuration.

use serde::{Deserialize, Serialize};

use ripple_types::constants::{DEFAULT_MAX_STEPS_PER_CALL, DEFAULT_TIMESTEP_MS};
use ripple_types::{RippleError, RippleResult};

/// Fixed step size and per-update step cap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimestepConfig {
    /// Size of one simulation step (milliseconds).
    pub timestep_ms: f64,

    /// Most steps a single update may run. Time beyond the cap is dropped.
    pub max_steps_per_call: u32,
}

impl Default for TimestepConfig {
    fn default() -> Self {
        Self {
            timestep_ms: DEFAULT_TIMESTEP_MS,
            max_steps_per_call: DEFAULT_MAX_STEPS_PER_CALL,
        }
    }
}

impl TimestepConfig {
    /// Step size in seconds, as handed to the step function.
    pub fn timestep_sec(&self) -> f64 {
        self.timestep_ms / 1000.0
    }

    /// Checks that the step size is positive and finite and the cap non-zero.
    pub fn validate(&self) -> RippleResult<()> {
        if !(self.timestep_ms.is_finite() && self.timestep_ms > 0.0) {
            return Err(RippleError::InvalidConfig(format!(
                "timestep must be positive and finite, got {} ms",
                self.timestep_ms
            )));
        }
        if self.max_steps_per_call == 0 {
            return Err(RippleError::InvalidConfig(
                "max steps per call must be >= 1".into(),
            ));
        }
        Ok(())
    }
}
