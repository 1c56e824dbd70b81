//! Input magnitudes.

use serde::{Deserialize, Serialize};

use ripple_types::constants::{DEFAULT_DRAG_MAGNITUDE, DEFAULT_TAP_MAGNITUDE};
use ripple_types::{RippleError, RippleResult, Scalar};

/// Impulse sizes deposited by contacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Impulse deposited once when a contact touches down.
    pub tap_magnitude: Scalar,
    /// Impulse deposited at every cell a dragged contact crosses.
    pub drag_magnitude: Scalar,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            tap_magnitude: DEFAULT_TAP_MAGNITUDE,
            drag_magnitude: DEFAULT_DRAG_MAGNITUDE,
        }
    }
}

impl InputConfig {
    /// Both magnitudes must be finite. Negative values are allowed and
    /// push the field the other way.
    pub fn validate(&self) -> RippleResult<()> {
        if !self.tap_magnitude.is_finite() || !self.drag_magnitude.is_finite() {
            return Err(RippleError::InvalidConfig(format!(
                "input magnitudes must be finite, got tap={} drag={}",
                self.tap_magnitude, self.drag_magnitude
            )));
        }
        Ok(())
    }
}
