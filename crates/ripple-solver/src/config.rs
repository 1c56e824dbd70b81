//! Wave solver configuration.
//!
//! Friction and speed disagree across historical variants of this
//! simulation, so both are configuration rather than constants.

use serde::{Deserialize, Serialize};

use ripple_types::constants::{
    DEFAULT_FRICTION, DEFAULT_INJECTION_RADIUS, DEFAULT_SPEED, LEGACY_FRICTION, LEGACY_SPEED,
};
use ripple_types::{RippleError, RippleResult, Scalar};

/// Largest accepted injection radius, in cells.
pub const MAX_INJECTION_RADIUS: u32 = 1024;

/// How an impulse is shared between the cells of the injection disc.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InjectionWeighting {
    /// Each distinct disc cell receives exactly one share.
    #[default]
    Uniform,
    /// Each rasterizer visit adds a share, so cells on overlapping
    /// spans near the center receive more than one.
    PerVisit,
}

/// Configuration for the wave solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    /// Velocity damping applied every step. Must lie in `(0, 1)`.
    pub friction: Scalar,

    /// Propagation speed. The stencil force scales with `speed²`.
    pub speed: Scalar,

    /// Radius (cells) of the disc an impulse is spread over.
    pub injection_radius: u32,

    /// Treatment of cells the disc rasterizer visits more than once.
    pub weighting: InjectionWeighting,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            friction: DEFAULT_FRICTION,
            speed: DEFAULT_SPEED,
            injection_radius: DEFAULT_INJECTION_RADIUS,
            weighting: InjectionWeighting::Uniform,
        }
    }
}

impl WaveConfig {
    /// Parameters of the early single-buffer variant (heavy damping, slow waves).
    pub fn legacy() -> Self {
        Self {
            friction: LEGACY_FRICTION,
            speed: LEGACY_SPEED,
            ..Default::default()
        }
    }

    /// Checks every parameter, failing on the first one out of range.
    pub fn validate(&self) -> RippleResult<()> {
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(RippleError::InvalidConfig(format!(
                "friction must lie in (0, 1), got {}",
                self.friction
            )));
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(RippleError::InvalidConfig(format!(
                "speed must be positive and finite, got {}",
                self.speed
            )));
        }
        if self.injection_radius > MAX_INJECTION_RADIUS {
            return Err(RippleError::InvalidConfig(format!(
                "injection radius must be <= {MAX_INJECTION_RADIUS}, got {}",
                self.injection_radius
            )));
        }
        Ok(())
    }
}
