//! Simulation defaults.
//!
//! These are the canonical reference values. Every one of them is
//! overridable through the configuration structs; nothing reads them
//! directly inside the solver loop.

use crate::Scalar;

/// Default velocity damping applied each step.
pub const DEFAULT_FRICTION: Scalar = 0.99;

/// Default propagation speed (stencil stiffness).
pub const DEFAULT_SPEED: Scalar = 50.0;

/// Friction of the historical single-buffer variant.
pub const LEGACY_FRICTION: Scalar = 0.58;

/// Speed of the historical single-buffer variant.
pub const LEGACY_SPEED: Scalar = 20.0;

/// Default radius (in cells) of the disc an impulse is spread over.
pub const DEFAULT_INJECTION_RADIUS: u32 = 3;

/// Default fixed simulation timestep (milliseconds).
pub const DEFAULT_TIMESTEP_MS: f64 = 10.0;

/// Default cap on simulation steps per accumulator update.
pub const DEFAULT_MAX_STEPS_PER_CALL: u32 = 10;

/// Impulse deposited when a contact first touches down.
pub const DEFAULT_TAP_MAGNITUDE: Scalar = 250_000.0;

/// Impulse deposited at each rasterized cell of a drag segment.
pub const DEFAULT_DRAG_MAGNITUDE: Scalar = 10_000.0;

/// Default on-screen width of one grid cell (pixels).
pub const DEFAULT_CELL_WIDTH_PX: u32 = 3;
