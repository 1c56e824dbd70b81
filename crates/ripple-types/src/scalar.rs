//! Scalar type alias for grid values.
//!
//! Density and velocity buffers are stored as `f32`. Wall-clock
//! bookkeeping in the accumulator uses `f64` milliseconds regardless.

/// The floating-point type used for density and velocity values.
pub type Scalar = f32;
