//! The two seams through which hosts reach the solver.
//!
//! Renderers read through [`FieldView`]; input mappers write through
//! [`ImpulseTarget`]. Both are implemented by
//! [`WaveSolver`](crate::WaveSolver) and by the engine's simulation
//! context, so callers never depend on the concrete solver.

use ripple_types::Scalar;

/// Read-only access for a renderer sampling the field between steps.
///
/// Coordinates are floored and clamped; no query can fail.
pub trait FieldView {
    /// Number of cells along `i`.
    fn cell_count_x(&self) -> usize;

    /// Number of cells along `j`.
    fn cell_count_y(&self) -> usize;

    /// Density at `(i, j)`, extrapolated `extrapolation` steps past the
    /// last completed step.
    fn query_density(&self, i: Scalar, j: Scalar, extrapolation: Scalar) -> Scalar;

    /// Box-smoothed velocity at `(i, j)`, extrapolated like
    /// [`query_density`](FieldView::query_density).
    fn query_velocity_smoothed(&self, i: Scalar, j: Scalar, extrapolation: Scalar) -> Scalar;
}

/// Write access for an input source depositing force into the field.
pub trait ImpulseTarget {
    /// Number of cells along `i`.
    fn cell_count_x(&self) -> usize;

    /// Number of cells along `j`.
    fn cell_count_y(&self) -> usize;

    /// Spreads `amount` of velocity over a disc around `(i, j)`.
    fn inject_impulse(&mut self, amount: Scalar, i: Scalar, j: Scalar);
}
