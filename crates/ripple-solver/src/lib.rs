//! # ripple-solver
//!
//! The wave solver: grid state, the explicit finite-difference stencil,
//! extrapolated point queries, and disc impulse injection.
//!
//! ## Key Types
//!
//! - [`WaveSolver`] — owns the grid, advances it, answers queries
//! - [`GridState`] — density/velocity buffers plus previous-step snapshots
//! - [`ScalarField`] — one rectangular buffer with boundary-clamped reads
//! - [`WaveConfig`] — friction, speed, injection radius and weighting
//! - [`FieldView`] / [`ImpulseTarget`] — the renderer and input seams

pub mod config;
pub mod grid;
pub mod traits;
pub mod wave_solver;

pub use config::{InjectionWeighting, WaveConfig};
pub use grid::{GridState, ScalarField};
pub use traits::{FieldView, ImpulseTarget};
pub use wave_solver::WaveSolver;
