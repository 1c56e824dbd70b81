//! # ripple-raster
//!
//! Pure functions that enumerate integer lattice points. No state.
//!
//! ## Key Items
//!
//! - [`LinePoints`] — 8-connected line iterator (integer Bresenham)
//! - [`line`] — callback form of [`LinePoints`]
//! - [`filled_disc`] — midpoint-circle disc fill built from [`line`] spans
//! - [`disc_cells`] — the disc as a sorted, deduplicated cell list

pub mod disc;
pub mod line;

pub use disc::{disc_cells, filled_disc};
pub use line::{line, LinePoints};
