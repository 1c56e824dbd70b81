//! # ripple-input
//!
//! Converts continuous pointer/touch motion into impulses on the grid.
//!
//! A contact touching down deposits one "tap" impulse. Every move
//! rasterizes a line from the contact's previous cell to its current one
//! and deposits a smaller "drag" impulse at each cell on it, so fast
//! strokes leave a continuous trail.
//!
//! ## Key Types
//!
//! - [`InputSink`] — the capability hosts call with contact events
//! - [`ContactMapper`] — per-contact tracking and rasterized injection
//! - [`BoundMapper`] — a mapper paired with the target it writes into
//! - [`SurfacePoint`] — a host position in normalized surface coordinates

pub mod config;
pub mod mapper;
pub mod surface;
pub mod tracker;

pub use config::InputConfig;
pub use mapper::{BoundMapper, ContactMapper, InputSink};
pub use surface::SurfacePoint;
pub use tracker::ContactTracker;
