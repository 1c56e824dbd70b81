//! # ripple-engine
//!
//! The simulation context: one object owning the solver, the timestep
//! accumulator, the contact mapper and the telemetry bus.
//!
//! Changing the grid size builds a fresh solver and drops the old one;
//! two live grids never share state.
//!
//! ## Key Types
//!
//! - [`SimulationContext`] — per-frame `tick`, input sink, field view
//! - [`SimulationConfig`] — every tunable, loadable from TOML
//! - [`GridConfig`] — grid dimensions, optionally derived from a viewport

pub mod config;
pub mod context;

pub use config::{GridConfig, SimulationConfig};
pub use context::SimulationContext;
