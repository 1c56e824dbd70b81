//! # ripple-clock
//!
//! Wall-clock bookkeeping for a fixed-timestep simulation.
//!
//! ## Key Types
//!
//! - [`TimestepAccumulator`] — runs a bounded number of fixed steps per call
//! - [`TimestepConfig`] — step size and per-call step cap
//! - [`Clock`] — time source ([`SystemClock`], [`ManualClock`])
//! - [`UpdateReport`] — what one update call did

pub mod accumulator;
pub mod clock;
pub mod config;

pub use accumulator::{TimestepAccumulator, UpdateReport};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::TimestepConfig;
