//! # ripple-bench
//!
//! Headless benchmark suite for the ripple simulation.
//!
//! Each scenario is a script of frame intervals and contact events played
//! against a [`ManualClock`](ripple_clock::ManualClock), so runs are
//! reproducible. The runner samples the whole field every frame the way a
//! renderer would and exports metrics as CSV.

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::BenchmarkMetrics;
pub use runner::BenchmarkRunner;
pub use scenarios::{Frame, Scenario, ScenarioKind, ScriptedInput};
