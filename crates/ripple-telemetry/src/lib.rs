//! # ripple-telemetry
//!
//! Event bus for simulation telemetry. The engine emits structured
//! events (steps, dropped time, impulses, contacts, grid rebuilds,
//! blow-up) that pluggable sinks consume.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
