//! Simulation event types.
//!
//! Events are small value types tagged with the solver step count at
//! the moment they were emitted.

use serde::{Deserialize, Serialize};

use ripple_types::{ContactId, Scalar};

/// A simulation event emitted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Completed solver steps when the event was emitted.
    pub step: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// One fixed step finished.
    StepCompleted {
        /// Step size (seconds).
        dt: f64,
    },

    /// An accumulator update hit its step cap.
    StepsCapped {
        /// Steps that fit in the elapsed time.
        available: u64,
        /// Steps actually run.
        executed: u32,
    },

    /// An impulse was spread onto the grid.
    ImpulseInjected {
        /// Total impulse amount.
        amount: Scalar,
        /// Target cell along `i`.
        cell_i: Scalar,
        /// Target cell along `j`.
        cell_j: Scalar,
    },

    /// A contact touched down.
    ContactStarted {
        /// The contact.
        contact: ContactId,
    },

    /// A contact was released.
    ContactEnded {
        /// The contact.
        contact: ContactId,
    },

    /// The grid was replaced with a new one of a different size.
    GridRebuilt {
        /// New cell count along `i`.
        count_x: usize,
        /// New cell count along `j`.
        count_y: usize,
    },

    /// A NaN or infinity appeared in the field.
    NonFinite,
}

impl SimulationEvent {
    /// Creates an event stamped with `step`.
    pub fn new(step: u64, kind: EventKind) -> Self {
        Self { step, kind }
    }
}
