//! # ripple-types
//!
//! Shared types, identifiers, error types, and simulation defaults
//! for the ripple wave engine.
//!
//! This crate has zero domain logic. It defines the vocabulary
//! that all other ripple crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{RippleError, RippleResult};
pub use ids::ContactId;
pub use scalar::Scalar;
