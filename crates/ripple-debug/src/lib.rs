//! # ripple-debug
//!
//! In-memory grid snapshots. A snapshot has one canonical binary
//! encoding; its fingerprint is how two runs are checked for
//! bit-identical results.

pub mod snapshot;

pub use snapshot::GridSnapshot;
