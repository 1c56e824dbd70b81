//! Error types for the ripple engine.
//!
//! All crates return `RippleResult<T>` from fallible operations. Only
//! construction and configuration can fail; runtime coordinates are
//! clamped instead of rejected.

use thiserror::Error;

/// Unified error type for the ripple engine.
#[derive(Debug, Error)]
pub enum RippleError {
    /// Grid dimensions are unusable (zero cells along an axis).
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// Configuration value is out of its valid range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, RippleError>`.
pub type RippleResult<T> = Result<T, RippleError>;
