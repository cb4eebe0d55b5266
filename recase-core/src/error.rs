//! Core error types (deterministic only)

use thiserror::Error;

/// Core algorithm errors (no I/O, no external failures)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A zero chunk length can never consume input and would loop forever
    #[error("invalid chunk length: {length}")]
    InvalidChunkLength {
        /// The rejected chunk length
        length: usize,
    },
}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
