//! Error types for vecsum
//!
//! The default run (two fixed 16-element arrays) has no failure paths.
//! Errors surface only at the seams that accept caller input: slice kernels,
//! thread-count configuration, pool construction and output writing.

use thiserror::Error;

/// Result type alias for vecsum operations
pub type Result<T> = std::result::Result<T, VecsumError>;

/// Error type for vecsum operations
#[derive(Debug, Error)]
pub enum VecsumError {
    /// Input and output slices differ in length
    #[error("Length mismatch: a={a}, b={b}, out={out}")]
    LengthMismatch {
        /// Length of the first operand
        a: usize,
        /// Length of the second operand
        b: usize,
        /// Length of the output buffer
        out: usize,
    },

    /// Thread count must be positive
    #[error("Invalid thread count: {0} (must be at least 1)")]
    InvalidThreadCount(usize),

    /// Rayon refused to build the worker pool
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Writing the result failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON report could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
