//! # vecsum
//!
//! Element-wise integer summation with adaptive rayon dispatch.
//!
//! The binary sums two fixed 16-element arrays (1..=16 and 16..=1) and
//! prints the sixteen results back to back. The library exposes the pieces:
//! slice kernels, thread-count derivation, and output rendering.
//!
//! ## Example
//!
//! ```rust
//! use vecsum::data::{ASCENDING, DESCENDING};
//! use vecsum::kernel::ElementwiseAdder;
//! use vecsum::parallel::{Dispatch, DispatchMode, ThreadConfig};
//!
//! let adder = ElementwiseAdder::new(ThreadConfig::single()).unwrap();
//! let (sum, dispatch) = adder
//!     .add_arrays(&ASCENDING, &DESCENDING, DispatchMode::Auto)
//!     .unwrap();
//!
//! assert_eq!(sum, [17; 16]);
//! assert_eq!(dispatch, Dispatch::Sequential);
//! assert_eq!(vecsum::format::concat(&sum), "17".repeat(16));
//! ```
//!
//! ## Dispatch
//!
//! Sixteen additions are far below the point where parallel dispatch pays
//! off, so `DispatchMode::Auto` runs them on the calling thread. Forcing
//! `DispatchMode::Parallel` runs the same kernel on a dedicated pool of
//! `max(available / 2, 1)` workers and yields identical results.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
// Clippy allows (MUST come after deny/warn to override them)
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_wrap)] // LEN (16) -> i32 is exact
#![allow(clippy::must_use_candidate)] // Not all methods need #[must_use]
#![allow(clippy::missing_panics_doc)] // Allow missing Panics doc sections
#![allow(clippy::doc_markdown)] // Allow technical terms without backticks

/// CLI command implementation (extracted for testability)
pub mod cli;
/// Fixed operands
pub mod data;
pub mod error;
/// Output rendering (text line, JSON report)
pub mod format;
/// Element-wise summation kernels
///
/// Sequential loop and rayon parallel iterator over `i32` slices, plus
/// `ElementwiseAdder` which owns a worker pool and chooses between them.
pub mod kernel;
/// Diagnostic logging (tracing-subscriber to stderr)
pub mod logging;
/// Thread-count derivation and dispatch policy
pub mod parallel;

pub use error::{Result, VecsumError};
pub use kernel::{add_arrays, ElementwiseAdder};
pub use parallel::{Dispatch, DispatchMode, ThreadConfig};
