//! Thread-count derivation and dispatch policy
//!
//! The worker count defaults to half of the host's reported parallelism,
//! floored and never below one. Dispatch is adaptive: inputs shorter than
//! the threshold take the sequential path, since rayon's fork/join cost
//! dwarfs a handful of integer additions.
//!
//! ```rust
//! use vecsum::parallel::{Dispatch, DispatchMode, ThreadConfig};
//!
//! let config = ThreadConfig::new(4).unwrap().with_threshold(1024);
//! assert_eq!(config.resolve(DispatchMode::Auto, 16), Dispatch::Sequential);
//! assert_eq!(config.resolve(DispatchMode::Auto, 4096), Dispatch::Parallel);
//! assert_eq!(config.resolve(DispatchMode::Parallel, 16), Dispatch::Parallel);
//! ```

use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VecsumError};

/// Element count at or above which `Auto` dispatch goes parallel
///
/// Below this the per-task overhead of rayon (~several µs) exceeds the
/// work; see `benches/elementwise.rs`.
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Number of hardware threads the host reports, or 1 if it cannot tell
pub fn available_threads() -> usize {
    std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

/// Half of `total`, floored, never below one
pub fn half_of(total: usize) -> usize {
    (total / 2).max(1)
}

/// Requested dispatch policy
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DispatchMode {
    /// Sequential below the threshold, parallel at or above it
    #[default]
    Auto,
    /// Always run the sequential loop
    Sequential,
    /// Always run on the worker pool
    Parallel,
}

/// Path actually taken for one summation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dispatch {
    /// Single-threaded loop on the calling thread
    Sequential,
    /// rayon parallel iterator on the worker pool
    Parallel,
}

impl fmt::Display for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::Parallel => write!(f, "parallel"),
        }
    }
}

/// Worker pool configuration
///
/// Deserialization goes through [`ThreadConfig::new`], so a zero worker
/// count is rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawThreadConfig")]
pub struct ThreadConfig {
    num_threads: usize,
    threshold: usize,
}

/// Unvalidated wire form of `ThreadConfig`
#[derive(Deserialize)]
struct RawThreadConfig {
    num_threads: usize,
    #[serde(default = "default_threshold")]
    threshold: usize,
}

fn default_threshold() -> usize {
    PARALLEL_THRESHOLD
}

impl TryFrom<RawThreadConfig> for ThreadConfig {
    type Error = VecsumError;

    fn try_from(raw: RawThreadConfig) -> Result<Self> {
        Ok(Self::new(raw.num_threads)?.with_threshold(raw.threshold))
    }
}

impl ThreadConfig {
    /// Create a configuration with an explicit worker count
    ///
    /// # Errors
    ///
    /// Returns `InvalidThreadCount` if `num_threads` is zero.
    pub fn new(num_threads: usize) -> Result<Self> {
        if num_threads == 0 {
            return Err(VecsumError::InvalidThreadCount(num_threads));
        }
        Ok(Self {
            num_threads,
            threshold: PARALLEL_THRESHOLD,
        })
    }

    /// Single worker
    pub fn single() -> Self {
        Self {
            num_threads: 1,
            threshold: PARALLEL_THRESHOLD,
        }
    }

    /// Half of the host's threads (at least one)
    pub fn half_available() -> Self {
        Self {
            num_threads: half_of(available_threads()),
            threshold: PARALLEL_THRESHOLD,
        }
    }

    /// Set the `Auto` dispatch threshold
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Worker count
    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// `Auto` dispatch threshold
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Decide which path a summation of `len` elements takes
    pub fn resolve(&self, mode: DispatchMode, len: usize) -> Dispatch {
        match mode {
            DispatchMode::Sequential => Dispatch::Sequential,
            DispatchMode::Parallel => Dispatch::Parallel,
            DispatchMode::Auto if len >= self.threshold => Dispatch::Parallel,
            DispatchMode::Auto => Dispatch::Sequential,
        }
    }

    /// Build a dedicated rayon pool sized to this configuration
    ///
    /// # Errors
    ///
    /// Returns `ThreadPool` if the OS refuses to spawn the workers.
    pub fn build_pool(&self) -> Result<rayon::ThreadPool> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.num_threads)
            .thread_name(|i| format!("vecsum-worker-{i}"))
            .build()?;
        tracing::debug!(threads = self.num_threads, "built worker pool");
        Ok(pool)
    }
}

impl Default for ThreadConfig {
    fn default() -> Self {
        Self::half_available()
    }
}

#[cfg(test)]
mod tests;
