//! Element-wise summation kernels
//!
//! Two paths compute `out[i] = a[i] + b[i]`:
//! - `add_into` - plain loop on the calling thread
//! - `add_into_parallel` - rayon `par_iter_mut` on the current pool
//!
//! `ElementwiseAdder` owns a dedicated pool and picks a path per call
//! (see [`crate::parallel::ThreadConfig::resolve`]).
//!
//! Addition wraps on overflow so every kernel is total.

use rayon::prelude::*;

use crate::error::{Result, VecsumError};
use crate::parallel::{Dispatch, DispatchMode, ThreadConfig};

/// Minimum elements per rayon task
///
/// Keeps splitting from producing one task per element on large inputs.
const MIN_CHUNK: usize = 1024;

/// Sum two fixed-size arrays
///
/// ```rust
/// use vecsum::data::{ASCENDING, DESCENDING};
/// use vecsum::kernel::add_arrays;
///
/// assert_eq!(add_arrays(&ASCENDING, &DESCENDING), [17; 16]);
/// ```
pub fn add_arrays<const N: usize>(a: &[i32; N], b: &[i32; N]) -> [i32; N] {
    std::array::from_fn(|i| a[i].wrapping_add(b[i]))
}

fn check_lengths(a: &[i32], b: &[i32], out: &[i32]) -> Result<()> {
    if a.len() != b.len() || a.len() != out.len() {
        return Err(VecsumError::LengthMismatch {
            a: a.len(),
            b: b.len(),
            out: out.len(),
        });
    }
    Ok(())
}

/// Sequential element-wise sum into `out`
///
/// # Errors
///
/// Returns `LengthMismatch` if the three slices differ in length. `out` is
/// left untouched in that case.
pub fn add_into(a: &[i32], b: &[i32], out: &mut [i32]) -> Result<()> {
    check_lengths(a, b, out)?;
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = x.wrapping_add(y);
    }
    Ok(())
}

/// Parallel element-wise sum into `out`
///
/// Runs on whichever rayon pool is current: the global pool, or the one
/// installed by the caller. Each index is written by exactly one task.
///
/// # Errors
///
/// Returns `LengthMismatch` if the three slices differ in length. `out` is
/// left untouched in that case.
pub fn add_into_parallel(a: &[i32], b: &[i32], out: &mut [i32]) -> Result<()> {
    check_lengths(a, b, out)?;
    out.par_iter_mut()
        .zip(a.par_iter().zip(b.par_iter()))
        .with_min_len(MIN_CHUNK)
        .for_each(|(o, (&x, &y))| *o = x.wrapping_add(y));
    Ok(())
}

/// Allocating sequential sum
///
/// # Errors
///
/// Returns `LengthMismatch` if `a` and `b` differ in length.
pub fn add(a: &[i32], b: &[i32]) -> Result<Vec<i32>> {
    let mut out = vec![0; a.len()];
    add_into(a, b, &mut out)?;
    Ok(out)
}

/// Summation front-end with its own worker pool
pub struct ElementwiseAdder {
    config: ThreadConfig,
    pool: rayon::ThreadPool,
}

impl ElementwiseAdder {
    /// Build the worker pool described by `config`
    ///
    /// # Errors
    ///
    /// Returns `ThreadPool` if the pool cannot be built.
    pub fn new(config: ThreadConfig) -> Result<Self> {
        let pool = config.build_pool()?;
        Ok(Self { config, pool })
    }

    /// Pool configuration
    pub fn config(&self) -> &ThreadConfig {
        &self.config
    }

    /// Sum `a` and `b` into `out`, returning the path taken
    ///
    /// # Errors
    ///
    /// Returns `LengthMismatch` if the three slices differ in length.
    pub fn add_into(
        &self,
        a: &[i32],
        b: &[i32],
        out: &mut [i32],
        mode: DispatchMode,
    ) -> Result<Dispatch> {
        let dispatch = self.config.resolve(mode, out.len());
        tracing::debug!(
            len = out.len(),
            ?mode,
            %dispatch,
            threads = self.config.num_threads(),
            "dispatching element-wise sum"
        );
        match dispatch {
            Dispatch::Sequential => add_into(a, b, out)?,
            Dispatch::Parallel => self.pool.install(|| add_into_parallel(a, b, out))?,
        }
        Ok(dispatch)
    }

    /// Sum two fixed-size arrays, returning the result and the path taken
    ///
    /// # Errors
    ///
    /// Never fails for equal-length arrays; the `Result` mirrors `add_into`.
    pub fn add_arrays<const N: usize>(
        &self,
        a: &[i32; N],
        b: &[i32; N],
        mode: DispatchMode,
    ) -> Result<([i32; N], Dispatch)> {
        let mut out = [0; N];
        let dispatch = self.add_into(a, b, &mut out, mode)?;
        Ok((out, dispatch))
    }
}
