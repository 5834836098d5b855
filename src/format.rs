//! Output rendering
//!
//! Text output is the decimal values back to back with no separator,
//! followed by a single newline. JSON output is a pretty-printed
//! [`SumReport`].

use std::fmt::Write as _;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::parallel::Dispatch;

/// Output format for the result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Values concatenated on one line
    #[default]
    Text,
    /// Pretty-printed JSON report
    Json,
}

/// Record of one summation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SumReport {
    /// First operand
    pub a: Vec<i32>,
    /// Second operand
    pub b: Vec<i32>,
    /// Element-wise sum
    pub result: Vec<i32>,
    /// Path the kernel took
    pub dispatch: Dispatch,
    /// Worker pool size
    pub threads: usize,
}

/// Concatenate decimal values with no separator
pub fn concat(values: &[i32]) -> String {
    let mut s = String::with_capacity(values.len() * 2);
    for v in values {
        // Writing to a String cannot fail
        let _ = write!(s, "{v}");
    }
    s
}

/// Write `concat(values)` and a trailing newline
///
/// # Errors
///
/// Propagates any error from `writer`.
pub fn write_line<W: Write>(writer: &mut W, values: &[i32]) -> std::io::Result<()> {
    writeln!(writer, "{}", concat(values))
}

/// Write `report` as pretty JSON and a trailing newline
///
/// # Errors
///
/// Returns `Serialization` if encoding fails, `Io` if writing fails.
pub fn write_json<W: Write>(writer: &mut W, report: &SumReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)?;
    Ok(())
}
