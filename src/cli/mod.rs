//! CLI command implementation
//!
//! The argument surface and the run logic live here rather than in
//! `main.rs` so they can be driven from tests with an in-memory writer.

use std::io::{self, Write};

use clap::Parser;

use crate::data::{ASCENDING, DESCENDING};
use crate::error::Result;
use crate::format::{self, OutputFormat, SumReport};
use crate::kernel::ElementwiseAdder;
use crate::parallel::{DispatchMode, ThreadConfig};

/// vecsum - element-wise sum of two fixed 16-element arrays
///
/// With no arguments, prints the sixteen sums back to back on one line.
#[derive(Debug, Parser)]
#[command(name = "vecsum")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Worker threads for parallel dispatch (default: half the host's threads)
    #[arg(short, long, value_name = "N", env = "VECSUM_THREADS")]
    pub threads: Option<usize>,

    /// Dispatch policy: auto, sequential, or parallel
    #[arg(short, long, value_enum, default_value_t = DispatchMode::Auto)]
    pub dispatch: DispatchMode,

    /// Output format: text or json
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Thread configuration implied by `--threads`
    ///
    /// # Errors
    ///
    /// Returns `InvalidThreadCount` for `--threads 0`.
    pub fn thread_config(&self) -> Result<ThreadConfig> {
        match self.threads {
            Some(n) => ThreadConfig::new(n),
            None => Ok(ThreadConfig::default()),
        }
    }
}

/// Compute the sum and write it to `out` in the requested format
///
/// # Errors
///
/// Fails on an invalid thread count, pool construction failure, or a write
/// error on `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<SumReport> {
    let config = cli.thread_config()?;
    let adder = ElementwiseAdder::new(config)?;
    let (result, dispatch) = adder.add_arrays(&ASCENDING, &DESCENDING, cli.dispatch)?;
    tracing::info!(%dispatch, threads = config.num_threads(), "summed fixed operands");

    let report = SumReport {
        a: ASCENDING.to_vec(),
        b: DESCENDING.to_vec(),
        result: result.to_vec(),
        dispatch,
        threads: config.num_threads(),
    };

    match cli.format {
        OutputFormat::Text => format::write_line(out, &report.result)?,
        OutputFormat::Json => format::write_json(out, &report)?,
    }
    Ok(report)
}

/// Main CLI entrypoint: run against stdout
///
/// # Errors
///
/// See [`run`].
pub fn entrypoint(cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run(cli, &mut handle)?;
    handle.flush()?;
    Ok(())
}
