//! Diagnostic logging setup
//!
//! Diagnostics go to stderr so stdout carries only the result. With no `-v`
//! flags only warnings are shown; `RUST_LOG` overrides the flag-derived
//! filter when set.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Map a `-v` count to a level filter
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber
///
/// Later calls are no-ops, so tests may call this freely.
pub fn init(verbose: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbose).into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
