//! vecsum CLI
//!
//! Sums 1..=16 and 16..=1 element-wise and prints the result:
//!
//! ```text
//! $ vecsum
//! 17171717171717171717171717171717
//! ```

use std::process::ExitCode;

use clap::Parser;
use vecsum::{
    cli::{self, Cli},
    logging,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli::entrypoint(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}
