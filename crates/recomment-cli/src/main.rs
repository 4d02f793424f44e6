//! CLI entrypoint for the recomment comment rewriter.
//!
//! The binary delegates to [`recomment_cli::run`], which parses arguments,
//! installs telemetry, and rewrites each path in order, stopping at the first
//! failure.

use std::io::{self, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    recomment_cli::run(std::env::args_os(), &mut stdout, &mut stderr)
}
