//! Command-line runtime for the recomment comment rewriter.
//!
//! The runtime parses arguments, installs telemetry, and rewrites each path
//! in order. Processing is strictly sequential: the first failure is
//! reported as `<path> line <n>: <cause>` and ends the run, leaving later
//! paths untouched. IO streams are injected so tests can drive the runtime
//! without spawning a process.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use recomment_core::process_file;
use tracing::debug;

mod cli;
mod config;
mod errors;
mod telemetry;

use cli::Cli;
pub use config::LogFormat;
use config::Config;
use errors::AppError;

/// Runs the CLI using the provided arguments and IO handles.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    match try_run(args, stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = writeln!(stderr, "{error}");
            ExitCode::FAILURE
        }
    }
}

fn try_run<I, W>(args: I, stdout: &mut W) -> Result<(), AppError>
where
    I: IntoIterator<Item = OsString>,
    W: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // `--help` and `--version` arrive as errors that belong on stdout.
        Err(error) if !error.use_stderr() => {
            return write!(stdout, "{error}").map_err(AppError::Output);
        }
        Err(error) => return Err(AppError::CliUsage(error)),
    };
    let config = Config::try_from(&cli)?;
    telemetry::initialise(&config)?;

    debug!(paths = cli.paths.len(), "starting rewrite run");
    for path in &cli.paths {
        let report = process_file(path, config.rewrite_options())?;
        writeln!(stdout, "rewrote comments in {}", report.path.display())
            .map_err(AppError::Output)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
