//! Error types and diagnostics helpers for the CLI runtime.

use std::io;

use recomment_core::RecommentError;
use thiserror::Error;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error("invalid log filter '{filter}': {message}")]
    LogFilter { filter: String, message: String },
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    /// Rendered as `<path> line <n>: <cause>`, with `-1` when no line applies.
    #[error("{} line {}: {}", .0.path().display(), diagnostic_line(.0), .0)]
    Rewrite(#[from] RecommentError),
    #[error("failed to write output: {0}")]
    Output(io::Error),
}

/// Line number printed in diagnostics.
pub(crate) fn diagnostic_line(error: &RecommentError) -> i64 {
    error
        .line()
        .map_or(-1, |line| i64::try_from(line).unwrap_or(i64::MAX))
}
