//! CLI argument definitions for recomment.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{DEFAULT_LOG_FILTER, LogFormat};

/// Command-line interface for the recomment comment rewriter.
#[derive(Parser, Debug)]
#[command(
    name = "recomment",
    version,
    about = "Rewrites runs of // line comments into /** */ block comments in place"
)]
pub(crate) struct Cli {
    /// Closes a comment block that is still open at end of file.
    #[arg(long)]
    pub(crate) close_trailing_block: bool,
    /// Tracing filter directive for diagnostic logs (for example `debug`).
    #[arg(long, value_name = "FILTER", default_value = DEFAULT_LOG_FILTER)]
    pub(crate) log_filter: String,
    /// Format of diagnostic logs written to stderr.
    #[arg(long, value_name = "FORMAT", default_value_t = LogFormat::Compact)]
    pub(crate) log_format: LogFormat,
    /// Source files to rewrite, processed in order.
    #[arg(value_name = "PATH")]
    pub(crate) paths: Vec<PathBuf>,
}
