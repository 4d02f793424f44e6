//! Runtime configuration derived from command-line flags.
//!
//! Configuration is taken from the command line alone; the environment is
//! never consulted.

use recomment_core::{RewriteOptions, TrailingBlock};
use strum::{Display, EnumString};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::errors::AppError;

/// Log filter applied when `--log-filter` is not supplied.
pub(crate) const DEFAULT_LOG_FILTER: &str = "warn";

/// Supported logging output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// Human-readable single line output.
    #[default]
    Compact,
    /// Structured JSON suitable for ingestion by logging stacks.
    Json,
}

/// Resolved settings for one CLI run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    log_filter: String,
    log_format: LogFormat,
    rewrite: RewriteOptions,
}

impl Config {
    pub(crate) fn log_filter(&self) -> &str {
        &self.log_filter
    }

    pub(crate) const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    pub(crate) const fn rewrite_options(&self) -> RewriteOptions {
        self.rewrite
    }
}

impl TryFrom<&Cli> for Config {
    type Error = AppError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        EnvFilter::try_new(&cli.log_filter).map_err(|error| AppError::LogFilter {
            filter: cli.log_filter.clone(),
            message: error.to_string(),
        })?;
        let trailing_block = if cli.close_trailing_block {
            TrailingBlock::Close
        } else {
            TrailingBlock::Leave
        };
        Ok(Self {
            log_filter: cli.log_filter.clone(),
            log_format: cli.log_format,
            rewrite: RewriteOptions { trailing_block },
        })
    }
}
