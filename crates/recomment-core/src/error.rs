//! Error types for the comment rewriting pipeline.
//!
//! Every variant is fatal to the file being processed. Callers surface the
//! path and, where one exists, the 0-based line index via [`RecommentError::path`]
//! and [`RecommentError::line`].

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors surfaced while validating, rewriting, or committing a file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RecommentError {
    /// One of the first three lines does not start with the header preamble.
    #[error("first lines of file do not contain the version preamble")]
    HeaderMismatch {
        /// Path to the offending file.
        path: PathBuf,
        /// 0-based index of the first non-matching line.
        line: usize,
    },

    /// The source file could not be opened or scanned.
    #[error("failed to read file: {source}")]
    ReadFailure {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// 0-based index of the line being read, if scanning had started.
        line: Option<usize>,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Metadata for the original file could not be retrieved.
    #[error("failed to stat file: {source}")]
    StatFailure {
        /// Path to the file whose metadata was requested.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The replacement file could not be created or written.
    #[error("failed to write replacement: {source}")]
    WriteFailure {
        /// Path to the file being replaced.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The replacement could not be synced or renamed over the original.
    #[error("failed to commit replacement: {source}")]
    CommitFailure {
        /// Path to the file being replaced.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl RecommentError {
    /// Creates a header mismatch error.
    pub fn header_mismatch(path: impl Into<PathBuf>, line: usize) -> Self {
        Self::HeaderMismatch {
            path: path.into(),
            line,
        }
    }

    /// Creates a read error, optionally tied to a line index.
    pub fn read(path: impl Into<PathBuf>, line: Option<usize>, source: io::Error) -> Self {
        Self::ReadFailure {
            path: path.into(),
            line,
            source,
        }
    }

    /// Creates a metadata error.
    pub fn stat(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::StatFailure {
            path: path.into(),
            source,
        }
    }

    /// Creates a replacement write error.
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::WriteFailure {
            path: path.into(),
            source,
        }
    }

    /// Creates a replacement commit error.
    pub fn commit(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::CommitFailure {
            path: path.into(),
            source,
        }
    }

    /// Path of the file the error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::HeaderMismatch { path, .. }
            | Self::ReadFailure { path, .. }
            | Self::StatFailure { path, .. }
            | Self::WriteFailure { path, .. }
            | Self::CommitFailure { path, .. } => path,
        }
    }

    /// 0-based line index associated with the error, if any.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::HeaderMismatch { line, .. } => Some(*line),
            Self::ReadFailure { line, .. } => *line,
            Self::StatFailure { .. } | Self::WriteFailure { .. } | Self::CommitFailure { .. } => {
                None
            }
        }
    }
}
