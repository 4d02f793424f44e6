//! Line-comment to block-comment rewriting for gostdjs sources.
//!
//! This crate provides the three stages applied to every input file:
//!
//! - **Header validation** via [`HeaderTemplate`], which requires the first
//!   three lines to start with the fixed gostdjs preamble
//! - **Comment rewriting** via [`CommentRewriter`], which folds each run of
//!   `//` lines into one `/** ... */` block using the indentation of the run's
//!   first line
//! - **Atomic commit** via [`AtomicReplace`], which stages the new contents in
//!   a sibling temporary file and renames it over the original, preserving its
//!   permission bits
//!
//! [`process_file`] composes the three stages for one path.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use recomment_core::{HeaderTemplate, RewriteOptions, transform};
//!
//! let mut lines: Vec<std::io::Result<String>> = HeaderTemplate::GOSTDJS
//!     .lines()
//!     .iter()
//!     .map(|line| Ok((*line).to_owned()))
//!     .collect();
//! lines.push(Ok("// hello".to_owned()));
//! lines.push(Ok("x := 1".to_owned()));
//!
//! let output = transform(Path::new("a.js"), lines, RewriteOptions::default())?;
//! assert!(output.contents.ends_with("/**\n * hello\n */\nx := 1\n"));
//! # Ok::<(), recomment_core::RecommentError>(())
//! ```

mod commit;
mod error;
mod header;
mod line;
mod pipeline;
mod rewriter;

pub use commit::AtomicReplace;
pub use error::RecommentError;
pub use header::{HEADER_LINES, HeaderTemplate};
pub use line::{Line, LineKind};
pub use pipeline::{FileReport, Transformed, process_file, transform};
pub use rewriter::{CommentRewriter, RewriteOptions, TrailingBlock};

#[cfg(test)]
mod tests;
