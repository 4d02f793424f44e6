//! Per-file composition of header validation, rewriting, and commit.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::{info, info_span};

use crate::commit::AtomicReplace;
use crate::error::RecommentError;
use crate::header::{HEADER_LINES, HeaderTemplate};
use crate::rewriter::{CommentRewriter, RewriteOptions};

/// Summary of a successfully rewritten file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// The file that was rewritten.
    pub path: PathBuf,
    /// Number of lines read, header included.
    pub lines: usize,
    /// Number of block comments emitted.
    pub blocks: usize,
}

/// Output of an in-memory transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    /// The rewritten file contents.
    pub contents: String,
    /// Number of lines read, header included.
    pub lines: usize,
    /// Number of block comments emitted.
    pub blocks: usize,
}

/// Validates the header and rewrites the remaining lines in memory.
///
/// Each header line is checked as soon as it is read, so a wrong banner is
/// reported even if a later line is unreadable. `path` is used only for
/// error reporting.
///
/// # Errors
///
/// Returns [`RecommentError::ReadFailure`] if a line cannot be read and
/// [`RecommentError::HeaderMismatch`] if the preamble is wrong or missing.
pub fn transform<I>(
    path: &Path,
    lines: I,
    options: RewriteOptions,
) -> Result<Transformed, RecommentError>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut numbered = lines.into_iter().enumerate();

    let mut out = String::new();
    for index in 0..HEADER_LINES {
        let Some((_, line)) = numbered.next() else {
            return Err(RecommentError::header_mismatch(path, index));
        };
        let raw = line.map_err(|err| RecommentError::read(path, Some(index), err))?;
        HeaderTemplate::GOSTDJS.check_line(path, index, &raw)?;
        out.push_str(&raw);
        out.push('\n');
    }

    let mut count = HEADER_LINES;
    let mut rewriter = CommentRewriter::new(out);
    for (index, line) in numbered {
        let raw = line.map_err(|err| RecommentError::read(path, Some(index), err))?;
        rewriter.push_raw(index, &raw);
        count = index.saturating_add(1);
    }

    let blocks = rewriter.blocks();
    Ok(Transformed {
        contents: rewriter.finish(options.trailing_block),
        lines: count,
        blocks,
    })
}

/// Rewrites the comments of one file and replaces it atomically.
///
/// The original is stat'ed through its open handle, fully read, and closed
/// before the replacement is committed. On any error the original file is
/// left as it was.
///
/// # Errors
///
/// Returns the first [`RecommentError`] encountered at any stage.
pub fn process_file(path: &Path, options: RewriteOptions) -> Result<FileReport, RecommentError> {
    let span = info_span!("rewrite_file", path = %path.display());
    let _entered = span.enter();

    let source = File::open(path).map_err(|err| RecommentError::read(path, None, err))?;
    let mut reader = BufReader::new(source);
    let transformed = transform(path, reader.by_ref().lines(), options)?;

    let permissions = reader
        .get_ref()
        .metadata()
        .map_err(|err| RecommentError::stat(path, err))?
        .permissions();

    let mut replacement = AtomicReplace::begin(path, permissions)?;
    replacement.write(transformed.contents.as_bytes())?;
    drop(reader);
    replacement.commit()?;

    info!(
        lines = transformed.lines,
        blocks = transformed.blocks,
        "rewrote comments"
    );
    Ok(FileReport {
        path: path.to_path_buf(),
        lines: transformed.lines,
        blocks: transformed.blocks,
    })
}
