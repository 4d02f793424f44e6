//! Line-comment to block-comment rewriting.
//!
//! [`CommentRewriter`] is a two-state machine fed one body line at a time.
//! Runs of `//` lines are folded into a single `/** ... */` span whose
//! opening and closing markers reuse the indentation of the run's first
//! line. Every other line passes through byte-for-byte.

use tracing::debug;

use crate::line::{Line, LineKind};

const BLOCK_OPEN: &str = "/**";
const BLOCK_CONTINUATION: &str = " *";
const BLOCK_CLOSE: &str = " */";

/// What to do with a comment block still open at end of input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrailingBlock {
    /// Leave the block unterminated, matching the historical output.
    #[default]
    Leave,
    /// Emit the closing marker after the last comment line.
    Close,
}

/// Options controlling a rewrite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Policy for a comment block that reaches end of input.
    pub trailing_block: TrailingBlock,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Idle,
    InCommentBlock { indent: String, start: usize },
}

/// Streaming rewriter that appends transformed lines to a buffer.
#[derive(Debug)]
pub struct CommentRewriter {
    out: String,
    state: State,
    blocks: usize,
}

impl CommentRewriter {
    /// Creates a rewriter that appends to `out`.
    ///
    /// `out` usually already holds the validated header.
    #[must_use]
    pub const fn new(out: String) -> Self {
        Self {
            out,
            state: State::Idle,
            blocks: 0,
        }
    }

    /// Consumes one classified body line.
    pub fn push(&mut self, line: Line<'_>) {
        match line.kind() {
            LineKind::Comment => {
                if !self.in_block() {
                    self.open_block(&line);
                }
                self.push_comment(line);
            }
            LineKind::Other => {
                self.close_block();
                self.out.push_str(line.raw());
                self.out.push('\n');
            }
        }
    }

    /// Classifies and consumes a raw body line.
    pub fn push_raw(&mut self, index: usize, raw: &str) {
        self.push(Line::classify(index, raw));
    }

    /// Whether a comment block is currently open.
    #[must_use]
    pub const fn in_block(&self) -> bool {
        matches!(self.state, State::InCommentBlock { .. })
    }

    /// Number of comment blocks opened so far.
    #[must_use]
    pub const fn blocks(&self) -> usize {
        self.blocks
    }

    /// Finishes the rewrite and returns the buffer.
    #[must_use]
    pub fn finish(mut self, trailing: TrailingBlock) -> String {
        match trailing {
            TrailingBlock::Close => self.close_block(),
            TrailingBlock::Leave => {
                if let State::InCommentBlock { start, .. } = self.state {
                    debug!(start, "comment block left open at end of input");
                }
            }
        }
        self.out
    }

    fn open_block(&mut self, line: &Line<'_>) {
        let indent = line.indent();
        debug!(line = line.index(), "opening comment block");
        self.out.push_str(indent);
        self.out.push_str(BLOCK_OPEN);
        self.out.push('\n');
        self.state = State::InCommentBlock {
            indent: indent.to_owned(),
            start: line.index(),
        };
        self.blocks = self.blocks.saturating_add(1);
    }

    fn push_comment(&mut self, line: Line<'_>) {
        let State::InCommentBlock { indent, .. } = &self.state else {
            return;
        };
        self.out.push_str(indent);
        self.out.push_str(BLOCK_CONTINUATION);
        self.out.push_str(line.comment_body().unwrap_or_default());
        self.out.push('\n');
    }

    fn close_block(&mut self) {
        if let State::InCommentBlock { indent, start } =
            std::mem::replace(&mut self.state, State::Idle)
        {
            debug!(start, "closing comment block");
            self.out.push_str(&indent);
            self.out.push_str(BLOCK_CLOSE);
            self.out.push('\n');
        }
    }
}
