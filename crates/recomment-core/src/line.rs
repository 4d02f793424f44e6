//! Per-line classification.

const LINE_COMMENT_MARKER: &str = "//";

/// Classification of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A line whose trimmed content starts with `//`.
    Comment,
    /// Anything else, including blank lines.
    Other,
}

/// A borrowed view of one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    index: usize,
    raw: &'a str,
    kind: LineKind,
}

impl<'a> Line<'a> {
    /// Classifies a body line (any line after the preamble).
    ///
    /// `///` is not special-cased: it is a comment like any other.
    #[must_use]
    pub fn classify(index: usize, raw: &'a str) -> Self {
        let kind = if raw.trim().starts_with(LINE_COMMENT_MARKER) {
            LineKind::Comment
        } else {
            LineKind::Other
        };
        Self { index, raw, kind }
    }

    /// 0-based position of the line in its file.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The line exactly as read, without its terminator.
    #[must_use]
    pub const fn raw(&self) -> &'a str {
        self.raw
    }

    /// The line's classification.
    #[must_use]
    pub const fn kind(&self) -> LineKind {
        self.kind
    }

    /// Whitespace preceding the first visible character.
    #[must_use]
    pub fn indent(&self) -> &'a str {
        let visible = self.raw.trim_start();
        self.raw
            .get(..self.raw.len().saturating_sub(visible.len()))
            .unwrap_or_default()
    }

    /// The line with surrounding whitespace removed.
    #[must_use]
    pub fn trimmed(&self) -> &'a str {
        self.raw.trim()
    }

    /// Comment text following the `//` marker, or `None` for non-comments.
    ///
    /// Whitespace after the marker is kept, so `// foo` yields `" foo"`.
    #[must_use]
    pub fn comment_body(&self) -> Option<&'a str> {
        match self.kind {
            LineKind::Comment => self.trimmed().strip_prefix(LINE_COMMENT_MARKER),
            LineKind::Other => None,
        }
    }
}
