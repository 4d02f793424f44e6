//! Validation of the fixed three-line file preamble.
//!
//! Every input file must open with a banner, a copyright notice, and a
//! licence continuation line. The check is prefix-based: anything after the
//! required text on the same line is accepted and copied through untouched.
//! Lines are checked one at a time as they are read, so a bad banner is
//! reported before anything further in the file is scanned.

use std::path::Path;

use crate::error::RecommentError;

/// Number of lines the preamble occupies.
pub const HEADER_LINES: usize = 3;

/// The required prefixes of the first [`HEADER_LINES`] lines of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderTemplate {
    lines: [&'static str; HEADER_LINES],
}

impl HeaderTemplate {
    /// The gostdjs banner, copyright, and licence preamble.
    pub const GOSTDJS: Self = Self {
        lines: [
            "// gostdjs version 0.1",
            "// Copyright 2017 The Go Authors. All rights reserved. Use of this source code",
            "// is governed by a BSD-style license that can be found in the LICENSE file.",
        ],
    };

    /// The required prefixes in file order.
    #[must_use]
    pub const fn lines(&self) -> &[&'static str; HEADER_LINES] {
        &self.lines
    }

    /// Checks line `index` of the file against its required prefix.
    ///
    /// Lines past the preamble carry no requirement and always pass.
    ///
    /// # Errors
    ///
    /// Returns [`RecommentError::HeaderMismatch`] if `raw` does not start
    /// with the prefix expected at `index`.
    pub fn check_line(&self, path: &Path, index: usize, raw: &str) -> Result<(), RecommentError> {
        match self.lines.get(index) {
            Some(prefix) if !raw.starts_with(prefix) => {
                Err(RecommentError::header_mismatch(path, index))
            }
            Some(_) | None => Ok(()),
        }
    }
}
