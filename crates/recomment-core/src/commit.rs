//! Crash-safe in-place replacement of a file's contents.
//!
//! The replacement is staged in a temporary file created next to the target
//! so the final rename stays on one filesystem. Readers observe either the
//! old contents or the new ones, never a mix.

use std::fs::Permissions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};
use tracing::debug;

use crate::error::RecommentError;

/// A pending replacement of `target`.
///
/// Dropping the handle without calling [`AtomicReplace::commit`] deletes the
/// staged file and leaves the target untouched.
#[derive(Debug)]
pub struct AtomicReplace {
    target: PathBuf,
    staged: NamedTempFile,
}

impl AtomicReplace {
    /// Stages a replacement for `target` carrying the given permissions.
    ///
    /// # Errors
    ///
    /// Returns [`RecommentError::WriteFailure`] if the staging file cannot
    /// be created or its permissions cannot be set.
    pub fn begin(target: &Path, permissions: Permissions) -> Result<Self, RecommentError> {
        let directory = staging_directory(target);
        let prefix = target
            .file_name()
            .and_then(|name| name.to_str())
            .map_or_else(|| String::from(".recomment"), |name| format!(".{name}"));

        let staged = Builder::new()
            .prefix(&prefix)
            .suffix(".tmp")
            .tempfile_in(directory)
            .map_err(|err| RecommentError::write(target, err))?;
        // Applied after creation so the process umask cannot narrow the mode.
        staged
            .as_file()
            .set_permissions(permissions)
            .map_err(|err| RecommentError::write(target, err))?;

        debug!(path = %target.display(), staged = %staged.path().display(), "staged replacement");
        Ok(Self {
            target: target.to_path_buf(),
            staged,
        })
    }

    /// Appends bytes to the staged replacement.
    ///
    /// # Errors
    ///
    /// Returns [`RecommentError::WriteFailure`] on I/O failure.
    pub fn write(&mut self, bytes: &[u8]) -> Result<(), RecommentError> {
        self.staged
            .write_all(bytes)
            .map_err(|err| RecommentError::write(&self.target, err))
    }

    /// Flushes, syncs, and renames the staged file over the target.
    ///
    /// # Errors
    ///
    /// Returns [`RecommentError::CommitFailure`] if the data cannot be synced
    /// or the rename fails. The staged file is removed in either case.
    pub fn commit(mut self) -> Result<(), RecommentError> {
        self.staged
            .flush()
            .and_then(|()| self.staged.as_file().sync_all())
            .map_err(|err| RecommentError::commit(&self.target, err))?;
        let Self { target, staged } = self;
        staged
            .persist(&target)
            .map_err(|err| RecommentError::commit(&target, err.error))?;
        debug!(path = %target.display(), "committed replacement");
        Ok(())
    }

    /// Discards the staged replacement.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the staged file cannot be removed.
    pub fn abort(self) -> io::Result<()> {
        self.staged.close()
    }
}

fn staging_directory(target: &Path) -> &Path {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
