//! Recursive directory creation for the persistence target.
//!
//! [`ensure_dir`] walks up from the requested directory until it finds one
//! that already exists, then creates every missing level on the way back
//! down. Calling it on an existing directory does nothing.

use std::fs::DirBuilder;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

/// Permission bits applied to newly created directories on Unix.
pub const DIR_MODE: u32 = 0o755;

/// Ensures that `dir` and all of its ancestors exist as directories.
///
/// The empty path (the parent of a bare file name) is treated as the
/// current directory and always succeeds.
///
/// # Errors
///
/// Returns [`Error::PathCreationFailed`] naming the first directory that
/// could not be created, e.g. because a regular file is in the way or
/// permission was denied.
///
/// # Examples
///
/// ```
/// use cfgtree::path::ensure_dir;
///
/// let temp = tempfile::tempdir().unwrap();
/// let nested = temp.path().join("a/b/c");
///
/// ensure_dir(&nested).unwrap();
/// assert!(nested.is_dir());
///
/// // Second call is a no-op
/// ensure_dir(&nested).unwrap();
/// ```
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }

    if let Some(parent) = dir.parent() {
        ensure_dir(parent)?;
    }

    create_dir(dir)
}

fn create_dir(dir: &Path) -> Result<()> {
    let mut builder = DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }

    match builder.create(dir) {
        Ok(()) => {
            log::debug!("created directory {}", dir.display());
            Ok(())
        }
        // Lost a race against another creator; fine as long as it is a directory.
        Err(e) if e.kind() == ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        Err(source) => Err(Error::PathCreationFailed {
            path: dir.to_path_buf(),
            source,
        }),
    }
}
