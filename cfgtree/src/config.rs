//! The root configuration store.
//!
//! A [`Config`] owns the top-level forest of entries and the path of the
//! document it was loaded from. Loading never fails: a missing, unreadable,
//! malformed or foreign file yields an empty store. On teardown the store
//! writes itself back to the same path, creating parent directories as
//! needed; a failed write is logged as a warning and otherwise ignored.
//!
//! # Examples
//!
//! ```
//! use cfgtree::Config;
//!
//! let temp = tempfile::tempdir().unwrap();
//! let path = temp.path().join("nested/dir/config.xml");
//!
//! {
//!     let mut config = Config::open(&path);
//!     config.entry("editor").entry("tabwidth").set_value(4);
//! } // written here
//!
//! let config = Config::open(&path);
//! assert_eq!(config.lookup("editor.tabwidth").unwrap().value(), Some("4"));
//! ```

use std::env;
use std::path::{Path, PathBuf};

use crate::document::{Document, Element, ROOT_ELEMENT};
use crate::entry::{Entry, Iter, IterMut};
use crate::error::{Error, Result};
use crate::path::ensure_dir;

/// Environment variable overriding the default store location.
pub const CONFIG_ENV: &str = "CFGTREE_CONFIG";

/// Directory under the home directory holding the default store.
const DEFAULT_DIR: &str = ".cfgtree";

/// File name of the default store.
const DEFAULT_FILE: &str = "config.xml";

/// Persistence state of a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Loaded (possibly empty) and not yet written back.
    Loaded,
    /// Written back successfully.
    Flushed,
    /// Writing back failed; the failure was reported.
    FlushFailed,
}

/// Hierarchical configuration store bound to a document file.
#[derive(Debug)]
pub struct Config {
    path: PathBuf,
    root: Entry,
    state: State,
}

impl Config {
    /// Opens the store backed by `path`.
    ///
    /// Any problem reading the file is logged at debug level and results
    /// in an empty store. The file is not created until teardown.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let root = match load_forest(&path) {
            Ok(root) => {
                log::debug!("loaded {} entries from {}", root.len(), path.display());
                root
            }
            Err(e) if e.is_not_found() => {
                log::debug!("no config at {}, starting empty", path.display());
                Entry::default()
            }
            Err(e) => {
                log::debug!("ignoring config at {}: {e}", path.display());
                Entry::default()
            }
        };

        Self {
            path,
            root,
            state: State::Loaded,
        }
    }

    /// Opens the store at [`default_path`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoHomeDirectory`] if no location can be resolved.
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(default_path()?))
    }

    /// Loads the entries stored at `path` with the same tolerance as
    /// [`open`](Self::open), without binding a store to the file.
    ///
    /// Nothing is written back, which suits read-only inspection.
    #[must_use]
    pub fn snapshot(path: &Path) -> Entry {
        load_forest(path).unwrap_or_default()
    }

    /// Returns the document path used for loading and saving.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the persistence state.
    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns the forest as an entry without a value.
    #[must_use]
    pub fn root(&self) -> &Entry {
        &self.root
    }

    /// Returns the top-level entry called `name`, creating it if missing.
    pub fn entry(&mut self, name: &str) -> &mut Entry {
        self.root.entry(name)
    }

    /// Returns the top-level entry called `name` without creating it.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Entry> {
        self.root.child(name)
    }

    /// Checks whether a top-level entry called `name` exists.
    #[must_use]
    pub fn has_entry(&self, name: &str) -> bool {
        self.root.has_entry(name)
    }

    /// Follows a dotted path without creating anything.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&Entry> {
        self.root.lookup(path)
    }

    /// Follows a dotted path, creating missing entries.
    pub fn entry_path(&mut self, path: &str) -> &mut Entry {
        self.root.entry_path(path)
    }

    /// Number of top-level entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// True when the store has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.len() == 0
    }

    /// Iterates over top-level entries in name order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        self.root.iter()
    }

    /// Iterates mutably over top-level entries in name order.
    pub fn iter_mut(&mut self) -> IterMut<'_> {
        self.root.iter_mut()
    }

    /// Builds the document that teardown would write.
    #[must_use]
    pub fn to_document(&self) -> Document {
        let mut root = Element::new(ROOT_ELEMENT);
        self.root.save(&mut root);
        Document::with_root(root)
    }

    /// Writes the store to its path now.
    ///
    /// This does not change [`state`](Self::state); teardown still writes
    /// again unless [`close`](Self::close) is used.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidName`] if an entry name cannot be stored
    /// - [`Error::PathCreationFailed`] if the parent directory cannot be created
    /// - [`Error::Io`] if the file cannot be written
    pub fn persist(&self) -> Result<()> {
        if let Some(name) = self.root.first_invalid_name() {
            return Err(Error::InvalidName {
                name: name.to_string(),
            });
        }

        let document = self.to_document();
        if let Some(dir) = self.path.parent() {
            ensure_dir(dir)?;
        }
        document.write_to_file(&self.path)?;

        log::debug!("wrote config to {}", self.path.display());
        Ok(())
    }

    /// Writes the store and consumes it, reporting failure to the caller
    /// instead of only logging it.
    ///
    /// # Errors
    ///
    /// Same as [`persist`](Self::persist).
    pub fn close(mut self) -> Result<()> {
        let result = self.persist();
        self.state = if result.is_ok() {
            State::Flushed
        } else {
            State::FlushFailed
        };
        result
    }
}

impl Drop for Config {
    fn drop(&mut self) {
        if self.state != State::Loaded {
            return;
        }

        match self.persist() {
            Ok(()) => self.state = State::Flushed,
            Err(e) => {
                log::warn!("could not write config file {}: {e}", self.path.display());
                self.state = State::FlushFailed;
            }
        }
    }
}

impl<'a> IntoIterator for &'a Config {
    type Item = (&'a str, &'a Entry);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Resolves the default store location.
///
/// The resolution order is:
/// 1. `$CFGTREE_CONFIG` if set and non-empty
/// 2. `~/.cfgtree/config.xml` otherwise
///
/// # Errors
///
/// Returns [`Error::NoHomeDirectory`] if the home directory cannot be
/// determined and `CFGTREE_CONFIG` is not set.
pub fn default_path() -> Result<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let home = home::home_dir().ok_or(Error::NoHomeDirectory)?;
    Ok(home.join(DEFAULT_DIR).join(DEFAULT_FILE))
}

fn load_forest(path: &Path) -> Result<Entry> {
    let document = Document::read_file(path)?;
    let root = document
        .root()
        .filter(|root| root.name() == ROOT_ELEMENT)
        .ok_or_else(|| Error::MissingRoot {
            expected: ROOT_ELEMENT.to_string(),
        })?;

    let mut forest = Entry::default();
    forest.load_children(root);
    Ok(forest)
}
