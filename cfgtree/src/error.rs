//! Error types for the cfgtree library.
//!
//! Only a handful of operations can fail outwardly: persisting the store,
//! creating its parent directories and decoding auxiliary scalar values.
//! Load-time failures are represented here as well, but [`Config::open`]
//! recovers from all of them locally.
//!
//! [`Config::open`]: crate::Config::open

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a cfgtree error.
///
/// # Examples
///
/// ```
/// use cfgtree::{Error, Result};
///
/// fn example_operation() -> Result<u16> {
///     Ok(4)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the cfgtree library.
#[derive(Debug, Error)]
pub enum Error {
    /// A directory on the way to the persistence target could not be created.
    #[error("could not create directory {}: {source}", path.display())]
    PathCreationFailed {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying operating system error.
        #[source]
        source: std::io::Error,
    },

    /// The persisted document is not well-formed.
    #[error("malformed document{}: {reason}", path.as_ref().map(|p| format!(" {}", p.display())).unwrap_or_default())]
    DocumentParse {
        /// The file the document was read from, when known.
        path: Option<PathBuf>,
        /// A description of the problem.
        reason: String,
    },

    /// The document parsed but does not contain the expected root element.
    #[error("document has no '{expected}' root element")]
    MissingRoot {
        /// The root element name that was expected.
        expected: String,
    },

    /// An entry name cannot be written as an element name.
    #[error("invalid entry name '{name}'")]
    InvalidName {
        /// The offending entry name.
        name: String,
    },

    /// A stored color value could not be decoded.
    #[error("invalid color '{value}': {reason}")]
    InvalidColor {
        /// The text that failed to decode.
        value: String,
        /// The reason decoding failed.
        reason: String,
    },

    /// The default configuration location could not be determined.
    #[error("cannot determine home directory (set CFGTREE_CONFIG instead)")]
    NoHomeDirectory,

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error indicates the source file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgtree::Error;
    ///
    /// let err = Error::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    /// Check if error is one that loading recovers from as an empty store.
    #[must_use]
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            Self::Io(_) | Self::DocumentParse { .. } | Self::MissingRoot { .. }
        )
    }
}
