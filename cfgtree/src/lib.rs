#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # cfgtree
//!
//! A hierarchical configuration store persisted as an XML document.
//!
//! Settings live in a tree of named [`Entry`] nodes, each with an optional
//! string value. A [`Config`] owns the top-level entries, loads them from a
//! file when opened and writes them back when dropped. Configuration
//! problems never stop the host program: a bad file loads as an empty
//! store, and a failed write is logged as a warning.
//!
//! ## Core Types
//!
//! - [`Config`]: The store bound to a file
//! - [`Entry`]: One node of the tree, with get-or-create child access
//! - [`Document`]: The persisted document model
//! - [`Rgb`]: Hex codec for color values
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use cfgtree::{Config, Rgb};
//!
//! let temp = tempfile::tempdir().unwrap();
//! let path = temp.path().join("config.xml");
//!
//! let mut config = Config::open(&path);
//! let editor = config.entry("editor");
//! editor.entry("tabwidth").set_value(4);
//! editor.entry("colors").entry("cursor").set_value(Rgb::new(0, 65535, 0));
//! config.close().unwrap();
//!
//! let config = Config::open(&path);
//! let editor = config.child("editor").unwrap();
//! assert_eq!(editor.child("tabwidth").unwrap().value_or(8), 4);
//! assert_eq!(config.lookup("editor.colors.cursor").unwrap().value(), Some("00ff00"));
//! ```

pub mod color;
pub mod config;
pub mod document;
pub mod entry;
pub mod error;
pub mod logging;
pub mod path;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at crate root for convenience
pub use color::Rgb;
pub use config::{default_path, Config, State};
pub use document::{Document, Element, Node};
pub use entry::Entry;
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::ensure_dir;
