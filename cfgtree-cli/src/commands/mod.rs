//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `get`: Print the value at a dotted path
//! - `set`: Store a value at a dotted path
//! - `has`: Check whether an entry exists
//! - `list`: List the entries below a path
//! - `show_path`: Show the resolved configuration file path
//! - `color`: Encode and decode stored colors

pub mod color;
pub mod get;
pub mod has;
pub mod list;
pub mod set;
pub mod show_path;

pub use color::ColorCommand;
pub use get::GetCommand;
pub use has::HasCommand;
pub use list::ListCommand;
pub use set::SetCommand;
pub use show_path::ShowPathCommand;
