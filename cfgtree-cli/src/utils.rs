//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration file resolution, entry path validation and
//! path display.

use crate::error::CliError;
use cfgtree::document::is_valid_name;
use cfgtree::entry::path_segments;
use cfgtree::{Config, Entry};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the configuration file location.
    pub config: Option<PathBuf>,
}

/// Resolve the configuration file path.
///
/// Priority: `--config` (or `CFGTREE_CONFIG`, which clap folds into it) >
/// `~/.cfgtree/config.xml`.
pub fn resolve_config_path(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match global.config {
        Some(ref path) => Ok(path.clone()),
        None => Ok(cfgtree::default_path()?),
    }
}

/// Open the configuration store for modification.
///
/// The store is written back when the returned value is closed or dropped.
pub fn open_config(global: &GlobalOptions) -> Result<Config, CliError> {
    Ok(Config::open(resolve_config_path(global)?))
}

/// Load the stored entries for read-only use. Never writes the file.
pub fn load_entries(global: &GlobalOptions) -> Result<Entry, CliError> {
    Ok(Config::snapshot(&resolve_config_path(global)?))
}

/// Validate a dotted entry path given on the command line.
///
/// Every segment must be storable as an element name; `\.` puts a dot
/// inside a name. The path must name at least one entry unless
/// `allow_root` is set.
pub fn validate_entry_path(path: &str, allow_root: bool) -> Result<(), CliError> {
    let segments = path_segments(path);

    if segments.is_empty() && !allow_root {
        return Err(CliError::InvalidArguments(format!(
            "entry path '{path}' does not name an entry"
        )));
    }

    if let Some(bad) = segments.iter().find(|segment| !is_valid_name(segment)) {
        return Err(CliError::InvalidArguments(format!(
            "'{bad}' is not a valid entry name"
        )));
    }

    Ok(())
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
/// Otherwise, show the full path.
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}
