//! List command implementation.
//!
//! This module implements the `list` command, which displays the entries
//! below a path either as an indented tree or as JSON.

use crate::error::CliError;
use crate::utils::{load_entries, validate_entry_path, GlobalOptions};
use cfgtree::Entry;
use clap::{Args, ValueEnum};
use std::io::Write;

/// List the entries below a path.
#[derive(Args)]
pub struct ListCommand {
    /// Dotted entry path to list (defaults to the top level)
    #[arg(value_name = "PATH", default_value = "")]
    pub path: String,

    /// Include all descendants, not just direct children
    #[arg(long, short)]
    pub recursive: bool,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "tree",
        env = "CFGTREE_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,
}

/// Output format for list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented `name = value` lines
    Tree,
    /// JSON format
    Json,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        validate_entry_path(&self.path, true)?;

        let entries = load_entries(global)?;
        let entry = entries.lookup(&self.path).ok_or_else(|| {
            CliError::SemanticFailure(format!("no entry at '{}'", self.path))
        })?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        match self.format {
            OutputFormat::Tree => write_tree(&mut handle, entry, 0, self.recursive)?,
            OutputFormat::Json => write_json(&mut handle, entry, self.recursive)?,
        }

        Ok(())
    }
}

/// Write children as `name = value` lines, indenting nested levels.
fn write_tree(
    out: &mut impl Write,
    entry: &Entry,
    depth: usize,
    recursive: bool,
) -> Result<(), CliError> {
    for (name, child) in entry {
        let indent = "  ".repeat(depth);
        match child.value() {
            Some(value) => writeln!(out, "{indent}{name} = {value}")?,
            None => writeln!(out, "{indent}{name}")?,
        }
        if recursive {
            write_tree(out, child, depth + 1, true)?;
        }
    }
    Ok(())
}

/// Write the entry as JSON. Without `recursive` grandchildren are omitted.
fn write_json(out: &mut impl Write, entry: &Entry, recursive: bool) -> Result<(), CliError> {
    let json = if recursive {
        serde_json::to_value(entry)?
    } else {
        let children: serde_json::Map<String, serde_json::Value> = entry
            .iter()
            .map(|(name, child)| {
                let value = child
                    .value()
                    .map_or(serde_json::Value::Null, serde_json::Value::from);
                (name.to_string(), value)
            })
            .collect();
        serde_json::Value::Object(children)
    };

    serde_json::to_writer_pretty(&mut *out, &json)?;
    writeln!(out)?;
    Ok(())
}
