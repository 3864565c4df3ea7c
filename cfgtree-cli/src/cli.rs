//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    ColorCommand, GetCommand, HasCommand, ListCommand, SetCommand, ShowPathCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for reading and writing cfgtree configuration files.
#[derive(Parser)]
#[command(name = "cfgtree")]
#[command(version, about = "Read and write hierarchical configuration files", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the configuration file location
    #[arg(long, value_name = "PATH", global = true, env = "CFGTREE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the value stored at a dotted path
    Get(GetCommand),

    /// Store a value at a dotted path
    Set(SetCommand),

    /// Check whether an entry exists
    Has(HasCommand),

    /// List the entries below a path
    List(ListCommand),

    /// Show the resolved configuration file path
    ShowPath(ShowPathCommand),

    /// Convert colors to and from their stored hex form
    Color(ColorCommand),
}
