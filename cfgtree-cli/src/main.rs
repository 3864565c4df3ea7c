//! Main entry point for the cfgtree CLI.
//!
//! This is the command-line interface for cfgtree configuration files.
//! It provides commands for inspecting and editing settings:
//! - `get`: Print the value at a dotted path
//! - `set`: Store a value at a dotted path
//! - `has`: Check whether an entry exists
//! - `list`: List the entries below a path
//! - `show-path`: Show the resolved configuration file
//! - `color`: Convert colors to and from their stored form

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library log output to stderr based on verbosity
    cfgtree::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    // Execute the command. Any open store is dropped (and written) before
    // the process exits below.
    let result = match cli.command {
        cli::Command::Get(cmd) => cmd.execute(&global),
        cli::Command::Set(cmd) => cmd.execute(&global),
        cli::Command::Has(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::ShowPath(cmd) => cmd.execute(&global),
        cli::Command::Color(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
