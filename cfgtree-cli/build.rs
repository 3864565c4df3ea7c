//! Build script for cfgtree-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("cfgtree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Read and write hierarchical configuration files")
        .long_about(
            "Command-line tool for inspecting and editing cfgtree configuration files by dotted entry path",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Override the configuration file location")
                .value_name("PATH")
                .global(true)
                .env("CFGTREE_CONFIG"),
        )
        .subcommands(vec![
            Command::new("get")
                .about("Print the value stored at a dotted path")
                .long_about("Print the value stored at a dotted path, failing if none is stored"),
            Command::new("set")
                .about("Store a value at a dotted path")
                .long_about("Store a value at a dotted path, creating missing entries"),
            Command::new("has")
                .about("Check whether an entry exists")
                .long_about("Exit successfully if the entry exists, with status 1 otherwise"),
            Command::new("list")
                .about("List the entries below a path")
                .long_about("Display the entries below a path as a tree or as JSON"),
            Command::new("show-path")
                .about("Show the resolved configuration file path")
                .long_about("Display the path of the configuration file commands operate on"),
            Command::new("color")
                .about("Convert colors to and from their stored hex form")
                .long_about("Encode 16-bit RGB channels as six hex digits, or decode them"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main cfgtree.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("cfgtree.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
