//! Command to store a value.

use crate::error::CliError;
use crate::utils::{open_config, shorten_path, validate_entry_path, GlobalOptions};
use cfgtree::Rgb;
use clap::Args;

/// Store a value at a dotted path, creating missing entries.
#[derive(Args)]
pub struct SetCommand {
    /// Dotted entry path, e.g. `editor.tabwidth`
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Value to store
    #[arg(value_name = "VALUE")]
    pub value: String,

    /// Check that the value is a color and store it in canonical form
    #[arg(long)]
    pub color: bool,
}

impl SetCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        validate_entry_path(&self.path, false)?;

        let value = if self.color {
            self.value.parse::<Rgb>()?.to_string()
        } else {
            self.value
        };

        let mut config = open_config(global)?;
        config.entry_path(&self.path).set_value(&value);

        let location = shorten_path(config.path());
        config.close()?;

        if global.verbose {
            eprintln!("Stored {} = {value} in {location}", self.path);
        }
        Ok(())
    }
}
