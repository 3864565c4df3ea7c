//! Command to print a stored value.

use crate::error::CliError;
use crate::utils::{load_entries, validate_entry_path, GlobalOptions};
use clap::Args;

/// Print the value stored at a dotted path.
#[derive(Args)]
pub struct GetCommand {
    /// Dotted entry path, e.g. `editor.tabwidth`
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Print this instead of failing when no value is stored
    #[arg(long, value_name = "VALUE")]
    pub default: Option<String>,
}

impl GetCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        validate_entry_path(&self.path, false)?;

        let entries = load_entries(global)?;
        let value = entries
            .lookup(&self.path)
            .and_then(|entry| entry.value())
            .map(str::to_string)
            .or(self.default);

        match value {
            Some(value) => {
                println!("{value}");
                Ok(())
            }
            None => Err(CliError::SemanticFailure(format!(
                "no value stored at '{}'",
                self.path
            ))),
        }
    }
}
