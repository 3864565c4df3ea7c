//! Command to check whether an entry exists.

use crate::error::CliError;
use crate::utils::{load_entries, validate_entry_path, GlobalOptions};
use clap::Args;

/// Check whether an entry exists. Exits with 1 if it does not.
#[derive(Args)]
pub struct HasCommand {
    /// Dotted entry path, e.g. `editor.colors`
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl HasCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        validate_entry_path(&self.path, false)?;

        if load_entries(global)?.lookup(&self.path).is_some() {
            if !global.quiet {
                println!("yes");
            }
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "no entry at '{}'",
                self.path
            )))
        }
    }
}
