//! Command to show the resolved configuration file path.

use crate::error::CliError;
use crate::utils::{resolve_config_path, GlobalOptions};
use clap::Args;

/// Show the resolved configuration file path.
#[derive(Args)]
pub struct ShowPathCommand {}

impl ShowPathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = resolve_config_path(global)?;

        println!("{}", path.display());
        Ok(())
    }
}
