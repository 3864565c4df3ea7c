//! Command to convert colors to and from their stored form.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use cfgtree::Rgb;
use clap::{Args, Subcommand};

/// Convert colors to and from their stored hex form.
#[derive(Args)]
pub struct ColorCommand {
    #[command(subcommand)]
    pub action: ColorAction,
}

/// Color conversions.
#[derive(Subcommand)]
pub enum ColorAction {
    /// Encode 16-bit channels as six hex digits
    Encode {
        /// Red channel (0-65535)
        red: u16,
        /// Green channel (0-65535)
        green: u16,
        /// Blue channel (0-65535)
        blue: u16,
    },

    /// Decode six hex digits into 16-bit channels
    Decode {
        /// Stored color, e.g. `ff0000`
        #[arg(value_name = "HEX")]
        hex: String,
    },
}

impl ColorCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        match self.action {
            ColorAction::Encode { red, green, blue } => {
                println!("{}", Rgb::new(red, green, blue));
            }
            ColorAction::Decode { hex } => {
                let color: Rgb = hex.parse()?;
                println!("{} {} {}", color.red, color.green, color.blue);
            }
        }
        Ok(())
    }
}
