//! Command to load and validate the configuration.

use crate::error::CliError;
use crate::utils::{self, GlobalOptions};
use clap::Args;

/// Load and validate the configuration.
#[derive(Args)]
pub struct CheckCommand {}

impl CheckCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = utils::load_configuration(global)?;

        if !global.quiet {
            println!(
                "Configuration is valid (environment: {})",
                config.environment
            );
        }
        Ok(())
    }
}
