//! Command to print the resolved environment.

use crate::error::CliError;
use crate::utils::{self, GlobalOptions};
use clap::Args;

/// Print the resolved environment and its predicates.
#[derive(Args)]
pub struct EnvCommand {}

impl EnvCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        utils::load_configuration(global)?;

        let cell = strata::global();
        if let Some(environment) = cell.environment() {
            println!("environment: {environment}");
        }
        println!("production: {}", cell.is_production());
        println!("development: {}", cell.is_development());
        println!("staging: {}", cell.is_staging());
        println!("testing: {}", cell.is_testing());
        Ok(())
    }
}
