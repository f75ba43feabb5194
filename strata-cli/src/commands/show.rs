//! Command to print the resolved configuration.

use crate::error::CliError;
use crate::utils::{self, GlobalOptions};
use clap::{Args, ValueEnum};

/// Output format for `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// YAML document
    Yaml,
    /// Pretty-printed JSON
    Json,
}

/// Print the resolved configuration.
///
/// The session secret is always redacted.
#[derive(Args)]
pub struct ShowCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

impl ShowCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = utils::load_configuration(global)?;

        let rendered = match self.format {
            OutputFormat::Yaml => serde_yaml::to_string(&*config)
                .map_err(|e| CliError::Serialization(e.to_string()))?,
            OutputFormat::Json => serde_json::to_string_pretty(&*config)
                .map(|json| json + "\n")
                .map_err(|e| CliError::Serialization(e.to_string()))?,
        };

        print!("{rendered}");
        Ok(())
    }
}
