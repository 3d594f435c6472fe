//! Command to print the effective configuration.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use glob_extra::Config;

/// Print the merged configuration from files, environment and defaults.
#[derive(Args)]
pub struct ShowConfigCommand {
    /// Print JSON instead of YAML
    #[arg(long)]
    pub json: bool,
}

impl ShowConfigCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global, Config::default())?;

        let rendered = if self.json {
            serde_json::to_string_pretty(&config).map_err(|e| CliError::Config(e.to_string()))?
        } else {
            serde_yaml::to_string(&config).map_err(|e| CliError::Config(e.to_string()))?
        };

        println!("{}", rendered.trim_end());
        Ok(())
    }
}
