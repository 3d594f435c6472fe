//! Command to validate a glob-extra configuration file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use glob_extra::config::{ConfigLoader, ConfigValidator};
use std::path::PathBuf;

/// Validate a glob-extra configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !self.config_path.is_file() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.config_path.display()
            )));
        }

        let config = ConfigLoader::load_file(&self.config_path)
            .map_err(|e| CliError::Config(e.to_string()))?;

        ConfigValidator::validate(&config).map_err(|e| CliError::Config(e.to_string()))?;

        if !global.quiet {
            println!("Configuration is valid");
        }
        Ok(())
    }
}
