//! Layered configuration assembly.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};

/// Builds a validated [`Config`] from files, environment and overrides.
///
/// The resulting `root`, if any, is absolute.
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Start from built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover files from `dir` instead of the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Do not read configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not read `GLOB_EXTRA_*` variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply `config` on top of everything else.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Load, merge and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory is unavailable, a file
    /// cannot be parsed, an environment variable is malformed, or the merged
    /// configuration fails validation.
    pub fn build(self) -> Result<Config> {
        let working_dir = match self.working_dir {
            Some(dir) => dir,
            None => env::current_dir().map_err(|e| Error::InvalidPath {
                path: PathBuf::from("."),
                reason: format!("Cannot get current directory: {e}"),
            })?,
        };

        let sources = if self.skip_files {
            Vec::new()
        } else {
            ConfigLoader::discover(&working_dir)?
        };
        for source in &sources {
            ConfigValidator::validate(&source.config)?;
        }

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        config.root = config.root_path(&working_dir)?;
        log::debug!("Effective configuration: {config:?}");

        Ok(config)
    }
}
