//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Project configuration file name.
pub const PROJECT_CONFIG_FILE: &str = ".glob-extra.yaml";

/// Private, uncommitted configuration file name.
pub const LOCAL_CONFIG_FILE: &str = ".glob-extra.local.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use glob_extra::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::discover(Path::new(".")).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover configuration files by walking up from `start_dir`.
    ///
    /// Stops at the first directory containing either file. The project file
    /// has precedence 1 and the local file precedence 2. Sources are returned
    /// lowest precedence first.
    ///
    /// # Errors
    ///
    /// Returns an error if any discovered file cannot be read or parsed.
    pub fn discover(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();
        let mut current = start_dir.to_path_buf();

        loop {
            for (name, precedence) in [(PROJECT_CONFIG_FILE, 1), (LOCAL_CONFIG_FILE, 2)] {
                let path = current.join(name);
                if path.is_file() {
                    log::debug!("Loading configuration from {}", path.display());
                    let mut config = Self::load_file(&path)?;
                    Self::anchor_root(&mut config, &current);
                    sources.push(ConfigSource {
                        path,
                        precedence,
                        config,
                    });
                }
            }

            if !sources.is_empty() || !current.pop() {
                break;
            }
        }

        Ok(sources)
    }

    /// Make a relative `root` relative to the directory of the file that set it.
    ///
    /// Roots starting with `~` are left for tilde expansion.
    fn anchor_root(config: &mut Config, dir: &Path) {
        if let Some(root) = &config.root {
            if root.is_relative() && !root.starts_with("~") {
                config.root = Some(dir.join(root));
            }
        }
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file is an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }
}
