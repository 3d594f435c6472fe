//! Configuration schema definitions.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::options::{ExpandOptions, GlobOptions};
use crate::path::normalize;
use crate::pool::DEFAULT_CONCURRENCY;

/// Complete configuration structure.
///
/// Every field is optional so that partial files can be layered on top of
/// each other.
///
/// # Examples
///
/// ```
/// use glob_extra::config::Config;
///
/// let config: Config = serde_yaml::from_str("formats: [.js, .ts]\ndot: true\n").unwrap();
/// assert_eq!(config.formats, Some(vec![".js".to_string(), ".ts".to_string()]));
/// assert_eq!(config.dot, Some(true));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory matched paths are resolved against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    /// Extensions to keep, each with a leading dot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formats: Option<Vec<String>>,

    /// Glob patterns whose matches are dropped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore: Option<Vec<String>>,

    /// Let wildcards match dotfiles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dot: Option<bool>,

    /// Match case-sensitively.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,

    /// Maximum number of concurrent filesystem calls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrency: Option<usize>,
}

impl Config {
    /// The configured root made absolute against `base`, with `~` expanded.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory is needed but unknown.
    pub fn root_path(&self, base: &Path) -> Result<Option<PathBuf>> {
        self.root
            .as_deref()
            .map(|root| normalize(root, base))
            .transpose()
    }

    /// The configured concurrency, or the default.
    #[must_use]
    pub fn concurrency(&self) -> usize {
        self.concurrency.unwrap_or(DEFAULT_CONCURRENCY)
    }

    /// Options for the expansion pass.
    #[must_use]
    pub fn expand_options(&self) -> ExpandOptions {
        let mut options = ExpandOptions::new();
        if let Some(root) = &self.root {
            options = options.with_root(root.clone());
        }
        if let Some(formats) = &self.formats {
            options = options.with_formats(formats.iter().cloned());
        }
        options
    }

    /// Options for the glob engine. The engine's cwd is the root, if set.
    #[must_use]
    pub fn glob_options(&self) -> GlobOptions {
        GlobOptions {
            ignore: self.ignore.clone().filter(|ignore| !ignore.is_empty()),
            cwd: self.root.clone(),
            dot: self.dot,
            case_sensitive: self.case_sensitive,
        }
    }
}
