//! Utility functions for CLI operations.
//!
//! This module provides common helpers used across CLI commands, including
//! working directory resolution, configuration loading and path display.

use crate::error::CliError;
use glob_extra::path::normalize;
use glob_extra::{Config, ConfigBuilder, Error as LibError};
use std::env;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Directory to start configuration discovery from.
    pub working_dir: Option<PathBuf>,

    /// Skip configuration files.
    pub no_config: bool,
}

/// The directory commands operate relative to.
///
/// An explicit `--working-dir` is normalized (made absolute, `~` expanded)
/// but not canonicalized.
pub fn resolve_working_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    let cwd = env::current_dir()?;
    match &global.working_dir {
        Some(dir) => normalize(dir, &cwd).map_err(CliError::from),
        None => Ok(cwd),
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. `overrides` built from command-line flags (highest priority)
/// 2. Environment variables
/// 3. Configuration files (unless `--no-config`)
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions, overrides: Config) -> Result<Config, CliError> {
    let working_dir = resolve_working_dir(global)?;

    let mut builder = ConfigBuilder::new()
        .with_working_dir(&working_dir)
        .with_config(overrides);
    if global.no_config {
        builder = builder.skip_files();
    }

    builder.build().map_err(config_error)
}

/// Map a library error raised while building configuration.
///
/// Filesystem errors keep their own exit code; everything else is a
/// configuration error.
fn config_error(e: LibError) -> CliError {
    match e {
        LibError::PathNotFound { .. } | LibError::PermissionDenied { .. } => CliError::Library(e),
        other => CliError::Config(other.to_string()),
    }
}

/// Render `path` for output, relative to `base` when requested and possible.
pub fn display_path(path: &Path, base: Option<&Path>) -> String {
    match base.and_then(|base| path.strip_prefix(base).ok()) {
        Some(relative) if !relative.as_os_str().is_empty() => relative.display().to_string(),
        _ => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_path_relative() {
        assert_eq!(
            display_path(Path::new("/repo/src/a.js"), Some(Path::new("/repo"))),
            "src/a.js"
        );
    }

    #[test]
    fn test_display_path_outside_base_stays_absolute() {
        assert_eq!(
            display_path(Path::new("/other/a.js"), Some(Path::new("/repo"))),
            "/other/a.js"
        );
        assert_eq!(display_path(Path::new("/repo/a.js"), None), "/repo/a.js");
    }

    #[test]
    fn test_resolve_working_dir_defaults_to_cwd() {
        let dir = resolve_working_dir(&GlobalOptions::default()).unwrap();
        assert_eq!(dir, env::current_dir().unwrap());
    }

    #[test]
    fn test_resolve_working_dir_relative() {
        let global = GlobalOptions {
            working_dir: Some(PathBuf::from("sub")),
            ..Default::default()
        };
        let dir = resolve_working_dir(&global).unwrap();
        assert_eq!(dir, env::current_dir().unwrap().join("sub"));
    }
}
