//! Environment variable handling for configuration overrides.
//!
//! `GLOB_EXTRA_*` variables override configuration file values.

use std::env;
use std::path::PathBuf;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Overrides [`Config::root`].
pub const ROOT_ENV: &str = "GLOB_EXTRA_ROOT";
/// Overrides [`Config::formats`] (comma-separated).
pub const FORMATS_ENV: &str = "GLOB_EXTRA_FORMATS";
/// Adds to [`Config::ignore`] (comma-separated).
pub const IGNORE_ENV: &str = "GLOB_EXTRA_IGNORE";
/// Overrides [`Config::dot`].
pub const DOT_ENV: &str = "GLOB_EXTRA_DOT";
/// Overrides [`Config::case_sensitive`].
pub const CASE_SENSITIVE_ENV: &str = "GLOB_EXTRA_CASE_SENSITIVE";
/// Overrides [`Config::concurrency`].
pub const CONCURRENCY_ENV: &str = "GLOB_EXTRA_CONCURRENCY";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use glob_extra::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a boolean or numeric variable cannot be parsed.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(root) = env::var(ROOT_ENV) {
            if !root.is_empty() {
                config.root = Some(PathBuf::from(root));
            }
        }

        if let Ok(formats) = env::var(FORMATS_ENV) {
            config.formats = Some(Self::parse_list(&formats));
        }

        if let Ok(ignore) = env::var(IGNORE_ENV) {
            let patterns = Self::parse_list(&ignore);
            match &mut config.ignore {
                Some(existing) => existing.extend(patterns),
                None => config.ignore = Some(patterns),
            }
        }

        if let Ok(val) = env::var(DOT_ENV) {
            config.dot = Some(Self::parse_bool(DOT_ENV, &val)?);
        }

        if let Ok(val) = env::var(CASE_SENSITIVE_ENV) {
            config.case_sensitive = Some(Self::parse_bool(CASE_SENSITIVE_ENV, &val)?);
        }

        if let Ok(val) = env::var(CONCURRENCY_ENV) {
            config.concurrency = Some(val.trim().parse().map_err(|_| Error::Validation {
                field: CONCURRENCY_ENV.into(),
                message: "Must be a positive integer".into(),
            })?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    /// Split a comma-separated list, dropping blank items.
    fn parse_list(s: &str) -> Vec<String> {
        s.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ALL_VARS: [&str; 6] = [
        ROOT_ENV,
        FORMATS_ENV,
        IGNORE_ENV,
        DOT_ENV,
        CASE_SENSITIVE_ENV,
        CONCURRENCY_ENV,
    ];

    fn clear_env() {
        for var in ALL_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_parse_bool_variants() {
        for s in ["true", "1", "YES", "On"] {
            assert!(EnvironmentConfig::parse_bool("test", s).unwrap());
        }
        for s in ["false", "0", "no", "OFF"] {
            assert!(!EnvironmentConfig::parse_bool("test", s).unwrap());
        }
        assert!(EnvironmentConfig::parse_bool("test", "maybe").is_err());
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(
            EnvironmentConfig::parse_list(" .js, .ts ,,"),
            vec![".js".to_string(), ".ts".to_string()]
        );
        assert!(EnvironmentConfig::parse_list("").is_empty());
    }

    #[test]
    #[serial]
    fn test_apply_overrides_no_env_vars() {
        clear_env();
        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_apply_overrides_scalars() {
        clear_env();
        env::set_var(ROOT_ENV, "/env/root");
        env::set_var(FORMATS_ENV, ".md");
        env::set_var(DOT_ENV, "yes");
        env::set_var(CONCURRENCY_ENV, "3");

        let mut config = Config {
            formats: Some(vec![".js".to_string()]),
            ..Default::default()
        };
        let result = EnvironmentConfig::apply_overrides(&mut config);
        clear_env();

        result.unwrap();
        assert_eq!(config.root, Some(PathBuf::from("/env/root")));
        assert_eq!(config.formats, Some(vec![".md".to_string()]));
        assert_eq!(config.dot, Some(true));
        assert_eq!(config.concurrency, Some(3));
    }

    #[test]
    #[serial]
    fn test_ignore_accumulates() {
        clear_env();
        env::set_var(IGNORE_ENV, "dist/**,coverage/**");

        let mut config = Config {
            ignore: Some(vec!["node_modules/**".to_string()]),
            ..Default::default()
        };
        let result = EnvironmentConfig::apply_overrides(&mut config);
        clear_env();

        result.unwrap();
        assert_eq!(
            config.ignore,
            Some(vec![
                "node_modules/**".to_string(),
                "dist/**".to_string(),
                "coverage/**".to_string(),
            ])
        );
    }

    #[test]
    #[serial]
    fn test_invalid_concurrency() {
        clear_env();
        env::set_var(CONCURRENCY_ENV, "lots");
        let result = EnvironmentConfig::apply_overrides(&mut Config::default());
        clear_env();

        assert!(matches!(result, Err(Error::Validation { field, .. }) if field == CONCURRENCY_ENV));
    }
}
