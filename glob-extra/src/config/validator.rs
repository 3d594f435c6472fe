//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::matcher::compile_ignore;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use glob_extra::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { formats: Some(vec!["js".to_string()]), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for a malformed format or a zero
    /// concurrency, and [`Error::InvalidPattern`] for an ignore pattern that
    /// does not compile.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(formats) = &config.formats {
            for format in formats {
                Self::validate_format(format)?;
            }
        }

        if config.concurrency == Some(0) {
            return Err(Error::Validation {
                field: "concurrency".into(),
                message: "Concurrency must be greater than 0".into(),
            });
        }

        if let Some(ignore) = &config.ignore {
            compile_ignore(ignore, config.case_sensitive.unwrap_or(true))?;
        }

        if let Some(root) = &config.root {
            if root.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "root".into(),
                    message: "Root cannot be empty".into(),
                });
            }
        }

        Ok(())
    }

    /// A format is a dot followed by a non-empty extension with no separators.
    fn validate_format(format: &str) -> Result<()> {
        let Some(extension) = format.strip_prefix('.') else {
            return Err(Error::Validation {
                field: "formats".into(),
                message: format!("Format '{format}' must start with '.'"),
            });
        };

        if extension.is_empty() {
            return Err(Error::Validation {
                field: "formats".into(),
                message: "Format must have at least one character after '.'".into(),
            });
        }

        if extension.contains(['/', '\\']) {
            return Err(Error::Validation {
                field: "formats".into(),
                message: format!("Format '{format}' cannot contain path separators"),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_empty_config() {
        assert!(ConfigValidator::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_formats() {
        assert!(ConfigValidator::validate_format(".js").is_ok());
        assert!(ConfigValidator::validate_format(".tar.gz").is_ok());
        assert!(ConfigValidator::validate_format("js").is_err());
        assert!(ConfigValidator::validate_format(".").is_err());
        assert!(ConfigValidator::validate_format("./x").is_err());
    }

    #[test]
    fn test_validate_zero_concurrency() {
        let config = Config {
            concurrency: Some(0),
            ..Default::default()
        };
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(matches!(err, Error::Validation { field, .. } if field == "concurrency"));
    }

    #[test]
    fn test_validate_bad_ignore_pattern() {
        let config = Config {
            ignore: Some(vec!["src/[".to_string()]),
            ..Default::default()
        };
        assert!(matches!(
            ConfigValidator::validate(&config),
            Err(Error::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_validate_empty_root() {
        let config = Config {
            root: Some(PathBuf::new()),
            ..Default::default()
        };
        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_validate_full_config() {
        let config = Config {
            root: Some(PathBuf::from("/proj")),
            formats: Some(vec![".js".to_string(), ".ts".to_string()]),
            ignore: Some(vec!["**/node_modules/**".to_string()]),
            dot: Some(true),
            case_sensitive: Some(false),
            concurrency: Some(16),
        };
        assert!(ConfigValidator::validate(&config).is_ok());
    }
}
