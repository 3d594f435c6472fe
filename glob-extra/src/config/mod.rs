//! Configuration system for glob-extra.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (`.glob-extra.yaml` and `.glob-extra.local.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`GLOB_EXTRA_*`)
//! 3. Private project config (`.glob-extra.local.yaml`)
//! 4. Project config (`.glob-extra.yaml`)
//! 5. Built-in defaults
//!
//! Ignore patterns accumulate across all layers instead of replacing each
//! other.
//!
//! # Examples
//!
//! ```
//! use glob_extra::config::{Config, ConfigBuilder};
//! use std::path::PathBuf;
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         root: Some(PathBuf::from("/srv/app")),
//!         formats: Some(vec![".html".to_string()]),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.glob_options().cwd, Some(PathBuf::from("/srv/app")));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, LOCAL_CONFIG_FILE, PROJECT_CONFIG_FILE};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
