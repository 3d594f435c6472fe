//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `expand`: Expand paths, directories and masks into a file list
//! - `is_mask`: Classify patterns as masks or literal paths
//! - `validate`: Validate configuration file
//! - `show_config`: Print the effective configuration
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod expand;
pub mod is_mask;
pub mod show_config;
pub mod validate;

pub use completions::CompletionsCommand;
pub use expand::ExpandCommand;
pub use is_mask::IsMaskCommand;
pub use show_config::ShowConfigCommand;
pub use validate::ValidateCommand;
