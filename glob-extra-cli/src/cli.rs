//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, ExpandCommand, IsMaskCommand, ShowConfigCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for expanding paths, directories and glob masks.
#[derive(Parser)]
#[command(name = "glob-extra")]
#[command(
    version,
    about = "Expand paths, directories and glob masks into file lists",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Directory to start configuration discovery from (default: current directory)
    #[arg(short = 'C', long, value_name = "PATH", global = true)]
    pub working_dir: Option<PathBuf>,

    /// Ignore .glob-extra.yaml and .glob-extra.local.yaml files
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Expand paths, directories and masks into absolute file paths
    Expand(ExpandCommand),

    /// Report whether each pattern is a glob mask
    IsMask(IsMaskCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Print the effective configuration
    ShowConfig(ShowConfigCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
