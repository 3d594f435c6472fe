//! Expand command implementation.
//!
//! This module implements the `expand` command, which resolves paths,
//! directories and glob masks into a deduplicated list of files and prints
//! it in one of several formats.

use crate::error::CliError;
use crate::utils::{display_path, load_configuration, resolve_working_dir, GlobalOptions};
use clap::{Args, ValueEnum};
use glob_extra::{Config, PathExpander};
use std::io::{self, Write};
use std::path::PathBuf;

/// Expand paths, directories and masks into absolute file paths.
#[derive(Args)]
pub struct ExpandCommand {
    /// Files, directories or glob masks to expand
    #[arg(value_name = "PATTERNS", required = true)]
    pub patterns: Vec<String>,

    /// Resolve matched paths against this directory
    #[arg(long, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Keep only files with this extension, including the dot (repeatable)
    #[arg(long = "format", value_name = "EXT", value_delimiter = ',')]
    pub formats: Vec<String>,

    /// Drop matches of this glob (repeatable)
    #[arg(long = "ignore", value_name = "GLOB")]
    pub ignore: Vec<String>,

    /// Let wildcards match names starting with '.'
    #[arg(long)]
    pub dot: bool,

    /// Match patterns case-insensitively
    #[arg(long)]
    pub case_insensitive: bool,

    /// Maximum number of concurrent filesystem calls
    #[arg(long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value = "lines", ignore_case = true)]
    pub output: OutputFormat,

    /// Print paths relative to the root (or working directory)
    #[arg(long)]
    pub relative: bool,
}

/// Output format for the expand command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One path per line
    Lines,
    /// JSON array of strings
    Json,
    /// NUL-terminated paths, for `xargs -0`
    Null,
}

impl ExpandCommand {
    /// Execute the expand command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.concurrency == Some(0) {
            return Err(CliError::InvalidArguments(
                "--concurrency must be greater than 0".to_string(),
            ));
        }

        let overrides = self.config_overrides();
        let mut config = load_configuration(global, overrides)?;

        // Without a root, both passes work from the working directory.
        if config.root.is_none() {
            config.root = Some(resolve_working_dir(global)?);
        }

        let expander = PathExpander::default().with_concurrency(config.concurrency());
        let paths = expander.expand(
            self.patterns.clone(),
            &config.expand_options(),
            &config.glob_options(),
        )?;
        log::info!(
            "Expanded {} pattern(s) into {} file(s)",
            self.patterns.len(),
            paths.len()
        );

        let base = if self.relative {
            config.root.as_deref()
        } else {
            None
        };
        let rendered: Vec<String> = paths.iter().map(|p| display_path(p, base)).collect();

        let stdout = io::stdout();
        let mut out = stdout.lock();
        match self.output {
            OutputFormat::Lines => {
                for path in &rendered {
                    writeln!(out, "{path}")?;
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&rendered)
                    .map_err(|e| CliError::Io(io::Error::other(e)))?;
                writeln!(out, "{json}")?;
            }
            OutputFormat::Null => {
                for path in &rendered {
                    write!(out, "{path}\0")?;
                }
            }
        }
        out.flush()?;

        Ok(())
    }

    /// Flags that override file and environment configuration.
    fn config_overrides(&self) -> Config {
        Config {
            root: self.root.clone(),
            formats: (!self.formats.is_empty()).then(|| self.formats.clone()),
            ignore: (!self.ignore.is_empty()).then(|| self.ignore.clone()),
            dot: self.dot.then_some(true),
            case_sensitive: self.case_insensitive.then_some(false),
            concurrency: self.concurrency,
        }
    }
}
