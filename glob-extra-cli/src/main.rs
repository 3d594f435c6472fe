//! Main entry point for the glob-extra CLI.
//!
//! This is the command-line interface for the glob-extra path expander.
//! It provides commands for:
//! - `expand`: Expand paths, directories and masks into a file list
//! - `is-mask`: Classify patterns as masks or literal paths
//! - `validate`: Validate a configuration file
//! - `show-config`: Print the effective configuration
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let logger = glob_extra::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        eprintln!("Warning: failed to install logger: {e}");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        working_dir: cli.working_dir,
        no_config: cli.no_config,
    };

    let result = match cli.command {
        cli::Command::Expand(cmd) => cmd.execute(&global),
        cli::Command::IsMask(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::ShowConfig(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
