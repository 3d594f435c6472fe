//! Build script for glob-extra-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("glob-extra")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Expand paths, directories and glob masks into file lists")
        .long_about(
            "Resolve a mix of file paths, directories and glob masks into a deduplicated list of absolute file paths",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("working-dir")
                .short('C')
                .long("working-dir")
                .help("Directory to start configuration discovery from")
                .value_name("PATH")
                .global(true),
        )
        .arg(
            Arg::new("no-config")
                .long("no-config")
                .help("Ignore .glob-extra.yaml and .glob-extra.local.yaml files")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("expand")
                .about("Expand paths, directories and masks into absolute file paths")
                .long_about(
                    "Expand each input into the files it denotes: files stand for themselves, directories for every file below them, masks for their matches",
                ),
            Command::new("is-mask")
                .about("Report whether each pattern is a glob mask")
                .long_about("Classify patterns as glob masks or literal paths"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a glob-extra configuration file for errors"),
            Command::new("show-config")
                .about("Print the effective configuration")
                .long_about("Print the configuration merged from files, environment and defaults"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").map_err(std::io::Error::other)?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("glob-extra.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
