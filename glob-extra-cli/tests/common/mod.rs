//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Test data fixtures

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak configuration into tests.
const ISOLATED_VARS: [&str; 7] = [
    "GLOB_EXTRA_ROOT",
    "GLOB_EXTRA_FORMATS",
    "GLOB_EXTRA_IGNORE",
    "GLOB_EXTRA_DOT",
    "GLOB_EXTRA_CASE_SENSITIVE",
    "GLOB_EXTRA_CONCURRENCY",
    "GLOB_EXTRA_LOG_MODE",
];

/// Test environment with an isolated working directory.
///
/// Commands run with the temporary directory as their working directory and
/// with every `GLOB_EXTRA_*` variable cleared.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new, empty test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Create a test environment with the standard file tree.
    pub fn with_sample_tree() -> Self {
        let env = Self::new();
        for file in [
            "src/a.js",
            "src/b.ts",
            "src/.hidden.js",
            "src/nested/c.js",
            "src/nested/d.css",
            "docs/readme.md",
            "node_modules/pkg/index.js",
        ] {
            env.create_file(file);
        }
        env
    }

    /// Get a command builder running in the test directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("glob-extra").expect("Failed to find glob-extra binary");
        cmd.current_dir(&self.temp_path);
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create an empty file (and its parents) under the test directory.
    pub fn create_file(&self, relative: &str) -> PathBuf {
        let path = self.temp_path.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, "").expect("Failed to write test file");
        path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.temp_path.join(relative);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file with the given contents.
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.create_file(relative);
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Absolute path of `relative` inside the test directory, as printed.
    pub fn abs(&self, relative: &str) -> String {
        self.temp_path.join(relative).display().to_string()
    }

    /// Run `expand` with `args` and return stdout lines.
    ///
    /// # Panics
    /// Panics if the command fails.
    pub fn expand(&self, args: &[&str]) -> Vec<String> {
        let output = self
            .command()
            .arg("expand")
            .args(args)
            .output()
            .expect("Failed to run expand command");

        assert!(
            output.status.success(),
            "Expand failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
