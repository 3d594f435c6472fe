//! Common test utilities for integration tests.
//!
//! This module provides a fixture builder for on-disk file trees.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory populated with files.
///
/// The directory is removed when the fixture is dropped.
pub struct FileTree {
    #[allow(dead_code)]
    temp_dir: TempDir,
    root: PathBuf,
}

#[allow(dead_code)]
impl FileTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");
        Self { temp_dir, root }
    }

    /// Create a tree containing the given files (parent directories included).
    pub fn with_files(files: &[&str]) -> Self {
        let tree = Self::new();
        for file in files {
            tree.file(file);
        }
        tree
    }

    /// The standard fixture used across tests.
    pub fn sample() -> Self {
        Self::with_files(&[
            "src/a.js",
            "src/b.ts",
            "src/.hidden.js",
            "src/nested/c.js",
            "src/nested/d.css",
            "docs/readme.md",
            "node_modules/pkg/index.js",
        ])
    }

    /// Write an empty file at `relative`.
    pub fn file(&self, relative: &str) -> PathBuf {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, "").expect("Failed to write test file");
        path
    }

    /// Create an empty directory at `relative`.
    pub fn dir(&self, relative: &str) -> PathBuf {
        let path = self.root.join(relative);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// The tree's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute paths for `relative` entries.
    pub fn paths(&self, relative: &[&str]) -> Vec<PathBuf> {
        relative.iter().map(|r| self.root.join(r)).collect()
    }
}
