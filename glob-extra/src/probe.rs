//! Filesystem collaborators.
//!
//! Expansion needs three read-only filesystem operations: a stat probe, a
//! recursive directory listing and absolutization. They sit behind the
//! [`FileSystem`] trait so the expander can run against the real disk
//! ([`SystemFileSystem`]) or an in-memory tree ([`MockFileSystem`]).

use std::collections::{HashMap, HashSet};
use std::env;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::path::absolutize;

/// Read-only filesystem access used during expansion.
pub trait FileSystem: Send + Sync {
    /// Whether `path` is a regular file.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` does not exist or cannot be inspected.
    fn is_file(&self, path: &Path) -> Result<bool>;

    /// Every descendant of the directory at `path`, recursively.
    ///
    /// The listing may contain directories as well as files.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be traversed.
    fn list_tree(&self, path: &Path) -> Result<Vec<PathBuf>>;

    /// `path` made absolute against the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory is unavailable or the path
    /// cannot be resolved.
    fn absolute(&self, path: &Path) -> Result<PathBuf>;
}

/// Map an I/O failure on `path` onto the library error type.
pub(crate) fn io_error(path: &Path, err: io::Error) -> Error {
    match err.kind() {
        ErrorKind::NotFound => Error::PathNotFound {
            path: path.to_path_buf(),
        },
        ErrorKind::PermissionDenied => Error::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => Error::Io(err),
    }
}

/// Filesystem access through `std::fs` and `walkdir`.
///
/// Directory listings are sorted by file name so repeated runs produce the
/// same order. Symlinks are not followed while walking.
///
/// # Examples
///
/// ```no_run
/// use glob_extra::probe::{FileSystem, SystemFileSystem};
/// use std::path::Path;
///
/// let fs = SystemFileSystem;
/// if !fs.is_file(Path::new("src")).unwrap() {
///     for entry in fs.list_tree(Path::new("src")).unwrap() {
///         println!("{}", entry.display());
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFileSystem;

impl FileSystem for SystemFileSystem {
    fn is_file(&self, path: &Path) -> Result<bool> {
        std::fs::metadata(path)
            .map(|metadata| metadata.is_file())
            .map_err(|e| io_error(path, e))
    }

    fn list_tree(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in WalkDir::new(path).min_depth(1).sort_by_file_name() {
            entries.push(entry?.into_path());
        }
        Ok(entries)
    }

    fn absolute(&self, path: &Path) -> Result<PathBuf> {
        if path.is_absolute() {
            return absolutize(path, Path::new("/"));
        }
        let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Cannot get current directory: {e}"),
        })?;
        absolutize(path, &cwd)
    }
}

/// In-memory filesystem for tests.
///
/// Paths are compared component-wise, so `some/path` and `some/path/` are the
/// same entry. Anything not registered does not exist.
///
/// # Examples
///
/// ```
/// use glob_extra::probe::{FileSystem, MockFileSystem};
/// use std::path::{Path, PathBuf};
///
/// let fs = MockFileSystem::new("/work")
///     .with_dir("/work/src", ["/work/src/a.js", "/work/src/nested"])
///     .with_dir("/work/src/nested", Vec::<&str>::new());
///
/// assert!(!fs.is_file(Path::new("/work/src")).unwrap());
/// assert!(fs.is_file(Path::new("/work/src/a.js")).unwrap());
/// assert!(!fs.is_file(Path::new("/work/src/nested")).unwrap());
/// assert_eq!(fs.absolute(Path::new("src/a.js")).unwrap(), PathBuf::from("/work/src/a.js"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    cwd: PathBuf,
    files: HashSet<PathBuf>,
    dirs: HashMap<PathBuf, Vec<PathBuf>>,
    absolutes: HashMap<PathBuf, PathBuf>,
    failures: HashMap<PathBuf, ErrorKind>,
}

impl MockFileSystem {
    /// Create an empty filesystem whose working directory is `cwd`.
    #[must_use]
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            ..Self::default()
        }
    }

    /// Register regular files.
    #[must_use]
    pub fn with_files<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files.extend(files.into_iter().map(Into::into));
        self
    }

    /// Register a directory and its recursive listing.
    ///
    /// Listed entries become files unless they are registered as directories
    /// themselves.
    #[must_use]
    pub fn with_dir<I, P>(mut self, dir: impl Into<PathBuf>, entries: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let entries: Vec<PathBuf> = entries.into_iter().map(Into::into).collect();
        self.files.extend(entries.iter().cloned());
        self.dirs.insert(dir.into(), entries);
        self
    }

    /// Pin the absolute form of `path` instead of joining it onto the cwd.
    #[must_use]
    pub fn with_absolute(mut self, path: impl Into<PathBuf>, absolute: impl Into<PathBuf>) -> Self {
        self.absolutes.insert(path.into(), absolute.into());
        self
    }

    /// Make every operation on `path` fail with an I/O error of `kind`.
    #[must_use]
    pub fn with_failure(mut self, path: impl Into<PathBuf>, kind: ErrorKind) -> Self {
        self.failures.insert(path.into(), kind);
        self
    }

    fn check_failure(&self, path: &Path) -> Result<()> {
        match self.failures.get(path) {
            Some(kind) => Err(io_error(path, io::Error::new(*kind, "injected failure"))),
            None => Ok(()),
        }
    }
}

impl FileSystem for MockFileSystem {
    fn is_file(&self, path: &Path) -> Result<bool> {
        self.check_failure(path)?;
        if self.dirs.contains_key(path) {
            return Ok(false);
        }
        if self.files.contains(path) {
            return Ok(true);
        }
        Err(Error::PathNotFound {
            path: path.to_path_buf(),
        })
    }

    fn list_tree(&self, path: &Path) -> Result<Vec<PathBuf>> {
        self.check_failure(path)?;
        match self.dirs.get(path) {
            Some(entries) => Ok(entries.clone()),
            None if self.files.contains(path) => Err(Error::InvalidPath {
                path: path.to_path_buf(),
                reason: "not a directory".to_string(),
            }),
            None => Err(Error::PathNotFound {
                path: path.to_path_buf(),
            }),
        }
    }

    fn absolute(&self, path: &Path) -> Result<PathBuf> {
        match self.absolutes.get(path) {
            Some(absolute) => Ok(absolute.clone()),
            None => absolutize(path, &self.cwd),
        }
    }
}
