//! Error types for the glob-extra library.
//!
//! Path expansion produces exactly one error of its own, [`Error::NoMatch`].
//! Everything else originates in a collaborator (glob engine, filesystem
//! probe, directory lister, absolutizer) or in the configuration layer and is
//! passed through to the caller untouched.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a glob-extra error.
///
/// # Examples
///
/// ```
/// use glob_extra::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the glob-extra library.
#[derive(Debug, Error)]
pub enum Error {
    /// A pattern matched nothing through the glob engine.
    #[error("Cannot find files by mask {pattern}")]
    NoMatch {
        /// The exact pattern that produced no matches.
        pattern: String,
    },

    /// A glob pattern could not be compiled.
    #[error("invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// Why the pattern was rejected.
        reason: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Recursive directory traversal failed.
    #[error("directory traversal error: {0}")]
    Walk(#[from] walkdir::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error reports a pattern without matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use glob_extra::Error;
    ///
    /// let err = Error::NoMatch { pattern: "src/*.js".to_string() };
    /// assert!(err.is_no_match());
    /// ```
    #[must_use]
    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch { .. })
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use glob_extra::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use glob_extra::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PermissionDenied { path: PathBuf::from("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}
