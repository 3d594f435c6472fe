//! Path normalization functions.
//!
//! This module provides functionality to normalize paths by:
//! - Expanding tilde (~) to the home directory
//! - Joining relative paths onto a base directory
//! - Resolving `.` and `..` components lexically
//!
//! None of these functions touch the filesystem apart from looking up the
//! home directory, so they work for paths that do not exist.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user` syntax.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains invalid UTF-8
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use glob_extra::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/project")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("project"));
///
/// let untouched = expand_tilde(Path::new("/absolute")).unwrap();
/// assert_eq!(untouched, Path::new("/absolute"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Path contains invalid UTF-8".to_string(),
    })?;

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        Ok(home.join(&path_str[2..]))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Resolve `.` and `..` components in a path.
///
/// Trailing separators disappear as a side effect of walking components.
///
/// # Errors
///
/// Returns an error if a relative path contains more `..` components than
/// normal ones. On an absolute path, extra `..` components stop at the root.
///
/// # Examples
///
/// ```
/// use glob_extra::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// let resolved = resolve_components(Path::new("/a/./b/../c/")).unwrap();
/// assert_eq!(resolved, PathBuf::from("/a/c"));
/// ```
pub fn resolve_components(path: &Path) -> Result<PathBuf> {
    let mut result = PathBuf::new();
    let mut has_root = false;

    for component in path.components() {
        match component {
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::Prefix(prefix) => {
                result.push(prefix.as_os_str());
                has_root = true;
            }
            Component::Normal(c) => result.push(c),
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root.
                if !result.pop() && !has_root {
                    return Err(Error::InvalidPath {
                        path: path.to_path_buf(),
                        reason: "Relative path contains too many '..' components".to_string(),
                    });
                }
            }
        }
    }

    if has_root && result.as_os_str().is_empty() {
        result.push(Component::RootDir);
    }

    Ok(result)
}

/// Make `path` absolute against `base` and resolve `.`/`..`.
///
/// Absolute paths ignore `base`.
///
/// # Errors
///
/// Returns an error if `base` is relative and the joined path climbs above it.
///
/// # Examples
///
/// ```
/// use glob_extra::path::normalize::absolutize;
/// use std::path::{Path, PathBuf};
///
/// let joined = absolutize(Path::new("src/"), Path::new("/proj")).unwrap();
/// assert_eq!(joined, PathBuf::from("/proj/src"));
///
/// let kept = absolutize(Path::new("/etc/hosts"), Path::new("/proj")).unwrap();
/// assert_eq!(kept, PathBuf::from("/etc/hosts"));
/// ```
pub fn absolutize(path: &Path, base: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        resolve_components(path)
    } else {
        resolve_components(&base.join(path))
    }
}

/// Normalize a user-supplied directory to absolute form.
///
/// Expands a leading tilde, then makes the path absolute against `base`.
///
/// # Errors
///
/// Returns an error if tilde expansion fails or a relative result climbs
/// above its start.
pub fn normalize(path: &Path, base: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;
    absolutize(&expanded, base)
}
