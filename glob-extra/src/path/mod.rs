//! Lexical path handling.
//!
//! Matched paths are joined onto a root (or the current directory) and have
//! their `.` and `..` components resolved without consulting the filesystem,
//! the same way for paths that exist and paths that do not.
//!
//! ```
//! use glob_extra::path::absolutize;
//! use std::path::{Path, PathBuf};
//!
//! let path = absolutize(Path::new("./src/../lib/"), Path::new("/repo")).unwrap();
//! assert_eq!(path, PathBuf::from("/repo/lib"));
//! ```

pub mod normalize;

pub use normalize::{absolutize, expand_tilde, normalize, resolve_components};
