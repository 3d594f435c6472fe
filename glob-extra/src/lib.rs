#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # glob-extra
//!
//! A library for expanding file paths, directories and glob masks into a flat
//! list of absolute file paths.
//!
//! Inputs may mix plain files, directories (expanded recursively) and glob
//! masks. The result is deduplicated and may be filtered by file extension.
//!
//! ## Core Types
//!
//! - [`PathExpander`] and [`expand_paths`]: Two-pass path expansion
//! - [`is_mask`]: Classify a string as a glob mask or a literal path
//! - [`ExpandOptions`] and [`GlobOptions`]: Expansion and matching options
//! - [`GlobEngine`] and [`FileSystem`]: Collaborator seams, with system and
//!   mock implementations
//! - [`Config`] and [`ConfigBuilder`]: Layered file and environment configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use glob_extra::is_mask;
//!
//! assert!(is_mask("some/path/*"));
//! assert!(is_mask("another/**"));
//! assert!(!is_mask("some/path/file.js"));
//! assert!(!is_mask(""));
//! ```
//!
//! ```no_run
//! use glob_extra::{expand_paths, ExpandOptions, GlobOptions};
//!
//! let files = expand_paths(
//!     vec!["src/", "tests/**/*.rs"],
//!     &ExpandOptions::new().with_formats([".rs"]),
//!     &GlobOptions::new().with_ignore(["**/fixtures/**"]),
//! )
//! .unwrap();
//! for file in files {
//!     println!("{}", file.display());
//! }
//! ```

pub mod config;
pub mod error;
pub mod expand;
pub mod logging;
pub mod mask;
pub mod matcher;
pub mod options;
pub mod path;
pub mod pattern;
mod pool;
pub mod probe;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use expand::{expand_paths, PathExpander, Patterns};
pub use logging::{init_logger, LogLevel, Logger};
pub use mask::is_mask;
pub use matcher::{GlobEngine, MockGlobEngine, SystemGlobEngine};
pub use options::{ExpandOptions, GlobOptions};
pub use pattern::{expand_braces, ParsedPattern, Segment};
pub use pool::DEFAULT_CONCURRENCY;
pub use probe::{FileSystem, MockFileSystem, SystemFileSystem};
