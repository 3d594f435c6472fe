//! Two-pass path expansion.
//!
//! Pass 1 hands every pattern to the [`GlobEngine`] and fails on the first
//! pattern that matches nothing. Pass 2 turns each matched path into the
//! files it denotes: a file stands for itself; a directory stands for every
//! file below it. Survivors are filtered by format and made absolute. Both
//! passes deduplicate keeping the first occurrence, so output order follows
//! input order.

use std::collections::HashSet;
use std::hash::Hash;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::matcher::{GlobEngine, SystemGlobEngine};
use crate::options::{ExpandOptions, GlobOptions};
use crate::path::absolutize;
use crate::pool::{WorkerPool, DEFAULT_CONCURRENCY};
use crate::probe::{FileSystem, SystemFileSystem};

/// An ordered list of input patterns.
///
/// A single string and a one-element list are the same thing.
///
/// # Examples
///
/// ```
/// use glob_extra::Patterns;
///
/// assert_eq!(Patterns::from("src/*.js"), Patterns::from(vec!["src/*.js"]));
/// assert_eq!(Patterns::from(["a", "b"]).len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patterns(Vec<String>);

impl Patterns {
    /// The patterns in input order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Number of patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no patterns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the patterns.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<&str> for Patterns {
    fn from(pattern: &str) -> Self {
        Self(vec![pattern.to_string()])
    }
}

impl From<String> for Patterns {
    fn from(pattern: String) -> Self {
        Self(vec![pattern])
    }
}

impl From<Vec<String>> for Patterns {
    fn from(patterns: Vec<String>) -> Self {
        Self(patterns)
    }
}

impl From<Vec<&str>> for Patterns {
    fn from(patterns: Vec<&str>) -> Self {
        patterns.into_iter().map(str::to_string).collect()
    }
}

impl From<&[&str]> for Patterns {
    fn from(patterns: &[&str]) -> Self {
        patterns.iter().map(|p| (*p).to_string()).collect()
    }
}

impl<const N: usize> From<[&str; N]> for Patterns {
    fn from(patterns: [&str; N]) -> Self {
        patterns.into_iter().map(str::to_string).collect()
    }
}

impl FromIterator<String> for Patterns {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Expands patterns into absolute file paths.
///
/// # Examples
///
/// ```
/// use glob_extra::matcher::MockGlobEngine;
/// use glob_extra::probe::MockFileSystem;
/// use glob_extra::{ExpandOptions, GlobOptions, PathExpander};
/// use std::path::PathBuf;
///
/// let engine = MockGlobEngine::new().with_match("src/*", ["src/a.js", "src/lib"]);
/// let fs = MockFileSystem::new("/repo")
///     .with_files(["/repo/src/a.js"])
///     .with_dir("/repo/src/lib", ["/repo/src/lib/b.js"]);
///
/// let paths = PathExpander::new(engine, fs)
///     .expand("src/*", &ExpandOptions::default(), &GlobOptions::default())
///     .unwrap();
///
/// assert_eq!(paths, vec![PathBuf::from("/repo/src/a.js"), PathBuf::from("/repo/src/lib/b.js")]);
/// ```
#[derive(Debug)]
pub struct PathExpander<G, F> {
    engine: G,
    fs: F,
    concurrency: usize,
}

impl Default for PathExpander<SystemGlobEngine, SystemFileSystem> {
    fn default() -> Self {
        Self::new(SystemGlobEngine, SystemFileSystem)
    }
}

impl<G: GlobEngine, F: FileSystem> PathExpander<G, F> {
    /// Create an expander over the given collaborators.
    #[must_use]
    pub fn new(engine: G, fs: F) -> Self {
        Self {
            engine,
            fs,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Bound the number of collaborator calls in flight. Zero is treated as one.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// The configured concurrency bound.
    #[must_use]
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// The glob engine.
    pub fn engine(&self) -> &G {
        &self.engine
    }

    /// The filesystem.
    pub fn file_system(&self) -> &F {
        &self.fs
    }

    /// Expand `patterns` into a deduplicated list of absolute file paths.
    ///
    /// `glob_options` go to the engine unchanged. `expand_options.root` only
    /// affects how matched paths are resolved, not how patterns are matched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMatch`] if any pattern matches nothing. Any error
    /// from the glob engine or the filesystem is returned as-is.
    pub fn expand(
        &self,
        patterns: impl Into<Patterns>,
        expand_options: &ExpandOptions,
        glob_options: &GlobOptions,
    ) -> Result<Vec<PathBuf>> {
        let patterns = patterns.into();
        if patterns.is_empty() {
            return Ok(Vec::new());
        }

        let pool = WorkerPool::new(self.concurrency)?;

        let matched = pool.map(patterns.as_slice(), |pattern| {
            self.resolve_mask(pattern, glob_options)
        })?;
        let raw_paths = dedup_first(matched.into_iter().flatten());
        log::debug!(
            "{} pattern(s) matched {} distinct path(s)",
            patterns.len(),
            raw_paths.len()
        );

        let expanded = pool.map(&raw_paths, |raw| self.expand_path(raw, expand_options))?;
        Ok(dedup_first(expanded.into_iter().flatten()))
    }

    fn resolve_mask(&self, pattern: &str, options: &GlobOptions) -> Result<Vec<String>> {
        let matches = self.engine.find(pattern, options)?;
        if matches.is_empty() {
            return Err(Error::NoMatch {
                pattern: pattern.to_string(),
            });
        }
        log::debug!("Pattern '{pattern}' matched {} path(s)", matches.len());
        Ok(matches)
    }

    fn expand_path(&self, raw: &str, options: &ExpandOptions) -> Result<Vec<PathBuf>> {
        let base = self.base_path(Path::new(raw), options)?;

        let files = if self.fs.is_file(&base)? {
            vec![base]
        } else {
            let mut files = Vec::new();
            for entry in self.fs.list_tree(&base)? {
                if self.fs.is_file(&entry)? {
                    files.push(entry);
                } else {
                    log::trace!("Skipping non-file entry {}", entry.display());
                }
            }
            files
        };

        let absolute = files
            .into_iter()
            .filter(|file| options.matches_format(file))
            .map(|file| self.fs.absolute(&file))
            .collect::<Result<Vec<_>>>()?;
        log::debug!("Path '{raw}' expanded to {} file(s)", absolute.len());
        Ok(absolute)
    }

    fn base_path(&self, raw: &Path, options: &ExpandOptions) -> Result<PathBuf> {
        match options.root() {
            Some(root) => absolutize(raw, root),
            None => self.fs.absolute(raw),
        }
    }
}

/// Expand `patterns` against the real filesystem.
///
/// # Errors
///
/// See [`PathExpander::expand`].
///
/// # Examples
///
/// ```no_run
/// use glob_extra::{expand_paths, ExpandOptions, GlobOptions};
///
/// let sources = expand_paths(
///     ["src/**/*.rs", "build.rs"],
///     &ExpandOptions::new().with_formats([".rs"]),
///     &GlobOptions::default(),
/// )
/// .unwrap();
/// assert!(sources.iter().all(|p| p.is_absolute()));
/// ```
pub fn expand_paths(
    patterns: impl Into<Patterns>,
    expand_options: &ExpandOptions,
    glob_options: &GlobOptions,
) -> Result<Vec<PathBuf>> {
    PathExpander::default().expand(patterns, expand_options, glob_options)
}

fn dedup_first<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
