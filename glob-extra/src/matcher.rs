//! Glob engines.
//!
//! The expander never matches patterns itself. It asks a [`GlobEngine`] for
//! the raw path strings a pattern resolves to. [`SystemGlobEngine`] walks the
//! real filesystem; [`MockGlobEngine`] answers from a fixed table so expansion
//! can be tested deterministically.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use glob::MatchOptions;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::error::{Error, Result};
use crate::options::GlobOptions;
use crate::pattern::{expand_braces, Segment};

/// Resolves a single pattern into raw matched path strings.
///
/// Implementations return an empty list, not an error, when nothing matches.
pub trait GlobEngine: Send + Sync {
    /// Find every path matched by `pattern`.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is invalid or the filesystem cannot be
    /// read while matching.
    fn find(&self, pattern: &str, options: &GlobOptions) -> Result<Vec<String>>;
}

/// Glob engine backed by the `glob` crate, with brace expansion and
/// `globset` ignore lists layered on top.
///
/// Literal patterns are not globbed: they are returned exactly as written
/// (trailing slash included) when the path exists and dropped otherwise.
/// Relative matches are reported relative to [`GlobOptions::cwd`] when it is
/// set, so callers can resolve them against the same directory later.
///
/// # Examples
///
/// ```no_run
/// use glob_extra::matcher::{GlobEngine, SystemGlobEngine};
/// use glob_extra::GlobOptions;
///
/// let engine = SystemGlobEngine;
/// let options = GlobOptions::new().with_ignore(["target/**"]);
/// let found = engine.find("src/**/*.rs", &options).unwrap();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemGlobEngine;

impl GlobEngine for SystemGlobEngine {
    fn find(&self, pattern: &str, options: &GlobOptions) -> Result<Vec<String>> {
        let case_sensitive = options.case_sensitive.unwrap_or(true);
        let ignore = compile_ignore(options.ignore.as_deref().unwrap_or_default(), case_sensitive)?;
        let match_options = MatchOptions {
            case_sensitive,
            require_literal_separator: true,
            require_literal_leading_dot: !options.dot.unwrap_or(false),
        };
        let cwd = options.cwd.as_deref();

        let mut seen = HashSet::new();
        let mut found = Vec::new();
        let mut push = |candidate: String| {
            if !ignore.is_match(candidate.trim_end_matches('/')) && seen.insert(candidate.clone()) {
                found.push(candidate);
            }
        };

        for branch in expand_braces(pattern) {
            if let Some(literal) = literal_branch(&branch) {
                // An empty branch names no file, even though `cwd` itself exists.
                if literal.is_empty() {
                    continue;
                }
                let on_disk = match cwd {
                    Some(dir) => dir.join(&literal),
                    None => Path::new(&literal).to_path_buf(),
                };
                if std::fs::symlink_metadata(&on_disk).is_ok() {
                    push(literal);
                }
                continue;
            }

            let translated = to_glob_syntax(&branch);
            let full = match cwd {
                Some(dir) if !Path::new(&branch).is_absolute() => format!(
                    "{}/{translated}",
                    glob::Pattern::escape(&dir.to_string_lossy())
                ),
                _ => translated,
            };

            let entries = glob::glob_with(&full, match_options).map_err(|e| Error::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;

            for entry in entries {
                let matched = entry.map_err(|e| Error::Io(e.into()))?;
                let shown = match cwd {
                    Some(dir) => matched
                        .strip_prefix(dir)
                        .map(Path::to_path_buf)
                        .unwrap_or(matched),
                    None => matched,
                };
                push(shown.to_string_lossy().into_owned());
            }
        }

        log::trace!("glob engine: '{pattern}' matched {} path(s)", found.len());
        Ok(found)
    }
}

/// The unescaped path of a branch made only of literal segments.
fn literal_branch(branch: &str) -> Option<String> {
    let mut parts = Vec::new();
    for raw in branch.split('/') {
        match Segment::parse(raw) {
            Segment::Literal(s) => parts.push(s),
            _ => return None,
        }
    }
    Some(parts.join("/"))
}

/// Rewrite backslash escapes into the bracket form the `glob` crate accepts.
fn to_glob_syntax(branch: &str) -> String {
    let mut out = String::with_capacity(branch.len());
    let mut chars = branch.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(escaped @ ('*' | '?' | '[' | ']')) => {
                out.push('[');
                out.push(escaped);
                out.push(']');
            }
            Some(escaped) => out.push(escaped),
            None => out.push('\\'),
        }
    }
    out
}

pub(crate) fn compile_ignore(patterns: &[String], case_sensitive: bool) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .case_insensitive(!case_sensitive)
            .build()
            .map_err(|e| Error::InvalidPattern {
                pattern: pattern.clone(),
                reason: e.to_string(),
            })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| Error::InvalidPattern {
        pattern: patterns.join(", "),
        reason: e.to_string(),
    })
}

/// Glob engine answering from a fixed pattern table.
///
/// Unknown patterns match nothing. Every call is recorded together with the
/// options it received.
///
/// # Examples
///
/// ```
/// use glob_extra::matcher::{GlobEngine, MockGlobEngine};
/// use glob_extra::GlobOptions;
///
/// let engine = MockGlobEngine::new().with_match("src/*.js", ["src/a.js", "src/b.js"]);
/// let options = GlobOptions::default();
///
/// assert_eq!(engine.find("src/*.js", &options).unwrap(), vec!["src/a.js", "src/b.js"]);
/// assert!(engine.find("lib/*.js", &options).unwrap().is_empty());
/// assert_eq!(engine.calls().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct MockGlobEngine {
    matches: HashMap<String, Vec<String>>,
    failures: HashMap<String, String>,
    calls: Mutex<Vec<(String, GlobOptions)>>,
}

impl MockGlobEngine {
    /// Create an engine that matches nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `pattern` resolve to `results`.
    #[must_use]
    pub fn with_match<I, S>(mut self, pattern: &str, results: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.matches.insert(
            pattern.to_string(),
            results.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Make `pattern` fail as an invalid pattern.
    #[must_use]
    pub fn with_failure(mut self, pattern: &str, reason: &str) -> Self {
        self.failures
            .insert(pattern.to_string(), reason.to_string());
        self
    }

    /// Every `(pattern, options)` pair seen so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<(String, GlobOptions)> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl GlobEngine for MockGlobEngine {
    fn find(&self, pattern: &str, options: &GlobOptions) -> Result<Vec<String>> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((pattern.to_string(), options.clone()));

        if let Some(reason) = self.failures.get(pattern) {
            return Err(Error::InvalidPattern {
                pattern: pattern.to_string(),
                reason: reason.clone(),
            });
        }
        Ok(self.matches.get(pattern).cloned().unwrap_or_default())
    }
}
