//! Typed option bundles for path expansion.
//!
//! [`ExpandOptions`] controls how matched paths are resolved and filtered.
//! [`GlobOptions`] is handed to the glob engine; every field is optional and
//! `None` means "use the engine's own default".

use std::path::{Path, PathBuf};

/// Options for the post-match expansion pass.
///
/// # Examples
///
/// ```
/// use glob_extra::ExpandOptions;
/// use std::path::Path;
///
/// let options = ExpandOptions::new()
///     .with_root("/project")
///     .with_formats([".js", ".ts"]);
///
/// assert_eq!(options.root(), Some(Path::new("/project")));
/// assert!(options.matches_format(Path::new("src/app.ts")));
/// assert!(!options.matches_format(Path::new("README.md")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandOptions {
    root: Option<PathBuf>,
    formats: Option<Vec<String>>,
}

impl ExpandOptions {
    /// Options with no root and no format filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve matched relative paths against `root` instead of the current
    /// working directory.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Keep only files whose extension (with its leading dot) is listed.
    ///
    /// An empty list disables filtering.
    #[must_use]
    pub fn with_formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let formats: Vec<String> = formats.into_iter().map(Into::into).collect();
        self.formats = (!formats.is_empty()).then_some(formats);
        self
    }

    /// The configured root, if any.
    #[must_use]
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// The configured format allow-list, if any.
    #[must_use]
    pub fn formats(&self) -> Option<&[String]> {
        self.formats.as_deref()
    }

    /// Whether `path` passes the format filter.
    ///
    /// Comparison is exact and case-sensitive on `"." + extension`. Paths
    /// without an extension (including dotfiles such as `.gitignore`) only
    /// pass when no filter is configured.
    #[must_use]
    pub fn matches_format(&self, path: &Path) -> bool {
        let Some(formats) = &self.formats else {
            return true;
        };
        let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        formats
            .iter()
            .any(|format| format.strip_prefix('.') == Some(extension))
    }
}

/// Options passed through to the glob engine.
///
/// # Examples
///
/// ```
/// use glob_extra::GlobOptions;
///
/// let options = GlobOptions::new().with_ignore(["**/node_modules/**"]).with_dot(true);
/// assert_eq!(options.ignore.as_deref(), Some(&["**/node_modules/**".to_string()][..]));
/// assert_eq!(options.case_sensitive, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobOptions {
    /// Patterns whose matches are dropped. Engine default: none.
    pub ignore: Option<Vec<String>>,
    /// Directory relative patterns are matched in. Engine default: process cwd.
    pub cwd: Option<PathBuf>,
    /// Let wildcards match names starting with `.`. Engine default: `false`.
    pub dot: Option<bool>,
    /// Match case-sensitively. Engine default: `true`.
    pub case_sensitive: Option<bool>,
}

impl GlobOptions {
    /// Options that leave every engine default in place.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set exclusion patterns.
    #[must_use]
    pub fn with_ignore<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    /// Set the directory patterns are matched in.
    #[must_use]
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Set whether wildcards match dotfiles.
    #[must_use]
    pub fn with_dot(mut self, dot: bool) -> Self {
        self.dot = Some(dot);
        self
    }

    /// Set case sensitivity.
    #[must_use]
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = Some(case_sensitive);
        self
    }
}
