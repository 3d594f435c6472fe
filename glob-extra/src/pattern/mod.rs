//! Pattern parsing primitives.
//!
//! A pattern is parsed into a set of alternative branches (one per brace
//! expansion result), and each branch into a sequence of path segments. A
//! segment is either a plain string, a `**` globstar, or something with glob
//! semantics (wildcards, character classes, extglob groups).
//!
//! # Examples
//!
//! ```
//! use glob_extra::pattern::{ParsedPattern, Segment};
//!
//! let parsed = ParsedPattern::parse("src/**/*.{js,ts}");
//! assert_eq!(parsed.branches().len(), 2);
//! assert_eq!(parsed.branches()[0][0], Segment::Literal("src".to_string()));
//! assert_eq!(parsed.branches()[0][1], Segment::Globstar);
//! assert!(!parsed.is_literal());
//!
//! let plain = ParsedPattern::parse("some/path/file.js");
//! assert_eq!(plain.literal_path().as_deref(), Some("some/path/file.js"));
//! ```

pub mod brace;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use brace::expand_braces;

/// One `/`-separated piece of a pattern branch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A plain string with escapes already removed.
    Literal(String),
    /// `**`, matching any number of directories.
    Globstar,
    /// A segment with glob semantics, kept in its original (escaped) form.
    Magic(String),
}

impl Segment {
    /// Parse a single path segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use glob_extra::pattern::Segment;
    ///
    /// assert_eq!(Segment::parse("**"), Segment::Globstar);
    /// assert_eq!(Segment::parse("*.js"), Segment::Magic("*.js".to_string()));
    /// assert_eq!(Segment::parse(r"\*.js"), Segment::Literal("*.js".to_string()));
    /// assert_eq!(Segment::parse("[abc"), Segment::Literal("[abc".to_string()));
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == "**" {
            return Self::Globstar;
        }

        let chars: Vec<char> = raw.chars().collect();
        let mut literal = String::with_capacity(raw.len());
        let mut i = 0;
        while i < chars.len() {
            match chars[i] {
                '\\' => {
                    // A trailing backslash escapes nothing and is kept.
                    literal.push(chars.get(i + 1).copied().unwrap_or('\\'));
                    i += 2;
                }
                '*' | '?' => return Self::Magic(raw.to_string()),
                '[' if closes_class(&chars, i) => return Self::Magic(raw.to_string()),
                '+' | '@' | '!' if chars.get(i + 1) == Some(&'(') => {
                    return Self::Magic(raw.to_string());
                }
                c => {
                    literal.push(c);
                    i += 1;
                }
            }
        }

        Self::Literal(literal)
    }

    /// Whether this segment is a plain string.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}

/// Whether the `[` at `open` starts a character class with a closing `]`.
///
/// A `]` directly after `[`, `[!` or `[^` is a class member, not the end.
fn closes_class(chars: &[char], open: usize) -> bool {
    let mut i = open + 1;
    if matches!(chars.get(i), Some('!' | '^')) {
        i += 1;
    }
    if chars.get(i) == Some(&']') {
        i += 1;
    }
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            ']' => return true,
            _ => i += 1,
        }
    }
    false
}

/// A pattern broken into brace-expanded branches of path segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPattern {
    negated: bool,
    branches: Vec<Vec<Segment>>,
}

impl ParsedPattern {
    /// Parse a pattern.
    ///
    /// Leading `!` characters toggle negation and are stripped before brace
    /// expansion. Every branch is split on `/`, so a trailing slash yields a
    /// final empty literal segment.
    #[must_use]
    pub fn parse(pattern: &str) -> Self {
        let bangs = pattern.chars().take_while(|&c| c == '!').count();
        let body = &pattern[bangs..];

        let branches = expand_braces(body)
            .iter()
            .map(|branch| branch.split('/').map(Segment::parse).collect())
            .collect();

        Self {
            negated: bangs % 2 == 1,
            branches,
        }
    }

    /// The alternative branches produced by brace expansion.
    #[must_use]
    pub fn branches(&self) -> &[Vec<Segment>] {
        &self.branches
    }

    /// Whether the pattern was negated with a leading `!`.
    #[must_use]
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Whether the pattern is a single branch of plain segments.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        self.branches.len() == 1 && self.branches[0].iter().all(Segment::is_literal)
    }

    /// The unescaped path for a literal pattern, `None` otherwise.
    #[must_use]
    pub fn literal_path(&self) -> Option<String> {
        if !self.is_literal() {
            return None;
        }
        let parts: Vec<&str> = self.branches[0]
            .iter()
            .filter_map(|segment| match segment {
                Segment::Literal(s) => Some(s.as_str()),
                _ => None,
            })
            .collect();
        Some(parts.join("/"))
    }
}
