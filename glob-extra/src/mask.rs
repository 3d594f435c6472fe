//! Mask classification.
//!
//! Decides whether a user-supplied pattern carries glob semantics or is a
//! plain path to a single filesystem entry.

use crate::pattern::ParsedPattern;

/// Check whether `pattern` is a glob mask rather than a literal path.
///
/// A pattern is a mask when brace expansion produces more than one branch, or
/// when its single branch contains any non-literal segment (wildcard,
/// globstar, character class, extglob group). Empty and absent patterns are
/// never masks.
///
/// # Examples
///
/// ```
/// use glob_extra::is_mask;
///
/// assert!(is_mask("some/path/*"));
/// assert!(is_mask("another/**"));
/// assert!(is_mask("src/{a,b}.js"));
/// assert!(!is_mask("some/path/file.js"));
/// assert!(!is_mask(""));
/// assert!(!is_mask(None));
/// ```
#[must_use]
pub fn is_mask<'a>(pattern: impl Into<Option<&'a str>>) -> bool {
    let Some(pattern) = pattern.into().filter(|p| !p.is_empty()) else {
        return false;
    };

    let parsed = ParsedPattern::parse(pattern);
    match parsed.branches() {
        [branch] => branch.iter().any(|segment| !segment.is_literal()),
        _ => true,
    }
}
