//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use glob_extra::config::{Config, ConfigMerger};
///
/// let low = Config { dot: Some(false), ..Default::default() };
/// let high = Config { dot: Some(true), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.dot, Some(true));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources given lowest precedence first.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge `source` into `target`; `source` wins.
    ///
    /// Scalar fields and `formats` are overwritten when set in `source`.
    /// `ignore` accumulates: patterns are appended unless already present.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.root.is_some() {
            target.root.clone_from(&source.root);
        }

        if source.formats.is_some() {
            target.formats.clone_from(&source.formats);
        }

        if source.dot.is_some() {
            target.dot = source.dot;
        }

        if source.case_sensitive.is_some() {
            target.case_sensitive = source.case_sensitive;
        }

        if source.concurrency.is_some() {
            target.concurrency = source.concurrency;
        }

        if let Some(source_ignore) = &source.ignore {
            let target_ignore = target.ignore.get_or_insert_with(Vec::new);
            for pattern in source_ignore {
                if !target_ignore.contains(pattern) {
                    target_ignore.push(pattern.clone());
                }
            }
        }
    }
}
