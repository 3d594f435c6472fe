//! Property-based tests for pattern parsing.

use super::{expand_braces, ParsedPattern};
use crate::mask::is_mask;
use proptest::prelude::*;

// Path-like strings without any glob or brace metacharacters
fn literal_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9_.-]{1,12}", 1..6).prop_map(|parts| parts.join("/"))
}

fn alternatives_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z0-9]{1,6}", 2..5)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Plain paths survive parsing unchanged and are never masks
    #[test]
    fn literal_paths_round_trip(path in literal_path_strategy()) {
        let parsed = ParsedPattern::parse(&path);
        prop_assert_eq!(parsed.literal_path(), Some(path.clone()));
        prop_assert!(!is_mask(path.as_str()));
    }

    // Brace expansion always yields at least one branch
    #[test]
    fn expansion_never_empty(s in "[a-z{},.]{0,16}") {
        prop_assert!(!expand_braces(&s).is_empty());
    }

    // A comma group yields exactly one branch per alternative, in order
    #[test]
    fn comma_group_expands_in_order(
        prefix in "[a-z]{0,5}",
        alternatives in alternatives_strategy(),
        suffix in "[a-z]{0,5}",
    ) {
        let pattern = format!("{prefix}{{{}}}{suffix}", alternatives.join(","));
        let expected: Vec<String> = alternatives
            .iter()
            .map(|alt| format!("{prefix}{alt}{suffix}"))
            .collect();
        prop_assert_eq!(expand_braces(&pattern), expected);
        prop_assert!(is_mask(pattern.as_str()));
    }

    // Appending a wildcard segment to any path makes it a mask
    #[test]
    fn wildcard_segment_is_mask(path in literal_path_strategy()) {
        let star = format!("{path}/*");
        let globstar = format!("{path}/**");
        prop_assert!(is_mask(star.as_str()));
        prop_assert!(is_mask(globstar.as_str()));
    }
}
