//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::Config;
use proptest::prelude::*;

fn ignore_strategy() -> impl Strategy<Value = Option<Vec<String>>> {
    prop::option::of(prop::collection::vec("[a-c]{1,3}/\\*\\*", 0..5))
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(prop::collection::vec("\\.[a-z]{1,4}", 1..4)),
        ignore_strategy(),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        prop::option::of(1usize..64),
    )
        .prop_map(|(formats, ignore, dot, case_sensitive, concurrency)| Config {
            formats,
            ignore,
            dot,
            case_sensitive,
            concurrency,
            ..Default::default()
        })
}

proptest! {
    // Set fields of the higher layer always win
    #[test]
    fn merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.formats, high.formats.or(low.formats));
        prop_assert_eq!(merged.dot, high.dot.or(low.dot));
        prop_assert_eq!(merged.case_sensitive, high.case_sensitive.or(low.case_sensitive));
        prop_assert_eq!(merged.concurrency, high.concurrency.or(low.concurrency));
    }

    // Every ignore pattern from either layer survives the merge
    #[test]
    fn merge_keeps_all_ignore_patterns(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        let merged_ignore = merged.ignore.unwrap_or_default();
        for pattern in low.ignore.iter().chain(high.ignore.iter()).flatten() {
            prop_assert!(merged_ignore.contains(pattern));
        }
    }

    // Merging a layer into itself changes nothing
    #[test]
    fn merge_is_idempotent(config in config_strategy()) {
        let mut once = Config::default();
        ConfigMerger::merge_into(&mut once, &config);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &config);
        prop_assert_eq!(once, twice);
    }
}
