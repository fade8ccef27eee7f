//! Property-based tests for remote mapping overrides.
//!
//! These tests use proptest to generate random `--remote` items and verify
//! that the mapping invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::mapping::{RemoteMapping, RemoteOverride, DEFAULT_COMPONENTS};
    use crate::selection::Selection;
    use proptest::prelude::*;

    /// A trimmed, non-empty token that cannot contain '='.
    fn token() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_-]{0,11}"
    }

    /// Items that must be rejected: no '=' at all, or an empty side.
    fn malformed_item() -> impl Strategy<Value = String> {
        prop_oneof![
            "[^=]*",
            "[ \t]*=[^=]*",
            token().prop_map(|key| format!("{key}=  ")),
        ]
    }

    proptest! {
        /// Property: malformed items never change the mapping
        #[test]
        fn malformed_items_leave_mapping_untouched(
            items in prop::collection::vec(malformed_item(), 0..8)
        ) {
            let (mapping, rejected) = RemoteMapping::with_overrides(&items);
            prop_assert_eq!(mapping, RemoteMapping::defaults());
            prop_assert_eq!(rejected, items);
        }

        /// Property: a well-formed item always parses to its trimmed halves
        #[test]
        fn well_formed_item_round_trips(
            key in token(),
            value in token(),
            pad in "[ \t]{0,3}"
        ) {
            let item = format!("{pad}{key}{pad}={pad}{value}{pad}");
            let parsed: RemoteOverride = item.parse().unwrap();
            prop_assert_eq!(parsed.component, key);
            prop_assert_eq!(parsed.remote, value);
        }

        /// Property: the last override for a key wins, whatever came before
        #[test]
        fn last_override_wins(
            key in token(),
            values in prop::collection::vec(token(), 1..6)
        ) {
            let items: Vec<String> = values.iter().map(|v| format!("{key}={v}")).collect();
            let (mapping, rejected) = RemoteMapping::with_overrides(&items);
            prop_assert!(rejected.is_empty());
            prop_assert_eq!(mapping.get(&key), values.last().map(String::as_str));
        }

        /// Property: overrides never remove a default component
        #[test]
        fn defaults_always_present(
            items in prop::collection::vec(any::<String>(), 0..8)
        ) {
            let (mapping, _) = RemoteMapping::with_overrides(&items);
            for (component, _) in DEFAULT_COMPONENTS {
                prop_assert!(mapping.contains(component));
            }
        }

        /// Property: an explicit selection resolves iff every name is mapped
        #[test]
        fn explicit_selection_rejects_any_unknown(
            names in prop::collection::vec(token(), 0..6)
        ) {
            let mapping = RemoteMapping::defaults();
            let selection = Selection::Explicit(names.clone());
            let all_known = names.iter().all(|n| mapping.contains(n));
            prop_assert_eq!(selection.resolve(&mapping).is_ok(), all_known);
        }
    }
}
