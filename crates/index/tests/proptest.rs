//! Property-based tests for cadence-index using proptest.

use cadence_core::Record;
use cadence_index::{Index, KeyRange, LookupIndex, OrderedIndex, RangeIndex};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

fn key_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z ]{0,6}"
}

fn in_order_keys(tree: &OrderedIndex) -> Vec<String> {
    tree.iter().map(|r| r.key().to_string()).collect()
}

proptest! {
    /// Test that all inserted keys can be retrieved from the ordered index.
    #[test]
    fn ordered_insert_get_roundtrip(keys in prop::collection::vec(key_strategy(), 1..300)) {
        let mut tree = OrderedIndex::new();
        for (i, key) in keys.iter().enumerate() {
            tree.insert(Record::new(key.clone(), i.to_string()));
        }
        for key in &keys {
            prop_assert!(tree.contains_key(key), "Key {:?} should exist", key);
        }
        let unique: BTreeSet<_> = keys.iter().cloned().collect();
        prop_assert_eq!(tree.len(), unique.len());
    }

    /// Test that the first record inserted for a key is the one kept.
    #[test]
    fn ordered_keeps_first_payload(keys in prop::collection::vec(key_strategy(), 1..200)) {
        let mut tree = OrderedIndex::new();
        let mut first = BTreeMap::new();
        for (i, key) in keys.iter().enumerate() {
            tree.insert(Record::new(key.clone(), i.to_string()));
            first.entry(key.clone()).or_insert_with(|| i.to_string());
        }
        for (key, payload) in &first {
            prop_assert_eq!(tree.get(key).map(|r| r.payload()), Some(payload.as_str()));
        }
    }

    /// Test that in-order traversal stays sorted after every mutation.
    #[test]
    fn ordered_traversal_sorted_after_each_mutation(
        ops in prop::collection::vec((any::<bool>(), key_strategy()), 1..200)
    ) {
        let mut tree = OrderedIndex::new();
        let mut model = BTreeSet::new();
        for (is_insert, key) in ops {
            if is_insert {
                tree.insert(Record::new(key.clone(), ""));
                model.insert(key);
            } else {
                tree.delete(&key);
                model.remove(&key);
            }
            let keys = in_order_keys(&tree);
            prop_assert!(keys.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(keys, model.iter().cloned().collect::<Vec<_>>());
        }
    }

    /// Test that range queries match a filtered full scan.
    #[test]
    fn ordered_range_matches_filter(
        keys in prop::collection::vec(key_strategy(), 0..200),
        low in key_strategy(),
        high in key_strategy()
    ) {
        let mut tree = OrderedIndex::new();
        for key in &keys {
            tree.insert(Record::new(key.clone(), ""));
        }

        let expected: Vec<String> = in_order_keys(&tree)
            .into_iter()
            .filter(|k| low.as_str() <= k.as_str() && k.as_str() <= high.as_str())
            .collect();
        let actual: Vec<String> = tree
            .range_query(&low, &high)
            .iter()
            .map(|r| r.key().to_string())
            .collect();
        prop_assert_eq!(&actual, &expected);

        let via_range: Vec<String> = tree
            .range(&KeyRange::bound(low.as_str(), high.as_str()))
            .iter()
            .map(|r| r.key().to_string())
            .collect();
        prop_assert_eq!(via_range, expected);
    }

    /// Test that deleting every key empties the tree.
    #[test]
    fn ordered_delete_all_empties(keys in prop::collection::vec(key_strategy(), 1..200)) {
        let mut tree = OrderedIndex::new();
        for key in &keys {
            tree.insert(Record::new(key.clone(), ""));
        }
        for key in &keys {
            tree.delete(key);
        }
        prop_assert!(tree.is_empty());
        prop_assert_eq!(tree.len(), 0);
        prop_assert_eq!(tree.height(), 0);
    }

    /// Test that min/max are correct.
    #[test]
    fn ordered_min_max_correct(keys in prop::collection::vec(key_strategy(), 1..100)) {
        let mut tree = OrderedIndex::new();
        for key in &keys {
            tree.insert(Record::new(key.clone(), ""));
        }
        prop_assert_eq!(tree.min().map(|r| r.key()), keys.iter().min().map(String::as_str));
        prop_assert_eq!(tree.max().map(|r| r.key()), keys.iter().max().map(String::as_str));
    }

    /// Test that the lookup index keeps the last record for a key.
    #[test]
    fn lookup_last_insert_wins(keys in prop::collection::vec(key_strategy(), 1..300)) {
        let mut index = LookupIndex::new();
        let mut last = BTreeMap::new();
        for (i, key) in keys.iter().enumerate() {
            index.insert(Record::new(key.clone(), i.to_string()));
            last.insert(key.clone(), i.to_string());
        }
        prop_assert_eq!(index.len(), last.len());
        for (key, payload) in &last {
            prop_assert_eq!(index.search(key).map(|r| r.payload()), Some(payload.as_str()));
        }
    }

    /// Test that stats are consistent with actual count.
    #[test]
    fn stats_consistent(
        ops in prop::collection::vec((any::<bool>(), key_strategy()), 1..200)
    ) {
        let mut tree = OrderedIndex::new();
        let mut index = LookupIndex::new();
        for (is_insert, key) in ops {
            if is_insert {
                tree.insert(Record::new(key.clone(), ""));
                index.insert(Record::new(key, ""));
            } else {
                tree.delete(&key);
                index.delete(&key);
            }
        }
        prop_assert_eq!(tree.len(), tree.stats().entries());
        prop_assert_eq!(index.len(), index.stats().entries());
        prop_assert_eq!(tree.len(), index.len());
    }
}
