//! Index trait definitions for Cadence.
//!
//! This module defines the `Index` trait both indexes satisfy and the
//! `RangeIndex` trait for indexes that can scan keys in order.

use alloc::vec::Vec;
use cadence_core::Record;

/// A key range for index queries. Bounds are inclusive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyRange<K> {
    /// All keys
    All,
    /// A single key (equality)
    Only(K),
    /// Keys with `lower <= key <= upper`
    Bound { lower: K, upper: K },
}

impl<K: Ord> KeyRange<K> {
    /// Creates a range for all keys.
    pub fn all() -> Self {
        KeyRange::All
    }

    /// Creates a range for a single key.
    pub fn only(key: K) -> Self {
        KeyRange::Only(key)
    }

    /// Creates an inclusive range with both bounds.
    pub fn bound(lower: K, upper: K) -> Self {
        KeyRange::Bound { lower, upper }
    }

    /// Returns true if this range represents a single value (equality).
    pub fn is_only(&self) -> bool {
        matches!(self, KeyRange::Only(_))
    }

    /// Returns true if this range represents all values (unbounded).
    pub fn is_all(&self) -> bool {
        matches!(self, KeyRange::All)
    }

    /// Returns true if no key can satisfy this range.
    pub fn is_empty(&self) -> bool {
        match self {
            KeyRange::Bound { lower, upper } => lower > upper,
            _ => false,
        }
    }

    /// Returns the lower bound, if any.
    pub fn lower(&self) -> Option<&K> {
        match self {
            KeyRange::All => None,
            KeyRange::Only(k) => Some(k),
            KeyRange::Bound { lower, .. } => Some(lower),
        }
    }

    /// Returns the upper bound, if any.
    pub fn upper(&self) -> Option<&K> {
        match self {
            KeyRange::All => None,
            KeyRange::Only(k) => Some(k),
            KeyRange::Bound { upper, .. } => Some(upper),
        }
    }

    /// Checks if a key is within this range.
    pub fn contains(&self, key: &K) -> bool {
        match self {
            KeyRange::All => true,
            KeyRange::Only(k) => key == k,
            KeyRange::Bound { lower, upper } => key >= lower && key <= upper,
        }
    }
}

/// Core trait for both index implementations.
///
/// Insertion is inherent on each index: the ordered index keeps the first
/// record for a key while the lookup index overwrites it.
pub trait Index {
    /// Gets the record stored under `key`.
    fn get(&self, key: &str) -> Option<&Record>;

    /// Removes `key` from the index, returning its record.
    /// Removing an absent key is a no-op.
    fn remove(&mut self, key: &str) -> Option<Record>;

    /// Checks if the index contains the given key.
    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the number of entries in the index.
    fn len(&self) -> usize;

    /// Returns true if the index is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears all entries from the index.
    fn clear(&mut self);
}

/// Trait for indexes that support ordered range queries.
pub trait RangeIndex: Index {
    /// Gets all records within the given key range, in ascending key order.
    fn range(&self, range: &KeyRange<&str>) -> Vec<&Record>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_range_all() {
        let range: KeyRange<&str> = KeyRange::all();
        assert!(range.contains(&""));
        assert!(range.contains(&"Song"));
        assert!(range.is_all());
        assert!(!range.is_empty());
        assert_eq!(range.lower(), None);
        assert_eq!(range.upper(), None);
    }

    #[test]
    fn test_key_range_only() {
        let range = KeyRange::only("X");
        assert!(range.is_only());
        assert!(range.contains(&"X"));
        assert!(!range.contains(&"Y"));
        assert!(!range.contains(&"XX"));
        assert_eq!(range.lower(), Some(&"X"));
        assert_eq!(range.upper(), Some(&"X"));
    }

    #[test]
    fn test_key_range_bound_inclusive() {
        let range = KeyRange::bound("Song", "Song Z");
        assert!(range.contains(&"Song"));
        assert!(range.contains(&"Song One"));
        assert!(range.contains(&"Song Two"));
        assert!(range.contains(&"Song Z"));
        assert!(!range.contains(&"Another Song"));
        assert!(!range.contains(&"Song Za"));
    }

    #[test]
    fn test_key_range_only_vs_bound() {
        let only = KeyRange::only("m");
        let bound = KeyRange::bound("m", "m");
        for key in ["l", "m", "n"] {
            assert_eq!(only.contains(&key), bound.contains(&key));
        }
    }

    /// Test empty range (lower > upper should contain nothing)
    #[test]
    fn test_key_range_empty() {
        let range = KeyRange::bound("z", "a");
        assert!(range.is_empty());
        assert!(!range.contains(&"a"));
        assert!(!range.contains(&"m"));
        assert!(!range.contains(&"z"));
    }

    #[test]
    fn test_key_range_equality() {
        assert_eq!(KeyRange::<i32>::all(), KeyRange::all());
        assert_eq!(KeyRange::only(1), KeyRange::only(1));
        assert_ne!(KeyRange::only(1), KeyRange::only(2));
        assert_eq!(KeyRange::bound(1, 2), KeyRange::bound(1, 2));
        assert_ne!(KeyRange::bound(1, 2), KeyRange::bound(1, 3));
    }
}
