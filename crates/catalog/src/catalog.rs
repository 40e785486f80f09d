//! The hybrid catalog facade.
//!
//! Every mutation is applied to both indexes in a fixed order. Insert goes to
//! the ordered index first and then the lookup index. Delete resolves the
//! record through the lookup index, removes it from the ordered index, and
//! finally from the lookup index.

use crate::policy::DuplicatePolicy;
use alloc::vec::Vec;
use cadence_core::Record;
use cadence_index::{Index, LookupIndex, OrderedIndex, RangeIter};

/// Result of [`HybridCatalog::insert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The key was new to both indexes.
    Inserted,
    /// The key existed and both indexes now hold the new record.
    Replaced,
    /// The key existed; the lookup index holds the new record while the
    /// ordered index kept a different, older one.
    Diverged,
}

/// A record set indexed by key both in order and by hash.
///
/// Point queries are served by the lookup index and range queries by the
/// ordered index; the ordered index is never consulted for point lookups.
#[derive(Debug, Default)]
pub struct HybridCatalog {
    /// Sorted structure for range scans.
    ordered: OrderedIndex,
    /// Hash map for point access.
    lookup: LookupIndex,
    /// Duplicate-key handling in the ordered index.
    policy: DuplicatePolicy,
}

impl HybridCatalog {
    /// Creates an empty catalog that keeps the first record in the ordered
    /// index on duplicate keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty catalog with the given duplicate-key policy.
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Returns the duplicate-key policy.
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Inserts a record into both indexes.
    pub fn insert(&mut self, record: Record) -> InsertOutcome {
        let outcome = match self.policy {
            DuplicatePolicy::KeepFirst => {
                if self.ordered.insert(record.clone()) {
                    InsertOutcome::Inserted
                } else if self.ordered.get(record.key()) == Some(&record) {
                    InsertOutcome::Replaced
                } else {
                    InsertOutcome::Diverged
                }
            }
            DuplicatePolicy::Replace => match self.ordered.replace(record.clone()) {
                Some(_) => InsertOutcome::Replaced,
                None => InsertOutcome::Inserted,
            },
        };

        self.lookup.insert(record);
        outcome
    }

    /// Deletes `key` from both indexes, returning the record the lookup index
    /// held. If the lookup index has no such key nothing is removed anywhere.
    pub fn delete(&mut self, key: &str) -> Option<Record> {
        let target = self.lookup.search(key)?;
        self.ordered.delete(target.key());
        self.lookup.delete(key)
    }

    /// Looks up a record by key.
    pub fn search(&self, key: &str) -> Option<&Record> {
        self.lookup.search(key)
    }

    /// Returns every record with `low <= key <= high`, in ascending key order.
    pub fn range_query(&self, low: &str, high: &str) -> Vec<&Record> {
        self.ordered.range_query(low, high)
    }

    /// Lazy form of [`range_query`](Self::range_query).
    pub fn range_iter<'a, 'r>(&'a self, low: &'r str, high: &'r str) -> RangeIter<'a, 'r> {
        self.ordered.range_iter(low, high)
    }

    /// Iterates over all records in ascending key order.
    pub fn iter(&self) -> RangeIter<'_, 'static> {
        self.ordered.iter()
    }

    /// Returns true if `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.lookup.contains_key(key)
    }

    /// Returns the number of keys in the catalog.
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    /// Returns true if the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// Removes every record from both indexes.
    pub fn clear(&mut self) {
        self.ordered.clear();
        self.lookup.clear();
    }

    /// Returns the ordered index.
    pub fn ordered(&self) -> &OrderedIndex {
        &self.ordered
    }

    /// Returns the lookup index.
    pub fn lookup(&self) -> &LookupIndex {
        &self.lookup
    }

    /// Keys, in ascending order, whose ordered-index record differs from the
    /// lookup-index record.
    pub fn divergent_keys(&self) -> Vec<&str> {
        self.ordered
            .iter()
            .filter(|stored| self.lookup.search(stored.key()) != Some(*stored))
            .map(|stored| stored.key())
            .collect()
    }

    /// Returns true if both indexes hold the same keys with identical records.
    pub fn is_consistent(&self) -> bool {
        self.ordered.len() == self.lookup.len() && self.divergent_keys().is_empty()
    }
}

impl Extend<Record> for HybridCatalog {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl FromIterator<Record> for HybridCatalog {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut catalog = HybridCatalog::new();
        catalog.extend(iter);
        catalog
    }
}
