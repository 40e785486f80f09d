//! Lookup index implementation for Cadence.
//!
//! This module provides a hash-based index for O(1) point queries by key.

use crate::stats::IndexStats;
use crate::traits::Index;
use alloc::string::String;
use cadence_core::Record;
use hashbrown::HashMap;

/// A hash-based index for O(1) point queries.
///
/// Keys are unique: inserting a record whose key is already present
/// overwrites the stored record. It does not support range queries.
#[derive(Debug, Default)]
pub struct LookupIndex {
    /// The underlying map from keys to records.
    map: HashMap<String, Record>,
    /// Statistics for this index.
    stats: IndexStats,
}

impl LookupIndex {
    /// Creates a new lookup index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new lookup index with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
            stats: IndexStats::new(),
        }
    }

    /// Returns the statistics for this index.
    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }

    /// Inserts a record under its key, returning the record it replaced.
    pub fn insert(&mut self, record: Record) -> Option<Record> {
        let previous = self.map.insert(String::from(record.key()), record);
        if previous.is_some() {
            self.stats.record_duplicate();
        } else {
            self.stats.record_insert();
        }
        previous
    }

    /// Removes `key`, returning its record. Absent keys are a no-op.
    pub fn delete(&mut self, key: &str) -> Option<Record> {
        let removed = self.map.remove(key);
        if removed.is_some() {
            self.stats.record_removal();
        }
        removed
    }

    /// Looks up the record stored under `key`.
    pub fn search(&self, key: &str) -> Option<&Record> {
        self.map.get(key)
    }

    /// Iterates over the stored keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.map.keys().map(String::as_str)
    }

    /// Iterates over the stored records in arbitrary order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.map.values()
    }
}

impl Index for LookupIndex {
    fn get(&self, key: &str) -> Option<&Record> {
        self.search(key)
    }

    fn remove(&mut self, key: &str) -> Option<Record> {
        self.delete(key)
    }

    fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    fn len(&self) -> usize {
        self.map.len()
    }

    fn clear(&mut self) {
        self.map.clear();
        self.stats.clear();
    }
}
