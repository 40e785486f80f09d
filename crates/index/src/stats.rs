//! Index statistics for Cadence.
//!
//! Counters are updated through `&self` so read paths can share an index
//! while its owner keeps mutating.

use core::sync::atomic::{AtomicUsize, Ordering};

/// Statistics for an index.
#[derive(Debug)]
pub struct IndexStats {
    /// Number of live entries.
    entries: AtomicUsize,
    /// Inserts that created a new entry.
    inserts: AtomicUsize,
    /// Inserts whose key already existed.
    duplicates: AtomicUsize,
    /// Removals of a present key.
    removals: AtomicUsize,
}

impl IndexStats {
    /// Creates a new empty stats instance.
    pub fn new() -> Self {
        Self {
            entries: AtomicUsize::new(0),
            inserts: AtomicUsize::new(0),
            duplicates: AtomicUsize::new(0),
            removals: AtomicUsize::new(0),
        }
    }

    /// Returns the number of live entries.
    pub fn entries(&self) -> usize {
        self.entries.load(Ordering::Relaxed)
    }

    /// Returns the number of inserts that created an entry.
    pub fn inserts(&self) -> usize {
        self.inserts.load(Ordering::Relaxed)
    }

    /// Returns the number of inserts that hit an existing key.
    pub fn duplicates(&self) -> usize {
        self.duplicates.load(Ordering::Relaxed)
    }

    /// Returns the number of successful removals.
    pub fn removals(&self) -> usize {
        self.removals.load(Ordering::Relaxed)
    }

    /// Records an insert of a new key.
    pub fn record_insert(&self) {
        self.entries.fetch_add(1, Ordering::Relaxed);
        self.inserts.fetch_add(1, Ordering::Relaxed);
    }

    /// Records an insert whose key was already present.
    pub fn record_duplicate(&self) {
        self.duplicates.fetch_add(1, Ordering::Relaxed);
    }

    /// Records the removal of a present key.
    pub fn record_removal(&self) {
        self.entries.fetch_sub(1, Ordering::Relaxed);
        self.removals.fetch_add(1, Ordering::Relaxed);
    }

    /// Resets the entry count to zero. Cumulative counters are preserved.
    pub fn clear(&self) {
        self.entries.store(0, Ordering::Relaxed);
    }
}

impl Default for IndexStats {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for IndexStats {
    fn clone(&self) -> Self {
        Self {
            entries: AtomicUsize::new(self.entries()),
            inserts: AtomicUsize::new(self.inserts()),
            duplicates: AtomicUsize::new(self.duplicates()),
            removals: AtomicUsize::new(self.removals()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = IndexStats::new();
        assert_eq!(stats.entries(), 0);
        assert_eq!(stats.inserts(), 0);
        assert_eq!(stats.duplicates(), 0);
        assert_eq!(stats.removals(), 0);
    }

    #[test]
    fn test_stats_insert_remove() {
        let stats = IndexStats::new();
        stats.record_insert();
        stats.record_insert();
        stats.record_duplicate();
        assert_eq!(stats.entries(), 2);
        assert_eq!(stats.inserts(), 2);
        assert_eq!(stats.duplicates(), 1);

        stats.record_removal();
        assert_eq!(stats.entries(), 1);
        assert_eq!(stats.removals(), 1);
    }

    #[test]
    fn test_stats_clear() {
        let stats = IndexStats::new();
        stats.record_insert();
        stats.record_insert();
        stats.clear();
        assert_eq!(stats.entries(), 0);
        assert_eq!(stats.inserts(), 2); // Cumulative counters are preserved
    }

    #[test]
    fn test_stats_clone() {
        let stats = IndexStats::new();
        stats.record_insert();
        stats.record_duplicate();
        let cloned = stats.clone();
        assert_eq!(cloned.entries(), 1);
        assert_eq!(cloned.duplicates(), 1);
    }
}
