//! Cadence Index - Index implementations for the Cadence hybrid catalog.
//!
//! This crate provides the two indexes the catalog keeps in step:
//!
//! - `OrderedIndex`: unbalanced binary search tree for ordered range scans
//! - `LookupIndex`: O(1) point queries using a hash map
//!
//! # Example
//!
//! ```rust
//! use cadence_core::Record;
//! use cadence_index::{Index, KeyRange, LookupIndex, OrderedIndex, RangeIndex};
//!
//! // Ordered index
//! let mut tree = OrderedIndex::new();
//! tree.insert(Record::new("b", "2"));
//! tree.insert(Record::new("a", "1"));
//! tree.insert(Record::new("c", "3"));
//!
//! let keys: Vec<_> = tree.range_query("a", "b").iter().map(|r| r.key()).collect();
//! assert_eq!(keys, vec!["a", "b"]);
//!
//! let all = tree.range(&KeyRange::all());
//! assert_eq!(all.len(), 3);
//!
//! // Lookup index
//! let mut map = LookupIndex::new();
//! map.insert(Record::new("a", "1"));
//! assert_eq!(map.get("a").map(|r| r.payload()), Some("1"));
//! assert!(map.get("z").is_none());
//! ```

#![no_std]

extern crate alloc;

pub mod lookup;
pub mod ordered;
pub mod stats;
pub mod traits;

pub use lookup::LookupIndex;
pub use ordered::{OrderedIndex, RangeIter};
pub use stats::IndexStats;
pub use traits::{Index, KeyRange, RangeIndex};
