//! Cadence Catalog - a record set indexed both by order and by hash.
//!
//! `HybridCatalog` owns an `OrderedIndex` and a `LookupIndex` over the same
//! records and keeps them in step on every insert and delete:
//!
//! - point lookups go to the lookup index
//! - inclusive range scans go to the ordered index
//!
//! # Example
//!
//! ```rust
//! use cadence_catalog::HybridCatalog;
//! use cadence_core::Record;
//!
//! let mut catalog = HybridCatalog::new();
//! catalog.insert(Record::new("Song One", "Artist A"));
//! catalog.insert(Record::new("Song Two", "Artist B"));
//! catalog.insert(Record::new("Another Song", "Artist C"));
//!
//! assert_eq!(catalog.search("Song Two").map(|r| r.payload()), Some("Artist B"));
//! assert!(catalog.search("Song Three").is_none());
//!
//! catalog.delete("Song One");
//!
//! let titles: Vec<_> = catalog
//!     .range_query("Song", "Song Z")
//!     .iter()
//!     .map(|r| r.key())
//!     .collect();
//! assert_eq!(titles, vec!["Song Two"]);
//! ```
//!
//! The catalog is single-threaded. Callers sharing it across threads must
//! guard the whole catalog with one lock, since insert and delete touch both
//! indexes.

#![no_std]

extern crate alloc;

mod catalog;
mod policy;

pub use catalog::{HybridCatalog, InsertOutcome};
pub use policy::DuplicatePolicy;
