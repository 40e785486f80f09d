//! Ordered index implementation for Cadence.
//!
//! This module provides an unbalanced binary search tree keyed by record key,
//! used for inclusive range scans in ascending key order.

mod iter;
mod node;
mod tree;

pub use iter::RangeIter;
pub use node::{Node, NodeId};
pub use tree::OrderedIndex;
