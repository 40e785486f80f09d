//! Binary search tree node definitions.

use cadence_core::Record;

/// Node identifier in the tree arena.
pub type NodeId = usize;

/// A node in the ordered index.
///
/// Every key in the left subtree compares strictly less than `record.key()`,
/// every key in the right subtree strictly greater.
#[derive(Clone, Debug)]
pub struct Node {
    /// Record stored at this node.
    pub record: Record,
    /// Left child.
    pub left: Option<NodeId>,
    /// Right child.
    pub right: Option<NodeId>,
}

impl Node {
    /// Creates a new leaf node.
    pub fn leaf(record: Record) -> Self {
        Self {
            record,
            left: None,
            right: None,
        }
    }

    /// Returns the key of the stored record.
    #[inline]
    pub fn key(&self) -> &str {
        self.record.key()
    }
}

/// Which child link of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Side {
    Left,
    Right,
}

/// Resolves a live node id. Links only ever point at occupied slots.
#[inline]
pub(super) fn resolve(arena: &[Option<Node>], id: NodeId) -> &Node {
    match &arena[id] {
        Some(node) => node,
        None => unreachable!("link to vacant arena slot {}", id),
    }
}

#[inline]
pub(super) fn resolve_mut(arena: &mut [Option<Node>], id: NodeId) -> &mut Node {
    match &mut arena[id] {
        Some(node) => node,
        None => unreachable!("link to vacant arena slot {}", id),
    }
}
