//! Binary search tree implementation.

use super::iter::RangeIter;
use super::node::{resolve, resolve_mut, Node, NodeId, Side};
use crate::stats::IndexStats;
use crate::traits::{Index, KeyRange, RangeIndex};
use alloc::vec::Vec;
use cadence_core::Record;
use core::cmp::Ordering;
use core::mem;

/// An unbalanced binary search tree over record keys.
///
/// Nodes live in an arena and own their child links. Insert and delete
/// start from a subtree root and hand back the (possibly new) root of that
/// subtree, which the caller writes into the root link. Depth depends on
/// insertion order and no rebalancing is performed, so every walk is a loop
/// rather than recursion.
#[derive(Debug, Default)]
pub struct OrderedIndex {
    /// Arena of nodes. Vacant slots are listed in `free`.
    arena: Vec<Option<Node>>,
    /// Recycled slot ids.
    free: Vec<NodeId>,
    /// Root node ID.
    root: Option<NodeId>,
    /// Statistics for this index.
    stats: IndexStats,
}

impl OrderedIndex {
    /// Creates a new empty ordered index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the statistics for this index.
    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }

    /// Inserts a record. Returns false if the key was already present, in
    /// which case the stored record is left unchanged.
    pub fn insert(&mut self, record: Record) -> bool {
        let mut inserted = false;
        let root = self.insert_node(self.root, record, &mut inserted);
        self.root = Some(root);

        if inserted {
            self.stats.record_insert();
        } else {
            self.stats.record_duplicate();
        }
        inserted
    }

    /// Inserts a record, replacing the stored record in place when the key
    /// already exists. Returns the replaced record.
    pub fn replace(&mut self, record: Record) -> Option<Record> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = resolve_mut(&mut self.arena, id);
            match record.key_cmp(&node.record) {
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
                Ordering::Equal => {
                    self.stats.record_duplicate();
                    return Some(mem::replace(&mut node.record, record));
                }
            }
        }

        self.insert(record);
        None
    }

    /// Removes the record stored under `key`. Absent keys leave the tree unchanged.
    pub fn delete(&mut self, key: &str) -> Option<Record> {
        let mut removed = None;
        self.root = self.delete_node(self.root, key, &mut removed);

        if removed.is_some() {
            self.stats.record_removal();
        }
        removed
    }

    /// Returns every record with `low <= key <= high`, in ascending key order.
    pub fn range_query(&self, low: &str, high: &str) -> Vec<&Record> {
        if low > high {
            return Vec::new();
        }
        self.range_iter(low, high).collect()
    }

    /// Lazy form of [`range_query`](Self::range_query).
    pub fn range_iter<'a, 'r>(&'a self, low: &'r str, high: &'r str) -> RangeIter<'a, 'r> {
        RangeIter::new(&self.arena, self.root, Some(low), Some(high))
    }

    /// Iterates over all records in ascending key order.
    pub fn iter(&self) -> RangeIter<'_, 'static> {
        RangeIter::new(&self.arena, self.root, None, None)
    }

    /// Returns the record with the smallest key.
    pub fn min(&self) -> Option<&Record> {
        let id = self.leftmost(self.root?);
        Some(&self.node(id).record)
    }

    /// Returns the record with the largest key.
    pub fn max(&self) -> Option<&Record> {
        let mut current = self.root?;
        while let Some(right) = self.node(current).right {
            current = right;
        }
        Some(&self.node(current).record)
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        self.subtree_height(self.root)
    }

    #[inline]
    fn node(&self, id: NodeId) -> &Node {
        resolve(&self.arena, id)
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        resolve_mut(&mut self.arena, id)
    }

    /// Allocates a new node in the arena and returns its ID.
    fn alloc_node(&mut self, node: Node) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.arena[id] = Some(node);
                id
            }
            None => {
                let id = self.arena.len();
                self.arena.push(Some(node));
                id
            }
        }
    }

    /// Vacates a slot and returns the node it held.
    fn free_node(&mut self, id: NodeId) -> Node {
        match self.arena[id].take() {
            Some(node) => {
                self.free.push(id);
                node
            }
            None => unreachable!("double free of arena slot {}", id),
        }
    }

    /// Returns the leftmost node of the subtree rooted at `id`.
    fn leftmost(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(left) = self.node(current).left {
            current = left;
        }
        current
    }

    /// Writes `child` into the `side` link of `parent`.
    #[inline]
    fn set_child(&mut self, parent: NodeId, side: Side, child: Option<NodeId>) {
        let node = self.node_mut(parent);
        match side {
            Side::Left => node.left = child,
            Side::Right => node.right = child,
        }
    }

    fn subtree_height(&self, id: Option<NodeId>) -> usize {
        let mut height = 0;
        let mut pending: Vec<(NodeId, usize)> = id.map(|id| (id, 1)).into_iter().collect();

        while let Some((id, depth)) = pending.pop() {
            height = height.max(depth);
            let node = self.node(id);
            pending.extend(node.left.map(|l| (l, depth + 1)));
            pending.extend(node.right.map(|r| (r, depth + 1)));
        }
        height
    }

    /// Inserts into the subtree rooted at `slot` and returns its new root.
    /// The descent is a loop that remembers the link the new leaf hangs from.
    fn insert_node(&mut self, slot: Option<NodeId>, record: Record, inserted: &mut bool) -> NodeId {
        let root = match slot {
            Some(id) => id,
            None => {
                *inserted = true;
                return self.alloc_node(Node::leaf(record));
            }
        };

        let mut current = root;
        loop {
            let node = self.node(current);
            let (child, side) = match record.key_cmp(&node.record) {
                Ordering::Less => (node.left, Side::Left),
                Ordering::Greater => (node.right, Side::Right),
                // First record for a key wins
                Ordering::Equal => return root,
            };

            match child {
                Some(child) => current = child,
                None => {
                    let leaf = self.alloc_node(Node::leaf(record));
                    self.set_child(current, side, Some(leaf));
                    *inserted = true;
                    return root;
                }
            }
        }
    }

    /// Deletes `key` from the subtree rooted at `slot` and returns its new root.
    fn delete_node(
        &mut self,
        slot: Option<NodeId>,
        key: &str,
        removed: &mut Option<Record>,
    ) -> Option<NodeId> {
        let mut parent: Option<(NodeId, Side)> = None;
        let mut current = slot;

        let target = loop {
            let Some(id) = current else {
                return slot;
            };
            let node = self.node(id);
            match key.cmp(node.key()) {
                Ordering::Less => {
                    parent = Some((id, Side::Left));
                    current = node.left;
                }
                Ordering::Greater => {
                    parent = Some((id, Side::Right));
                    current = node.right;
                }
                Ordering::Equal => break id,
            }
        };

        let node = self.node(target);
        let replacement = match (node.left, node.right) {
            (Some(_), Some(right)) => {
                // Successor substitution: the minimum of the right subtree
                // takes this node's place.
                let (right, successor) = self.detach_min(right);
                let node = self.node_mut(target);
                node.right = right;
                *removed = Some(mem::replace(&mut node.record, successor));
                Some(target)
            }
            (left, right) => {
                *removed = Some(self.free_node(target).record);
                left.or(right)
            }
        };

        match parent {
            Some((parent, side)) => {
                self.set_child(parent, side, replacement);
                slot
            }
            None => replacement,
        }
    }

    /// Unlinks the minimum node of the subtree rooted at `id`.
    /// Returns the subtree's new root and the detached record.
    fn detach_min(&mut self, id: NodeId) -> (Option<NodeId>, Record) {
        let mut parent = None;
        let mut current = id;
        while let Some(left) = self.node(current).left {
            parent = Some(current);
            current = left;
        }

        let min = self.free_node(current);
        match parent {
            Some(parent) => {
                self.node_mut(parent).left = min.right;
                (Some(id), min.record)
            }
            None => (min.right, min.record),
        }
    }
}

impl Index for OrderedIndex {
    fn get(&self, key: &str) -> Option<&Record> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.node(id);
            match key.cmp(node.key()) {
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
                Ordering::Equal => return Some(&node.record),
            }
        }
        None
    }

    fn remove(&mut self, key: &str) -> Option<Record> {
        self.delete(key)
    }

    fn len(&self) -> usize {
        self.stats.entries()
    }

    fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn clear(&mut self) {
        self.arena.clear();
        self.free.clear();
        self.root = None;
        self.stats.clear();
    }
}

impl RangeIndex for OrderedIndex {
    fn range(&self, range: &KeyRange<&str>) -> Vec<&Record> {
        if range.is_empty() {
            return Vec::new();
        }
        RangeIter::new(&self.arena, self.root, range.lower().copied(), range.upper().copied())
            .collect()
    }
}
