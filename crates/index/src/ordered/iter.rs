//! Range iterator over the ordered index.

use super::node::{resolve, Node, NodeId};
use alloc::vec::Vec;
use cadence_core::Record;

/// Lazy in-order iterator over the records whose keys fall in `[lower, upper]`.
///
/// Left subtrees are only entered when `lower < key` and right subtrees only
/// when `upper > key`, so whole branches outside the range are never visited.
/// A missing bound is unbounded on that side.
pub struct RangeIter<'a, 'r> {
    /// Reference to the arena of nodes.
    arena: &'a [Option<Node>],
    /// Ancestors still to be emitted, smallest key on top.
    stack: Vec<NodeId>,
    /// Inclusive lower bound.
    lower: Option<&'r str>,
    /// Inclusive upper bound.
    upper: Option<&'r str>,
}

impl<'a, 'r> RangeIter<'a, 'r> {
    /// Creates a new iterator starting at the given root.
    pub(super) fn new(
        arena: &'a [Option<Node>],
        root: Option<NodeId>,
        lower: Option<&'r str>,
        upper: Option<&'r str>,
    ) -> Self {
        let mut iter = Self {
            arena,
            stack: Vec::new(),
            lower,
            upper,
        };

        let empty = matches!((lower, upper), (Some(l), Some(u)) if l > u);
        if !empty {
            iter.descend(root);
        }
        iter
    }

    /// Pushes the left spine of `start`, skipping nodes below the lower bound.
    fn descend(&mut self, start: Option<NodeId>) {
        let mut current = start;
        while let Some(id) = current {
            let node = resolve(self.arena, id);
            let key = node.key();

            if self.lower.is_some_and(|low| key < low) {
                // Node and its left subtree are below the range
                current = if self.upper.map_or(true, |high| high > key) {
                    node.right
                } else {
                    None
                };
            } else {
                self.stack.push(id);
                current = if self.lower.map_or(true, |low| low < key) {
                    node.left
                } else {
                    None
                };
            }
        }
    }
}

impl<'a, 'r> Iterator for RangeIter<'a, 'r> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = resolve(self.arena, id);
        let key = node.key();

        if self.upper.is_some_and(|high| key > high) {
            // Everything left on the stack is larger still
            self.stack.clear();
            return None;
        }

        if self.upper.map_or(true, |high| high > key) {
            self.descend(node.right);
        }
        Some(&node.record)
    }
}
