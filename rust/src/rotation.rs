//! Rotation primitives for RedBlackTree.
//!
//! A rotation re-wires three nodes in O(1) and keeps the in-order key sequence
//! of the rotated subtree unchanged.

use crate::types::{Direction, NodeId, RedBlackTree, NULL_NODE};

impl<K> RedBlackTree<K> {
    mirrored! {
        /// Rotate around `x`, lifting the child on the opposite side into
        /// `x`'s position.
        ///
        /// `rotate_left(x)` lifts `x`'s right child, `rotate_right(x)` its
        /// left child. If that child is absent (or `x` is not a live node)
        /// the call does nothing.
        pub fn rotate(&mut self, x: NodeId) => rotate_dir;
    }

    /// Rotate in direction `dir` around `x`: the child on the opposite side
    /// (`pivot`) takes `x`'s place and `x` becomes `pivot`'s `dir` child.
    pub(crate) fn rotate_dir(&mut self, dir: Direction, x: NodeId) {
        let (pivot, parent) = match self.nodes.get(x) {
            Some(node) => (node.child(dir.opposite()), node.parent),
            None => return,
        };
        let middle = match self.nodes.get(pivot) {
            Some(node) => node.child(dir),
            None => return,
        };

        // The pivot's inner subtree moves across to x.
        self.node_mut(x).set_child(dir.opposite(), middle);
        if middle != NULL_NODE {
            self.node_mut(middle).parent = x;
        }

        self.node_mut(pivot).parent = parent;
        self.replace_child(parent, x, pivot);

        self.node_mut(pivot).set_child(dir, x);
        self.node_mut(x).parent = pivot;
    }

    /// Point whichever link referred to `old` (a child link of `parent`, or
    /// the root when `parent` is null) at `new`.
    pub(crate) fn replace_child(&mut self, parent: NodeId, old: NodeId, new: NodeId) {
        if parent == NULL_NODE {
            self.root = new;
            return;
        }
        let parent_node = self.node_mut(parent);
        if parent_node.left == old {
            parent_node.left = new;
        } else {
            debug_assert_eq!(parent_node.right, old, "parent does not link to child");
            parent_node.right = new;
        }
    }
}
