//! GET operations for RedBlackTree.
//!
//! This module contains the read operations: key search, the per-node
//! accessors used by traversal consumers, and the internal node access
//! helpers shared by the mutating modules.

use crate::types::{link, Color, Direction, Node, NodeId, RedBlackTree, NULL_NODE};
use std::cmp::Ordering;

impl<K: Ord> RedBlackTree<K> {
    /// Find a node holding `key`.
    ///
    /// Among duplicates the one closest to the root is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = [3, 1, 2].into_iter().collect();
    /// let id = tree.search(&2).unwrap();
    /// assert_eq!(tree.key(id), Some(&2));
    /// assert_eq!(tree.search(&7), None);
    /// ```
    pub fn search(&self, key: &K) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(node) = self.nodes.get(current) {
            current = match key.cmp(&node.key) {
                Ordering::Equal => return Some(current),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Check if key exists in the tree.
    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        self.extreme(Direction::Left)
    }

    /// Largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        self.extreme(Direction::Right)
    }

    fn extreme(&self, dir: Direction) -> Option<&K> {
        let mut node = self.nodes.get(self.root)?;
        while let Some(next) = self.nodes.get(node.child(dir)) {
            node = next;
        }
        Some(&node.key)
    }
}

impl<K> RedBlackTree<K> {
    // ============================================================================
    // PUBLIC NODE ACCESS
    // ============================================================================

    /// The root node id, `None` for an empty tree.
    pub fn root(&self) -> Option<NodeId> {
        link(self.root)
    }

    /// Borrow a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node<K>> {
        self.nodes.get(id)
    }

    pub fn key(&self, id: NodeId) -> Option<&K> {
        self.node(id).map(Node::key)
    }

    pub fn color(&self, id: NodeId) -> Option<Color> {
        self.node(id).map(Node::color)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::parent)
    }

    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::left)
    }

    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::right)
    }

    /// Number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.root, 1)];
        while let Some((id, depth)) = stack.pop() {
            if let Some(node) = self.nodes.get(id) {
                deepest = deepest.max(depth);
                stack.push((node.left, depth + 1));
                stack.push((node.right, depth + 1));
            }
        }
        deepest
    }

    // ============================================================================
    // INTERNAL NODE ACCESS
    // ============================================================================

    /// Node behind an id the caller knows to be live.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not live, which means the link graph is corrupted.
    #[inline]
    pub(crate) fn node_ref(&self, id: NodeId) -> &Node<K> {
        match self.nodes.get(id) {
            Some(node) => node,
            None => panic!("link to dead node {}", id),
        }
    }

    /// True if `id` names a live red node. Absent links count as black.
    #[inline]
    pub(crate) fn is_red_link(&self, id: NodeId) -> bool {
        self.nodes.get(id).map_or(false, Node::is_red)
    }

    /// Mutable counterpart of [`node_ref`](Self::node_ref).
    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K> {
        debug_assert_ne!(id, NULL_NODE);
        match self.nodes.get_mut(id) {
            Some(node) => node,
            None => panic!("link to dead node {}", id),
        }
    }
}
