//! Iterator implementations for RedBlackTree.
//!
//! Both iterators walk the child links with an explicit stack, so they work on
//! arbitrarily deep (unbalanced, hand-built) trees.

use crate::types::{Direction, NodeId, RedBlackTree, NULL_NODE};

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// In-order iterator over keys.
pub struct Keys<'a, K> {
    tree: &'a RedBlackTree<K>,
    /// Ancestors whose key has not been yielded yet.
    stack: Vec<NodeId>,
}

/// Pre-order iterator over node ids (node, then left subtree, then right).
pub struct NodeIds<'a, K> {
    tree: &'a RedBlackTree<K>,
    stack: Vec<NodeId>,
}

// ============================================================================
// TREE ITERATOR METHODS
// ============================================================================

impl<K> RedBlackTree<K> {
    /// Returns an iterator over all keys in in-order sequence.
    ///
    /// For trees built by insertion the keys come out non-decreasing.
    pub fn keys(&self) -> Keys<'_, K> {
        let mut keys = Keys {
            tree: self,
            stack: Vec::new(),
        };
        keys.push_left_spine(self.root);
        keys
    }

    /// Returns an iterator over all node ids, parents before children.
    pub fn node_ids(&self) -> NodeIds<'_, K> {
        let stack = if self.root == NULL_NODE {
            Vec::new()
        } else {
            vec![self.root]
        };
        NodeIds { tree: self, stack }
    }

    /// Follow `path` from the root, one child link per step.
    ///
    /// An empty path names the root. Returns `None` as soon as a step hits an
    /// absent child.
    ///
    /// ```
    /// use rbtree::{Direction, RedBlackTree};
    ///
    /// let tree: RedBlackTree<i32> = (1..=3).collect();
    /// let left = tree.node_at(&[Direction::Left]).unwrap();
    /// assert_eq!(tree.key(left), Some(&1));
    /// assert_eq!(tree.node_at(&[Direction::Left, Direction::Left]), None);
    /// ```
    pub fn node_at(&self, path: &[Direction]) -> Option<NodeId> {
        let mut id = self.root()?;
        for dir in path {
            id = match dir {
                Direction::Left => self.left(id)?,
                Direction::Right => self.right(id)?,
            };
        }
        Some(id)
    }
}

// ============================================================================
// ITERATOR IMPLEMENTATIONS
// ============================================================================

impl<'a, K> Keys<'a, K> {
    fn push_left_spine(&mut self, mut id: NodeId) {
        while let Some(node) = self.tree.nodes.get(id) {
            self.stack.push(id);
            id = node.left;
        }
    }
}

impl<'a, K> Iterator for Keys<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let id = self.stack.pop()?;
        let node = tree.nodes.get(id)?;
        self.push_left_spine(node.right);
        Some(&node.key)
    }
}

impl<'a, K> Iterator for NodeIds<'a, K> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        if let Some(node) = self.tree.nodes.get(id) {
            if node.right != NULL_NODE {
                self.stack.push(node.right);
            }
            if node.left != NULL_NODE {
                self.stack.push(node.left);
            }
        }
        Some(id)
    }
}
