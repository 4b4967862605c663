//! INSERT operations for RedBlackTree.
//!
//! This module contains key insertion: the binary-search descent that places
//! a new red node, and the fix-up loop that restores the red-black invariants
//! with recoloring and rotations.

use crate::error::{ModifyResult, RbTreeError};
use crate::types::{Color, Direction, Node, NodeId, RedBlackTree, NULL_NODE};
use log::{debug, trace};

impl<K: Ord> RedBlackTree<K> {
    /// Insert a key, keeping the tree balanced.
    ///
    /// Keys strictly less than a node's key go to its left, all others
    /// (duplicates included) to its right. Returns the id of the new node.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::{Color, RedBlackTree};
    ///
    /// let mut tree = RedBlackTree::new();
    /// let five = tree.insert(5);
    /// let nine = tree.insert(9);
    ///
    /// assert_eq!(tree.root(), Some(five));
    /// assert_eq!(tree.right(five), Some(nine));
    /// assert_eq!(tree.color(five), Some(Color::Black));
    /// assert_eq!(tree.color(nine), Some(Color::Red));
    /// ```
    pub fn insert(&mut self, key: K) -> NodeId {
        if self.root == NULL_NODE {
            let id = self.nodes.allocate(Node::new(key, Color::Black));
            self.root = id;
            debug!("created root node {}", id);
            return id;
        }

        let (parent, dir) = self.find_insert_slot(&key);
        let mut node = Node::new(key, Color::Red);
        node.parent = parent;
        let id = self.nodes.allocate(node);
        self.node_mut(parent).set_child(dir, id);

        self.insert_fix_up(id);
        id
    }

    /// Insert with invariant checks before and after the modification.
    ///
    /// Refuses to touch a tree that is already corrupted and reports a
    /// `DataIntegrityError` if the insertion left it corrupted.
    pub fn try_insert(&mut self, key: K) -> ModifyResult<NodeId> {
        if let Err(e) = self.check_invariants_detailed() {
            return Err(RbTreeError::data_integrity("before insert", &e.to_string()));
        }

        let id = self.insert(key);

        if let Err(e) = self.check_invariants_detailed() {
            return Err(RbTreeError::data_integrity("after insert", &e.to_string()));
        }

        Ok(id)
    }

    // ============================================================================
    // HELPERS FOR INSERT OPERATIONS
    // ============================================================================

    /// Descend from the (non-empty) root to the empty slot where `key` belongs.
    fn find_insert_slot(&self, key: &K) -> (NodeId, Direction) {
        let mut parent = self.root;
        loop {
            let node = self.node_ref(parent);
            let dir = if *key < node.key {
                Direction::Left
            } else {
                Direction::Right
            };
            match node.child(dir) {
                NULL_NODE => return (parent, dir),
                child => parent = child,
            }
        }
    }

    /// Restore the red-black invariants after `node` was attached as a red
    /// leaf.
    fn insert_fix_up(&mut self, mut node: NodeId) {
        loop {
            let parent = self.node_ref(node).parent;
            if !self.is_red_link(parent) {
                break;
            }
            // A red parent is never the root, so the grandparent exists.
            let grandparent = self.node_ref(parent).parent;
            debug_assert_ne!(grandparent, NULL_NODE, "red node without grandparent");

            let side = if self.node_ref(grandparent).left == parent {
                Direction::Left
            } else {
                Direction::Right
            };
            let uncle = self.node_ref(grandparent).child(side.opposite());

            if self.is_red_link(uncle) {
                trace!("fix-up {}: red uncle {}, recolor", node, uncle);
                self.node_mut(parent).color = Color::Black;
                self.node_mut(uncle).color = Color::Black;
                self.node_mut(grandparent).color = Color::Red;
                node = grandparent;
                continue;
            }

            let mut parent = parent;
            if self.node_ref(parent).child(side.opposite()) == node {
                trace!("fix-up {}: inner grandchild, rotate at {}", node, parent);
                self.rotate_dir(side, parent);
                node = parent;
                parent = self.node_ref(node).parent;
            }

            trace!("fix-up {}: outer grandchild, rotate at {}", node, grandparent);
            self.node_mut(parent).color = Color::Black;
            self.node_mut(grandparent).color = Color::Red;
            self.rotate_dir(side.opposite(), grandparent);
        }

        let root = self.root;
        self.node_mut(root).color = Color::Black;
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{Color, Direction, RedBlackTree};
    use Direction::{Left as L, Right as R};

    fn color_at(tree: &RedBlackTree<i32>, path: &[Direction]) -> Option<Color> {
        tree.node_at(path).and_then(|id| tree.color(id))
    }

    fn key_at(tree: &RedBlackTree<i32>, path: &[Direction]) -> Option<i32> {
        tree.node_at(path).and_then(|id| tree.key(id)).copied()
    }

    #[test]
    fn test_insert_into_empty_tree_makes_black_root() {
        let mut tree = RedBlackTree::new();
        let id = tree.insert(5);
        assert_eq!(tree.root(), Some(id));
        assert_eq!(tree.color(id), Some(Color::Black));
        assert_eq!(tree.parent(id), None);
    }

    #[test]
    fn test_insert_scenario_step_by_step() {
        let mut tree = RedBlackTree::new();

        tree.insert(5);
        assert_eq!(color_at(&tree, &[]), Some(Color::Black));

        tree.insert(9);
        assert_eq!(key_at(&tree, &[R]), Some(9));
        assert_eq!(color_at(&tree, &[R]), Some(Color::Red));

        // Red uncle: recolor only.
        tree.insert(3);
        tree.insert(4);
        assert_eq!(color_at(&tree, &[]), Some(Color::Black));
        assert_eq!(color_at(&tree, &[R]), Some(Color::Black));
        assert_eq!(color_at(&tree, &[L]), Some(Color::Black));
        assert_eq!(key_at(&tree, &[L, R]), Some(4));
        assert_eq!(color_at(&tree, &[L, R]), Some(Color::Red));

        // Inner grandchild: double rotation.
        tree.insert(6);
        tree.insert(7);
        assert_eq!(key_at(&tree, &[R]), Some(7));
        assert_eq!(key_at(&tree, &[R, L]), Some(6));
        assert_eq!(key_at(&tree, &[R, R]), Some(9));
        assert_eq!(color_at(&tree, &[R]), Some(Color::Black));
        assert_eq!(color_at(&tree, &[R, L]), Some(Color::Red));
        assert_eq!(color_at(&tree, &[R, R]), Some(Color::Red));

        tree.insert(10);
        assert_eq!(color_at(&tree, &[R]), Some(Color::Red));
        assert_eq!(color_at(&tree, &[R, L]), Some(Color::Black));
        assert_eq!(color_at(&tree, &[R, R]), Some(Color::Black));
        assert_eq!(key_at(&tree, &[R, R, R]), Some(10));
        assert_eq!(color_at(&tree, &[R, R, R]), Some(Color::Red));
        assert!(tree.is_valid());

        // Recoloring propagates up and ends in a rotation at the root.
        tree.insert(8);
        tree.insert(12);
        assert_eq!(key_at(&tree, &[]), Some(7));
        assert_eq!(key_at(&tree, &[L]), Some(5));
        assert_eq!(key_at(&tree, &[L, R]), Some(6));
        assert_eq!(key_at(&tree, &[R, L]), Some(8));
        assert_eq!(key_at(&tree, &[R, R, R]), Some(12));
        assert_eq!(color_at(&tree, &[]), Some(Color::Black));
        assert_eq!(color_at(&tree, &[L]), Some(Color::Red));
        assert_eq!(color_at(&tree, &[R]), Some(Color::Red));
        assert_eq!(color_at(&tree, &[L, R]), Some(Color::Black));
        assert_eq!(color_at(&tree, &[R, L]), Some(Color::Black));
        assert_eq!(color_at(&tree, &[R, R, R]), Some(Color::Red));
        assert!(tree.is_valid());
        assert!(tree.is_valid_single_pass());
    }

    #[test]
    fn test_ascending_and_descending_runs_stay_valid() {
        let mut ascending = RedBlackTree::new();
        let mut descending = RedBlackTree::new();
        for key in 0..200 {
            ascending.insert(key);
            descending.insert(-key);
            assert!(ascending.is_valid());
            assert!(descending.is_valid());
        }
        assert!(ascending.height() <= 16);
        assert!(descending.height() <= 16);
    }

    #[test]
    fn test_duplicates_go_right_and_stay_valid() {
        let mut tree = RedBlackTree::new();
        let first = tree.insert(1);
        let second = tree.insert(1);
        assert_eq!(tree.right(first), Some(second));

        for _ in 0..20 {
            tree.insert(1);
        }
        assert_eq!(tree.len(), 22);
        assert!(tree.is_valid());
        assert!(tree.is_valid_single_pass());
        assert!(tree.keys().all(|k| *k == 1));
    }

    #[test]
    fn test_try_insert_refuses_corrupted_tree() {
        let mut tree: RedBlackTree<i32> = (0..8).collect();
        assert!(tree.try_insert(100).is_ok());

        let root = tree.root().unwrap();
        tree.set_color(root, Color::Red).unwrap();
        let err = tree.try_insert(101).unwrap_err();
        assert!(err.to_string().contains("before insert"));
        assert_eq!(tree.len(), 9);
    }
}
