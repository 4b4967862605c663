//! Construction and low-level building for RedBlackTree.
//!
//! Besides the usual constructors this module exposes a builder that links
//! nodes by hand. It performs no ordering or coloring checks, so it can
//! assemble any binary tree shape, including ones that break the red-black
//! rules. Validator tests rely on that.

use crate::arena::Arena;
use crate::error::{RbTreeError, TreeResult};
use crate::types::{Color, Direction, Node, NodeId, RedBlackTree, NULL_NODE};

impl<K> RedBlackTree<K> {
    /// Create an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RedBlackTree;
    ///
    /// let tree = RedBlackTree::<i32>::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.root(), None);
    /// ```
    pub fn new() -> Self {
        Self {
            root: NULL_NODE,
            nodes: Arena::new(),
        }
    }

    /// Create an empty tree whose arena can hold `capacity` nodes before
    /// growing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            root: NULL_NODE,
            nodes: Arena::with_capacity(capacity),
        }
    }

    /// Returns the number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.root == NULL_NODE
    }

    /// Remove every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = NULL_NODE;
    }

    // ============================================================================
    // BUILDER
    // ============================================================================

    /// Give an empty tree a black root holding `key`.
    pub fn set_root(&mut self, key: K) -> TreeResult<NodeId> {
        if self.root != NULL_NODE {
            return Err(RbTreeError::NonEmptyTree);
        }
        let id = self.nodes.allocate(Node::new(key, Color::Black));
        self.root = id;
        Ok(id)
    }

    mirrored! {
        /// Link a new black node holding `key` as a child of `parent`.
        ///
        /// Fails if `parent` is not live or the slot is already taken.
        pub fn attach(&mut self, parent: NodeId, key: K) -> TreeResult<NodeId> => attach_dir;
    }

    mirrored! {
        /// Detach the child subtree of `parent` and free all of its nodes.
        ///
        /// Returns the number of freed nodes (zero if the slot was empty).
        pub fn prune(&mut self, parent: NodeId) -> TreeResult<usize> => prune_dir;
    }

    /// Overwrite the color of a node.
    pub fn set_color(&mut self, id: NodeId, color: Color) -> TreeResult<()> {
        let node = self
            .nodes
            .get_mut(id)
            .ok_or(RbTreeError::NodeNotFound(id))?;
        node.color = color;
        Ok(())
    }

    fn attach_dir(&mut self, dir: Direction, parent: NodeId, key: K) -> TreeResult<NodeId> {
        let slot = self
            .nodes
            .get(parent)
            .ok_or(RbTreeError::NodeNotFound(parent))?
            .child(dir);
        if slot != NULL_NODE {
            return Err(RbTreeError::slot_occupied(parent, side_name(dir)));
        }

        let mut node = Node::new(key, Color::Black);
        node.parent = parent;
        let id = self.nodes.allocate(node);
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.set_child(dir, id);
        }
        Ok(id)
    }

    fn prune_dir(&mut self, dir: Direction, parent: NodeId) -> TreeResult<usize> {
        let parent_node = self
            .nodes
            .get_mut(parent)
            .ok_or(RbTreeError::NodeNotFound(parent))?;
        let child = parent_node.child(dir);
        parent_node.set_child(dir, NULL_NODE);

        let mut freed = 0;
        let mut stack = vec![child];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.deallocate(id) {
                freed += 1;
                stack.push(node.left);
                stack.push(node.right);
            }
        }
        Ok(freed)
    }
}

fn side_name(dir: Direction) -> &'static str {
    match dir {
        Direction::Left => "left",
        Direction::Right => "right",
    }
}

impl<K> Default for RedBlackTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<K> for RedBlackTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for RedBlackTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}
