//! Core types and data structures for RedBlackTree.
//!
//! This module contains the node layout, the color tag, the child direction
//! used by the mirrored algorithms, and the tree handle itself.

use crate::arena::Arena;

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

pub use crate::arena::{NodeId, NULL_NODE};

/// Color tag of a node. Absent children count as black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    Red,
    #[default]
    Black,
}

/// Side of a parent a child hangs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// The mirror direction.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Red-black tree keeping keys in non-decreasing in-order sequence.
///
/// Nodes are stored in an arena and refer to each other by [`NodeId`]. The
/// downward `left`/`right` links define the tree; the `parent` link is a plain
/// index kept in sync with them by every structural change.
///
/// Equal keys are allowed and are placed in the right subtree of the existing
/// key at insertion time.
///
/// # Examples
///
/// ```
/// use rbtree::RedBlackTree;
///
/// let mut tree = RedBlackTree::new();
/// for key in [5, 9, 3, 4] {
///     tree.insert(key);
/// }
///
/// assert!(tree.search(&4).is_some());
/// assert!(tree.search(&8).is_none());
/// assert!(tree.is_valid());
/// assert_eq!(tree.keys().copied().collect::<Vec<_>>(), vec![3, 4, 5, 9]);
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(log n)
/// - **Search**: O(log n)
/// - **Rotation**: O(1)
/// - **Validation**: O(n)
#[derive(Debug, Clone)]
pub struct RedBlackTree<K> {
    /// The node without a parent, or `NULL_NODE` for an empty tree.
    pub(crate) root: NodeId,
    /// Storage for every live node.
    pub(crate) nodes: Arena<Node<K>>,
}

/// A single stored key with its color and links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) color: Color,
    pub(crate) parent: NodeId,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
}

impl<K> Node<K> {
    /// A detached node with no links.
    pub(crate) fn new(key: K, color: Color) -> Self {
        Self {
            key,
            color,
            parent: NULL_NODE,
            left: NULL_NODE,
            right: NULL_NODE,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    /// Parent id, `None` for the root (or a node under construction).
    pub fn parent(&self) -> Option<NodeId> {
        link(self.parent)
    }

    pub fn left(&self) -> Option<NodeId> {
        link(self.left)
    }

    pub fn right(&self) -> Option<NodeId> {
        link(self.right)
    }

    /// Raw child link on the given side.
    #[inline]
    pub(crate) fn child(&self, dir: Direction) -> NodeId {
        match dir {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, dir: Direction, id: NodeId) {
        match dir {
            Direction::Left => self.left = id,
            Direction::Right => self.right = id,
        }
    }
}

/// Convert a raw link into an `Option`.
#[inline]
pub(crate) fn link(id: NodeId) -> Option<NodeId> {
    if id == NULL_NODE {
        None
    } else {
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_color_is_black() {
        assert_eq!(Color::default(), Color::Black);
    }

    #[test]
    fn test_direction_opposite() {
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite().opposite(), Direction::Right);
    }

    #[test]
    fn test_node_child_links() {
        let mut node = Node::new(7, Color::Red);
        assert_eq!(node.left(), None);
        assert_eq!(node.parent(), None);

        node.set_child(Direction::Right, 3);
        assert_eq!(node.right(), Some(3));
        assert_eq!(node.child(Direction::Left), NULL_NODE);
        assert!(node.is_red());
    }
}
