//! Red-black tree implementation in Rust.
//!
//! This crate provides an arena-backed red-black tree supporting insertion
//! with fix-up, search, explicit rotations and two independent validity
//! checkers. Nodes are addressed by stable [`NodeId`]s and expose their key,
//! color and links for read-only traversal.
//!
//! # Examples
//!
//! ```
//! use rbtree::{Color, RedBlackTree};
//!
//! let mut tree = RedBlackTree::new();
//! for key in [5, 9, 3, 4, 6, 7, 10, 8, 12] {
//!     tree.insert(key);
//! }
//!
//! let root = tree.root().unwrap();
//! assert_eq!(tree.key(root), Some(&7));
//! assert_eq!(tree.color(root), Some(Color::Black));
//! assert!(tree.is_valid());
//! assert!(tree.is_valid_single_pass());
//! ```

#[macro_use]
mod macros;

mod arena;
mod construction;
mod error;
mod get_operations;
mod graphviz;
mod insert_operations;
mod iteration;
mod rotation;
mod types;
mod validation;

pub use arena::ArenaStats;
pub use error::{ModifyResult, RbTreeError, TreeResult};
pub use iteration::{Keys, NodeIds};
pub use types::{Color, Direction, Node, NodeId, RedBlackTree, NULL_NODE};

impl<K> RedBlackTree<K> {
    /// Get statistics for the node arena.
    pub fn arena_stats(&self) -> ArenaStats {
        self.nodes.stats()
    }
}
