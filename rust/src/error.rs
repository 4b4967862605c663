//! Error handling and result types for RedBlackTree operations.
//!
//! The balancing core never fails: a missing key is `None`, an impossible
//! rotation is a no-op and an invalid tree is a `false` verdict. These types
//! cover the fallible surfaces around it: the low-level builder, checked
//! insertion and the detailed invariant report.

use crate::types::NodeId;

/// Error type for red-black tree operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RbTreeError {
    /// The id does not name a live node.
    NodeNotFound(NodeId),
    /// A child slot that must be empty is already taken.
    SlotOccupied(String),
    /// A root was requested for a tree that already has one.
    NonEmptyTree,
    /// The root is red.
    RedRoot,
    /// A red node has a red parent.
    RedRedViolation(String),
    /// Two paths below a node cross a different number of black nodes.
    BlackHeightMismatch(String),
    /// A key sits outside the range allowed by its ancestors.
    OrderViolation(String),
    /// A parent link disagrees with the child links.
    BrokenLink(String),
    /// Arena contents disagree with the tree structure.
    ArenaError(String),
    /// Checked operation found the tree corrupted.
    DataIntegrityError(String),
}

impl RbTreeError {
    /// Create a SlotOccupied error with context
    pub fn slot_occupied(parent: NodeId, side: &str) -> Self {
        Self::SlotOccupied(format!("node {} already has a {} child", parent, side))
    }

    /// Create a RedRedViolation error with context
    pub fn red_red(node: NodeId, parent: NodeId) -> Self {
        Self::RedRedViolation(format!("red node {} has red parent {}", node, parent))
    }

    /// Create a BlackHeightMismatch error with context
    pub fn black_height_mismatch(node: NodeId, left: usize, right: usize) -> Self {
        Self::BlackHeightMismatch(format!(
            "node {}: left black height {} vs right black height {}",
            node, left, right
        ))
    }

    /// Create an OrderViolation error with context
    pub fn order_violation(node: NodeId, details: &str) -> Self {
        Self::OrderViolation(format!("node {}: {}", node, details))
    }

    /// Create a BrokenLink error with context
    pub fn broken_link(node: NodeId, details: &str) -> Self {
        Self::BrokenLink(format!("node {}: {}", node, details))
    }

    /// Create an ArenaError with context
    pub fn arena_error(operation: &str, details: &str) -> Self {
        Self::ArenaError(format!("{} failed: {}", operation, details))
    }

    /// Create a DataIntegrityError with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Check if this error reports a broken red-black invariant
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            Self::RedRoot
                | Self::RedRedViolation(_)
                | Self::BlackHeightMismatch(_)
                | Self::OrderViolation(_)
        )
    }

    /// Check if this error reports a structural (link or arena) fault
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::BrokenLink(_) | Self::ArenaError(_))
    }
}

impl std::fmt::Display for RbTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RbTreeError::NodeNotFound(id) => write!(f, "Node {} not found in tree", id),
            RbTreeError::SlotOccupied(msg) => write!(f, "Slot occupied: {}", msg),
            RbTreeError::NonEmptyTree => write!(f, "Tree already has a root"),
            RbTreeError::RedRoot => write!(f, "Root node is red"),
            RbTreeError::RedRedViolation(msg) => write!(f, "Red-red violation: {}", msg),
            RbTreeError::BlackHeightMismatch(msg) => write!(f, "Black height mismatch: {}", msg),
            RbTreeError::OrderViolation(msg) => write!(f, "Order violation: {}", msg),
            RbTreeError::BrokenLink(msg) => write!(f, "Broken link: {}", msg),
            RbTreeError::ArenaError(msg) => write!(f, "Arena error: {}", msg),
            RbTreeError::DataIntegrityError(msg) => write!(f, "Data integrity error: {}", msg),
        }
    }
}

impl std::error::Error for RbTreeError {}

/// Result type for builder and validation operations
pub type TreeResult<T> = Result<T, RbTreeError>;

/// Result type for checked tree modification operations
pub type ModifyResult<T> = Result<T, RbTreeError>;
