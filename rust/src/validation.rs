//! Validation and debugging utilities for RedBlackTree.
//!
//! Two independent checkers decide whether the tree satisfies the red-black
//! invariants:
//!
//! - [`is_valid`](RedBlackTree::is_valid) first computes the root's black
//!   height, then walks the tree again and checks every nil is reached with
//!   exactly that many black nodes behind it.
//! - [`is_valid_single_pass`](RedBlackTree::is_valid_single_pass) visits each
//!   node once and combines a `(valid, black_height)` pair per subtree.
//!
//! They must agree on every tree, balanced or not. Both use explicit stacks,
//! since hand-built test trees can be arbitrarily deep. Key bounds are
//! inclusive on both sides: after rotations a duplicate key may sit left of an
//! equal key.
//!
//! [`check_invariants_detailed`](RedBlackTree::check_invariants_detailed)
//! additionally checks the link graph and reports which rule broke.

use crate::error::{RbTreeError, TreeResult};
use crate::types::{Node, NodeId, RedBlackTree, NULL_NODE};

/// `lo <= key <= hi`, with absent bounds unconstrained.
#[inline]
fn within<K: Ord>(key: &K, lo: Option<&K>, hi: Option<&K>) -> bool {
    lo.map_or(true, |lo| key >= lo) && hi.map_or(true, |hi| key <= hi)
}

/// Work items of the single-pass checker.
enum Step<'a, K> {
    /// Check a subtree within the given bounds.
    Enter {
        id: NodeId,
        lo: Option<&'a K>,
        hi: Option<&'a K>,
    },
    /// Left subtree of `id` is done; check the right one unless it failed.
    Right { id: NodeId, hi: Option<&'a K> },
    /// Both subtrees of `id` are done.
    Combine { id: NodeId, left_height: usize },
}

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K> RedBlackTree<K> {
    /// Black height of a subtree: `0` for an absent node, otherwise one for
    /// the node itself if it is black, plus the larger of its children's.
    ///
    /// The count is unguarded: on a tree with unequal paths it reports the
    /// largest.
    pub fn black_height(&self, node: Option<NodeId>) -> usize {
        let Some(start) = node else {
            return 0;
        };
        let mut deepest = 0;
        let mut stack = vec![(start, 0)];
        while let Some((id, above)) = stack.pop() {
            match self.nodes.get(id) {
                Some(node) => {
                    let count = above + usize::from(node.is_black());
                    stack.push((node.left, count));
                    stack.push((node.right, count));
                }
                None => deepest = deepest.max(above),
            }
        }
        deepest
    }

    /// Check that parent links mirror the child links everywhere below the
    /// root and that no node is reachable twice.
    pub fn check_links(&self) -> TreeResult<()> {
        let Some(root) = self.root() else {
            return Ok(());
        };
        let root_node = self
            .nodes
            .get(root)
            .ok_or_else(|| RbTreeError::broken_link(root, "root is not a live node"))?;
        if root_node.parent != NULL_NODE {
            return Err(RbTreeError::broken_link(root, "root has a parent"));
        }

        let mut visited = 0;
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            visited += 1;
            if visited > self.nodes.len() {
                return Err(RbTreeError::broken_link(id, "reachable more than once"));
            }
            let node = self.node_ref(id);
            for child in [node.left, node.right] {
                if child == NULL_NODE {
                    continue;
                }
                let child_node = self
                    .nodes
                    .get(child)
                    .ok_or_else(|| RbTreeError::broken_link(id, "child is not a live node"))?;
                if child_node.parent != id {
                    return Err(RbTreeError::broken_link(
                        child,
                        &format!("parent link {} but linked from {}", child_node.parent, id),
                    ));
                }
                stack.push(child);
            }
        }
        Ok(())
    }

    /// Check that every live arena node hangs in the tree.
    fn check_arena_tree_consistency(&self) -> TreeResult<()> {
        let in_tree = self.node_ids().count();
        let in_arena = self.nodes.len();
        if in_tree != in_arena {
            return Err(RbTreeError::arena_error(
                "Node consistency check",
                &format!("{} in tree vs {} in arena", in_tree, in_arena),
            ));
        }
        Ok(())
    }
}

impl<K: Ord> RedBlackTree<K> {
    /// Multi-pass validity check.
    ///
    /// Requires a black root, then verifies key order, that no red node has a
    /// red parent and that every path reaches nil after exactly
    /// `black_height(root)` black nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::{Color, RedBlackTree};
    ///
    /// let mut tree: RedBlackTree<i32> = (0..10).collect();
    /// assert!(tree.is_valid());
    ///
    /// let root = tree.root().unwrap();
    /// tree.set_color(root, Color::Red).unwrap();
    /// assert!(!tree.is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        if self.is_red_link(self.root) {
            return false;
        }

        let target = self.black_height(self.root());
        let mut stack: Vec<(NodeId, Option<&K>, Option<&K>, usize)> =
            vec![(self.root, None, None, target)];
        while let Some((id, lo, hi, remaining)) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                if remaining != 0 {
                    return false;
                }
                continue;
            };
            if !within(&node.key, lo, hi) {
                return false;
            }
            let remaining = if node.is_black() {
                match remaining.checked_sub(1) {
                    Some(remaining) => remaining,
                    None => return false,
                }
            } else if self.is_red_link(node.parent) {
                return false;
            } else {
                remaining
            };
            stack.push((node.right, Some(&node.key), hi, remaining));
            stack.push((node.left, lo, Some(&node.key), remaining));
        }
        true
    }

    /// Single-pass validity check. Agrees with [`is_valid`](Self::is_valid)
    /// on every tree.
    pub fn is_valid_single_pass(&self) -> bool {
        if self.is_red_link(self.root) {
            return false;
        }
        self.single_pass_check(self.root()).0
    }

    /// Check one subtree in a single traversal, returning
    /// `(subtree is valid, subtree black height)`.
    ///
    /// An absent subtree is `(true, 0)`. When the verdict is `false` the
    /// height carries no meaning. A failing left subtree short-circuits: the
    /// right one is not visited. The subtree root's own color is not required
    /// to be black.
    pub fn single_pass_check(&self, node: Option<NodeId>) -> (bool, usize) {
        let mut steps = vec![Step::Enter {
            id: node.unwrap_or(NULL_NODE),
            lo: None,
            hi: None,
        }];
        let mut results: Vec<(bool, usize)> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Enter { id, lo, hi } => match self.nodes.get(id) {
                    None => results.push((true, 0)),
                    Some(node) if !within(&node.key, lo, hi) => results.push((false, 0)),
                    Some(node) => {
                        steps.push(Step::Right { id, hi });
                        steps.push(Step::Enter {
                            id: node.left,
                            lo,
                            hi: Some(&node.key),
                        });
                    }
                },
                Step::Right { id, hi } => {
                    let (left_valid, left_height) = results.pop().unwrap_or((false, 0));
                    if !left_valid {
                        results.push((false, 0));
                        continue;
                    }
                    let node = self.node_ref(id);
                    steps.push(Step::Combine { id, left_height });
                    steps.push(Step::Enter {
                        id: node.right,
                        lo: Some(&node.key),
                        hi,
                    });
                }
                Step::Combine { id, left_height } => {
                    let (right_valid, right_height) = results.pop().unwrap_or((false, 0));
                    let node = self.node_ref(id);
                    if node.is_red() && self.is_red_link(node.parent) {
                        results.push((false, 0));
                        continue;
                    }
                    let height = right_height + usize::from(node.is_black());
                    results.push((right_valid && left_height == right_height, height));
                }
            }
        }

        results.pop().unwrap_or((true, 0))
    }

    /// Check every structural and red-black invariant, naming the first
    /// violation found.
    ///
    /// Checks, in order: the link graph, arena/tree consistency, root color,
    /// then per node the key bounds, the red-red rule and equal black height.
    pub fn check_invariants_detailed(&self) -> TreeResult<()> {
        self.check_links()?;
        self.check_arena_tree_consistency()?;
        if self.is_red_link(self.root) {
            return Err(RbTreeError::RedRoot);
        }
        self.check_node_invariants()
    }

    /// Alias for check_invariants_detailed (for test compatibility).
    pub fn validate(&self) -> TreeResult<()> {
        self.check_invariants_detailed()
    }

    /// Post-order walk computing black heights bottom-up.
    fn check_node_invariants(&self) -> TreeResult<()> {
        enum Visit<'a, K> {
            Enter(NodeId, Option<&'a K>, Option<&'a K>),
            Exit(&'a Node<K>, NodeId),
        }

        let mut visits = vec![Visit::Enter(self.root, None, None)];
        let mut heights: Vec<usize> = Vec::new();
        while let Some(visit) = visits.pop() {
            match visit {
                Visit::Enter(id, lo, hi) => {
                    let Some(node) = self.nodes.get(id) else {
                        heights.push(0);
                        continue;
                    };
                    if !within(&node.key, lo, hi) {
                        return Err(RbTreeError::order_violation(
                            id,
                            "key outside the range set by its ancestors",
                        ));
                    }
                    if node.is_red() && self.is_red_link(node.parent) {
                        return Err(RbTreeError::red_red(id, node.parent));
                    }
                    visits.push(Visit::Exit(node, id));
                    visits.push(Visit::Enter(node.right, Some(&node.key), hi));
                    visits.push(Visit::Enter(node.left, lo, Some(&node.key)));
                }
                Visit::Exit(node, id) => {
                    let right = heights.pop().unwrap_or(0);
                    let left = heights.pop().unwrap_or(0);
                    if left != right {
                        return Err(RbTreeError::black_height_mismatch(id, left, right));
                    }
                    heights.push(left + usize::from(node.is_black()));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Direction};

    /// Valid seven-node tree: black 3 over red 1 and red 5, black leaves
    /// 0, 2, 4, 6.
    fn small_tree() -> RedBlackTree<i32> {
        let mut tree = RedBlackTree::new();
        let root = tree.set_root(3).unwrap();
        let one = tree.attach_left(root, 1).unwrap();
        let five = tree.attach_right(root, 5).unwrap();
        tree.set_color(one, Color::Red).unwrap();
        tree.set_color(five, Color::Red).unwrap();
        tree.attach_left(one, 0).unwrap();
        tree.attach_right(one, 2).unwrap();
        tree.attach_left(five, 4).unwrap();
        tree.attach_right(five, 6).unwrap();
        tree
    }

    fn assert_verdict(tree: &RedBlackTree<i32>, expected: bool) {
        assert_eq!(tree.is_valid(), expected, "multi-pass verdict");
        assert_eq!(tree.is_valid_single_pass(), expected, "single-pass verdict");
        assert_eq!(tree.check_invariants_detailed().is_ok(), expected, "detailed verdict");
    }

    #[test]
    fn test_valid_tree() {
        let tree = small_tree();
        assert_verdict(&tree, true);
        assert_eq!(tree.black_height(tree.root()), 2);
        assert_eq!(tree.single_pass_check(tree.root()), (true, 2));
    }

    #[test]
    fn test_red_root_is_invalid() {
        let mut tree = small_tree();
        let root = tree.root().unwrap();
        tree.set_color(root, Color::Red).unwrap();
        assert_verdict(&tree, false);
        assert_eq!(tree.check_invariants_detailed(), Err(RbTreeError::RedRoot));
    }

    #[test]
    fn test_unequal_black_height_is_invalid() {
        let mut tree = small_tree();
        let one = tree.node_at(&[Direction::Left]).unwrap();
        tree.set_color(one, Color::Black).unwrap();
        assert_verdict(&tree, false);
        assert!(matches!(
            tree.check_invariants_detailed(),
            Err(RbTreeError::BlackHeightMismatch(_))
        ));
    }

    #[test]
    fn test_red_child_of_red_parent_is_invalid() {
        let mut tree = small_tree();
        let root = tree.root().unwrap();
        let one = tree.node_at(&[Direction::Left]).unwrap();
        let zero = tree.node_at(&[Direction::Left, Direction::Left]).unwrap();
        tree.set_color(zero, Color::Red).unwrap();
        tree.prune_right(one).unwrap();
        tree.prune_right(root).unwrap();

        assert_verdict(&tree, false);
        assert_eq!(
            tree.check_invariants_detailed(),
            Err(RbTreeError::red_red(zero, one))
        );
    }

    #[test]
    fn test_misordered_key_is_invalid() {
        let mut tree = RedBlackTree::new();
        let root = tree.set_root(5).unwrap();
        let left = tree.attach_left(root, 3).unwrap();
        let right = tree.attach_right(root, 8).unwrap();
        let bad = tree.attach_right(left, 6).unwrap();
        tree.attach_left(left, 1).unwrap();
        tree.attach_left(right, 7).unwrap();
        tree.attach_right(right, 9).unwrap();
        tree.set_color(left, Color::Red).unwrap();
        tree.set_color(right, Color::Red).unwrap();

        assert_verdict(&tree, false);
        assert!(matches!(
            tree.check_invariants_detailed(),
            Err(RbTreeError::OrderViolation(msg)) if msg.starts_with(&format!("node {}", bad))
        ));
    }

    #[test]
    fn test_black_height_of_absent_node_is_zero() {
        let tree: RedBlackTree<i32> = RedBlackTree::new();
        assert_eq!(tree.black_height(None), 0);
        assert_eq!(tree.single_pass_check(None), (true, 0));
        assert_verdict(&tree, true);
    }

    #[test]
    fn test_black_height_takes_longest_path() {
        let mut tree = RedBlackTree::new();
        let root = tree.set_root(1).unwrap();
        let right = tree.attach_right(root, 2).unwrap();
        tree.attach_right(right, 3).unwrap();
        assert_eq!(tree.black_height(tree.root()), 3);
        assert_eq!(tree.black_height(Some(right)), 2);
    }

    #[test]
    fn test_left_failure_short_circuits() {
        let mut tree = RedBlackTree::new();
        let root = tree.set_root(10).unwrap();
        let left = tree.attach_left(root, 5).unwrap();
        tree.attach_right(root, 15).unwrap();
        tree.attach_left(left, 20).unwrap();

        assert_eq!(tree.single_pass_check(Some(left)), (false, 0));
        assert_eq!(tree.single_pass_check(tree.root()), (false, 0));
    }

    #[test]
    fn test_check_links_detects_dangling_parent() {
        let mut tree = small_tree();
        assert!(tree.check_links().is_ok());

        let leaf = tree.node_at(&[Direction::Right, Direction::Right]).unwrap();
        let root = tree.root;
        tree.node_mut(leaf).parent = root;
        assert!(matches!(
            tree.check_links(),
            Err(RbTreeError::BrokenLink(_))
        ));
        assert!(tree.check_invariants_detailed().unwrap_err().is_structural());
    }

    #[test]
    fn test_arena_consistency_detects_orphans() {
        let mut tree = small_tree();
        let root = tree.root;
        tree.node_mut(root).left = NULL_NODE;
        assert!(matches!(
            tree.check_invariants_detailed(),
            Err(RbTreeError::ArenaError(_))
        ));
    }
}
