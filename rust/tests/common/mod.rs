//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use rbtree::{Color, Direction, RedBlackTree};
use simplelog::{Config, LevelFilter, TestLogger};

/// Route the crate's log records to the test output.
pub fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

/// Valid seven-node tree: black 3 over red 1 and red 5, with black leaves
/// 0, 2, 4 and 6.
pub fn seven_node_tree() -> RedBlackTree<i32> {
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

/// Keys 0..7 chained through right children, all black, rooted at 0.
pub fn right_chain() -> RedBlackTree<i32> {
    let mut tree = RedBlackTree::new();
    let mut cursor = tree.set_root(0).unwrap();
    for key in 1..7 {
        cursor = tree.attach_right(cursor, key).unwrap();
    }
    tree
}

/// Keys 6..=0 chained through left children, all black, rooted at 6.
pub fn left_chain() -> RedBlackTree<i32> {
    let mut tree = RedBlackTree::new();
    let mut cursor = tree.set_root(6).unwrap();
    for key in (0..6).rev() {
        cursor = tree.attach_left(cursor, key).unwrap();
    }
    tree
}

pub fn key_at(tree: &RedBlackTree<i32>, path: &[Direction]) -> Option<i32> {
    tree.node_at(path).and_then(|id| tree.key(id)).copied()
}

pub fn color_at<K>(tree: &RedBlackTree<K>, path: &[Direction]) -> Option<Color> {
    tree.node_at(path).and_then(|id| tree.color(id))
}

/// Both checkers must return the same verdict; returns it.
pub fn agreed_verdict<K: Ord>(tree: &RedBlackTree<K>) -> bool {
    let multi = tree.is_valid();
    let single = tree.is_valid_single_pass();
    assert_eq!(multi, single, "validators disagree");
    multi
}
