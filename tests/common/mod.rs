//! Structural checks run against the public inspection API, independent of the tree's own
//! bookkeeping.

#![allow(dead_code)]

use rbtree::{Color, NodeRef, RBTree};
use simplelog::{Config, LevelFilter, TestLogger};

pub fn init_logging() {
    // every test calls this, only the first one gets to install the logger
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

pub fn tree_of<K: Ord>(keys: impl IntoIterator<Item = K>) -> RBTree<K> {
    let mut tree = RBTree::new();
    for k in keys {
        tree.insert(k).expect("insert");
    }
    tree
}

/// Every path from `node` down to an absent child crosses the same number of black nodes,
/// and no red node has a red child. Returns that black count, or `None` on a violation.
pub fn color_traverse<K>(tree: &RBTree<K>, node: Option<NodeRef>, parent_color: Color) -> Option<usize> {
    let Some(node) = node else { return Some(0) };
    let color = tree.color(node)?;
    if parent_color == Color::Red && color == Color::Red {
        return None
    }
    let left = color_traverse(tree, tree.left(node), color)?;
    let right = color_traverse(tree, tree.right(node), color)?;
    if left != right {
        return None
    }
    Some(left + (color == Color::Black) as usize)
}

/// Left subtrees hold keys `<=` their root, right subtrees `>=`, and parent links agree with
/// child links. Returns the (min, max) key of the subtree.
pub fn search_traverse<'a, K: Ord>(tree: &'a RBTree<K>, node: NodeRef) -> Option<(&'a K, &'a K)> {
    let key = tree.get(node)?;
    let (mut lo, mut hi) = (key, key);
    if let Some(left) = tree.left(node) {
        if tree.parent(left) != Some(node) {
            return None
        }
        let (lmin, lmax) = search_traverse(tree, left)?;
        if lmax > key {
            return None
        }
        lo = lmin;
    }
    if let Some(right) = tree.right(node) {
        if tree.parent(right) != Some(node) {
            return None
        }
        let (rmin, rmax) = search_traverse(tree, right)?;
        if rmin < key {
            return None
        }
        hi = rmax;
    }
    Some((lo, hi))
}

/// Panics unless every red-black and search-tree invariant holds.
pub fn assert_rb_invariants<K: Ord>(tree: &RBTree<K>) {
    let Some(root) = tree.root() else {
        assert_eq!(tree.len(), 0, "empty root but nonzero len");
        return
    };
    assert_eq!(tree.color(root), Some(Color::Black), "red root");
    assert_eq!(tree.parent(root), None, "root has a parent");
    assert!(color_traverse(tree, Some(root), Color::Black).is_some(), "color constraint violated");
    assert!(search_traverse(tree, root).is_some(), "search tree constraint violated");
}
