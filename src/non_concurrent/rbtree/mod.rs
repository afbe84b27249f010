//! A red-black tree keyed by a single totally-ordered key type.
//!
//! The tree is a multiset by default: inserting a key that is already present adds another
//! node, placed to the right of the existing ones. Every mutating operation finishes with a
//! fixup pass that restores the red-black invariants, so the height stays within
//! `2*log₂(n+1)`.
//!
//! Nodes are stored in an arena owned by the tree, and links between them are slot indices.
//! An absent link (`None`) plays the role of the classic black sentinel leaf.

use std::fmt;

use log::debug;

mod config;
mod erase;
mod error;
mod insert;
mod node;
mod rotate;
mod search;
mod traverse;

pub use config::{DuplicatePolicy, TreeConfig};
pub use error::RBTreeError;
pub use node::{Color, NodeRef};

use node::{NodeArena, NodeId, Side};

// PROVE: any node with height `h` has black height at least `h/2`
// PROVE: the subtree located at any node `x` contains at least `2^bh(x) - 1` nodes (use induction)
// LEMMA: An RBTree with `n` internal nodes has height at most `2*log₂(n+1)`

/// An ordered multiset backed by a red-black tree.
///
/// Not thread-safe in any interesting way: mutation needs `&mut self`, so the borrow checker
/// already serializes writers against readers.
pub struct RBTree<K> {
    nodes: NodeArena<K>,
    root: Option<NodeId>,
    config: TreeConfig,
}

impl<K> RBTree<K> {
    /// Creates an empty tree that allows duplicate keys.
    ///
    /// Doesn't allocate until the first insert.
    pub const fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            root: None,
            config: TreeConfig::new(),
        }
    }

    /// Creates an empty tree, reserving `config.capacity` node slots up front.
    pub fn with_config(config: TreeConfig) -> Result<Self, RBTreeError> {
        let nodes = NodeArena::try_with_capacity(config.capacity)?;
        debug!("Created tree with room for {} nodes ({:?})", nodes.capacity(), config.duplicates);
        Ok(Self {
            nodes,
            root: None,
            config,
        })
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// The number of keys in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every key. All outstanding [`NodeRef`]s become invalid.
    pub fn clear(&mut self) {
        debug!("Clearing tree of {} nodes", self.nodes.len());
        self.nodes.clear();
        self.root = None;
    }

    pub fn root(&self) -> Option<NodeRef> {
        self.root.map(|id| self.nodes.handle(id))
    }

    /// The key stored at `node`, or `None` if the reference isn't live.
    pub fn get(&self, node: NodeRef) -> Option<&K> {
        let id = self.nodes.resolve(node)?;
        Some(&self.nodes[id].key)
    }

    pub fn color(&self, node: NodeRef) -> Option<Color> {
        let id = self.nodes.resolve(node)?;
        Some(self.nodes[id].color)
    }

    /// `None` if `node` is the root (or not live).
    pub fn parent(&self, node: NodeRef) -> Option<NodeRef> {
        let id = self.nodes.resolve(node)?;
        self.nodes[id].parent.map(|p| self.nodes.handle(p))
    }

    pub fn left(&self, node: NodeRef) -> Option<NodeRef> {
        let id = self.nodes.resolve(node)?;
        self.nodes[id].left.map(|c| self.nodes.handle(c))
    }

    pub fn right(&self, node: NodeRef) -> Option<NodeRef> {
        let id = self.nodes.resolve(node)?;
        self.nodes[id].right.map(|c| self.nodes.handle(c))
    }

    /// Sentinel links are black.
    fn is_red(&self, id: Option<NodeId>) -> bool {
        id.is_some_and(|id| self.nodes[id].color == Color::Red)
    }

    /// Colors a node. Painting the sentinel is a no-op, it stays black.
    fn paint(&mut self, id: Option<NodeId>, color: Color) {
        if let Some(id) = id {
            self.nodes[id].color = color;
        }
    }

    /// Which side of `parent` the (possibly absent) `child` hangs from.
    ///
    /// An absent child is matched against `parent`'s left link first, so this is only
    /// meaningful when at most one of `parent`'s children is absent.
    fn side_of(&self, parent: NodeId, child: Option<NodeId>) -> Side {
        if self.nodes[parent].left == child { Side::Left } else { Side::Right }
    }

    /// Points whatever referenced `old` (its parent's child slot, or the root) at `new`.
    ///
    /// Leaves `new`'s own parent link untouched.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(p) => {
                let side = self.side_of(p, Some(old));
                *self.nodes[p].child_mut(side) = new;
            }
        }
    }
}

impl<K> Default for RBTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for RBTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        self.walk_in_order(|key| {
            list.entry(key);
            true
        });
        list.finish()
    }
}

#[cfg(test)]
impl<K: Ord> RBTree<K> {
    /// Checks every red-black and search-tree invariant, returning the black height.
    fn assert_invariants(&self) -> usize {
        fn check<K: Ord>(tree: &RBTree<K>, id: Option<NodeId>, parent: Option<NodeId>) -> usize {
            let Some(id) = id else { return 0 };
            let node = &tree.nodes[id];
            assert_eq!(node.parent, parent, "broken parent link at slot {id}");
            if node.color == Color::Red {
                assert!(!tree.is_red(node.left) && !tree.is_red(node.right), "red-red at slot {id}");
            }
            if let Some(l) = node.left {
                assert!(tree.nodes[l].key <= node.key, "left child out of order at slot {id}");
            }
            if let Some(r) = node.right {
                assert!(tree.nodes[r].key >= node.key, "right child out of order at slot {id}");
            }
            let lh = check(tree, node.left, Some(id));
            let rh = check(tree, node.right, Some(id));
            assert_eq!(lh, rh, "black heights differ below slot {id}");
            lh + (node.color == Color::Black) as usize
        }

        assert!(!self.is_red(self.root), "red root");
        let height = check(self, self.root, None);

        let keys = self.to_vec_by_ref();
        assert_eq!(keys.len(), self.len());
        assert!(keys.is_sorted(), "in-order walk out of order");
        height
    }

    fn to_vec_by_ref(&self) -> Vec<&K> {
        let mut out = Vec::with_capacity(self.len());
        self.walk_in_order(|key| {
            out.push(key);
            true
        });
        out
    }
}
