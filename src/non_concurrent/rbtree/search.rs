use std::cmp::Ordering;

use super::RBTree;
use super::node::{NodeId, NodeRef};

impl<K: Ord> RBTree<K> {
    /// Finds a node holding `key`.
    ///
    /// If the key was inserted more than once, this returns whichever copy sits highest on the
    /// search path.
    ///
    /// Complexity: O(log(n))
    pub fn find(&self, key: &K) -> Option<NodeRef> {
        self.find_id(key).map(|id| self.nodes.handle(id))
    }

    pub fn contains(&self, key: &K) -> bool {
        self.find_id(key).is_some()
    }

    pub(super) fn find_id(&self, key: &K) -> Option<NodeId> {
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = &self.nodes[id];
            cur = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }
}

impl<K> RBTree<K> {
    /// The node with the smallest key, or `None` if the tree is empty.
    ///
    /// Complexity: O(log(n))
    pub fn min(&self) -> Option<NodeRef> {
        self.root.map(|root| self.nodes.handle(self.subtree_min(root)))
    }

    /// The node with the largest key, or `None` if the tree is empty.
    ///
    /// Complexity: O(log(n))
    pub fn max(&self) -> Option<NodeRef> {
        self.root.map(|root| self.nodes.handle(self.subtree_max(root)))
    }

    /// Leftmost node of the subtree rooted at `id`.
    pub(super) fn subtree_min(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.nodes[id].left {
            id = left;
        }
        id
    }

    pub(super) fn subtree_max(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.nodes[id].right {
            id = right;
        }
        id
    }

    /// The next node in key order after `id`.
    pub(super) fn successor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(right) = self.nodes[id].right {
            return Some(self.subtree_min(right))
        }
        // climb until we come up out of a left subtree
        let mut child = id;
        let mut parent = self.nodes[id].parent;
        while let Some(p) = parent {
            if self.nodes[p].left == Some(child) {
                return Some(p)
            }
            child = p;
            parent = self.nodes[p].parent;
        }
        None
    }
}
