use std::cmp::Ordering;

use log::trace;

use super::{DuplicatePolicy, RBTree, RBTreeError};
use super::node::{Color, Node, NodeId, NodeRef, Side};

impl<K: Ord> RBTree<K> {
    /// Inserts `key`, returning a reference to its new node.
    ///
    /// Equal keys go to the right of the copies already present. Under
    /// [`DuplicatePolicy::Reject`] an existing key is left alone and the existing node is
    /// reported through [`RBTreeError::DuplicateKey`] instead.
    ///
    /// Complexity: O(log(n))
    pub fn insert(&mut self, key: K) -> Result<NodeRef, RBTreeError> {
        let reject = self.config.duplicates == DuplicatePolicy::Reject;

        let mut parent = None;
        let mut side = Side::Left;
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = &self.nodes[id];
            side = match key.cmp(&node.key) {
                Ordering::Less => Side::Left,
                Ordering::Equal if reject => {
                    return Err(RBTreeError::DuplicateKey(self.nodes.handle(id)))
                }
                // ties follow the right branch
                Ordering::Equal | Ordering::Greater => Side::Right,
            };
            parent = Some(id);
            cur = node.child(side);
        }

        let z = self.nodes.alloc(Node::new(key, parent))?;
        match parent {
            None => self.root = Some(z),
            Some(p) => *self.nodes[p].child_mut(side) = Some(z),
        }

        self.insert_fixup(z);
        Ok(self.nodes.handle(z))
    }

    /// Repairs red-red violations introduced by hanging the red node `z` off the tree.
    ///
    /// Black heights are untouched, the violation just gets pushed upwards until it can be
    /// fixed with at most two rotations.
    fn insert_fixup(&mut self, mut z: NodeId) {
        while let Some(mut p) = self.nodes[z].parent {
            if !self.is_red(Some(p)) {
                break
            }
            // a red parent is never the root, so there is a grandparent
            let Some(g) = self.nodes[p].parent else {
                unreachable!("red slot {p} has no parent to serve as grandparent")
            };
            let side = self.side_of(g, Some(p));
            let uncle = self.nodes[g].child(side.opposite());

            if self.is_red(uncle) {
                trace!("insert fixup: red uncle below slot {g}, recoloring");
                self.paint(Some(p), Color::Black);
                self.paint(uncle, Color::Black);
                self.paint(Some(g), Color::Red);
                z = g;
                continue
            }

            if self.nodes[p].child(side.opposite()) == Some(z) {
                trace!("insert fixup: inner grandchild at slot {z}");
                self.rotate(p, side);
                // z and p swapped places
                (z, p) = (p, z);
            }
            trace!("insert fixup: outer grandchild at slot {z}");
            self.paint(Some(p), Color::Black);
            self.paint(Some(g), Color::Red);
            self.rotate(g, side.opposite());
            break
        }

        self.paint(self.root, Color::Black);
    }
}
