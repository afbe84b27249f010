use log::{debug, trace, warn};

use super::{RBTree, RBTreeError};
use super::node::{Color, NodeId, NodeRef};

impl<K> RBTree<K> {
    /// Removes `node` from the tree and returns its key.
    ///
    /// When the node has two children its in-order successor is moved into its position. The
    /// successor keeps its own [`NodeRef`] (and key), so the only reference this invalidates
    /// is `node` itself.
    ///
    /// Fails with [`RBTreeError::InvalidReference`] if `node` was already erased.
    ///
    /// Complexity: O(log(n))
    pub fn erase(&mut self, node: NodeRef) -> Result<K, RBTreeError> {
        let Some(z) = self.nodes.resolve(node) else {
            warn!("Refusing to erase {node:?}: not a live node of this tree");
            return Err(RBTreeError::InvalidReference)
        };

        let (left, right) = (self.nodes[z].left, self.nodes[z].right);
        // `x` ends up in the slot of whatever node physically left its position, `x_parent`
        // tracks its parent since `x` may well be the sentinel
        let (removed_color, x, x_parent) = match (left, right) {
            (None, _) => {
                let parent = self.nodes[z].parent;
                self.transplant(z, right);
                (self.nodes[z].color, right, parent)
            }
            (Some(_), None) => {
                let parent = self.nodes[z].parent;
                self.transplant(z, left);
                (self.nodes[z].color, left, parent)
            }
            (Some(left), Some(right)) => {
                let y = self.subtree_min(right);
                let y_color = self.nodes[y].color;
                let x = self.nodes[y].right;

                let x_parent = if y == right {
                    Some(y)
                } else {
                    let y_parent = self.nodes[y].parent;
                    self.transplant(y, x);
                    self.nodes[y].right = Some(right);
                    self.nodes[right].parent = Some(y);
                    y_parent
                };

                self.transplant(z, Some(y));
                self.nodes[y].left = Some(left);
                self.nodes[left].parent = Some(y);
                self.nodes[y].color = self.nodes[z].color;
                (y_color, x, x_parent)
            }
        };

        let removed = self.nodes.release(z);
        debug!("Erased slot {z}, {} nodes left", self.nodes.len());

        // removing a red node can't change any black height
        if removed_color == Color::Black {
            self.erase_fixup(x, x_parent);
        }
        Ok(removed.key)
    }

    /// Hangs `v` where `u` used to be. `u`'s own links are left as they were.
    fn transplant(&mut self, u: NodeId, v: Option<NodeId>) {
        let parent = self.nodes[u].parent;
        self.replace_child(parent, u, v);
        if let Some(v) = v {
            self.nodes[v].parent = parent;
        }
    }

    /// Restores black heights after a black node was taken out above `x`.
    ///
    /// `x` carries an "extra black". It is pushed up the tree until it lands on a red node
    /// (which simply absorbs it) or the root, or until a rotation can spend it.
    fn erase_fixup(&mut self, mut x: Option<NodeId>, mut parent: Option<NodeId>) {
        while x != self.root && !self.is_red(x) {
            // x isn't the root, so it hangs below something
            let Some(p) = parent else {
                unreachable!("non-root carrying an extra black has no parent")
            };
            let side = self.side_of(p, x);
            let other = side.opposite();

            // the extra black on x means the other side has black height >= 1, so a sibling exists
            let Some(mut w) = self.nodes[p].child(other) else {
                unreachable!("extra black below slot {p} but no sibling on the {other:?}")
            };

            if self.is_red(Some(w)) {
                trace!("erase fixup: red sibling at slot {w}");
                self.paint(Some(w), Color::Black);
                self.paint(Some(p), Color::Red);
                self.rotate(p, side);
                let Some(next) = self.nodes[p].child(other) else {
                    unreachable!("rotation left slot {p} without a sibling on the {other:?}")
                };
                w = next;
            }

            let near = self.nodes[w].child(side);
            let far = self.nodes[w].child(other);

            if !self.is_red(near) && !self.is_red(far) {
                trace!("erase fixup: black sibling at slot {w} with black children");
                self.paint(Some(w), Color::Red);
                x = Some(p);
                parent = self.nodes[p].parent;
                continue
            }

            if !self.is_red(far) {
                trace!("erase fixup: red near nephew below slot {w}");
                self.paint(near, Color::Black);
                self.paint(Some(w), Color::Red);
                self.rotate(w, other);
                let Some(next) = self.nodes[p].child(other) else {
                    unreachable!("rotation left slot {p} without a sibling on the {other:?}")
                };
                w = next;
            }

            trace!("erase fixup: red far nephew below slot {w}");
            self.nodes[w].color = self.nodes[p].color;
            self.paint(Some(p), Color::Black);
            let far = self.nodes[w].child(other);
            self.paint(far, Color::Black);
            self.rotate(p, side);
            x = self.root;
            break
        }

        self.paint(x, Color::Black);
    }
}

impl<K: Ord> RBTree<K> {
    /// Erases one node holding `key`, if there is any. See [`find`](Self::find) for which one.
    pub fn remove(&mut self, key: &K) -> Option<K> {
        let node = self.find(key)?;
        self.erase(node).ok()
    }
}
