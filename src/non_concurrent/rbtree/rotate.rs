use log::trace;

use super::RBTree;
use super::node::{NodeId, Side};

impl<K> RBTree<K> {
    /// Moves `x` down to the left, promoting its right child into its place.
    ///
    /// ```text
    ///     x              y
    ///    / \            / \
    ///   a   y    =>    x   c
    ///      / \        / \
    ///     b   c      a   b
    /// ```
    ///
    /// The in-order sequence of keys is unchanged, only parent/child links move.
    ///
    /// Complexity: O(1)
    pub(super) fn rotate_left(&mut self, x: NodeId) {
        let Some(y) = self.nodes[x].right else {
            unreachable!("rotating slot {x} left needs a right child")
        };
        trace!("rotate left about slot {x}");

        let b = self.nodes[y].left;
        self.nodes[x].right = b;
        if let Some(b) = b {
            self.nodes[b].parent = Some(x);
        }

        let parent = self.nodes[x].parent;
        self.nodes[y].parent = parent;
        self.replace_child(parent, x, Some(y));

        self.nodes[y].left = Some(x);
        self.nodes[x].parent = Some(y);
    }

    /// Mirror of [`rotate_left`](Self::rotate_left).
    pub(super) fn rotate_right(&mut self, x: NodeId) {
        let Some(y) = self.nodes[x].left else {
            unreachable!("rotating slot {x} right needs a left child")
        };
        trace!("rotate right about slot {x}");

        let b = self.nodes[y].right;
        self.nodes[x].left = b;
        if let Some(b) = b {
            self.nodes[b].parent = Some(x);
        }

        let parent = self.nodes[x].parent;
        self.nodes[y].parent = parent;
        self.replace_child(parent, x, Some(y));

        self.nodes[y].right = Some(x);
        self.nodes[x].parent = Some(y);
    }

    /// Moves `x` down towards `side`, so the fixups can be written once for both mirrors.
    pub(super) fn rotate(&mut self, x: NodeId, side: Side) {
        match side {
            Side::Left => self.rotate_left(x),
            Side::Right => self.rotate_right(x),
        }
    }
}
