use super::RBTree;

impl<K> RBTree<K> {
    /// Calls `f` on every key in ascending order, stopping early once it returns `false`.
    ///
    /// Walks the parent links instead of keeping a stack, so this never allocates.
    pub(super) fn walk_in_order<'a>(&'a self, mut f: impl FnMut(&'a K) -> bool) {
        let mut cur = self.root.map(|root| self.subtree_min(root));
        while let Some(id) = cur {
            if !f(&self.nodes[id].key) {
                return
            }
            cur = self.successor(id);
        }
    }

    /// Copies keys into `out` in ascending order and returns how many were written.
    ///
    /// If `out` is shorter than the tree, only the smallest `out.len()` keys are written.
    /// Check the returned count rather than assuming everything fit.
    ///
    /// Complexity: O(n)
    pub fn to_array(&self, out: &mut [K]) -> usize
    where
        K: Clone,
    {
        let mut slots = out.iter_mut();
        let mut written = 0;
        self.walk_in_order(|key| match slots.next() {
            Some(slot) => {
                slot.clone_from(key);
                written += 1;
                true
            }
            None => false,
        });
        written
    }

    /// Every key, in ascending order.
    pub fn to_vec(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut out = Vec::with_capacity(self.len());
        self.walk_in_order(|key| {
            out.push(key.clone());
            true
        });
        out
    }
}
