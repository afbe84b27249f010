/// What `insert` does with a key that is already in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Keep every copy. Equal keys are placed to the right of the ones already present.
    #[default]
    Allow,
    /// Leave the tree alone and fail with [`RBTreeError::DuplicateKey`](super::RBTreeError::DuplicateKey).
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeConfig {
    pub duplicates: DuplicatePolicy,
    /// Node slots reserved up front.
    pub capacity: usize,
}

impl TreeConfig {
    pub const fn new() -> Self {
        Self {
            duplicates: DuplicatePolicy::Allow,
            capacity: 0,
        }
    }
    
    pub const fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }
    
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}
