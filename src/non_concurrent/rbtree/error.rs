use super::node::NodeRef;

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RBTreeError {
    /// Storage for another node couldn't be reserved.
    #[error("failed to allocate storage for a tree node")]
    AllocationFailure,
    /// The reference was erased already, or never belonged to this tree.
    #[error("node reference is not live in this tree")]
    InvalidReference,
    /// Only returned under [`DuplicatePolicy::Reject`](super::DuplicatePolicy::Reject).
    /// Carries the node already holding the key.
    #[error("key is already present in the tree (at {0:?})")]
    DuplicateKey(NodeRef),
}
