//! Data structures that need exclusive access (`&mut self`) to mutate.

pub mod rbtree;
