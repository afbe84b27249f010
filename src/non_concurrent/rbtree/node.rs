use std::ops::{Index, IndexMut};

use log::debug;

use super::error::RBTreeError;

/// Index of a slot in the [`NodeArena`].
pub(super) type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// Which child slot of a parent a node hangs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Side {
    Left,
    Right,
}

impl Side {
    pub(super) const fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A reference to a node owned by an [`RBTree`](super::RBTree).
///
/// References stay valid until the node they point at is erased (or the tree is cleared).
/// After that the tree reports them as [`RBTreeError::InvalidReference`], even if the
/// underlying slot has since been reused by another insert. A slot whose generation counter
/// runs out is retired rather than wrapped, so an old reference never comes back to life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
    index: u32,
    generation: u32,
}

pub(super) struct Node<K> {
    pub(super) key: K,
    pub(super) color: Color,
    // `None` stands in for the sentinel everywhere below
    pub(super) parent: Option<NodeId>,
    pub(super) left: Option<NodeId>,
    pub(super) right: Option<NodeId>,
}

impl<K> Node<K> {
    /// A fresh red leaf hanging off `parent`.
    pub(super) const fn new(key: K, parent: Option<NodeId>) -> Self {
        Self {
            key,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }

    pub(super) const fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(super) const fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

enum Entry<K> {
    Occupied(Node<K>),
    Vacant { next_free: Option<NodeId> },
    /// Generation exhausted, never handed out again.
    Retired,
}

struct Slot<K> {
    generation: u32,
    entry: Entry<K>,
}

/// Backing storage for every node of one tree.
///
/// Vacant slots form a stack threaded through `next_free`. Releasing a slot bumps its
/// generation so outstanding [`NodeRef`]s to it stop resolving.
pub(super) struct NodeArena<K> {
    slots: Vec<Slot<K>>,
    free_head: Option<NodeId>,
    len: usize,
}

impl<K> NodeArena<K> {
    pub(super) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    pub(super) fn try_with_capacity(capacity: usize) -> Result<Self, RBTreeError> {
        let mut arena = Self::new();
        arena.slots.try_reserve_exact(capacity).map_err(|_| RBTreeError::AllocationFailure)?;
        Ok(arena)
    }

    /// The number of occupied slots.
    pub(super) fn len(&self) -> usize {
        self.len
    }

    pub(super) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Stores `node`, reusing a vacant slot if there is one.
    pub(super) fn alloc(&mut self, node: Node<K>) -> Result<NodeId, RBTreeError> {
        if let Some(id) = self.free_head {
            let slot = &mut self.slots[id];
            let Entry::Vacant { next_free } = slot.entry else {
                unreachable!("free list points at non-vacant slot {id}")
            };
            self.free_head = next_free;
            slot.entry = Entry::Occupied(node);
            self.len += 1;
            return Ok(id)
        }

        let id = self.slots.len();
        // handles store the index as a `u32`
        if u32::try_from(id).is_err() {
            return Err(RBTreeError::AllocationFailure)
        }
        self.slots.try_reserve(1).map_err(|_| RBTreeError::AllocationFailure)?;
        self.slots.push(Slot { generation: 0, entry: Entry::Occupied(node) });
        self.len += 1;
        Ok(id)
    }

    /// Vacates slot `id` and hands back the node that lived there.
    pub(super) fn release(&mut self, id: NodeId) -> Node<K> {
        let entry = std::mem::replace(&mut self.slots[id].entry, Entry::Retired);
        let Entry::Occupied(node) = entry else {
            panic!("slot {id} was already vacant")
        };
        self.vacate(id);
        self.len -= 1;
        node
    }

    /// Bumps the generation of the (already emptied) slot `id` and pushes it onto the free
    /// list, or leaves it retired if the generation can't go any higher.
    fn vacate(&mut self, id: NodeId) {
        let slot = &mut self.slots[id];
        match slot.generation.checked_add(1) {
            Some(generation) => {
                slot.generation = generation;
                slot.entry = Entry::Vacant { next_free: self.free_head };
                self.free_head = Some(id);
            }
            None => {
                debug!("Retiring slot {id}, its generation is exhausted");
                slot.entry = Entry::Retired;
            }
        }
    }

    /// Drops every node. Outstanding references are invalidated.
    ///
    /// Slots are kept (and their generations bumped) so old references can't alias nodes
    /// inserted afterwards.
    pub(super) fn clear(&mut self) {
        self.free_head = None;
        for id in (0..self.slots.len()).rev() {
            match std::mem::replace(&mut self.slots[id].entry, Entry::Retired) {
                Entry::Occupied(_) => self.vacate(id),
                // never handed out under its current generation, no need to bump
                Entry::Vacant { .. } => {
                    self.slots[id].entry = Entry::Vacant { next_free: self.free_head };
                    self.free_head = Some(id);
                }
                Entry::Retired => {}
            }
        }
        self.len = 0;
    }

    pub(super) fn handle(&self, id: NodeId) -> NodeRef {
        NodeRef {
            // `alloc` never hands out an index that doesn't fit
            index: id as u32,
            generation: self.slots[id].generation,
        }
    }

    /// Maps a public reference back to a live slot, if it still is one.
    pub(super) fn resolve(&self, node: NodeRef) -> Option<NodeId> {
        let id = node.index as NodeId;
        let slot = self.slots.get(id)?;
        match slot.entry {
            Entry::Occupied(_) if slot.generation == node.generation => Some(id),
            _ => None,
        }
    }
}

impl<K> Index<NodeId> for NodeArena<K> {
    type Output = Node<K>;

    fn index(&self, id: NodeId) -> &Node<K> {
        match &self.slots[id].entry {
            Entry::Occupied(node) => node,
            _ => panic!("link to vacant slot {id}"),
        }
    }
}

impl<K> IndexMut<NodeId> for NodeArena<K> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<K> {
        match &mut self.slots[id].entry {
            Entry::Occupied(node) => node,
            _ => panic!("link to vacant slot {id}"),
        }
    }
}
