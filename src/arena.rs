use std::fmt;
use std::num::NonZeroU32;
use std::ops::{Index, IndexMut};

#[cold]
#[inline(never)]
fn stale_id() -> ! {
    panic!("Attempted to access a node through a stale id");
}

/// Identifies one node slot in an [`Arena`].
///
/// The slot index is stored plus one, so `Option<NodeId>` pays nothing for
/// the discriminant on the index side. The generation is bumped every time
/// a slot is freed: an id captured before a removal can never silently
/// alias a value that later reuses the same slot, lookups with it fail
/// instead.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId {
    slot: NonZeroU32,
    generation: u32,
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}#{})", self.index(), self.generation)
    }
}

impl NodeId {
    fn new(index: usize, generation: u32) -> Self {
        debug_assert!(
            index < u32::MAX as usize,
            "Slot index too large to fit in NodeId: {}",
            index
        );
        NodeId {
            slot: NonZeroU32::new((index as u32).saturating_add(1)).unwrap(),
            generation,
        }
    }

    fn index(self) -> usize {
        self.slot.get() as usize - 1
    }
}

/// One link of a ring: the stored value and the ids of its two neighbors.
///
/// A node alone in its ring refers to itself in both directions.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) prev: NodeId,
    pub(crate) next: NodeId,
}

#[derive(Debug, Clone)]
enum SlotState<T> {
    Free { next_free: Option<u32> },
    Occupied(Node<T>),
}

#[derive(Debug, Clone)]
struct Slot<T> {
    generation: u32,
    state: SlotState<T>,
}

/// Slab of node slots with an intrusive free list.
///
/// Freed slots are chained through `next_free` and reused in LIFO order,
/// so long-lived rings with heavy churn do not grow the backing `Vec`.
/// Slots are never moved or compacted: an occupied slot's index is stable
/// for as long as the node lives, which is what lets the list keep plain
/// ids for its head, tail and cursor.
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<u32>,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free_head: None,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Arena {
            slots: Vec::with_capacity(capacity),
            free_head: None,
        }
    }

    /// The id the next [`alloc`](Arena::alloc) will hand out.
    ///
    /// Needed to create a self-linked node: the first node of a ring must
    /// carry its own id in `prev` and `next`, and the id must be known
    /// before the value is stored.
    pub(crate) fn next_id(&self) -> NodeId {
        match self.free_head {
            Some(index) => NodeId::new(index as usize, self.slots[index as usize].generation),
            None => NodeId::new(self.slots.len(), 0),
        }
    }

    pub(crate) fn alloc(&mut self, value: T, prev: NodeId, next: NodeId) -> NodeId {
        let node = Node { value, prev, next };
        match self.free_head {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                let next_free = match slot.state {
                    SlotState::Free { next_free } => next_free,
                    SlotState::Occupied(_) => unreachable!("free list points at an occupied slot"),
                };
                slot.state = SlotState::Occupied(node);
                self.free_head = next_free;
                NodeId::new(index as usize, slot.generation)
            }
            None => {
                let id = NodeId::new(self.slots.len(), 0);
                self.slots.push(Slot {
                    generation: 0,
                    state: SlotState::Occupied(node),
                });
                id
            }
        }
    }

    /// Releases the slot behind `id` and returns the node it held.
    ///
    /// The slot generation is bumped, so `id` (and any copy of it) is
    /// stale from here on.
    ///
    /// # Panics
    ///
    /// Panics if `id` is stale or was never allocated.
    pub(crate) fn free(&mut self, id: NodeId) -> Node<T> {
        assert!(self.contains(id), "Id to free must refer to a live node");
        let index = id.index();
        let slot = &mut self.slots[index];
        slot.generation = slot.generation.wrapping_add(1);
        let state = std::mem::replace(
            &mut slot.state,
            SlotState::Free {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(index as u32);
        match state {
            SlotState::Occupied(node) => node,
            // `contains` above already ruled this out.
            SlotState::Free { .. } => unreachable!(),
        }
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<T>> {
        match self.slots.get(id.index()) {
            Some(slot) if slot.generation == id.generation => match &slot.state {
                SlotState::Occupied(node) => Some(node),
                SlotState::Free { .. } => None,
            },
            _ => None,
        }
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        match self.slots.get_mut(id.index()) {
            Some(slot) if slot.generation == id.generation => match &mut slot.state {
                SlotState::Occupied(node) => Some(node),
                SlotState::Free { .. } => None,
            },
            _ => None,
        }
    }

    /// Drops every stored node and resets the free list.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Node<T> {
        match self.get(id) {
            Some(node) => node,
            None => stale_id(),
        }
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match self.get_mut(id) {
            Some(node) => node,
            None => stale_id(),
        }
    }
}
