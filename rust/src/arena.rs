//! Slot arena holding the tree's nodes.
//!
//! Nodes are addressed by a stable `NodeId`. Freed slots go on a free list and
//! are handed out again by the next allocation, so ids of live nodes never
//! change.

use std::convert::TryFrom;

/// Node ID type for arena-based allocation
pub type NodeId = u32;

/// Sentinel id standing for an absent link.
pub const NULL_NODE: NodeId = u32::MAX;

/// Statistics for an arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaStats {
    pub total_capacity: usize,
    pub allocated_count: usize,
    pub free_count: usize,
    pub utilization: f64,
}

/// Arena allocator with free-slot reuse.
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free_list: Vec<usize>,
    allocated: usize,
}

impl<T> Arena<T> {
    /// Create a new empty arena
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            allocated: 0,
        }
    }

    /// Create a new arena with room for `capacity` items before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            allocated: 0,
        }
    }

    /// Store `item` and return its id.
    ///
    /// # Panics
    ///
    /// Panics if the arena would hold more than `NULL_NODE` slots.
    #[inline]
    pub fn allocate(&mut self, item: T) -> NodeId {
        let index = match self.free_list.pop() {
            Some(index) => {
                self.slots[index] = Some(item);
                index
            }
            None => {
                self.slots.push(Some(item));
                self.slots.len() - 1
            }
        };
        self.allocated += 1;

        let id = NodeId::try_from(index).expect("arena index exceeds NodeId range");
        assert_ne!(id, NULL_NODE, "arena index collides with NULL_NODE");
        id
    }

    /// Remove an item and return it, or `None` if `id` is not live.
    pub fn deallocate(&mut self, id: NodeId) -> Option<T> {
        let index = self.index_of(id)?;
        let item = self.slots[index].take()?;
        self.free_list.push(index);
        self.allocated -= 1;
        Some(item)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        let index = self.index_of(id)?;
        self.slots[index].as_ref()
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        let index = self.index_of(id)?;
        self.slots[index].as_mut()
    }

    /// Number of live items
    pub fn len(&self) -> usize {
        self.allocated
    }

    /// Drop every item and forget all ids
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.allocated = 0;
    }

    /// Get arena statistics
    pub fn stats(&self) -> ArenaStats {
        let total_capacity = self.slots.capacity();
        let utilization = if total_capacity > 0 {
            self.allocated as f64 / total_capacity as f64
        } else {
            0.0
        };

        ArenaStats {
            total_capacity,
            allocated_count: self.allocated,
            free_count: self.free_list.len(),
            utilization,
        }
    }

    #[inline]
    fn index_of(&self, id: NodeId) -> Option<usize> {
        if id == NULL_NODE {
            return None;
        }
        let index = usize::try_from(id).ok()?;
        (index < self.slots.len()).then_some(index)
    }
}
