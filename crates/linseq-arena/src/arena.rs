//! Slot storage with generation-checked handles and free-list reuse.

use std::ops::{Index, IndexMut};

use linseq_core::NodeHandle;

use crate::config::ArenaConfig;
use crate::error::ArenaError;

/// A single arena slot.
#[derive(Clone, Debug)]
enum Slot<N> {
    /// Holds a live node issued under `generation`.
    Occupied { generation: u32, node: N },
    /// Free; the next node placed here is issued under `generation`.
    Vacant { generation: u32 },
}

/// Node storage for one linked sequence.
///
/// Slots are never shrunk. Vacated slots go onto a free list and are handed
/// out again before the slot vector grows, with their generation bumped so
/// that handles to the previous occupant go stale.
#[derive(Clone, Debug)]
pub struct NodeArena<N> {
    /// All slots (occupied and vacant).
    slots: Vec<Slot<N>>,
    /// Indices of vacant slots, most recently freed last.
    free_list: Vec<u32>,
    /// Number of occupied slots, not counting the anchor.
    live: usize,
    /// Index of the pinned anchor slot, if any.
    anchor: Option<u32>,
    config: ArenaConfig,
}

impl<N> NodeArena<N> {
    /// Create an empty arena.
    pub fn new(config: ArenaConfig) -> Self {
        Self {
            slots: Vec::with_capacity(config.initial_slots),
            free_list: Vec::new(),
            live: 0,
            anchor: None,
            config,
        }
    }

    /// Create an arena whose slot 0 permanently holds `anchor`.
    ///
    /// The anchor never counts toward [`live_count`](Self::live_count) or
    /// the node budget, and [`free`](Self::free) refuses it.
    pub fn with_anchor(config: ArenaConfig, anchor: N) -> (Self, NodeHandle) {
        let mut arena = Self::new(config);
        arena.slots.push(Slot::Occupied {
            generation: 0,
            node: anchor,
        });
        arena.anchor = Some(0);
        (arena, NodeHandle::new(0, 0))
    }

    /// Place `node` in a slot and return its handle.
    ///
    /// Fails without touching the arena if the node budget is exhausted or
    /// slot storage cannot be reserved.
    pub fn alloc(&mut self, node: N) -> Result<NodeHandle, ArenaError> {
        let max_nodes = self.config.effective_max_nodes();
        if self.live >= max_nodes {
            tracing::debug!(max_nodes, "node arena budget exhausted");
            return Err(ArenaError::CapacityExceeded { max_nodes });
        }

        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index as usize];
            let generation = match *slot {
                Slot::Vacant { generation } => generation,
                Slot::Occupied { .. } => unreachable!("free list holds an occupied slot {index}"),
            };
            *slot = Slot::Occupied { generation, node };
            self.live += 1;
            return Ok(NodeHandle::new(index, generation));
        }

        // Fresh slot. `live < max_nodes <= u32::MAX` and every slot is
        // either live, anchored, or on the (empty) free list, so the index
        // fits in a u32.
        let index = self.slots.len() as u32;
        if self.slots.try_reserve(1).is_err() {
            tracing::debug!(slots = self.slots.len(), "node arena slot reservation failed");
            return Err(ArenaError::AllocationFailed {
                slots: self.slots.len(),
            });
        }
        self.slots.push(Slot::Occupied {
            generation: 0,
            node,
        });
        self.live += 1;
        Ok(NodeHandle::new(index, 0))
    }

    /// Vacate the slot named by `handle` and return its node.
    pub fn free(&mut self, handle: NodeHandle) -> Result<N, ArenaError> {
        if self.anchor == Some(handle.index()) {
            return Err(ArenaError::PinnedSlot { handle });
        }
        let slot = self
            .slots
            .get_mut(handle.index() as usize)
            .ok_or(ArenaError::StaleHandle { handle })?;
        let generation = match *slot {
            Slot::Occupied { generation, .. } if generation == handle.generation() => generation,
            _ => return Err(ArenaError::StaleHandle { handle }),
        };
        let old = std::mem::replace(
            slot,
            Slot::Vacant {
                generation: generation.wrapping_add(1),
            },
        );
        self.free_list.push(handle.index());
        self.live -= 1;
        match old {
            Slot::Occupied { node, .. } => Ok(node),
            Slot::Vacant { .. } => unreachable!("slot was matched as occupied"),
        }
    }

    /// Vacate a slot reached through a live link and return its node.
    ///
    /// # Panics
    ///
    /// Panics if [`free`](Self::free) would fail. Sequences only release
    /// handles held in live links, never the anchor.
    pub fn release(&mut self, handle: NodeHandle) -> N {
        self.free(handle)
            .unwrap_or_else(|e| panic!("linked chain holds {handle}: {e}"))
    }

    /// Borrow the node named by `handle`, if it is live.
    pub fn get(&self, handle: NodeHandle) -> Option<&N> {
        match self.slots.get(handle.index() as usize)? {
            Slot::Occupied { generation, node } if *generation == handle.generation() => {
                Some(node)
            }
            _ => None,
        }
    }

    /// Mutably borrow the node named by `handle`, if it is live.
    pub fn get_mut(&mut self, handle: NodeHandle) -> Option<&mut N> {
        match self.slots.get_mut(handle.index() as usize)? {
            Slot::Occupied { generation, node } if *generation == handle.generation() => {
                Some(node)
            }
            _ => None,
        }
    }

    /// Whether `handle` names a live node (the anchor included).
    pub fn contains(&self, handle: NodeHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Number of live nodes, excluding the anchor.
    pub fn live_count(&self) -> usize {
        self.live
    }

    /// Total slots (occupied + vacant, anchor included).
    pub fn total_slots(&self) -> usize {
        self.slots.len()
    }

    /// Number of vacant slots available for reuse.
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// The configuration this arena was built with.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }
}

impl<N> Default for NodeArena<N> {
    fn default() -> Self {
        Self::new(ArenaConfig::default())
    }
}

impl<N> Index<NodeHandle> for NodeArena<N> {
    type Output = N;

    /// # Panics
    ///
    /// Panics if `handle` is stale. Sequences only index with handles held
    /// in live links, so a panic here means a broken chain invariant.
    fn index(&self, handle: NodeHandle) -> &N {
        self.get(handle)
            .unwrap_or_else(|| panic!("linked chain holds {handle}, which is not live"))
    }
}

impl<N> IndexMut<NodeHandle> for NodeArena<N> {
    fn index_mut(&mut self, handle: NodeHandle) -> &mut N {
        self.get_mut(handle)
            .unwrap_or_else(|| panic!("linked chain holds {handle}, which is not live"))
    }
}
