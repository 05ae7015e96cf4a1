//! Generational handles addressing nodes in a node arena.

use std::fmt;

/// Stable address of a node slot in a node arena.
///
/// A handle pairs a slot index with the slot's generation at allocation
/// time. Freeing a slot bumps its generation, so a handle held past the
/// node's removal never resolves to whatever occupies the slot next.
///
/// Handles are internal to the linked sequence types and are never handed
/// to sequence callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub struct NodeHandle {
    index: u32,
    generation: u32,
}

impl NodeHandle {
    /// Create a handle for `index` at `generation`.
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index within the arena.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Generation of the slot when this handle was issued.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeHandle(idx={}, gen={})", self.index, self.generation)
    }
}
