//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use linseq_core::NodeHandle;

/// Errors that can occur during node arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The live-node budget is exhausted.
    CapacityExceeded {
        /// Configured maximum number of live nodes.
        max_nodes: usize,
    },
    /// Slot storage could not be reserved from the allocator.
    AllocationFailed {
        /// Number of slots held when the reservation failed.
        slots: usize,
    },
    /// The handle does not name a live node: it was freed, or its slot has
    /// since been reused under a newer generation.
    StaleHandle {
        /// The offending handle.
        handle: NodeHandle,
    },
    /// Attempted to free the pinned anchor slot.
    PinnedSlot {
        /// The anchor's handle.
        handle: NodeHandle,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { max_nodes } => {
                write!(f, "node budget exhausted: {max_nodes} live nodes")
            }
            Self::AllocationFailed { slots } => {
                write!(f, "could not reserve slot storage beyond {slots} slots")
            }
            Self::StaleHandle { handle } => write!(f, "stale handle: {handle}"),
            Self::PinnedSlot { handle } => write!(f, "{handle} is the pinned anchor slot"),
        }
    }
}

impl Error for ArenaError {}
