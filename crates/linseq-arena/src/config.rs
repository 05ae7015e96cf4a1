//! Node arena configuration parameters.

/// Configuration for a [`NodeArena`](crate::NodeArena).
///
/// Validated by the sequence facade before a sequence is built; all values
/// are immutable after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Maximum number of live nodes the arena will hold.
    ///
    /// Default: `u32::MAX` (the handle index range). An allocation past the
    /// budget fails with [`ArenaError::CapacityExceeded`](crate::ArenaError),
    /// which sequences report the same way as an out-of-memory condition.
    pub max_nodes: usize,

    /// Number of slots to reserve up front.
    ///
    /// Default: 0. Reserving avoids slot-vector regrowth for workloads with
    /// a known peak size.
    pub initial_slots: usize,
}

impl ArenaConfig {
    /// Default node budget: every index a [`NodeHandle`](linseq_core::NodeHandle) can express.
    pub const DEFAULT_MAX_NODES: usize = u32::MAX as usize;

    /// Default up-front slot reservation.
    pub const DEFAULT_INITIAL_SLOTS: usize = 0;

    /// Create a config with the given live-node budget.
    ///
    /// Uses default values for all other parameters.
    pub fn new(max_nodes: usize) -> Self {
        Self {
            max_nodes,
            initial_slots: Self::DEFAULT_INITIAL_SLOTS,
        }
    }

    /// Same config with `initial_slots` slots reserved at construction.
    pub fn with_initial_slots(mut self, initial_slots: usize) -> Self {
        self.initial_slots = initial_slots;
        self
    }

    /// Budget clamped to what a handle index can address.
    pub(crate) fn effective_max_nodes(&self) -> usize {
        self.max_nodes.min(Self::DEFAULT_MAX_NODES)
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_NODES)
    }
}
