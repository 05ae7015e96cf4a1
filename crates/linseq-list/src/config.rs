//! Array sequence configuration parameters.

/// Configuration for an [`ArraySequence`](crate::ArraySequence).
///
/// Controls the starting buffer size and an optional growth ceiling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Slots allocated at construction.
    ///
    /// Default: 10. Must be at least 1, since growth doubles the current
    /// capacity.
    pub initial_capacity: usize,

    /// Largest capacity the buffer may grow to.
    ///
    /// Default: `usize::MAX` (bounded only by the allocator). Growth is
    /// clamped to this value; once it is reached, further appends report
    /// an allocation failure.
    pub max_capacity: usize,
}

impl ArrayConfig {
    /// Default starting capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

    /// Default growth ceiling.
    pub const DEFAULT_MAX_CAPACITY: usize = usize::MAX;

    /// Create a config with the given starting capacity.
    ///
    /// Uses default values for all other parameters.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            max_capacity: Self::DEFAULT_MAX_CAPACITY,
        }
    }

    /// Same config with growth capped at `max_capacity`.
    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Capacity to allocate at construction, never zero.
    pub(crate) fn starting_capacity(&self) -> usize {
        self.initial_capacity.max(1)
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}
