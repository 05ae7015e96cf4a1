//! Contiguous growable sequence.
//!
//! [`ArraySequence`] keeps its elements in a boxed slice of slots. Slots
//! `[0, size)` are live; the rest are empty. When an insertion finds the
//! buffer full, a buffer of twice the capacity is allocated, the live
//! elements are moved across in order, and the old buffer is dropped.
//! Growth either completes or leaves the old buffer in place.

use linseq_core::{SeqError, Sequence};

use crate::config::ArrayConfig;

/// Resizable-array sequence.
///
/// `insert` and `remove` shift the tail of the buffer by one slot, so both
/// are O(size - index). `get` is O(1). Capacity never shrinks.
#[derive(Clone, Debug)]
pub struct ArraySequence<T> {
    /// Backing buffer; `slots.len()` is the capacity.
    slots: Box<[Option<T>]>,
    /// Number of live elements, all in `slots[..size]`.
    size: usize,
    config: ArrayConfig,
}

impl<T> ArraySequence<T> {
    /// Create an empty sequence with the default capacity of 10.
    pub fn new() -> Self {
        Self::with_config(ArrayConfig::default())
    }

    /// Create an empty sequence from `config`.
    pub fn with_config(config: ArrayConfig) -> Self {
        let slots = (0..config.starting_capacity()).map(|_| None).collect();
        Self {
            slots,
            size: 0,
            config,
        }
    }

    /// Current buffer capacity.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The configuration this sequence was built with.
    pub fn config(&self) -> &ArrayConfig {
        &self.config
    }

    /// Make room for one more element, growing the buffer if it is full.
    fn ensure_room(&mut self) -> Result<(), SeqError> {
        let capacity = self.slots.len();
        if self.size < capacity {
            return Ok(());
        }

        let new_capacity = capacity.saturating_mul(2).min(self.config.max_capacity);
        if new_capacity <= capacity {
            tracing::debug!(capacity, "array sequence at its capacity ceiling");
            return Err(SeqError::AllocationFailed { size: self.size });
        }

        let mut grown: Vec<Option<T>> = Vec::new();
        if grown.try_reserve_exact(new_capacity).is_err() {
            tracing::debug!(capacity, new_capacity, "array sequence buffer allocation failed");
            return Err(SeqError::AllocationFailed { size: self.size });
        }
        grown.extend(self.slots[..self.size].iter_mut().map(Option::take));
        grown.resize_with(new_capacity, || None);
        self.slots = grown.into_boxed_slice();

        tracing::trace!(
            old_capacity = capacity,
            new_capacity,
            "array sequence grew"
        );
        Ok(())
    }
}

impl<T> Default for ArraySequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence<T> for ArraySequence<T> {
    fn append(&mut self, element: T) -> bool {
        if self.ensure_room().is_err() {
            return false;
        }
        self.slots[self.size] = Some(element);
        self.size += 1;
        true
    }

    fn insert(&mut self, index: usize, element: T) -> Result<(), SeqError> {
        SeqError::check_index(index, self.size)?;
        self.ensure_room()?;
        for i in (index + 1..=self.size).rev() {
            self.slots[i] = self.slots[i - 1].take();
        }
        self.slots[index] = Some(element);
        self.size += 1;
        Ok(())
    }

    fn get(&self, index: usize) -> Result<&T, SeqError> {
        SeqError::check_index(index, self.size)?;
        self.slots[index]
            .as_ref()
            .ok_or(SeqError::out_of_range(index, self.size))
    }

    fn remove(&mut self, index: usize) -> Result<T, SeqError> {
        SeqError::check_index(index, self.size)?;
        let removed = self.slots[index]
            .take()
            .ok_or(SeqError::out_of_range(index, self.size))?;
        for i in index..self.size - 1 {
            self.slots[i] = self.slots[i + 1].take();
        }
        self.size -= 1;
        Ok(removed)
    }

    fn size(&self) -> usize {
        self.size
    }
}
