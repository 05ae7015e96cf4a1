//! The ordered-sequence contract.

use crate::error::SeqError;

/// An ordered, zero-indexed collection of `T`.
///
/// Every implementation honours identical boundary semantics, so any one
/// can stand in for another:
///
/// | Operation | Valid indices | On success |
/// |-----------|---------------|------------|
/// | `append`  | n/a           | element lands at `size`, size + 1 |
/// | `insert`  | `0 <= i < size` | element lands at `i`, `[i, size)` shift up |
/// | `get`     | `0 <= i < size` | no change |
/// | `remove`  | `0 <= i < size` | `(i, size)` shift down, size - 1 |
///
/// `insert(size, _)` is rejected even though `append` reaches the same
/// position. Failed operations leave the sequence untouched.
///
/// The trait is object-safe: `Box<dyn Sequence<T>>` is a valid way to hold
/// an implementation chosen at runtime.
pub trait Sequence<T> {
    /// Add `element` at position `size`.
    ///
    /// Returns `false`, leaving the sequence unchanged, only when storage
    /// for the element cannot be obtained.
    fn append(&mut self, element: T) -> bool;

    /// Place `element` at `index`, shifting `[index, size)` up by one.
    fn insert(&mut self, index: usize, element: T) -> Result<(), SeqError>;

    /// Borrow the element at `index`.
    fn get(&self, index: usize) -> Result<&T, SeqError>;

    /// Remove and return the element at `index`, shifting `(index, size)`
    /// down by one.
    fn remove(&mut self, index: usize) -> Result<T, SeqError>;

    /// Number of live elements. O(1).
    fn size(&self) -> usize;

    /// Whether the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl<T, S: Sequence<T> + ?Sized> Sequence<T> for Box<S> {
    fn append(&mut self, element: T) -> bool {
        (**self).append(element)
    }

    fn insert(&mut self, index: usize, element: T) -> Result<(), SeqError> {
        (**self).insert(index, element)
    }

    fn get(&self, index: usize) -> Result<&T, SeqError> {
        (**self).get(index)
    }

    fn remove(&mut self, index: usize) -> Result<T, SeqError> {
        (**self).remove(index)
    }

    fn size(&self) -> usize {
        (**self).size()
    }
}
