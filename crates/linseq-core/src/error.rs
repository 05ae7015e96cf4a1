//! Error type for the sequence contract.

use std::error::Error;
use std::fmt;

/// Errors returned by [`Sequence`](crate::Sequence) operations.
///
/// Every variant is raised before the sequence is touched: on `Err` the
/// size and every element position are exactly as they were.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeqError {
    /// The index lies outside the operation's valid range.
    ///
    /// For `get`, `remove` and `insert` the valid range is
    /// `0 <= index < size`. `insert` at `index == size` is rejected too;
    /// callers that want to add at the end use `append`.
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The sequence size at the time of the call.
        size: usize,
    },
    /// Storage for a new element could not be obtained during `insert`.
    ///
    /// `append` reports the same condition by returning `false`.
    AllocationFailed {
        /// The sequence size at the time of the call.
        size: usize,
    },
}

impl SeqError {
    /// Build an [`IndexOutOfRange`](Self::IndexOutOfRange) error.
    pub fn out_of_range(index: usize, size: usize) -> Self {
        Self::IndexOutOfRange { index, size }
    }

    /// Check `index < size`, the bound shared by every indexed operation.
    pub fn check_index(index: usize, size: usize) -> Result<(), Self> {
        if index < size {
            Ok(())
        } else {
            Err(Self::out_of_range(index, size))
        }
    }
}

impl fmt::Display for SeqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, size } => {
                write!(f, "index {index} out of range for sequence of size {size}")
            }
            Self::AllocationFailed { size } => {
                write!(f, "allocation failed growing sequence of size {size}")
            }
        }
    }
}

impl Error for SeqError {}
