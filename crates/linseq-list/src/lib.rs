//! Concrete sequence implementations for linseq.
//!
//! Four interchangeable containers, all implementing
//! [`Sequence`](linseq_core::Sequence) with identical boundary semantics:
//!
//! - [`ArraySequence`]: contiguous slot buffer, doubling growth, shifting
//!   insert/remove.
//! - [`SinglyLinkedSequence`]: head/tail chain, O(1) append, O(index)
//!   walks.
//! - [`SentinelLinkedSequence`]: singly linked chain fronted by a permanent
//!   dummy node, so insertion never special-cases the head.
//! - [`DoublyLinkedSequence`]: chain with backward links; both ends are
//!   O(1).
//!
//! The linked variants keep their nodes in a
//! [`NodeArena`](linseq_arena::NodeArena) and link by handle.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod config;
pub mod doubly;
pub mod sentinel;
pub mod singly;

#[cfg(test)]
pub(crate) mod compliance;

pub use array::ArraySequence;
pub use config::ArrayConfig;
pub use doubly::DoublyLinkedSequence;
pub use sentinel::SentinelLinkedSequence;
pub use singly::SinglyLinkedSequence;
