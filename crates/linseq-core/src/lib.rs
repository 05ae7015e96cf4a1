//! Core types and traits for the linseq sequence family.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the ordered-sequence contract every container implements, the sole
//! contract error, the generational node handle, and the node cells
//! shared by the linked implementations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod node;
pub mod sequence;

pub use error::SeqError;
pub use id::NodeHandle;
pub use node::{DoublyNode, SentinelNode, SinglyNode};
pub use sequence::Sequence;
