//! linseq: interchangeable sequence containers behind one contract.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the linseq sub-crates and adds the runtime selector that picks one
//! implementation by name. For most users, adding `linseq` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use linseq::prelude::*;
//!
//! let kind: SequenceKind = "doubly-linked".parse().unwrap();
//! let mut bodies: AnySequence<&str> = AnySequence::new(kind);
//! assert!(bodies.append("star"));
//! assert!(bodies.append("comet"));
//! bodies.insert(1, "planet").unwrap();
//!
//! assert_eq!(bodies.get(1), Ok(&"planet"));
//! assert_eq!(bodies.remove(0), Ok("star"));
//! assert_eq!(bodies.size(), 2);
//!
//! // `insert` never accepts `index == size`; use `append` instead.
//! assert_eq!(
//!     bodies.insert(2, "moon"),
//!     Err(SeqError::IndexOutOfRange { index: 2, size: 2 })
//! );
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `linseq-core` | `Sequence` trait, `SeqError`, node types, handles |
//! | [`arena`] | `linseq-arena` | Generational node arena and its config |
//! | [`list`] | `linseq-list` | The four concrete sequences |
//! | [`kind`] | this crate | `SequenceKind` name-based selector |
//! | [`any`] | this crate | `AnySequence` tagged-union dispatch |
//! | [`config`] | this crate | `SequenceConfig` and validation |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod any;
pub mod config;
pub mod kind;

/// Core contract, error and node types (`linseq-core`).
pub use linseq_core as types;

/// Generational node storage (`linseq-arena`).
///
/// Only needed to tune [`arena::ArenaConfig`] for the linked sequences.
pub use linseq_arena as arena;

/// Concrete sequence implementations (`linseq-list`).
///
/// [`list::ArraySequence`], [`list::SinglyLinkedSequence`],
/// [`list::SentinelLinkedSequence`], and [`list::DoublyLinkedSequence`].
pub use linseq_list as list;

pub use any::AnySequence;
pub use config::{ConfigError, SequenceConfig};
pub use kind::SequenceKind;

/// Common imports for typical linseq usage.
///
/// ```rust
/// use linseq::prelude::*;
/// ```
pub mod prelude {
    // Contract
    pub use linseq_core::{SeqError, Sequence};

    // Implementations
    pub use linseq_list::{
        ArrayConfig, ArraySequence, DoublyLinkedSequence, SentinelLinkedSequence,
        SinglyLinkedSequence,
    };

    // Selection
    pub use crate::any::AnySequence;
    pub use crate::config::{ConfigError, SequenceConfig};
    pub use crate::kind::SequenceKind;
    pub use linseq_arena::ArenaConfig;
}
