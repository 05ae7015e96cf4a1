//! Generational node arena for the linseq linked sequences.
//!
//! A [`NodeArena`] stores the nodes of one linked sequence in a `Vec` of
//! slots and hands out [`NodeHandle`](linseq_core::NodeHandle)s in place of
//! pointers. Links between nodes are handles, so a chain never forms an
//! ownership cycle and the crate needs no `unsafe`.
//!
//! # Slot lifecycle
//!
//! ```text
//! alloc ──► Occupied { gen } ──free──► Vacant { gen + 1 } ──► free list
//!                ▲                                               │
//!                └──────────────────── alloc ◄───────────────────┘
//! ```
//!
//! - Freed slots are reused LIFO, so a remove-then-append workload stays
//!   within a fixed footprint.
//! - A handle only resolves while its generation matches the slot's.
//! - An optional anchor slot (the sentinel of a dummy-headed list) is
//!   allocated at construction, pinned, and excluded from accounting.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod config;
pub mod error;

pub use arena::NodeArena;
pub use config::ArenaConfig;
pub use error::ArenaError;
