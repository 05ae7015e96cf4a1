//! Node cells for the linked sequence implementations.
//!
//! Links are [`NodeHandle`]s into the owning sequence's arena. The forward
//! `next` link is the ownership path: a node is reached, and eventually
//! freed, only through its predecessor's `next` (or the list's head slot).
//! The doubly linked `prev` link is a relation for traversal only.

use crate::id::NodeHandle;

/// Cell of a singly linked chain: one element and at most one successor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SinglyNode<T> {
    /// The element held for the node's whole lifetime.
    pub value: T,
    /// Successor, or `None` for the terminal node.
    pub next: Option<NodeHandle>,
}

impl<T> SinglyNode<T> {
    /// Create an unlinked node holding `value`.
    pub fn new(value: T) -> Self {
        Self { value, next: None }
    }
}

/// Cell of a sentinel-fronted singly linked chain.
///
/// Identical to [`SinglyNode`] except that the element is optional: the
/// list's permanent dummy node is the one cell that holds none. Every
/// element-carrying node is built with [`SentinelNode::new`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentinelNode<T> {
    /// The element, or `None` for the dummy node.
    pub value: Option<T>,
    /// Successor, or `None` for the terminal node.
    pub next: Option<NodeHandle>,
}

impl<T> SentinelNode<T> {
    /// Create an unlinked node holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value: Some(value),
            next: None,
        }
    }

    /// Create the element-less dummy node.
    pub fn dummy() -> Self {
        Self {
            value: None,
            next: None,
        }
    }

    /// Whether this is the element-less dummy node.
    pub fn is_dummy(&self) -> bool {
        self.value.is_none()
    }
}

/// Cell of a doubly linked chain.
///
/// For any interior node `n`, `n.prev.next == n` and `n.next.prev == n`.
/// `prev` never participates in freeing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DoublyNode<T> {
    /// The element held for the node's whole lifetime.
    pub value: T,
    /// Successor, or `None` for the tail.
    pub next: Option<NodeHandle>,
    /// Predecessor, or `None` for the head.
    pub prev: Option<NodeHandle>,
}

impl<T> DoublyNode<T> {
    /// Create an unlinked node holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            next: None,
            prev: None,
        }
    }

    /// Clear both links, leaving the node detached from any chain.
    pub fn unlink(&mut self) {
        self.next = None;
        self.prev = None;
    }
}
