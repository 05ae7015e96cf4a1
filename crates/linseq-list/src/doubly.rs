//! Doubly linked sequence.
//!
//! Every node carries a successor link and a predecessor link. Only the
//! forward chain decides which nodes are live; `prev` is kept in step with
//! it so that both ends can be reached directly:
//!
//! ```text
//! head                               tail
//!  │                                  │
//!  ▼                                  ▼
//! ┌───┐ next ┌───┐ next ┌───┐ next  ┌───┐
//! │ a ├─────►│ b ├─────►│ c ├─────► │ d ├──► None
//! │   │◄─────┤   │◄─────┤   │◄───── │   │
//! └───┘ prev └───┘ prev └───┘ prev  └───┘
//!   ▲
//!   └── prev = None
//! ```

use linseq_arena::{ArenaConfig, NodeArena};
use linseq_core::{DoublyNode, NodeHandle, SeqError, Sequence};

/// Doubly linked sequence.
///
/// Index 0 and index `size - 1` resolve in O(1) through `head` and `tail`.
/// Interior indices walk forward from `head`; there is no choice of the
/// shorter side.
#[derive(Clone, Debug)]
pub struct DoublyLinkedSequence<T> {
    nodes: NodeArena<DoublyNode<T>>,
    head: Option<NodeHandle>,
    tail: Option<NodeHandle>,
    size: usize,
}

impl<T> DoublyLinkedSequence<T> {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::with_config(ArenaConfig::default())
    }

    /// Create an empty sequence whose node storage follows `config`.
    pub fn with_config(config: ArenaConfig) -> Self {
        Self {
            nodes: NodeArena::new(config),
            head: None,
            tail: None,
            size: 0,
        }
    }

    /// Handle of the node at `index`.
    fn node_at(&self, index: usize) -> Result<NodeHandle, SeqError> {
        SeqError::check_index(index, self.size)?;
        let (Some(head), Some(tail)) = (self.head, self.tail) else {
            return Err(SeqError::out_of_range(index, self.size));
        };
        if index == 0 {
            return Ok(head);
        }
        if index == self.size - 1 {
            return Ok(tail);
        }
        let mut cursor = head;
        for _ in 0..index {
            cursor = self.nodes[cursor]
                .next
                .unwrap_or_else(|| panic!("chain ended before index {index}"));
        }
        Ok(cursor)
    }
}

impl<T> Default for DoublyLinkedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence<T> for DoublyLinkedSequence<T> {
    fn append(&mut self, element: T) -> bool {
        let Ok(node) = self.nodes.alloc(DoublyNode::new(element)) else {
            return false;
        };
        self.nodes[node].prev = self.tail;
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(node),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.size += 1;
        true
    }

    fn insert(&mut self, index: usize, element: T) -> Result<(), SeqError> {
        // The new node goes immediately before the current occupant.
        let successor = self.node_at(index)?;
        let node = self
            .nodes
            .alloc(DoublyNode::new(element))
            .map_err(|_| SeqError::AllocationFailed { size: self.size })?;

        let predecessor = self.nodes[successor].prev;
        self.nodes[node].prev = predecessor;
        self.nodes[node].next = Some(successor);
        self.nodes[successor].prev = Some(node);
        match predecessor {
            Some(prev) => self.nodes[prev].next = Some(node),
            None => self.head = Some(node),
        }
        self.size += 1;
        Ok(())
    }

    fn get(&self, index: usize) -> Result<&T, SeqError> {
        let node = self.node_at(index)?;
        Ok(&self.nodes[node].value)
    }

    fn remove(&mut self, index: usize) -> Result<T, SeqError> {
        let target = self.node_at(index)?;
        let mut removed = self.nodes.release(target);

        match removed.prev {
            Some(prev) => self.nodes[prev].next = removed.next,
            None => self.head = removed.next,
        }
        match removed.next {
            Some(next) => self.nodes[next].prev = removed.prev,
            None => self.tail = removed.prev,
        }
        removed.unlink();
        self.size -= 1;
        Ok(removed.value)
    }

    fn size(&self) -> usize {
        self.size
    }
}
