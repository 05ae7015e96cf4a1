//! Singly linked sequence with head and tail links.

use linseq_arena::{ArenaConfig, NodeArena};
use linseq_core::{NodeHandle, SeqError, Sequence, SinglyNode};

/// Singly linked sequence.
///
/// `append` is O(1) through the tail link. `insert`, `get` and `remove`
/// walk forward from the head, so they are O(index). Removing index 0
/// moves the head; removing the last index moves the tail back to the new
/// last node.
///
/// The chain is acyclic: each node is reachable from `head` by exactly one
/// path, and `tail` is the one node whose `next` is `None`.
#[derive(Clone, Debug)]
pub struct SinglyLinkedSequence<T> {
    nodes: NodeArena<SinglyNode<T>>,
    head: Option<NodeHandle>,
    tail: Option<NodeHandle>,
    size: usize,
}

impl<T> SinglyLinkedSequence<T> {
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

    /// Follow `steps` successor links from `start`.
    ///
    /// Callers bound `steps` by the size, so every link followed exists.
    fn walk_from(&self, start: NodeHandle, steps: usize) -> NodeHandle {
        let mut cursor = start;
        for _ in 0..steps {
            cursor = self.nodes[cursor]
                .next
                .unwrap_or_else(|| panic!("chain ended before {steps} steps"));
        }
        cursor
    }

    /// Validate `index` and return the head it will be walked from.
    fn head_for(&self, index: usize) -> Result<NodeHandle, SeqError> {
        SeqError::check_index(index, self.size)?;
        self.head.ok_or(SeqError::out_of_range(index, self.size))
    }
}

impl<T> Default for SinglyLinkedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence<T> for SinglyLinkedSequence<T> {
    fn append(&mut self, element: T) -> bool {
        let Ok(node) = self.nodes.alloc(SinglyNode::new(element)) else {
            return false;
        };
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(node),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.size += 1;
        true
    }

    fn insert(&mut self, index: usize, element: T) -> Result<(), SeqError> {
        let head = self.head_for(index)?;
        let predecessor = match index {
            0 => None,
            _ => Some(self.walk_from(head, index - 1)),
        };
        let node = self
            .nodes
            .alloc(SinglyNode::new(element))
            .map_err(|_| SeqError::AllocationFailed { size: self.size })?;

        match predecessor {
            None => {
                self.nodes[node].next = Some(head);
                self.head = Some(node);
            }
            Some(prev) => {
                self.nodes[node].next = self.nodes[prev].next;
                self.nodes[prev].next = Some(node);
            }
        }
        // index < size, so the new node always has a successor and the
        // tail is unchanged.
        self.size += 1;
        Ok(())
    }

    fn get(&self, index: usize) -> Result<&T, SeqError> {
        let head = self.head_for(index)?;
        Ok(&self.nodes[self.walk_from(head, index)].value)
    }

    fn remove(&mut self, index: usize) -> Result<T, SeqError> {
        let head = self.head_for(index)?;

        if index == 0 {
            let removed = self.nodes.release(head);
            self.head = removed.next;
            if self.head.is_none() {
                self.tail = None;
            }
            self.size -= 1;
            return Ok(removed.value);
        }

        let prev = self.walk_from(head, index - 1);
        let target = self.walk_from(prev, 1);
        let removed = self.nodes.release(target);
        self.nodes[prev].next = removed.next;
        if removed.next.is_none() {
            self.tail = Some(prev);
        }
        self.size -= 1;
        Ok(removed.value)
    }

    fn size(&self) -> usize {
        self.size
    }
}
