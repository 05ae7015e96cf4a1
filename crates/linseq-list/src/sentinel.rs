//! Singly linked sequence fronted by a permanent dummy node.

use linseq_arena::{ArenaConfig, NodeArena};
use linseq_core::{NodeHandle, SentinelNode, SeqError, Sequence};

/// Singly linked sequence with a sentinel (dummy head) node.
///
/// Externally identical to
/// [`SinglyLinkedSequence`](crate::SinglyLinkedSequence). The dummy sits in
/// the arena's pinned anchor slot and its `next` always equals `head`.
/// Insertion walks from the dummy, so inserting at index 0 takes the same
/// path as any other index. Removing index 0 is still handled as its own
/// case and resynchronizes the dummy afterwards.
///
/// The dummy holds no element and is never counted, indexed or freed.
#[derive(Clone, Debug)]
pub struct SentinelLinkedSequence<T> {
    nodes: NodeArena<SentinelNode<T>>,
    dummy: NodeHandle,
    head: Option<NodeHandle>,
    tail: Option<NodeHandle>,
    size: usize,
}

impl<T> SentinelLinkedSequence<T> {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::with_config(ArenaConfig::default())
    }

    /// Create an empty sequence whose node storage follows `config`.
    ///
    /// The dummy node does not count against `config.max_nodes`.
    pub fn with_config(config: ArenaConfig) -> Self {
        let (nodes, dummy) = NodeArena::with_anchor(config, SentinelNode::dummy());
        Self {
            nodes,
            dummy,
            head: None,
            tail: None,
            size: 0,
        }
    }

    fn walk_from(&self, start: NodeHandle, steps: usize) -> NodeHandle {
        let mut cursor = start;
        for _ in 0..steps {
            cursor = self.nodes[cursor]
                .next
                .unwrap_or_else(|| panic!("chain ended before {steps} steps"));
        }
        cursor
    }

    /// Point `head` at whatever follows the dummy.
    fn sync_head(&mut self) {
        self.head = self.nodes[self.dummy].next;
    }

    fn head_for(&self, index: usize) -> Result<NodeHandle, SeqError> {
        SeqError::check_index(index, self.size)?;
        self.head.ok_or(SeqError::out_of_range(index, self.size))
    }
}

impl<T> Default for SentinelLinkedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence<T> for SentinelLinkedSequence<T> {
    fn append(&mut self, element: T) -> bool {
        let Ok(node) = self.nodes.alloc(SentinelNode::new(element)) else {
            return false;
        };
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(node),
            None => {
                self.nodes[self.dummy].next = Some(node);
                self.sync_head();
            }
        }
        self.tail = Some(node);
        self.size += 1;
        true
    }

    fn insert(&mut self, index: usize, element: T) -> Result<(), SeqError> {
        SeqError::check_index(index, self.size)?;
        // The dummy is the predecessor of index 0.
        let prev = self.walk_from(self.dummy, index);
        let node = self
            .nodes
            .alloc(SentinelNode::new(element))
            .map_err(|_| SeqError::AllocationFailed { size: self.size })?;
        self.nodes[node].next = self.nodes[prev].next;
        self.nodes[prev].next = Some(node);
        self.sync_head();
        self.size += 1;
        Ok(())
    }

    fn get(&self, index: usize) -> Result<&T, SeqError> {
        let head = self.head_for(index)?;
        self.nodes[self.walk_from(head, index)]
            .value
            .as_ref()
            .ok_or(SeqError::out_of_range(index, self.size))
    }

    fn remove(&mut self, index: usize) -> Result<T, SeqError> {
        let head = self.head_for(index)?;

        let removed = if index == 0 {
            let removed = self.nodes.release(head);
            self.head = removed.next;
            self.nodes[self.dummy].next = self.head;
            if self.head.is_none() {
                self.tail = None;
            }
            removed
        } else {
            let prev = self.walk_from(head, index - 1);
            let target = self.walk_from(prev, 1);
            let removed = self.nodes.release(target);
            self.nodes[prev].next = removed.next;
            if removed.next.is_none() {
                self.tail = Some(prev);
            }
            removed
        };
        self.size -= 1;
        // `release` refuses the anchor, so the node carries an element.
        Ok(removed
            .value
            .unwrap_or_else(|| unreachable!("released the element-less dummy")))
    }

    fn size(&self) -> usize {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use indexmap::IndexSet;
    use linseq_test_utils::{apply, arb_script, contents, filled};
    use proptest::prelude::*;

    /// Walk from the dummy and check the chain against the list fields.
    fn assert_chain_consistent<T>(seq: &SentinelLinkedSequence<T>) {
        let dummy = &seq.nodes[seq.dummy];
        assert!(dummy.is_dummy());
        assert_eq!(dummy.next, seq.head, "dummy out of sync with head");

        let mut seen = IndexSet::new();
        let mut cursor = seq.head;
        let mut last = None;
        while let Some(h) = cursor {
            assert_ne!(h, seq.dummy, "dummy reachable from head");
            assert!(seen.insert(h), "cycle through {h}");
            assert!(!seq.nodes[h].is_dummy());
            last = Some(h);
            cursor = seq.nodes[h].next;
        }
        assert_eq!(seen.len(), seq.size);
        assert_eq!(last, seq.tail);
        assert_eq!(seq.nodes.live_count(), seq.size);
    }

    #[test]
    fn full_compliance() {
        compliance::run_full_compliance::<SentinelLinkedSequence<i32>>();
    }

    #[test]
    fn dummy_present_when_empty() {
        let seq = SentinelLinkedSequence::<i32>::new();
        assert_eq!(seq.nodes.total_slots(), 1);
        assert_eq!(seq.nodes.live_count(), 0);
        assert_chain_consistent(&seq);
    }

    #[test]
    fn first_append_links_dummy() {
        let mut seq = SentinelLinkedSequence::new();
        assert!(seq.append(1));
        assert_eq!(seq.nodes[seq.dummy].next, seq.head);
        assert_eq!(seq.head, seq.tail);
        assert_chain_consistent(&seq);
    }

    #[test]
    fn insert_at_zero_goes_through_dummy() {
        let mut seq: SentinelLinkedSequence<i32> = filled([2, 3]);
        seq.insert(0, 1).unwrap();
        assert_eq!(contents(&seq), vec![1, 2, 3]);
        assert_eq!(seq.nodes[seq.head.unwrap()].value, Some(1));
        assert_chain_consistent(&seq);
    }

    #[test]
    fn remove_head_resyncs_dummy() {
        let mut seq: SentinelLinkedSequence<i32> = filled([1, 2]);
        assert_eq!(seq.remove(0), Ok(1));
        assert_chain_consistent(&seq);
        assert_eq!(seq.remove(0), Ok(2));
        assert_eq!(seq.nodes[seq.dummy].next, None);
        assert_eq!(seq.tail, None);
        assert_chain_consistent(&seq);
    }

    #[test]
    fn dummy_excluded_from_node_budget() {
        let mut seq = SentinelLinkedSequence::with_config(ArenaConfig::new(1));
        assert!(seq.append(7));
        assert!(!seq.append(8));
        assert_eq!(seq.insert(0, 6), Err(SeqError::AllocationFailed { size: 1 }));
        assert_eq!(contents(&seq), vec![7]);
        assert_chain_consistent(&seq);
    }

    proptest! {
        #[test]
        fn agrees_with_model(ops in arb_script(200)) {
            compliance::assert_matches_model_on_script::<SentinelLinkedSequence<i32>>(&ops);
        }

        #[test]
        fn chain_stays_consistent(ops in arb_script(120)) {
            let mut seq = SentinelLinkedSequence::new();
            for op in &ops {
                apply(&mut seq, op);
                assert_chain_consistent(&seq);
            }
        }
    }
}
