//! Sequence contract compliance test helpers.
//!
//! These functions verify that a `Sequence` implementation satisfies the
//! boundary and ordering rules every implementation shares. Reused across
//! all four backend test modules.

use linseq_core::{SeqError, Sequence};
use linseq_test_utils::{contents, filled, replay, ModelSequence, Op};

/// Assert the canonical append/insert/remove walkthrough.
pub fn assert_walkthrough<S: Sequence<i32> + Default>() {
    let mut seq = S::default();
    assert_eq!(seq.size(), 0);
    assert!(seq.append(10));
    assert!(seq.append(20));
    assert!(seq.append(30));
    assert_eq!(seq.size(), 3);

    seq.insert(1, 15).unwrap();
    assert_eq!(contents(&seq), vec![10, 15, 20, 30]);

    assert_eq!(seq.remove(0), Ok(10));
    assert_eq!(contents(&seq), vec![15, 20, 30]);
    assert_eq!(seq.size(), 3);
}

/// Assert that every operation on an empty sequence except `append` fails.
pub fn assert_empty_rejects_indexed_ops<S: Sequence<i32> + Default>() {
    let mut seq = S::default();
    assert!(seq.is_empty());
    assert_eq!(seq.get(0), Err(SeqError::out_of_range(0, 0)));
    assert_eq!(seq.remove(0), Err(SeqError::out_of_range(0, 0)));
    assert_eq!(seq.insert(0, 1), Err(SeqError::out_of_range(0, 0)));
    assert_eq!(seq.size(), 0);
}

/// Assert that `index >= size` fails for all indexed operations, including
/// `insert(size)`, and leaves the contents untouched.
pub fn assert_out_of_range_is_atomic<S: Sequence<i32> + Default>() {
    let mut seq: S = filled([1, 2, 3]);
    for index in [3, 4, usize::MAX] {
        assert_eq!(seq.get(index), Err(SeqError::out_of_range(index, 3)));
        assert_eq!(seq.remove(index), Err(SeqError::out_of_range(index, 3)));
        assert_eq!(seq.insert(index, 99), Err(SeqError::out_of_range(index, 3)));
    }
    assert_eq!(contents(&seq), vec![1, 2, 3]);
}

/// Assert `get(i)` right after `insert(i, e)` yields `e` at every valid `i`,
/// and that the former occupants shifted up by one.
pub fn assert_insert_then_get<S: Sequence<i32> + Default>() {
    for i in 0..5 {
        let mut seq: S = filled(0..5);
        seq.insert(i, -1).unwrap();
        assert_eq!(*seq.get(i).unwrap(), -1, "insert at {i}");
        let mut expected: Vec<i32> = (0..5).collect();
        expected.insert(i, -1);
        assert_eq!(contents(&seq), expected, "insert at {i}");
    }
}

/// Assert `remove(i)` returns the element at `i` and shifts the rest down.
pub fn assert_remove_shifts_down<S: Sequence<i32> + Default>() {
    for i in 0..5 {
        let mut seq: S = filled(0..5);
        assert_eq!(seq.remove(i), Ok(i as i32));
        if i < 4 {
            assert_eq!(*seq.get(i).unwrap(), i as i32 + 1);
        }
        let mut expected: Vec<i32> = (0..5).collect();
        expected.remove(i);
        assert_eq!(contents(&seq), expected, "remove at {i}");
    }
}

/// Assert `append(e)` then `remove(size - 1)` returns `e` and restores size.
pub fn assert_append_remove_last_round_trip<S: Sequence<i32> + Default>() {
    let mut seq: S = filled([7, 8]);
    assert!(seq.append(42));
    assert_eq!(seq.remove(seq.size() - 1), Ok(42));
    assert_eq!(seq.size(), 2);
    assert!(seq.append(43));
    assert_eq!(*seq.get(2).unwrap(), 43);
}

/// Assert the sequence drains from either end and stays usable afterwards.
pub fn assert_drain_and_reuse<S: Sequence<i32> + Default>() {
    let mut seq: S = filled(0..6);
    assert_eq!(seq.remove(5), Ok(5));
    assert_eq!(seq.remove(0), Ok(0));
    while !seq.is_empty() {
        let last = seq.size() - 1;
        seq.remove(last).unwrap();
    }
    assert_eq!(seq.get(0), Err(SeqError::out_of_range(0, 0)));

    assert!(seq.append(100));
    assert!(seq.append(200));
    seq.insert(0, 50).unwrap();
    seq.insert(2, 150).unwrap();
    assert_eq!(contents(&seq), vec![50, 100, 150, 200]);

    while !seq.is_empty() {
        seq.remove(0).unwrap();
    }
    assert!(seq.append(1));
    assert_eq!(contents(&seq), vec![1]);
}

/// Assert a long mixed workload agrees with the reference model.
pub fn assert_matches_model_on_script<S: Sequence<i32> + Default>(ops: &[Op<i32>]) {
    let mut seq = S::default();
    let mut model = ModelSequence::new();
    assert_eq!(replay(&mut seq, ops), replay(&mut model, ops));
    assert_eq!(contents(&seq), model.as_slice());
}

/// A deterministic script that grows past several capacity doublings,
/// then interleaves interior inserts and removes.
pub fn churn_script() -> Vec<Op<i32>> {
    let mut ops: Vec<Op<i32>> = (0..50).map(Op::Append).collect();
    for k in 0..40usize {
        ops.push(Op::Insert((k * 7) % 45, -(k as i32)));
        ops.push(Op::Remove((k * 13) % 40));
        ops.push(Op::Get((k * 3) % 60));
    }
    ops.push(Op::Size);
    ops
}

/// Run every compliance check on `S`.
pub fn run_full_compliance<S: Sequence<i32> + Default>() {
    assert_walkthrough::<S>();
    assert_empty_rejects_indexed_ops::<S>();
    assert_out_of_range_is_atomic::<S>();
    assert_insert_then_get::<S>();
    assert_remove_shifts_down::<S>();
    assert_append_remove_last_round_trip::<S>();
    assert_drain_and_reuse::<S>();
    assert_matches_model_on_script::<S>(&churn_script());
}
