//! Test utilities for linseq development.
//!
//! Provides a scripted-operation harness ([`Op`], [`Outcome`], [`replay`])
//! for driving any [`Sequence`] implementation, a `Vec`-backed
//! [`ModelSequence`] with the reference contract semantics, and proptest
//! strategies for generating operation scripts.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fmt::Debug;

use linseq_core::{SeqError, Sequence};
use proptest::prelude::*;

/// One contract operation with its arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op<T> {
    Append(T),
    Insert(usize, T),
    Get(usize),
    Remove(usize),
    Size,
}

/// Observable result of applying an [`Op`].
///
/// `get` results are cloned out so outcomes from different sequences can
/// be compared after the sequences are gone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    Appended(bool),
    Inserted(Result<(), SeqError>),
    Got(Result<T, SeqError>),
    Removed(Result<T, SeqError>),
    Size(usize),
}

/// Apply a single operation.
pub fn apply<T, S>(seq: &mut S, op: &Op<T>) -> Outcome<T>
where
    T: Clone,
    S: Sequence<T> + ?Sized,
{
    match op {
        Op::Append(v) => Outcome::Appended(seq.append(v.clone())),
        Op::Insert(i, v) => Outcome::Inserted(seq.insert(*i, v.clone())),
        Op::Get(i) => Outcome::Got(seq.get(*i).cloned()),
        Op::Remove(i) => Outcome::Removed(seq.remove(*i)),
        Op::Size => Outcome::Size(seq.size()),
    }
}

/// Apply `ops` in order, recording every outcome.
pub fn replay<T, S>(seq: &mut S, ops: &[Op<T>]) -> Vec<Outcome<T>>
where
    T: Clone,
    S: Sequence<T> + ?Sized,
{
    ops.iter().map(|op| apply(seq, op)).collect()
}

/// Read every element by index, front to back.
pub fn contents<T, S>(seq: &S) -> Vec<T>
where
    T: Clone + Debug,
    S: Sequence<T> + ?Sized,
{
    (0..seq.size())
        .map(|i| match seq.get(i) {
            Ok(v) => v.clone(),
            Err(e) => panic!("index {i} below size {} failed: {e}", seq.size()),
        })
        .collect()
}

/// Build a sequence holding `values` in order via `append`.
pub fn filled<T, S>(values: impl IntoIterator<Item = T>) -> S
where
    S: Sequence<T> + Default,
{
    let mut seq = S::default();
    for v in values {
        assert!(seq.append(v), "append failed while filling fixture");
    }
    seq
}

/// Reference model: a `Vec` with the contract's boundary rules.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModelSequence<T> {
    items: Vec<T>,
}

impl<T> ModelSequence<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Sequence<T> for ModelSequence<T> {
    fn append(&mut self, element: T) -> bool {
        self.items.push(element);
        true
    }

    fn insert(&mut self, index: usize, element: T) -> Result<(), SeqError> {
        SeqError::check_index(index, self.items.len())?;
        self.items.insert(index, element);
        Ok(())
    }

    fn get(&self, index: usize) -> Result<&T, SeqError> {
        self.items
            .get(index)
            .ok_or(SeqError::out_of_range(index, self.items.len()))
    }

    fn remove(&mut self, index: usize) -> Result<T, SeqError> {
        SeqError::check_index(index, self.items.len())?;
        Ok(self.items.remove(index))
    }

    fn size(&self) -> usize {
        self.items.len()
    }
}

// ── Strategies ──────────────────────────────────────────────────

/// Index strategy biased toward small values (so most scripts hit both
/// valid and out-of-range cases) with the occasional extreme.
pub fn arb_index(max: usize) -> impl Strategy<Value = usize> {
    prop_oneof![
        8 => 0..=max,
        1 => Just(usize::MAX),
    ]
}

/// A single operation over `i32` elements.
pub fn arb_op(max_index: usize) -> impl Strategy<Value = Op<i32>> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::Append),
        3 => (arb_index(max_index), any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => arb_index(max_index).prop_map(Op::Get),
        3 => arb_index(max_index).prop_map(Op::Remove),
        1 => Just(Op::Size),
    ]
}

/// An operation script of up to `max_len` operations.
pub fn arb_script(max_len: usize) -> impl Strategy<Value = Vec<Op<i32>>> {
    prop::collection::vec(arb_op(24), 0..max_len)
}
