//! Benchmark workloads for the linseq sequence implementations.
//!
//! Provides deterministic inputs shared by the criterion benches:
//!
//! - [`populated`]: a sequence of any kind pre-filled with `0..n`
//! - [`mixed_workload`]: a seeded script of mostly-valid operations
//! - [`run_workload`]: replay a script and count the operations that succeeded

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use linseq::prelude::*;
use linseq_test_utils::{replay, Op, Outcome};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Build a sequence of `kind` holding `0..n` in order.
pub fn populated(kind: SequenceKind, n: u64) -> AnySequence<u64> {
    let mut seq = AnySequence::new(kind);
    for value in 0..n {
        assert!(seq.append(value), "append failed at {value}");
    }
    seq
}

/// Generate a deterministic mix of `len` operations.
///
/// Assumes the target starts with `start_size` elements. The generator
/// tracks the size it expects so that indexed operations land in range,
/// with roughly one in sixteen deliberately out of range. Appends and
/// inserts together outweigh removes, so the sequence slowly grows.
pub fn mixed_workload(seed: u64, len: usize, start_size: usize) -> Vec<Op<u64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut size = start_size;
    let mut ops = Vec::with_capacity(len);

    for _ in 0..len {
        let roll = rng.next_u32();
        let value = rng.next_u64();
        let index = match size {
            0 => 0,
            _ if roll % 16 == 0 => size,
            _ => (rng.next_u64() % size as u64) as usize,
        };
        let in_range = index < size;
        let op = match roll % 5 {
            0 | 1 => {
                size += 1;
                Op::Append(value)
            }
            2 => {
                if in_range {
                    size += 1;
                }
                Op::Insert(index, value)
            }
            3 => Op::Get(index),
            _ => {
                if in_range {
                    size -= 1;
                }
                Op::Remove(index)
            }
        };
        ops.push(op);
    }
    ops
}

/// Replay `ops` on `seq` and return how many of them succeeded.
pub fn run_workload<S: Sequence<u64> + ?Sized>(seq: &mut S, ops: &[Op<u64>]) -> usize {
    replay(seq, ops)
        .iter()
        .filter(|outcome| match outcome {
            Outcome::Appended(ok) => *ok,
            Outcome::Inserted(r) => r.is_ok(),
            Outcome::Got(r) | Outcome::Removed(r) => r.is_ok(),
            Outcome::Size(_) => true,
        })
        .count()
}
