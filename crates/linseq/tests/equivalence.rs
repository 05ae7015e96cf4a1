//! Cross-implementation equivalence: every kind produces the same outcomes
//! as the reference model for the same operation script.

use linseq::prelude::*;
use linseq_test_utils::{arb_script, contents, replay, ModelSequence, Op, Outcome};
use proptest::prelude::*;

fn all_kinds<T>() -> Vec<AnySequence<T>> {
    SequenceKind::ALL.into_iter().map(AnySequence::new).collect()
}

#[test]
fn walkthrough_identical_across_kinds() {
    for mut seq in all_kinds::<i32>() {
        let kind = seq.kind();
        assert_eq!(seq.size(), 0, "{kind}");
        assert!(seq.append(10));
        assert!(seq.append(20));
        assert!(seq.append(30));
        assert_eq!(seq.size(), 3, "{kind}");
        assert_eq!(seq.insert(1, 15), Ok(()), "{kind}");
        assert_eq!(contents(&seq), vec![10, 15, 20, 30], "{kind}");
        assert_eq!(seq.remove(0), Ok(10), "{kind}");
        assert_eq!(contents(&seq), vec![15, 20, 30], "{kind}");
        assert_eq!(seq.size(), 3, "{kind}");
    }
}

#[test]
fn boundary_failures_identical_across_kinds() {
    for mut seq in all_kinds::<i32>() {
        let kind = seq.kind();
        assert_eq!(seq.get(0), Err(SeqError::out_of_range(0, 0)), "{kind}");
        assert_eq!(seq.remove(0), Err(SeqError::out_of_range(0, 0)), "{kind}");
        assert_eq!(seq.insert(0, 1), Err(SeqError::out_of_range(0, 0)), "{kind}");

        assert!(seq.append(1));
        assert_eq!(seq.insert(1, 2), Err(SeqError::out_of_range(1, 1)), "{kind}");
        assert_eq!(seq.get(1), Err(SeqError::out_of_range(1, 1)), "{kind}");
        assert_eq!(seq.remove(1), Err(SeqError::out_of_range(1, 1)), "{kind}");
        assert_eq!(contents(&seq), vec![1], "{kind}");
    }
}

#[test]
fn eleven_appends_on_default_array() {
    let mut seq = ArraySequence::new();
    for i in 1..=11 {
        assert!(seq.append(i));
    }
    assert_eq!(seq.capacity(), 20);
    assert_eq!(seq.size(), 11);
    assert_eq!(contents(&seq), (1..=11).collect::<Vec<_>>());
}

#[test]
fn kinds_selected_by_legacy_property_names() {
    let expected = [
        ("arraylist", SequenceKind::Array),
        ("single", SequenceKind::SinglyLinked),
        ("dummyhead", SequenceKind::SentinelLinked),
        ("double", SequenceKind::DoublyLinked),
    ];
    for (name, kind) in expected {
        let seq: AnySequence<u8> = SequenceConfig::from_name(name).unwrap().build().unwrap();
        assert_eq!(seq.kind(), kind);
    }
}

#[test]
fn trait_objects_are_interchangeable() {
    let mut boxed: Vec<Box<dyn Sequence<String>>> = SequenceKind::ALL
        .into_iter()
        .map(|kind| AnySequence::new(kind).into_boxed())
        .collect();
    for seq in &mut boxed {
        for name in ["sun", "earth", "mars"] {
            assert!(seq.append(name.to_string()));
        }
        seq.insert(1, "venus".to_string()).unwrap();
        assert_eq!(seq.remove(3).as_deref(), Ok("mars"));
    }
    for seq in &boxed {
        assert_eq!(contents(&**seq), vec!["sun", "venus", "earth"]);
    }
}

#[test]
fn capacity_failures_leave_every_kind_intact() {
    for kind in SequenceKind::ALL {
        let config = SequenceConfig {
            array: ArrayConfig::new(3).with_max_capacity(3),
            arena: ArenaConfig::new(3),
            ..SequenceConfig::new(kind)
        };
        let mut seq = config.build().unwrap();
        for v in 0..3 {
            assert!(seq.append(v), "{kind}");
        }
        assert!(!seq.append(3), "{kind}");
        assert_eq!(
            seq.insert(1, 9),
            Err(SeqError::AllocationFailed { size: 3 }),
            "{kind}"
        );
        assert_eq!(contents(&seq), vec![0, 1, 2], "{kind}");

        // Freed room is usable again.
        assert_eq!(seq.remove(1), Ok(1));
        assert_eq!(seq.insert(1, 9), Ok(()));
        assert_eq!(contents(&seq), vec![0, 9, 2], "{kind}");
    }
}

#[test]
fn long_churn_matches_model() {
    let mut ops: Vec<Op<i32>> = (0..300).map(Op::Append).collect();
    for k in 0..300usize {
        ops.push(Op::Insert((k * 31) % 320, k as i32));
        ops.push(Op::Remove((k * 17) % 310));
        ops.push(Op::Get((k * 7) % 330));
    }
    let mut model = ModelSequence::new();
    let expected = replay(&mut model, &ops);
    for mut seq in all_kinds() {
        assert_eq!(replay(&mut seq, &ops), expected, "{}", seq.kind());
        assert_eq!(contents(&seq), model.as_slice());
    }
}

proptest! {
    #[test]
    fn every_kind_matches_model(ops in arb_script(250)) {
        let mut model = ModelSequence::new();
        let expected = replay(&mut model, &ops);
        for mut seq in all_kinds() {
            let got = replay(&mut seq, &ops);
            prop_assert_eq!(&got, &expected, "{}", seq.kind());
            prop_assert_eq!(contents(&seq), model.as_slice().to_vec());
        }
    }

    #[test]
    fn failed_ops_never_change_size(ops in arb_script(150)) {
        for mut seq in all_kinds() {
            for op in &ops {
                let before = seq.size();
                let outcome = linseq_test_utils::apply(&mut seq, op);
                let failed = matches!(
                    outcome,
                    Outcome::Inserted(Err(_)) | Outcome::Removed(Err(_)) | Outcome::Appended(false)
                );
                if failed {
                    prop_assert_eq!(seq.size(), before);
                }
            }
        }
    }
}
