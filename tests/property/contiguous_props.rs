//! ContiguousSequence property tests.
//!
//! - Appends never lose or reorder elements
//! - Every growth strictly increases capacity, by exactly the 1.5x rule
//! - Growth only happens when the buffer is full

use super::common::assert_contiguous_well_formed;
use polyseq::{grown_capacity, ContiguousSequence};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_appends_preserve_order(
        seed in prop::collection::vec(any::<i32>(), 0..40),
        appended in prop::collection::vec(any::<i32>(), 0..120),
    ) {
        let mut seq = ContiguousSequence::from_slice(&seed);
        for &value in &appended {
            seq.append(value);
        }

        let mut expected = seed.clone();
        expected.extend_from_slice(&appended);
        prop_assert_eq!(seq.as_slice(), expected.as_slice());
        assert_contiguous_well_formed(&seq);
    }

    #[test]
    fn prop_growth_is_strict_and_exact(
        initial in 0usize..64,
        appends in 0usize..300,
    ) {
        let mut seq = ContiguousSequence::with_capacity(initial);
        for i in 0..appends {
            let before = seq.capacity();
            let was_full = seq.len() == before;
            seq.append(i as i32);
            let after = seq.capacity();

            if was_full {
                prop_assert!(after > before, "capacity {} -> {}", before, after);
                prop_assert_eq!(after, grown_capacity(before));
            } else {
                prop_assert_eq!(after, before);
            }
        }
        prop_assert_eq!(seq.len(), appends);
    }

    #[test]
    fn prop_grown_capacity_matches_floor_of_one_and_a_half(capacity in 2usize..1_000_000) {
        let expected = (capacity as f64 * 1.5).floor() as usize;
        prop_assert_eq!(grown_capacity(capacity), expected);
    }
}
