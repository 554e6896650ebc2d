//! LinkedSequence property tests.
//!
//! - n appends produce exactly n nodes in insertion order
//! - prev links exactly reverse the next traversal

use super::common::assert_linked_well_formed;
use polyseq::LinkedSequence;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_chain_matches_insertion_order(
        values in prop::collection::vec(any::<i32>(), 0..80),
    ) {
        let mut seq = LinkedSequence::new();
        for &value in &values {
            seq.append(value);
        }

        prop_assert_eq!(seq.len(), values.len());
        prop_assert_eq!(seq.iter().collect::<Vec<_>>(), values.clone());

        let mut reversed = values.clone();
        reversed.reverse();
        prop_assert_eq!(seq.values_backward(), reversed);
        assert_linked_well_formed(&seq);
    }

    #[test]
    fn prop_seeded_equals_sequential_appends(
        seed in prop::collection::vec(any::<i32>(), 0..40),
        extra in any::<i32>(),
    ) {
        let mut seeded = LinkedSequence::from_slice(&seed);
        let mut manual = LinkedSequence::new();
        for &value in &seed {
            manual.append(value);
        }
        seeded.append(extra);
        manual.append(extra);

        prop_assert_eq!(seeded.to_string(), manual.to_string());
    }
}
