//! Shared helpers for integration and property tests.

#![allow(dead_code)]

use polyseq::{ContiguousSequence, LinkedSequence, Sequence};

/// Assert every structural invariant of a contiguous sequence.
pub fn assert_contiguous_well_formed(seq: &ContiguousSequence) {
    assert!(
        seq.len() <= seq.capacity(),
        "count {} exceeds capacity {}",
        seq.len(),
        seq.capacity()
    );
    if let Err(e) = seq.validate() {
        panic!("ContiguousSequence invariant violated: {}", e);
    }
}

/// Assert every structural invariant of a linked sequence.
pub fn assert_linked_well_formed(seq: &LinkedSequence) {
    if let Err(e) = seq.validate() {
        panic!("LinkedSequence invariant violated: {}", e);
    }
    let forward: Vec<i32> = seq.iter().collect();
    let mut backward = seq.values_backward();
    backward.reverse();
    assert_eq!(forward, backward, "prev links do not mirror next links");
}

/// What rendering `seq` must produce when it holds exactly `values`.
pub fn expected(seq: &dyn Sequence, values: &[i32]) -> String {
    polyseq::testing::expected_render(seq.name(), values)
}
