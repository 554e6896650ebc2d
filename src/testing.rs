//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::sequence::{render_elements, Sequence, SequenceKind};

/// Expected rendering for `values` in a sequence called `name`.
///
/// Built independently of either container so tests compare against an oracle.
pub fn expected_render(name: &str, values: &[i32]) -> String {
    render_elements(name, values.iter().copied())
}

/// Append every value in order through the capability handle.
pub fn append_all(sequence: &mut dyn Sequence, values: &[i32]) {
    for &value in values {
        sequence.append(value);
    }
}

/// Build one handle per variant, each seeded with `seed`.
pub fn both_kinds(seed: &[i32]) -> Vec<Box<dyn Sequence>> {
    SequenceKind::ALL
        .into_iter()
        .map(|kind| kind.build(seed))
        .collect()
}
