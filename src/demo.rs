// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Substitutability demonstration and growth reporting.
//!
//! The caller side of the capability: build each variant, push a value
//! through `&mut dyn Sequence`, collect what comes back. Nothing here names a
//! concrete container except to construct it.

use serde::Serialize;

use crate::contiguous::ContiguousSequence;
use crate::sequence::{append_and_render, SequenceKind, Snapshot};

/// Seed for the contiguous half of the demonstration.
pub const CONTIGUOUS_SEED: [i32; 5] = [1, 2, 3, 4, 5];
/// Seed for the linked half of the demonstration.
pub const LINKED_SEED: [i32; 5] = [6, 7, 8, 9, 10];
/// Value appended to both.
pub const DEMO_VALUE: i32 = 25;

/// Seed used for `kind` in the demonstration.
pub fn seed_for(kind: SequenceKind) -> &'static [i32] {
    match kind {
        SequenceKind::Contiguous => &CONTIGUOUS_SEED,
        SequenceKind::Linked => &LINKED_SEED,
    }
}

/// Build both variants from their seeds, append `value` to each through the
/// capability handle, and return the results in variant order.
pub fn demonstrate(value: i32) -> Vec<Snapshot> {
    SequenceKind::ALL
        .into_iter()
        .map(|kind| {
            let mut sequence = kind.build(seed_for(kind));
            let rendered = append_and_render(sequence.as_mut(), value);
            log::debug!("{} -> {}", kind, rendered);
            Snapshot::of(kind, sequence.as_ref())
        })
        .collect()
}

/// One reallocation observed while appending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GrowthEvent {
    /// 1-based index of the append that triggered the growth.
    pub append: usize,
    pub from: usize,
    pub to: usize,
}

/// Append `appends` values to a `ContiguousSequence::with_capacity(initial)`
/// and record every growth.
pub fn growth_trajectory(initial: usize, appends: usize) -> Vec<GrowthEvent> {
    let mut sequence = ContiguousSequence::with_capacity(initial);
    let mut events = Vec::new();

    for append in 1..=appends {
        let before = sequence.capacity();
        // Value is irrelevant to growth; wrap instead of failing on huge runs
        sequence.append(append as i32);
        if sequence.capacity() != before {
            events.push(GrowthEvent {
                append,
                from: before,
                to: sequence.capacity(),
            });
        }
    }

    events
}
