// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target comparing both containers against a `Vec<i32>` oracle.
//!
//! Arbitrary seeds, starting capacities and append runs. Whatever the input,
//! both variants must hold exactly what the oracle holds, render it the same
//! way, and keep their structural invariants.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use polyseq::{grown_capacity, render_elements, ContiguousSequence, LinkedSequence, Sequence};

#[derive(Debug, Arbitrary)]
struct Input {
    seed: Vec<i32>,
    initial_capacity: Option<u8>,
    appends: Vec<i32>,
}

fuzz_target!(|input: Input| {
    // Keep the linked tail walk from dominating the run
    if input.seed.len() + input.appends.len() > 512 {
        return;
    }

    let mut oracle = input.seed.clone();

    let mut array = match input.initial_capacity {
        Some(capacity) if input.seed.is_empty() => {
            ContiguousSequence::with_capacity(capacity as usize)
        }
        _ => ContiguousSequence::from_slice(&input.seed),
    };
    let mut list = LinkedSequence::from_slice(&input.seed);

    for &value in &input.appends {
        let before = array.capacity();
        let was_full = array.len() == before;

        array.append(value);
        list.append(value);
        oracle.push(value);

        // Property 1: growth happens exactly when full, by the 1.5x rule
        if was_full {
            assert_eq!(array.capacity(), grown_capacity(before));
        } else {
            assert_eq!(array.capacity(), before);
        }
    }

    // Property 2: contents match the oracle
    assert_eq!(array.as_slice(), oracle.as_slice());
    assert_eq!(list.values(), oracle);

    // Property 3: renderings match the oracle
    assert_eq!(
        array.render(),
        render_elements("ContiguousSequence", oracle.iter().copied())
    );
    assert_eq!(
        list.render(),
        render_elements("LinkedSequence", oracle.iter().copied())
    );

    // Property 4: structure
    assert!(array.validate().is_ok());
    assert!(list.validate().is_ok());
});
