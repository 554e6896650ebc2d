// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Array-backed growable integer sequence.
//!
//! The buffer is a `Box<[i32]>` whose length *is* the capacity. Slots past
//! `count` hold whatever the last allocation left there and are never read.
//! When the buffer is full, a new one of `floor(capacity * 1.5)` slots is
//! allocated, every slot is copied across in order, and the old buffer is
//! dropped on the spot.
//!
//! # Growth trajectory
//!
//! ```text
//! new()              50 -> 75 -> 112 -> 168 -> ...
//! from_slice(&[..5])  5 ->  7 ->  10 ->  15 -> ...
//! with_capacity(0)    0 ->  1 ->   2 ->   3 ->  4 -> 6 -> ...
//! ```
//!
//! Seeded construction does not round up to the default; the second
//! trajectory is deliberately different from the first.

use std::fmt;

use crate::sequence::{render_elements, Sequence};
use crate::verify::contracts::{
    check_appended_last, check_count_within_capacity, check_growth_factor, check_growth_strict,
};
use crate::verify::InvariantError;

/// Capacity of a sequence built with [`ContiguousSequence::new`].
pub const DEFAULT_CAPACITY: usize = 50;

/// Growth factor numerator (factor = 3/2).
pub const GROWTH_NUMERATOR: usize = 3;
/// Growth factor denominator (factor = 3/2).
pub const GROWTH_DENOMINATOR: usize = 2;

/// Capacity after one growth step from `capacity`.
///
/// `floor(capacity * 1.5)`, but never less than `capacity + 1` so that 0 and 1
/// still make progress.
///
/// ```
/// use polyseq::grown_capacity;
///
/// assert_eq!(grown_capacity(50), 75);
/// assert_eq!(grown_capacity(5), 7);
/// assert_eq!(grown_capacity(0), 1);
/// ```
pub fn grown_capacity(capacity: usize) -> usize {
    // Split to keep the multiply from overflowing near usize::MAX
    let scaled = (capacity / GROWTH_DENOMINATOR)
        .saturating_mul(GROWTH_NUMERATOR)
        .saturating_add(capacity % GROWTH_DENOMINATOR * GROWTH_NUMERATOR / GROWTH_DENOMINATOR);
    scaled.max(capacity.saturating_add(1))
}

/// A dynamically-resizing contiguous array of `i32`.
#[derive(Clone)]
pub struct ContiguousSequence {
    storage: Box<[i32]>,
    count: usize,
    growths: usize,
}

impl ContiguousSequence {
    /// Empty sequence with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Empty sequence with exactly `capacity` slots. Zero is allowed.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: vec![0; capacity].into_boxed_slice(),
            count: 0,
            growths: 0,
        }
    }

    /// Sequence holding `values` in order, with `capacity == len == values.len()`.
    pub fn from_slice(values: &[i32]) -> Self {
        Self::from(values.to_vec())
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Allocated slots.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// How many times the buffer has been reallocated.
    pub fn growth_count(&self) -> usize {
        self.growths
    }

    /// The logically used slots `[0, count)`.
    pub fn as_slice(&self) -> &[i32] {
        &self.storage[..self.count]
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, i32>> {
        self.as_slice().iter().copied()
    }

    /// Append `value`, growing the buffer first if every slot is used.
    pub fn append(&mut self, value: i32) {
        let len_before = self.count;
        if self.count == self.capacity() {
            self.grow();
        }
        self.storage[self.count] = value;
        self.count += 1;

        check_count_within_capacity(self.count, self.capacity());
        check_appended_last(len_before, self.count, self.as_slice().last().copied(), value);
    }

    /// Replace the buffer with one `grown_capacity` slots long.
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = grown_capacity(old_capacity);
        check_growth_strict(old_capacity, new_capacity);
        check_growth_factor(old_capacity, new_capacity);

        let mut grown = vec![0; new_capacity].into_boxed_slice();
        grown[..old_capacity].copy_from_slice(&self.storage);
        self.storage = grown;
        self.growths += 1;

        log::trace!(
            "ContiguousSequence grew {} -> {} (count {})",
            old_capacity,
            new_capacity,
            self.count
        );
    }

    /// Walk the representation and report the first broken invariant.
    pub fn validate(&self) -> Result<(), InvariantError> {
        if self.count > self.storage.len() {
            return Err(InvariantError::CountExceedsCapacity {
                count: self.count,
                capacity: self.storage.len(),
            });
        }
        Ok(())
    }
}

impl Default for ContiguousSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<i32>> for ContiguousSequence {
    fn from(values: Vec<i32>) -> Self {
        let count = values.len();
        Self {
            // into_boxed_slice drops excess capacity: capacity == count
            storage: values.into_boxed_slice(),
            count,
            growths: 0,
        }
    }
}

impl FromIterator<i32> for ContiguousSequence {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl Sequence for ContiguousSequence {
    fn name(&self) -> &'static str {
        "ContiguousSequence"
    }

    fn append(&mut self, value: i32) {
        ContiguousSequence::append(self, value);
    }

    fn len(&self) -> usize {
        self.count
    }

    fn values(&self) -> Vec<i32> {
        self.as_slice().to_vec()
    }

    fn render(&self) -> String {
        render_elements(self.name(), self.iter())
    }
}

impl fmt::Display for ContiguousSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Sequence::render(self))
    }
}

impl fmt::Debug for ContiguousSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContiguousSequence")
            .field("values", &self.as_slice())
            .field("count", &self.count)
            .field("capacity", &self.capacity())
            .finish()
    }
}
