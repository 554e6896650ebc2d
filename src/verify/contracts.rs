// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the append paths.
//!
//! Debug-mode assertions that verify what every append promises. These
//! contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function               | Property                                  |
//! |---------------------------------|-------------------------------------------|
//! | `check_growth_strict`           | capacity strictly increases on growth     |
//! | `check_growth_factor`           | growth is `floor(capacity * 1.5)` or +1   |
//! | `check_count_within_capacity`   | `count <= capacity`                       |
//! | `check_appended_last`           | appended value becomes the last element   |
//! | `check_chain_length`            | tail walk covers every existing node      |

use crate::contiguous::{GROWTH_DENOMINATOR, GROWTH_NUMERATOR};

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Growth factor must be strictly greater than one, otherwise growth can stall
/// for every capacity, not just the degenerate small ones.
const _: () = {
    assert!(GROWTH_NUMERATOR > GROWTH_DENOMINATOR);
    assert!(GROWTH_DENOMINATOR > 0);
    // 1.5x: 50 -> 75 -> 112
    assert!(50 * GROWTH_NUMERATOR / GROWTH_DENOMINATOR == 75);
    assert!(75 * GROWTH_NUMERATOR / GROWTH_DENOMINATOR == 112);
};

// ============================================================================
// CONTIGUOUS CONTRACTS
// ============================================================================

/// Check that a growth step made progress.
///
/// # Panics (debug builds only)
/// Panics if `new_capacity <= old_capacity`.
#[inline]
pub fn check_growth_strict(old_capacity: usize, new_capacity: usize) {
    debug_assert!(
        new_capacity > old_capacity,
        "Contract violation: growth must be strict - {} -> {}",
        old_capacity,
        new_capacity
    );
}

/// Check that a growth step followed the 1.5x rule, with the +1 floor for
/// capacities too small to grow by truncated multiplication.
#[inline]
pub fn check_growth_factor(old_capacity: usize, new_capacity: usize) {
    // floor(c * 1.5) == c + floor(c / 2)
    let scaled = old_capacity.saturating_add(old_capacity / 2);
    debug_assert!(
        new_capacity == scaled.max(old_capacity.saturating_add(1)),
        "Contract violation: growth factor - {} -> {} (expected {})",
        old_capacity,
        new_capacity,
        scaled.max(old_capacity.saturating_add(1))
    );
}

/// Check that the logical length never exceeds the allocation.
#[inline]
pub fn check_count_within_capacity(count: usize, capacity: usize) {
    debug_assert!(
        count <= capacity,
        "Contract violation: count {} > capacity {}",
        count,
        capacity
    );
}

// ============================================================================
// APPEND CONTRACTS (both variants)
// ============================================================================

/// Check that `value` landed at the end and the length grew by one.
#[inline]
pub fn check_appended_last(len_before: usize, len_after: usize, last: Option<i32>, value: i32) {
    debug_assert_eq!(
        len_after,
        len_before + 1,
        "Contract violation: append changed length {} -> {}",
        len_before,
        len_after
    );
    debug_assert_eq!(
        last,
        Some(value),
        "Contract violation: appended {} but last element is {:?}",
        value,
        last
    );
}

/// Check that a tail walk of `walked` hops reached a chain of `len_before` nodes.
#[inline]
pub fn check_chain_length(walked: usize, len_before: usize) {
    debug_assert_eq!(
        walked, len_before,
        "Contract violation: tail walk visited {} nodes, chain has {}",
        walked, len_before
    );
}
