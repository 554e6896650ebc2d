// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Error type for invariant violations found by `validate()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// More elements are counted than there are allocated slots.
    CountExceedsCapacity { count: usize, capacity: usize },
    /// The head node carries a back-reference.
    HeadHasBackLink,
    /// A non-head node's back-reference no longer points at a live node.
    DanglingBackLink { position: usize },
    /// A non-head node's back-reference points somewhere other than its predecessor.
    BrokenBackLink { position: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::CountExceedsCapacity { count, capacity } => {
                write!(f, "count {} > capacity {}", count, capacity)
            }
            InvariantError::HeadHasBackLink => {
                write!(f, "head node has a prev link")
            }
            InvariantError::DanglingBackLink { position } => {
                write!(f, "node {} has a dangling prev link", position)
            }
            InvariantError::BrokenBackLink { position } => {
                write!(
                    f,
                    "node {} prev link does not point at node {}",
                    position,
                    position.saturating_sub(1)
                )
            }
        }
    }
}

impl std::error::Error for InvariantError {}
