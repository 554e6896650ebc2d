// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: structural checks and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Structural validation** (`validate()` on each container) that walks the
//!    internal representation and reports the first broken invariant as an
//!    [`InvariantError`]. Appending never fails, so these errors only ever
//!    describe a corrupted container, never bad input.
//!
//! 2. **Runtime contracts** that panic in debug builds when an append breaks
//!    an invariant. Zero-cost in release, but catch bugs while tests run.

mod error;
pub mod contracts;

pub use error::*;
