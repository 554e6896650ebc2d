// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The capability both containers implement.
//!
//! Callers hold a `&mut dyn Sequence` or a `Box<dyn Sequence>` and never name
//! the concrete container. Appending and rendering behave the same from the
//! outside; how the value gets stored is the container's business.
//!
//! # Rendering
//!
//! ```text
//! ContiguousSequence [ 1 2 3 ]
//! LinkedSequence [ ]
//! ```
//!
//! Every element is followed by a single space, so a non-empty rendering has
//! exactly one space before the closing bracket and an empty one collapses
//! to `"<Name> [ ]"`.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use serde::Serialize;

use crate::contiguous::ContiguousSequence;
use crate::linked::LinkedSequence;

/// An appendable integer sequence.
pub trait Sequence {
    /// Variant name used as the rendering prefix.
    fn name(&self) -> &'static str;

    /// Append `value` as the new last element. Never fails.
    fn append(&mut self, value: i32);

    /// Number of logically stored elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Elements in logical order.
    fn values(&self) -> Vec<i32>;

    /// Human-readable form, e.g. `"LinkedSequence [ 6 7 25 ]"`.
    ///
    /// Pure: calling it twice without an intervening `append` yields the
    /// same string. Implementations format through [`render_elements`].
    fn render(&self) -> String;
}

/// Format `elements` as `"<name> [ e0 e1 ... ]"`.
pub fn render_elements<I>(name: &str, elements: I) -> String
where
    I: IntoIterator<Item = i32>,
{
    let mut out = String::with_capacity(name.len() + 4);
    out.push_str(name);
    out.push_str(" [ ");
    for value in elements {
        // Writing into a String cannot fail
        let _ = write!(out, "{} ", value);
    }
    out.push(']');
    out
}

/// Append `value` through the capability handle and return the rendering.
///
/// This is the whole demonstration: the same call works for either variant.
pub fn append_and_render(sequence: &mut dyn Sequence, value: i32) -> String {
    sequence.append(value);
    sequence.render()
}

/// Which container backs a capability handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceKind {
    Contiguous,
    Linked,
}

impl SequenceKind {
    pub const ALL: [SequenceKind; 2] = [SequenceKind::Contiguous, SequenceKind::Linked];

    /// Build a container of this kind seeded with `seed`, in order.
    pub fn build(self, seed: &[i32]) -> Box<dyn Sequence> {
        match self {
            SequenceKind::Contiguous => Box::new(ContiguousSequence::from_slice(seed)),
            SequenceKind::Linked => Box::new(LinkedSequence::from_slice(seed)),
        }
    }

    /// Build an empty container of this kind.
    pub fn empty(self) -> Box<dyn Sequence> {
        match self {
            SequenceKind::Contiguous => Box::new(ContiguousSequence::new()),
            SequenceKind::Linked => Box::new(LinkedSequence::new()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SequenceKind::Contiguous => "contiguous",
            SequenceKind::Linked => "linked",
        }
    }
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`SequenceKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sequence kind '{}' (expected 'contiguous' or 'linked')",
            self.0
        )
    }
}

impl std::error::Error for UnknownKind {}

impl FromStr for SequenceKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "contiguous" | "array" | "c" => Ok(SequenceKind::Contiguous),
            "linked" | "list" | "l" => Ok(SequenceKind::Linked),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

/// Serializable view of a sequence, used for `--json` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub kind: SequenceKind,
    pub name: &'static str,
    pub len: usize,
    pub elements: Vec<i32>,
    pub rendered: String,
}

impl Snapshot {
    pub fn of(kind: SequenceKind, sequence: &dyn Sequence) -> Self {
        Self {
            kind,
            name: sequence.name(),
            len: sequence.len(),
            elements: sequence.values(),
            rendered: sequence.render(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_elements_empty_has_single_space() {
        assert_eq!(render_elements("X", []), "X [ ]");
    }

    #[test]
    fn render_elements_trailing_space_before_bracket() {
        assert_eq!(render_elements("X", [1, -2, 3]), "X [ 1 -2 3 ]");
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("Linked".parse::<SequenceKind>(), Ok(SequenceKind::Linked));
        assert_eq!(
            "CONTIGUOUS".parse::<SequenceKind>(),
            Ok(SequenceKind::Contiguous)
        );
        assert!("tree".parse::<SequenceKind>().is_err());
    }

    #[test]
    fn kind_display_roundtrips_through_from_str() {
        for kind in SequenceKind::ALL {
            assert_eq!(kind.to_string().parse::<SequenceKind>(), Ok(kind));
        }
    }

    #[test]
    fn both_kinds_behave_identically_through_the_handle() {
        for kind in SequenceKind::ALL {
            let mut seq = kind.build(&[1, 2]);
            let rendered = append_and_render(seq.as_mut(), 3);
            assert!(rendered.ends_with("[ 1 2 3 ]"), "{}", rendered);
            assert_eq!(seq.len(), 3);
            assert_eq!(seq.values(), vec![1, 2, 3]);
        }
    }

    #[test]
    fn empty_handles_render_empty_brackets() {
        assert_eq!(
            SequenceKind::Contiguous.empty().render(),
            "ContiguousSequence [ ]"
        );
        assert_eq!(SequenceKind::Linked.empty().render(), "LinkedSequence [ ]");
        assert!(SequenceKind::Linked.empty().is_empty());
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let seq = SequenceKind::Linked.build(&[4, 5]);
        let json = serde_json::to_value(Snapshot::of(SequenceKind::Linked, seq.as_ref())).unwrap();
        assert_eq!(json["kind"], "linked");
        assert_eq!(json["name"], "LinkedSequence");
        assert_eq!(json["len"], 2);
        assert_eq!(json["elements"], serde_json::json!([4, 5]));
        assert_eq!(json["rendered"], "LinkedSequence [ 4 5 ]");
    }
}
