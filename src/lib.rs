//! Two interchangeable integer sequences behind one capability.
//!
//! [`ContiguousSequence`] keeps its elements in a single growable buffer;
//! [`LinkedSequence`] keeps them in a chain of heap nodes. Both implement
//! [`Sequence`], and code written against `&mut dyn Sequence` cannot tell
//! them apart except by the name in the rendering.
//!
//! # Architecture
//!
//! ```text
//!                 ┌────────────────┐
//!                 │  sequence.rs   │
//!                 │ (Sequence,     │
//!                 │  SequenceKind) │
//!                 └───────┬────────┘
//!            implements   │   implements
//!          ┌──────────────┴──────────────┐
//!          ▼                             ▼
//! ┌──────────────────┐         ┌──────────────────┐
//! │  contiguous.rs   │         │    linked.rs     │
//! │ (Box<[i32]>,1.5x)│         │ (Rc next,        │
//! │                  │         │  Weak prev)      │
//! └────────┬─────────┘         └────────┬─────────┘
//!          │                            │
//!          ▼                            ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     verify/                          │
//! │  (InvariantError, debug-mode append contracts)       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use polyseq::{append_and_render, ContiguousSequence, LinkedSequence, Sequence};
//!
//! let mut array = ContiguousSequence::from_slice(&[1, 2, 3, 4, 5]);
//! let mut list = LinkedSequence::from_slice(&[6, 7, 8, 9, 10]);
//!
//! let handles: [&mut dyn Sequence; 2] = [&mut array, &mut list];
//! let rendered: Vec<String> = handles
//!     .into_iter()
//!     .map(|seq| append_and_render(seq, 25))
//!     .collect();
//!
//! assert_eq!(rendered[0], "ContiguousSequence [ 1 2 3 4 5 25 ]");
//! assert_eq!(rendered[1], "LinkedSequence [ 6 7 8 9 10 25 ]");
//! assert_eq!(array.capacity(), 7);
//! ```

mod contiguous;
pub mod demo;
mod linked;
mod sequence;
pub mod testing;
pub mod verify;

pub use contiguous::{
    grown_capacity, ContiguousSequence, DEFAULT_CAPACITY, GROWTH_DENOMINATOR, GROWTH_NUMERATOR,
};
pub use linked::{Iter as LinkedIter, LinkedSequence};
pub use sequence::{
    append_and_render, render_elements, Sequence, SequenceKind, Snapshot, UnknownKind,
};
pub use verify::InvariantError;
