// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Doubly-linked integer sequence.
//!
//! Ownership runs head to tail: each node owns its successor through the only
//! strong `Rc` pointing at it, and points back at its predecessor through a
//! `Weak`. Nothing in the public surface walks backwards; the back-links are
//! kept exact anyway and `validate()` checks them.
//!
//! ```text
//!  head
//!   │
//!   ▼   next (Rc)    next (Rc)
//! ┌───┐ ───────▶ ┌───┐ ───────▶ ┌───┐
//! │ 6 │          │ 7 │          │ 8 │ ──▶ None
//! └───┘ ◀─────── └───┘ ◀─────── └───┘
//!        prev (Weak)  prev (Weak)
//! ```
//!
//! There is no cached tail. Every append walks from the head to the last node,
//! so building a list of n elements costs O(n²) pointer hops.

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::rc::{Rc, Weak};

use crate::sequence::{render_elements, Sequence};
use crate::verify::contracts::{check_appended_last, check_chain_length};
use crate::verify::InvariantError;

type Link = Option<Rc<RefCell<Node>>>;

struct Node {
    value: i32,
    next: Link,
    prev: Weak<RefCell<Node>>,
}

impl Node {
    fn new(value: i32) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            value,
            next: None,
            prev: Weak::new(),
        }))
    }
}

/// A chain of heap nodes holding `i32` values in insertion order.
pub struct LinkedSequence {
    head: Link,
}

impl LinkedSequence {
    /// Empty sequence (no head).
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Sequence built by appending each of `values` in order.
    ///
    /// Each element pays the full tail walk; there is no bulk-link shortcut.
    pub fn from_slice(values: &[i32]) -> Self {
        values.iter().copied().collect()
    }

    /// Number of nodes. Walks the whole chain.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Values in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.clone(),
            _marker: PhantomData,
        }
    }

    /// Append `value` after the current tail.
    pub fn append(&mut self, value: i32) {
        let len_before = if cfg!(debug_assertions) { self.len() } else { 0 };

        let node = Node::new(value);
        let walked = match self.head.as_ref().map(tail_of) {
            None => {
                self.head = Some(node);
                0
            }
            Some((tail, walked)) => {
                node.borrow_mut().prev = Rc::downgrade(&tail);
                tail.borrow_mut().next = Some(node);
                walked
            }
        };

        log::trace!("LinkedSequence appended {} after {} hops", value, walked);

        if cfg!(debug_assertions) {
            check_chain_length(walked, len_before);
            check_appended_last(len_before, self.len(), self.last(), value);
        }
    }

    fn last(&self) -> Option<i32> {
        let head = self.head.as_ref()?;
        let (tail, _) = tail_of(head);
        let value = tail.borrow().value;
        Some(value)
    }

    /// Values reached by starting at the tail and following `prev` links.
    ///
    /// For a well-formed chain this is exactly `iter()` reversed.
    pub fn values_backward(&self) -> Vec<i32> {
        let mut values = Vec::new();
        let Some(head) = &self.head else {
            return values;
        };

        let (mut current, _) = tail_of(head);
        loop {
            let prev = {
                let node = current.borrow();
                values.push(node.value);
                node.prev.upgrade()
            };
            match prev {
                Some(node) => current = node,
                None => return values,
            }
        }
    }

    /// Walk the chain and report the first broken back-link.
    pub fn validate(&self) -> Result<(), InvariantError> {
        let Some(head) = &self.head else {
            return Ok(());
        };
        if head.borrow().prev.upgrade().is_some() {
            return Err(InvariantError::HeadHasBackLink);
        }

        let mut predecessor = Rc::clone(head);
        let mut position = 1;
        loop {
            let next = predecessor.borrow().next.clone();
            let Some(node) = next else {
                return Ok(());
            };
            match node.borrow().prev.upgrade() {
                None => return Err(InvariantError::DanglingBackLink { position }),
                Some(prev) if !Rc::ptr_eq(&prev, &predecessor) => {
                    return Err(InvariantError::BrokenBackLink { position });
                }
                Some(_) => {}
            }
            predecessor = node;
            position += 1;
        }
    }
}

/// Follow `next` from `head` to the node whose `next` is absent.
///
/// Returns the tail and the number of nodes visited.
fn tail_of(head: &Rc<RefCell<Node>>) -> (Rc<RefCell<Node>>, usize) {
    let mut current = Rc::clone(head);
    let mut visited = 1;
    loop {
        let next = current.borrow().next.clone();
        match next {
            Some(node) => {
                current = node;
                visited += 1;
            }
            None => return (current, visited),
        }
    }
}

impl Default for LinkedSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LinkedSequence {
    // Unlink front to back so a long chain doesn't recurse once per node
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(node) = link {
            link = node.borrow_mut().next.take();
        }
    }
}

impl Clone for LinkedSequence {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl FromIterator<i32> for LinkedSequence {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut sequence = Self::new();
        for value in iter {
            sequence.append(value);
        }
        sequence
    }
}

/// Forward iterator over a [`LinkedSequence`].
pub struct Iter<'a> {
    next: Link,
    _marker: PhantomData<&'a LinkedSequence>,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let current = self.next.take()?;
        let node = current.borrow();
        self.next = node.next.clone();
        Some(node.value)
    }
}

impl Sequence for LinkedSequence {
    fn name(&self) -> &'static str {
        "LinkedSequence"
    }

    fn append(&mut self, value: i32) {
        LinkedSequence::append(self, value);
    }

    fn len(&self) -> usize {
        LinkedSequence::len(self)
    }

    fn values(&self) -> Vec<i32> {
        self.iter().collect()
    }

    fn render(&self) -> String {
        render_elements(self.name(), self.iter())
    }
}

impl fmt::Display for LinkedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Sequence::render(self))
    }
}

impl fmt::Debug for LinkedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Node handle at `position`, for tests that tamper with links.
    fn node_at(seq: &LinkedSequence, position: usize) -> Rc<RefCell<Node>> {
        let mut current = seq.head.clone().unwrap();
        for _ in 0..position {
            let next = current.borrow().next.clone().unwrap();
            current = next;
        }
        current
    }

    #[test]
    fn new_is_empty() {
        let seq = LinkedSequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
        assert_eq!(seq.render(), "LinkedSequence [ ]");
    }

    #[test]
    fn first_append_becomes_head() {
        let mut seq = LinkedSequence::new();
        seq.append(42);
        assert_eq!(seq.head.as_ref().unwrap().borrow().value, 42);
        assert!(seq.head.as_ref().unwrap().borrow().prev.upgrade().is_none());
        assert_eq!(seq.render(), "LinkedSequence [ 42 ]");
    }

    #[test]
    fn seeded_append_renders_in_order() {
        let mut seq = LinkedSequence::from_slice(&[6, 7, 8, 9, 10]);
        seq.append(25);
        assert_eq!(seq.render(), "LinkedSequence [ 6 7 8 9 10 25 ]");
        assert_eq!(seq.len(), 6);
    }

    #[test]
    fn back_links_reverse_forward_order() {
        let seq = LinkedSequence::from_slice(&[1, 2, 3, 4]);
        assert_eq!(seq.values_backward(), vec![4, 3, 2, 1]);
        assert_eq!(seq.validate(), Ok(()));
    }

    #[test]
    fn tail_walk_counts_every_node() {
        let seq = LinkedSequence::from_slice(&[5, 6, 7]);
        let (tail, visited) = tail_of(seq.head.as_ref().unwrap());
        assert_eq!(visited, 3);
        assert_eq!(tail.borrow().value, 7);
        assert!(tail.borrow().next.is_none());
    }

    #[test]
    fn next_links_are_the_only_strong_references() {
        let seq = LinkedSequence::from_slice(&[1, 2, 3]);
        let middle = node_at(&seq, 1);
        // `middle` here plus the owning `next` of node 0
        assert_eq!(Rc::strong_count(&middle), 2);
        assert_eq!(Rc::weak_count(&middle), 1);
    }

    #[test]
    fn validate_reports_dangling_back_link() {
        let seq = LinkedSequence::from_slice(&[1, 2, 3]);
        node_at(&seq, 1).borrow_mut().prev = Weak::new();
        assert_eq!(
            seq.validate(),
            Err(InvariantError::DanglingBackLink { position: 1 })
        );
    }

    #[test]
    fn validate_reports_misdirected_back_link() {
        let seq = LinkedSequence::from_slice(&[1, 2, 3]);
        let head = node_at(&seq, 0);
        node_at(&seq, 2).borrow_mut().prev = Rc::downgrade(&head);
        assert_eq!(
            seq.validate(),
            Err(InvariantError::BrokenBackLink { position: 2 })
        );
    }

    #[test]
    fn validate_reports_head_back_link() {
        let seq = LinkedSequence::from_slice(&[1, 2]);
        let second = node_at(&seq, 1);
        node_at(&seq, 0).borrow_mut().prev = Rc::downgrade(&second);
        assert_eq!(seq.validate(), Err(InvariantError::HeadHasBackLink));
    }

    #[test]
    fn long_chain_drops_without_recursion() {
        // Link directly so the test doesn't pay the quadratic tail walk
        let mut seq = LinkedSequence::new();
        seq.append(0);
        let mut tail = Rc::clone(seq.head.as_ref().unwrap());
        for value in 1..200_000 {
            let node = Node::new(value);
            node.borrow_mut().prev = Rc::downgrade(&tail);
            tail.borrow_mut().next = Some(Rc::clone(&node));
            tail = node;
        }
        drop(tail);
        assert_eq!(seq.iter().last(), Some(199_999));
        drop(seq);
    }

    #[test]
    fn clone_is_independent() {
        let mut original = LinkedSequence::from_slice(&[1, 2]);
        let copy = original.clone();
        original.append(3);
        assert_eq!(copy.values(), vec![1, 2]);
        assert_eq!(original.values(), vec![1, 2, 3]);
        assert_eq!(copy.validate(), Ok(()));
    }

    #[test]
    fn debug_lists_values() {
        let seq = LinkedSequence::from_slice(&[3, -1]);
        assert_eq!(format!("{:?}", seq), "[3, -1]");
    }
}
