//! Code-point traversal over UTF-8 positions.
//!
//! - [`Utf8Iter`] is a cursor adaptor: it dereferences to the code point
//!   under the wrapped position and steps one whole code point at a time in
//!   either direction.
//! - [`CodePoints`] is a Rust iterator over a `[front, back)` range, usable
//!   from both ends.
//! - [`advance`] and [`distance`] count in code points. Both are O(n), since
//!   UTF-8 has no random access by code-point index.

use core::iter::FusedIterator;

use crate::{
    codec::{next, peek_next, prior, retreat, skip},
    position::Position,
};

/// A bidirectional code-point cursor over a UTF-8 [`Position`].
///
/// Two adaptors are equal exactly when their positions are equal. Rust has
/// no post-increment; clone the adaptor before stepping to keep the old
/// position.
///
/// ```rust
/// use utfcore::{SlicePos, Utf8Iter};
///
/// let text = "A€😀".as_bytes();
/// let mut it = Utf8Iter::new(SlicePos::new(text));
/// assert_eq!(it.forward().get(), 0x20AC);
/// assert_eq!(it.forward().get(), 0x1F600);
/// assert_eq!(it.back().get(), 0x20AC);
/// assert_eq!(it.base().offset(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf8Iter<P> {
    pos: P,
}

impl<P: Position<Unit = u8>> Utf8Iter<P> {
    /// Wraps `pos`, which should sit on a lead byte.
    pub fn new(pos: P) -> Self {
        Self { pos }
    }

    /// A copy of the wrapped position.
    pub fn base(&self) -> P {
        self.pos.clone()
    }

    /// Unwraps the position.
    pub fn into_base(self) -> P {
        self.pos
    }

    /// The code point under the cursor. Does not move it.
    pub fn get(&self) -> u32 {
        peek_next(&self.pos)
    }

    /// Steps over the code point under the cursor.
    pub fn forward(&mut self) -> &mut Self {
        skip(&mut self.pos);
        self
    }

    /// Steps back to the start of the previous code point.
    pub fn back(&mut self) -> &mut Self {
        retreat(&mut self.pos);
        self
    }
}

/// Moves `pos` forward over `n` code points.
pub fn advance<P: Position<Unit = u8>>(pos: &mut P, n: usize) {
    for _ in 0..n {
        skip(pos);
    }
}

/// Number of code points between `first` and `last`.
///
/// Counts forward steps from `first` while it is still before `last`, so a
/// `last` that is not reachable (before `first`, or over another sequence)
/// yields 0 instead of looping.
///
/// ```rust
/// use utfcore::SlicePos;
///
/// let text = "A€😀".as_bytes();
/// assert_eq!(utfcore::distance(&SlicePos::new(text), &SlicePos::end(text)), 3);
/// ```
pub fn distance<P: Position<Unit = u8>>(first: &P, last: &P) -> usize {
    let mut pos = first.clone();
    let mut n = 0;
    while pos < *last {
        skip(&mut pos);
        n += 1;
    }
    n
}

/// Iterator over the code points in a `[front, back)` UTF-8 range.
///
/// Decodes forward with [`next`] and backward with [`prior`]. Iteration
/// ends once the two ends meet.
#[derive(Debug, Clone)]
pub struct CodePoints<P> {
    front: P,
    back: P,
}

impl<P: Position<Unit = u8>> CodePoints<P> {
    /// Iterates over `[front, back)`.
    pub fn new(front: P, back: P) -> Self {
        Self { front, back }
    }

    /// The position the next forward step will decode from.
    pub fn front(&self) -> &P {
        &self.front
    }

    /// The position just past the last code point not yet yielded.
    pub fn back(&self) -> &P {
        &self.back
    }
}

impl<P: Position<Unit = u8>> Iterator for CodePoints<P> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        (self.front < self.back).then(|| next(&mut self.front))
    }
}

impl<P: Position<Unit = u8>> DoubleEndedIterator for CodePoints<P> {
    fn next_back(&mut self) -> Option<u32> {
        (self.front < self.back).then(|| prior(&mut self.back))
    }
}

impl<P: Position<Unit = u8>> FusedIterator for CodePoints<P> {}
