//! Cursors into caller-owned code-unit sequences.
//!
//! The codec never indexes a container directly. It reads through a
//! [`Position`], which only knows how to dereference, step one unit forward,
//! step one unit back and compare itself with another position over the same
//! sequence. [`SlicePos`] is the implementation over a borrowed slice.

use core::cmp::Ordering;

use crate::{iter::CodePoints, unit::CodeUnit};

/// A bidirectional cursor over a sequence of code units.
///
/// Positions over the same sequence are ordered by offset. Comparing
/// positions over different sequences is meaningless.
///
/// Implementations must stay memory-safe when driven off either end of the
/// sequence: the codec trusts its input, so a truncated tail or a run of
/// continuation bytes at the start will push a cursor against its bounds.
pub trait Position: Clone + PartialOrd {
    /// The code unit this cursor yields.
    type Unit: CodeUnit;

    /// The unit under the cursor, or `Unit::default()` at or past the end.
    fn get(&self) -> Self::Unit;

    /// Moves one unit forward. Saturates at the end of the sequence.
    fn step_forward(&mut self);

    /// Moves one unit back. Returns `false`, without moving, at the start.
    fn step_back(&mut self) -> bool;
}

/// A [`Position`] over a borrowed slice.
#[derive(Debug, Clone, Copy)]
pub struct SlicePos<'a, U> {
    units: &'a [U],
    offset: usize,
}

impl<'a, U: CodeUnit> SlicePos<'a, U> {
    /// Position at the first unit of `units`.
    #[must_use]
    pub fn new(units: &'a [U]) -> Self {
        Self { units, offset: 0 }
    }

    /// Position at `offset`, clamped to `units.len()`.
    #[must_use]
    pub fn at(units: &'a [U], offset: usize) -> Self {
        Self {
            units,
            offset: offset.min(units.len()),
        }
    }

    /// Position one past the last unit of `units`.
    #[must_use]
    pub fn end(units: &'a [U]) -> Self {
        Self {
            units,
            offset: units.len(),
        }
    }

    /// Offset of the cursor in units from the start of the slice.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Whether the cursor sits one past the last unit.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.offset == self.units.len()
    }

    /// The units from the cursor to the end of the slice.
    #[must_use]
    pub fn remaining(&self) -> &'a [U] {
        &self.units[self.offset..]
    }
}

impl SlicePos<'_, u8> {
    /// Code points from the cursor to the end of the slice.
    #[must_use]
    pub fn code_points(&self) -> CodePoints<Self> {
        CodePoints::new(*self, Self::end(self.units))
    }
}

impl<U: CodeUnit> Position for SlicePos<'_, U> {
    type Unit = U;

    #[inline]
    fn get(&self) -> U {
        self.units.get(self.offset).copied().unwrap_or_default()
    }

    #[inline]
    fn step_forward(&mut self) {
        if self.offset < self.units.len() {
            self.offset += 1;
        }
    }

    #[inline]
    fn step_back(&mut self) -> bool {
        if self.offset == 0 {
            return false;
        }
        self.offset -= 1;
        true
    }
}

impl<U> Default for SlicePos<'_, U> {
    fn default() -> Self {
        Self {
            units: &[],
            offset: 0,
        }
    }
}

impl<U> PartialEq for SlicePos<'_, U> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.units, other.units) && self.offset == other.offset
    }
}

impl<U> Eq for SlicePos<'_, U> {}

impl<U> PartialOrd for SlicePos<'_, U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        core::ptr::eq(self.units, other.units).then(|| self.offset.cmp(&other.offset))
    }
}
