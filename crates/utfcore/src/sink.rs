//! Output sinks for encoded code units.
//!
//! A [`Sink`] is the write-side counterpart of [`Position`](crate::Position):
//! the codec appends units to it one at a time and never reads them back.

use crate::unit::CodeUnit;

/// Accepts code units in order.
pub trait Sink<U: CodeUnit> {
    /// Appends one unit.
    fn put(&mut self, unit: U);
}

impl<U: CodeUnit, S: Sink<U> + ?Sized> Sink<U> for &mut S {
    #[inline]
    fn put(&mut self, unit: U) {
        (**self).put(unit);
    }
}

#[cfg(feature = "alloc")]
impl<U: CodeUnit> Sink<U> for alloc::vec::Vec<U> {
    #[inline]
    fn put(&mut self, unit: U) {
        self.push(unit);
    }
}

#[cfg(feature = "alloc")]
impl Sink<u8> for bstr::BString {
    #[inline]
    fn put(&mut self, unit: u8) {
        self.push(unit);
    }
}

/// Writes into a fixed, caller-provided buffer.
///
/// # Panics
///
/// [`Sink::put`] panics once the buffer is full, the same way
/// [`char::encode_utf8`] panics on a short buffer.
#[derive(Debug)]
pub struct SliceSink<'a, U> {
    buf: &'a mut [U],
    len: usize,
}

impl<'a, U: CodeUnit> SliceSink<'a, U> {
    /// Sink writing from the start of `buf`.
    pub fn new(buf: &'a mut [U]) -> Self {
        Self { buf, len: 0 }
    }

    /// Number of units written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The units written so far.
    #[must_use]
    pub fn written(&self) -> &[U] {
        &self.buf[..self.len]
    }

    /// Consumes the sink, returning the written prefix of the buffer.
    #[must_use]
    pub fn into_written(self) -> &'a mut [U] {
        let Self { buf, len } = self;
        &mut buf[..len]
    }
}

impl<U: CodeUnit> Sink<U> for SliceSink<'_, U> {
    #[inline]
    fn put(&mut self, unit: U) {
        let capacity = self.buf.len();
        let Some(slot) = self.buf.get_mut(self.len) else {
            panic!("sink buffer full: capacity is {capacity} units");
        };
        *slot = unit;
        self.len += 1;
    }
}
