//! Single-code-point UTF-8 codec.
//!
//! [`append`] and [`next`] are the two primitives every other operation in
//! the crate is built on. Neither validates: a code point above
//! [`CODE_POINT_MAX`](crate::unit::CODE_POINT_MAX) is encoded with the
//! four-byte layout and its excess high bits are cut off, and a malformed
//! sequence decodes to an unspecified value. Both stay inside the bounds of
//! the [`Position`] and [`Sink`] they are given.

use crate::{
    position::Position,
    sink::Sink,
    unit::{is_trail, sequence_length},
};

/// Encodes `cp` as UTF-8 into `out`, returning the number of bytes written.
///
/// ```rust
/// let mut out: Vec<u8> = Vec::new();
/// assert_eq!(utfcore::append(0x20AC, &mut out), 3);
/// assert_eq!(out, [0xE2, 0x82, 0xAC]);
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn append<S: Sink<u8> + ?Sized>(cp: u32, out: &mut S) -> usize {
    if cp < 0x80 {
        out.put(cp as u8);
        1
    } else if cp < 0x800 {
        out.put(((cp >> 6) | 0xC0) as u8);
        out.put(((cp & 0x3F) | 0x80) as u8);
        2
    } else if cp < 0x1_0000 {
        out.put(((cp >> 12) | 0xE0) as u8);
        out.put((((cp >> 6) & 0x3F) | 0x80) as u8);
        out.put(((cp & 0x3F) | 0x80) as u8);
        3
    } else {
        out.put(((cp >> 18) | 0xF0) as u8);
        out.put((((cp >> 12) & 0x3F) | 0x80) as u8);
        out.put((((cp >> 6) & 0x3F) | 0x80) as u8);
        out.put(((cp & 0x3F) | 0x80) as u8);
        4
    }
}

/// Decodes the code point whose lead byte is under `pos` and leaves `pos` on
/// the unit after its last continuation byte.
///
/// `pos` must sit on a lead byte of a complete sequence. Otherwise the value
/// is unspecified; `pos` still moves forward by at most four units and never
/// past the end of its sequence.
///
/// ```rust
/// use utfcore::SlicePos;
///
/// let bytes = [0xE2, 0x82, 0xAC, b'!'];
/// let mut pos = SlicePos::new(&bytes[..]);
/// assert_eq!(utfcore::next(&mut pos), 0x20AC);
/// assert_eq!(pos.offset(), 3);
/// ```
pub fn next<P: Position<Unit = u8>>(pos: &mut P) -> u32 {
    let lead = pos.get();
    let mut cp = u32::from(lead);
    match sequence_length(lead) {
        2 => {
            pos.step_forward();
            cp = ((cp << 6) & 0x7FF) + (u32::from(pos.get()) & 0x3F);
        }
        3 => {
            pos.step_forward();
            cp = ((cp << 12) & 0xFFFF) + ((u32::from(pos.get()) << 6) & 0xFFF);
            pos.step_forward();
            cp += u32::from(pos.get()) & 0x3F;
        }
        4 => {
            pos.step_forward();
            cp = ((cp << 18) & 0x1F_FFFF) + ((u32::from(pos.get()) << 12) & 0x3_FFFF);
            pos.step_forward();
            cp += (u32::from(pos.get()) << 6) & 0xFFF;
            pos.step_forward();
            cp += u32::from(pos.get()) & 0x3F;
        }
        _ => {}
    }
    pos.step_forward();
    cp
}

/// Decodes the code point under `pos` without moving it.
pub fn peek_next<P: Position<Unit = u8>>(pos: &P) -> u32 {
    next(&mut pos.clone())
}

/// Moves `pos` back to the lead byte of the code point before it.
///
/// Steps back one unit, then keeps stepping while the unit under the cursor
/// is a continuation byte. Stops at the start of the sequence regardless.
pub fn retreat<P: Position<Unit = u8>>(pos: &mut P) {
    while pos.step_back() && is_trail(pos.get()) {}
}

/// Moves `pos` to the start of the previous code point and returns it.
///
/// Unlike [`next`], the cursor ends up *on* the decoded code point, not
/// after it.
///
/// ```rust
/// use utfcore::SlicePos;
///
/// let text = "A€";
/// let mut pos = SlicePos::end(text.as_bytes());
/// assert_eq!(utfcore::prior(&mut pos), 0x20AC);
/// assert_eq!(pos.offset(), 1);
/// ```
pub fn prior<P: Position<Unit = u8>>(pos: &mut P) -> u32 {
    retreat(pos);
    peek_next(pos)
}

/// Moves `pos` past the sequence under it without decoding.
#[inline]
pub(crate) fn skip<P: Position<Unit = u8>>(pos: &mut P) {
    for _ in 0..sequence_length(pos.get()) {
        pos.step_forward();
    }
}
