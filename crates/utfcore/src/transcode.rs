//! Whole-sequence transcoders.
//!
//! Each one is a single consuming loop over [`append`] / [`next`]. The only
//! state carried between iterations is the input cursor and the sink. All
//! of them return the number of units appended to the sink.

use crate::{
    codec::{append, next},
    position::Position,
    sink::Sink,
    unit::{combine_surrogates, is_lead_surrogate, split_surrogates},
};

/// UTF-16 to UTF-8.
///
/// A lead surrogate takes the following unit as its trail, unchecked. If the
/// input ends right after a lead surrogate, a zero trail is assumed and the
/// resulting bytes are unspecified.
///
/// ```rust
/// let mut out: Vec<u8> = Vec::new();
/// assert_eq!(utfcore::utf16_to_8([0xD83D, 0xDE00], &mut out), 4);
/// assert_eq!(out, [0xF0, 0x9F, 0x98, 0x80]);
/// ```
pub fn utf16_to_8<I, S>(units: I, out: &mut S) -> usize
where
    I: IntoIterator<Item = u16>,
    S: Sink<u8> + ?Sized,
{
    let mut units = units.into_iter();
    let mut written = 0;
    while let Some(unit) = units.next() {
        let mut cp = u32::from(unit);
        if is_lead_surrogate(cp) {
            let trail = units.next().unwrap_or_default();
            cp = combine_surrogates(cp, u32::from(trail));
        }
        written += append(cp, out);
    }
    written
}

/// UTF-8 in `[start, end)` to UTF-16.
///
/// Code points above `0xFFFF` become a surrogate pair. Everything else is
/// written as a single unit, including values that fall in the surrogate
/// range.
///
/// ```rust
/// use utfcore::SlicePos;
///
/// let text = "a😀".as_bytes();
/// let mut out: Vec<u16> = Vec::new();
/// utfcore::utf8_to_16(SlicePos::new(text), &SlicePos::end(text), &mut out);
/// assert_eq!(out, [0x61, 0xD83D, 0xDE00]);
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn utf8_to_16<P, S>(mut start: P, end: &P, out: &mut S) -> usize
where
    P: Position<Unit = u8>,
    S: Sink<u16> + ?Sized,
{
    let mut written = 0;
    while start < *end {
        let cp = next(&mut start);
        if cp > 0xFFFF {
            let (lead, trail) = split_surrogates(cp);
            out.put(lead as u16);
            out.put(trail as u16);
            written += 2;
        } else {
            out.put(cp as u16);
            written += 1;
        }
    }
    written
}

/// UTF-32 to UTF-8.
pub fn utf32_to_8<I, S>(units: I, out: &mut S) -> usize
where
    I: IntoIterator<Item = u32>,
    S: Sink<u8> + ?Sized,
{
    units.into_iter().map(|cp| append(cp, out)).sum()
}

/// UTF-8 in `[start, end)` to UTF-32.
pub fn utf8_to_32<P, S>(mut start: P, end: &P, out: &mut S) -> usize
where
    P: Position<Unit = u8>,
    S: Sink<u32> + ?Sized,
{
    let mut written = 0;
    while start < *end {
        out.put(next(&mut start));
        written += 1;
    }
    written
}
