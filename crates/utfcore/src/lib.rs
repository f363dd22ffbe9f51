//! Unchecked UTF-8 / UTF-16 / UTF-32 transcoding.
//!
//! The crate converts code points between the three Unicode encoding forms
//! and walks UTF-8 one code point at a time in either direction. It is the
//! fast inner layer under a validating API: nothing here checks that its
//! input is well-formed. Malformed input produces unspecified code points or
//! bytes, but every operation stays inside the bounds of the cursor and sink
//! it was handed and always terminates.
//!
//! Input is read through a [`Position`] (a bidirectional cursor such as
//! [`SlicePos`]), output is written to a [`Sink`] (`Vec`, `BString`,
//! [`SliceSink`]).
//!
//! ```rust
//! use utfcore::{SlicePos, Utf8Iter};
//!
//! let text = "A€😀".as_bytes();
//! let start = SlicePos::new(text);
//! assert_eq!(utfcore::distance(&start, &SlicePos::end(text)), 3);
//!
//! let mut utf16: Vec<u16> = Vec::new();
//! utfcore::utf8_to_16(start, &SlicePos::end(text), &mut utf16);
//! assert_eq!(utf16, [0x41, 0x20AC, 0xD83D, 0xDE00]);
//!
//! let mut it = Utf8Iter::new(start);
//! it.forward().forward();
//! assert_eq!(it.get(), 0x1F600);
//! ```

#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod codec;
mod iter;
mod position;
mod sink;
mod transcode;
pub mod unit;

#[cfg(all(test, feature = "alloc"))]
mod tests;

pub use codec::{append, next, peek_next, prior, retreat};
pub use iter::{CodePoints, Utf8Iter, advance, distance};
pub use position::{Position, SlicePos};
pub use sink::{Sink, SliceSink};
pub use transcode::{utf8_to_16, utf8_to_32, utf16_to_8, utf32_to_8};
pub use unit::CodeUnit;
