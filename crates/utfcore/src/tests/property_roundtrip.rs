use alloc::{string::String, vec::Vec};

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use super::{
    arbitrary::{Scalar, Supplementary, Text},
    quickcheck_tests,
};
use crate::{
    SlicePos, SliceSink, append, next, utf8_to_16, utf8_to_32, utf16_to_8, utf32_to_8,
    unit::{CODE_POINT_MAX, is_surrogate},
};

fn encode(cp: u32) -> ([u8; 4], usize) {
    let mut buf = [0_u8; 4];
    let width = append(cp, &mut SliceSink::new(&mut buf));
    (buf, width)
}

/// Every scalar value encodes exactly like `char::encode_utf8` and decodes
/// back to itself.
#[test]
#[cfg_attr(miri, ignore = "exhaustive over the code space")]
fn every_scalar_round_trips() {
    for cp in (0..=CODE_POINT_MAX).filter(|cp| !is_surrogate(*cp)) {
        let Some(ch) = char::from_u32(cp) else {
            unreachable!("{cp:#X} is a scalar value");
        };
        let (buf, width) = encode(cp);
        let mut reference = [0_u8; 4];
        assert_eq!(
            &buf[..width],
            ch.encode_utf8(&mut reference).as_bytes(),
            "encoding {cp:#X}"
        );

        let mut pos = SlicePos::new(&buf[..width]);
        assert_eq!(next(&mut pos), cp, "decoding {cp:#X}");
        assert!(pos.is_end(), "{cp:#X} left bytes behind");
    }
}

#[quickcheck]
fn width_follows_range(cp: Scalar) -> bool {
    let (_, width) = encode(cp.0);
    let expected = match cp.0 {
        0..0x80 => 1,
        0x80..0x800 => 2,
        0x800..0x1_0000 => 3,
        _ => 4,
    };
    width == expected
}

/// UTF-32 → UTF-8 → UTF-16 → UTF-8 → UTF-32 gives back the supplementary
/// code point, going through a real surrogate pair.
#[test]
fn supplementary_round_trips_through_surrogates() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(cp: Supplementary) -> bool {
        let mut utf8: Vec<u8> = Vec::new();
        utf32_to_8([cp.0], &mut utf8);

        let mut utf16: Vec<u16> = Vec::new();
        utf8_to_16(SlicePos::new(&utf8[..]), &SlicePos::end(&utf8[..]), &mut utf16);
        if utf16.len() != 2 {
            return false;
        }

        let mut back: Vec<u8> = Vec::new();
        utf16_to_8(utf16.iter().copied(), &mut back);
        if back != utf8 {
            return false;
        }

        let mut utf32: Vec<u32> = Vec::new();
        utf8_to_32(SlicePos::new(&back[..]), &SlicePos::end(&back[..]), &mut utf32);
        utf32 == [cp.0]
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Supplementary) -> bool);
}

/// All four transcoders agree with the standard library on well-formed
/// text.
#[test]
fn transcoders_match_std() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: Text) -> bool {
        let utf8 = text.to_utf8();
        let expected: String = text
            .0
            .iter()
            .filter_map(|cp| char::from_u32(*cp))
            .collect();
        if utf8 != expected.as_bytes() {
            return false;
        }

        let mut utf16: Vec<u16> = Vec::new();
        utf8_to_16(SlicePos::new(&utf8[..]), &SlicePos::end(&utf8[..]), &mut utf16);
        if !utf16.iter().copied().eq(expected.encode_utf16()) {
            return false;
        }

        let mut utf8_again: Vec<u8> = Vec::new();
        utf16_to_8(utf16, &mut utf8_again);

        let mut utf32: Vec<u32> = Vec::new();
        utf8_to_32(SlicePos::new(&utf8_again[..]), &SlicePos::end(&utf8_again[..]), &mut utf32);
        utf8_again == utf8 && utf32 == text.0
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Text) -> bool);
}
