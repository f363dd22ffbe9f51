#![no_main]
//! Well-formed input: every transcoder must agree with the standard library.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utfcore::{SlicePos, distance, utf8_to_16, utf8_to_32, utf16_to_8, utf32_to_8};

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    /// Byte offset (rounded down to a char boundary) to split the text at.
    split: usize,
}

fuzz_target!(|input: Input| {
    let text = input.text.as_str();
    let bytes = text.as_bytes();
    let start = SlicePos::new(bytes);
    let end = SlicePos::end(bytes);

    let mut utf16: Vec<u16> = Vec::new();
    utf8_to_16(start, &end, &mut utf16);
    assert!(utf16.iter().copied().eq(text.encode_utf16()));

    let mut utf8: Vec<u8> = Vec::new();
    utf16_to_8(utf16.iter().copied(), &mut utf8);
    assert_eq!(utf8, bytes);

    let mut utf32: Vec<u32> = Vec::new();
    utf8_to_32(start, &end, &mut utf32);
    assert!(utf32.iter().copied().eq(text.chars().map(u32::from)));

    utf8.clear();
    utf32_to_8(utf32.iter().copied(), &mut utf8);
    assert_eq!(utf8, bytes);

    let mut split = input.split % (bytes.len() + 1);
    while !text.is_char_boundary(split) {
        split -= 1;
    }
    let mid = SlicePos::at(bytes, split);
    assert_eq!(distance(&start, &mid), text[..split].chars().count());
    assert_eq!(distance(&mid, &end), text[split..].chars().count());
    assert!(mid.code_points().rev().eq(text[split..].chars().rev().map(u32::from)));
});
