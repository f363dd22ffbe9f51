#![no_main]
//! Arbitrary bytes and units: nothing may panic or spin.

use libfuzzer_sys::fuzz_target;
use utfcore::{CodePoints, SlicePos, Utf8Iter, distance, prior, utf8_to_16, utf16_to_8};

fuzz_target!(|data: &[u8]| {
    let start = SlicePos::new(data);
    let end = SlicePos::end(data);

    assert!(CodePoints::new(start, end).count() <= data.len());
    assert!(CodePoints::new(start, end).rev().count() <= data.len());
    assert!(distance(&start, &end) <= data.len());

    let mut it = Utf8Iter::new(start);
    while !it.base().is_end() {
        let _ = it.get();
        it.forward();
    }

    let mut pos = end;
    while pos.offset() > 0 {
        let _ = prior(&mut pos);
    }

    let mut utf16: Vec<u16> = Vec::new();
    utf8_to_16(start, &end, &mut utf16);

    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let mut utf8: Vec<u8> = Vec::new();
    let n = utf16_to_8(units.iter().copied(), &mut utf8);
    assert_eq!(n, utf8.len());
});
