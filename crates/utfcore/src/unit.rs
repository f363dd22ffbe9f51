//! Code-unit inspection primitives.
//!
//! Everything here is a pure function of a single code unit (or of a code
//! point, for the surrogate helpers). The codec and the transcoders are built
//! from these and nothing else.
//!
//! None of the predicates validate their input. [`sequence_length`] in
//! particular has no meaningful answer for a continuation byte or for the
//! `0xF8..=0xFF` range; it reports `1` there so that traversals keep moving.

/// First unit of the lead (high) surrogate range.
pub const LEAD_SURROGATE_MIN: u32 = 0xD800;
/// Last unit of the lead (high) surrogate range.
pub const LEAD_SURROGATE_MAX: u32 = 0xDBFF;
/// First unit of the trail (low) surrogate range.
pub const TRAIL_SURROGATE_MIN: u32 = 0xDC00;
/// Last unit of the trail (low) surrogate range.
pub const TRAIL_SURROGATE_MAX: u32 = 0xDFFF;

/// Added to `cp >> 10` to produce the lead surrogate of a supplementary code
/// point.
pub const LEAD_OFFSET: u32 = LEAD_SURROGATE_MIN - (0x1_0000 >> 10);

/// Added to `(lead << 10) + trail` to recover the supplementary code point.
///
/// The true value is negative (`0x10000 - (0xD800 << 10) - 0xDC00`); it is
/// stored wrapped, so it must only be combined with wrapping arithmetic.
pub const SURROGATE_OFFSET: u32 = 0x1_0000_u32
    .wrapping_sub(LEAD_SURROGATE_MIN << 10)
    .wrapping_sub(TRAIL_SURROGATE_MIN);

/// Largest code point in the Unicode code space.
pub const CODE_POINT_MAX: u32 = 0x10_FFFF;

/// A fixed-width storage atom of one of the three encoding forms.
///
/// Implemented for `u8` (UTF-8), `u16` (UTF-16) and `u32` (UTF-32).
pub trait CodeUnit: Copy + Default + Eq + Ord + core::fmt::Debug {
    /// Width of the unit in bits.
    const BITS: u32;

    /// Zero-extends the unit to a `u32`.
    fn widen(self) -> u32;

    /// Keeps the low [`Self::BITS`] bits of `value`.
    fn truncate(value: u32) -> Self;
}

impl CodeUnit for u8 {
    const BITS: u32 = u8::BITS;

    #[inline]
    fn widen(self) -> u32 {
        u32::from(self)
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn truncate(value: u32) -> Self {
        value as u8
    }
}

impl CodeUnit for u16 {
    const BITS: u32 = u16::BITS;

    #[inline]
    fn widen(self) -> u32 {
        u32::from(self)
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn truncate(value: u32) -> Self {
        value as u16
    }
}

impl CodeUnit for u32 {
    const BITS: u32 = u32::BITS;

    #[inline]
    fn widen(self) -> u32 {
        self
    }

    #[inline]
    fn truncate(value: u32) -> Self {
        value
    }
}

/// Low 8 bits of `x`.
#[inline]
#[must_use]
pub const fn mask8(x: u32) -> u32 {
    x & 0xFF
}

/// Low 16 bits of `x`.
#[inline]
#[must_use]
pub const fn mask16(x: u32) -> u32 {
    x & 0xFFFF
}

/// Whether `b` is a UTF-8 continuation byte (`10xxxxxx`).
#[inline]
#[must_use]
pub const fn is_trail(b: u8) -> bool {
    b & 0xC0 == 0x80
}

/// Number of bytes in the UTF-8 sequence introduced by `lead`.
///
/// Malformed leads (continuation bytes, `0xF8..=0xFF`) report `1`.
#[inline]
#[must_use]
pub const fn sequence_length(lead: u8) -> usize {
    if lead < 0x80 {
        1
    } else if lead >> 5 == 0b110 {
        2
    } else if lead >> 4 == 0b1110 {
        3
    } else if lead >> 3 == 0b1_1110 {
        4
    } else {
        1
    }
}

/// Whether `u` lies in `0xD800..=0xDBFF`.
#[inline]
#[must_use]
pub const fn is_lead_surrogate(u: u32) -> bool {
    u >= LEAD_SURROGATE_MIN && u <= LEAD_SURROGATE_MAX
}

/// Whether `u` lies in `0xDC00..=0xDFFF`.
#[inline]
#[must_use]
pub const fn is_trail_surrogate(u: u32) -> bool {
    u >= TRAIL_SURROGATE_MIN && u <= TRAIL_SURROGATE_MAX
}

/// Whether `u` lies anywhere in `0xD800..=0xDFFF`.
#[inline]
#[must_use]
pub const fn is_surrogate(u: u32) -> bool {
    u >= LEAD_SURROGATE_MIN && u <= TRAIL_SURROGATE_MAX
}

/// Combines a surrogate pair into a supplementary code point.
///
/// Equivalent to `((lead - 0xD800) << 10) + (trail - 0xDC00) + 0x10000` for
/// a real pair; anything else wraps instead of overflowing.
#[inline]
#[must_use]
pub const fn combine_surrogates(lead: u32, trail: u32) -> u32 {
    (lead << 10).wrapping_add(trail).wrapping_add(SURROGATE_OFFSET)
}

/// Splits a supplementary code point into its `(lead, trail)` surrogates.
#[inline]
#[must_use]
pub const fn split_surrogates(cp: u32) -> (u32, u32) {
    (
        (cp >> 10).wrapping_add(LEAD_OFFSET),
        (cp & 0x3FF) + TRAIL_SURROGATE_MIN,
    )
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0x00, 1)]
    #[case(b'A', 1)]
    #[case(0x7F, 1)]
    #[case(0xC2, 2)]
    #[case(0xDF, 2)]
    #[case(0xE2, 3)]
    #[case(0xEF, 3)]
    #[case(0xF0, 4)]
    #[case(0xF4, 4)]
    #[case(0xF7, 4)]
    fn sequence_length_from_lead(#[case] lead: u8, #[case] expected: usize) {
        assert_eq!(sequence_length(lead), expected);
    }

    #[rstest]
    #[case(0x80)]
    #[case(0xBF)]
    #[case(0xF8)]
    #[case(0xFF)]
    fn malformed_leads_step_one(#[case] lead: u8) {
        assert_eq!(sequence_length(lead), 1);
    }

    #[test]
    fn trail_bytes() {
        assert!(is_trail(0x80));
        assert!(is_trail(0xBF));
        assert!(!is_trail(0x7F));
        assert!(!is_trail(0xC0));
        assert!(!is_trail(0xE2));
    }

    #[test]
    fn masks_strip_high_bits() {
        assert_eq!(mask8(0xFFFF_FFE2), 0xE2);
        assert_eq!(mask16(0xFFFF_D83D), 0xD83D);
        assert_eq!(u8::truncate(0x1E2), 0xE2);
        assert_eq!(u16::truncate(0x1_D83D), 0xD83D);
    }

    #[test]
    fn surrogate_ranges() {
        assert!(!is_lead_surrogate(0xD7FF));
        assert!(is_lead_surrogate(0xD800));
        assert!(is_lead_surrogate(0xDBFF));
        assert!(!is_lead_surrogate(0xDC00));
        assert!(is_trail_surrogate(0xDC00));
        assert!(is_trail_surrogate(0xDFFF));
        assert!(!is_trail_surrogate(0xE000));
        assert!(is_surrogate(0xDABC));
        assert!(!is_surrogate(0xFFFD));
    }

    #[test]
    fn offsets_match_canonical_formula() {
        assert_eq!(LEAD_OFFSET, 0xD7C0);
        assert_eq!(SURROGATE_OFFSET as i32, 0x1_0000 - (0xD800 << 10) - 0xDC00);
        for cp in [0x1_0000, 0x1_F600, 0x10_FFFF] {
            let (lead, trail) = split_surrogates(cp);
            assert!(is_lead_surrogate(lead));
            assert!(is_trail_surrogate(trail));
            assert_eq!(combine_surrogates(lead, trail), cp);
            assert_eq!(
                ((lead - 0xD800) << 10) + (trail - 0xDC00) + 0x1_0000,
                cp,
                "canonical formula disagrees for {cp:#X}"
            );
        }
        assert_eq!(split_surrogates(0x1_F600), (0xD83D, 0xDE00));
    }
}
