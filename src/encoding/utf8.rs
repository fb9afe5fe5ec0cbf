/*!
UTF-8 codec.

The functions are generic over the unit type so that any 8-bit unit (`u8`, `c_char`, a one-byte `wchar_t`) can be decoded without reinterpreting memory; only the low eight bits of each unit are used.
*/
use super::tables::{
    is_surrogate, FIRST_BYTE_MARK, OFFSETS_FROM_UTF8, REPLACEMENT_CHAR, TRAILING_BYTES_FOR_UTF8,
};
use super::validate::is_legal_utf8;
use super::Unit;

/**
Decodes the scalar value at the start of `units`.

An illegal sequence decodes to `REPLACEMENT_CHAR` and consumes exactly one unit, so that decoding resumes at the following byte.  A sequence cut short by a terminator or by the end of `units` yields `None`.
*/
pub fn decode_next<U: Unit>(units: &[U]) -> Option<(u32, usize)> {
    let lead = match units.first() {
        Some(u) if !u.is_zero() => u.to_bits() as u8,
        _ => return None,
    };
    let extra = TRAILING_BYTES_FOR_UTF8[lead as usize] as usize;

    let mut seq = [0u8; 6];
    seq[0] = lead;
    for i in 1..=extra {
        match units.get(i) {
            Some(u) if !u.is_zero() => seq[i] = u.to_bits() as u8,
            _ => return None,
        }
    }
    let seq = &seq[..=extra];

    if !is_legal_utf8(seq) {
        return Some((REPLACEMENT_CHAR, 1));
    }

    let ch = seq
        .iter()
        .fold(0u32, |ch, &b| (ch << 6).wrapping_add(b as u32))
        .wrapping_sub(OFFSETS_FROM_UTF8[extra]);

    Some((ch, extra + 1))
}

/**
Returns the number of bytes needed to encode `ch`, or `0` for surrogates and values above U+10FFFF.
*/
#[inline]
pub fn char_width(ch: u32) -> usize {
    match ch {
        _ if is_surrogate(ch) => 0,
        0x0000..=0x007F => 1,
        0x0080..=0x07FF => 2,
        0x0800..=0xFFFF => 3,
        0x1_0000..=0x10_FFFF => 4,
        _ => 0,
    }
}

/**
Writes `ch` to the start of `dest`, substituting `REPLACEMENT_CHAR` if it cannot be encoded.
*/
pub fn encode_char<U: Unit>(dest: &mut [U], ch: u32) -> usize {
    let (mut ch, width) = match char_width(ch) {
        0 => (REPLACEMENT_CHAR, char_width(REPLACEMENT_CHAR)),
        width => (ch, width),
    };

    // Continuation bytes, last first.
    for slot in dest[1..width].iter_mut().rev() {
        *slot = U::from_bits((ch & 0x3F) | 0x80);
        ch >>= 6;
    }
    dest[0] = U::from_bits(ch | FIRST_BYTE_MARK[width] as u32);

    width
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::ascii(b"A\0", Some((0x41, 1)))]
    #[case::two(b"\xC2\xAA\0", Some((0xAA, 2)))]
    #[case::three(b"\xE2\x82\xAC\0", Some((0x20AC, 3)))]
    #[case::four(b"\xF0\x9F\x98\x80\0", Some((0x1_F600, 4)))]
    #[case::terminator(b"\0", None)]
    #[case::empty(b"", None)]
    #[case::overlong_nul(b"\xC0\x80\0", Some((REPLACEMENT_CHAR, 1)))]
    #[case::stray_continuation(b"\x80A\0", Some((REPLACEMENT_CHAR, 1)))]
    #[case::encoded_surrogate(b"\xED\xA0\x80\0", Some((REPLACEMENT_CHAR, 1)))]
    #[case::truncated_by_terminator(b"\xE2\0", None)]
    #[case::truncated_mid(b"\xE2\x82\0", None)]
    #[case::truncated_by_end(b"\xF0\x9F\x98", None)]
    #[case::bad_trailing(b"\xE2\x41\x41\0", Some((REPLACEMENT_CHAR, 1)))]
    fn decode_vectors(#[case] units: &[u8], #[case] expected: Option<(u32, usize)>) {
        assert_eq!(decode_next(units), expected);
    }

    #[test]
    fn decode_signed_units() {
        let units: [i8; 3] = [0xC3u8 as i8, 0xA7u8 as i8, 0];
        assert_eq!(decode_next(&units), Some((0xE7, 2)));
    }

    #[rstest]
    #[case(0x41, &[0x41])]
    #[case(0xAA, &[0xC2, 0xAA])]
    #[case(0x20AC, &[0xE2, 0x82, 0xAC])]
    #[case(0x1_F600, &[0xF0, 0x9F, 0x98, 0x80])]
    #[case(0x10_FFFF, &[0xF4, 0x8F, 0xBF, 0xBF])]
    #[case(0xD800, &[0xEF, 0xBF, 0xBD])]
    #[case(0x11_0000, &[0xEF, 0xBF, 0xBD])]
    fn encode_vectors(#[case] ch: u32, #[case] expected: &[u8]) {
        let mut buf = [0u8; 4];
        let n = encode_char(&mut buf, ch);
        assert_eq!(&buf[..n], expected);
    }

    #[test]
    fn width_boundaries() {
        assert_eq!(char_width(0x7F), 1);
        assert_eq!(char_width(0x80), 2);
        assert_eq!(char_width(0x7FF), 2);
        assert_eq!(char_width(0x800), 3);
        assert_eq!(char_width(0xFFFF), 3);
        assert_eq!(char_width(0x1_0000), 4);
        assert_eq!(char_width(0x10_FFFF), 4);
        assert_eq!(char_width(0x11_0000), 0);
        assert_eq!(char_width(0xDC00), 0);
    }

    #[test]
    #[should_panic]
    fn encode_into_short_buffer_panics() {
        let mut buf = [0u8; 2];
        encode_char(&mut buf, 0x20AC);
    }
}
