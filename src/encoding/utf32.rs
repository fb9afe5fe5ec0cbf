/*!
UTF-32 codec.
*/
use super::validate::{is_scalar, validate_scalar};
use super::Unit;

/**
Decodes the unit at the start of `units`.

Raw 32-bit buffers may contain anything, so the value is validated: surrogates and values above U+10FFFF decode to `REPLACEMENT_CHAR`.
*/
#[inline]
pub fn decode_next<U: Unit>(units: &[U]) -> Option<(u32, usize)> {
    match units.first() {
        Some(u) if !u.is_zero() => Some((validate_scalar(u.to_bits()), 1)),
        _ => None,
    }
}

#[inline]
pub fn char_width(ch: u32) -> usize {
    if is_scalar(ch) { 1 } else { 0 }
}

#[inline]
pub fn encode_char<U: Unit>(dest: &mut [U], ch: u32) -> usize {
    dest[0] = U::from_bits(validate_scalar(ch));
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::REPLACEMENT_CHAR;

    #[test]
    fn decode_validates() {
        assert_eq!(decode_next(&[0x1_F600u32, 0]), Some((0x1_F600, 1)));
        assert_eq!(decode_next(&[0xD800u32, 0]), Some((REPLACEMENT_CHAR, 1)));
        assert_eq!(decode_next(&[0x11_0000u32]), Some((REPLACEMENT_CHAR, 1)));
        assert_eq!(decode_next(&[0u32, 0x41]), None);
        assert_eq!(decode_next::<u32>(&[]), None);
    }

    #[test]
    fn decode_signed_wchar() {
        assert_eq!(decode_next(&[-1i32]), Some((REPLACEMENT_CHAR, 1)));
        assert_eq!(decode_next(&[0xE7i32]), Some((0xE7, 1)));
    }

    #[test]
    fn encode_substitutes() {
        let mut buf = [0u32; 1];
        assert_eq!(encode_char(&mut buf, 0xDFFF), 1);
        assert_eq!(buf[0], REPLACEMENT_CHAR);
        assert_eq!(char_width(0xDFFF), 0);
        assert_eq!(char_width(0x10_FFFF), 1);
    }
}
