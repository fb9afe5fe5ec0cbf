/*!
Validation of UTF-8 sequences and scalar values.
*/
use super::tables::{is_surrogate, MAX_LEGAL_UTF32, REPLACEMENT_CHAR};

/**
Returns `true` if `seq` is exactly one well-formed UTF-8 encoded scalar value.

The length of `seq` is the claimed sequence length; anything outside `1..=4` is illegal.  This follows the well-formed byte sequence table of the Unicode standard: continuation bytes lie in `0x80..=0xBF`, and the second byte is further restricted after `E0`, `ED`, `F0` and `F4` to rule out overlong forms, encoded surrogates and values above U+10FFFF.
*/
pub fn is_legal_utf8(seq: &[u8]) -> bool {
    let (&lead, rest) = match seq.split_first() {
        Some(split) => split,
        None => return false,
    };

    if seq.len() > 4 {
        return false;
    }

    // Third and fourth bytes.
    if rest.iter().skip(1).any(|&b| !(0x80..=0xBF).contains(&b)) {
        return false;
    }

    if let Some(&second) = rest.first() {
        let legal = match lead {
            0xE0 => (0xA0..=0xBF).contains(&second),
            0xED => (0x80..=0x9F).contains(&second),
            0xF0 => (0x90..=0xBF).contains(&second),
            0xF4 => (0x80..=0x8F).contains(&second),
            _ => (0x80..=0xBF).contains(&second),
        };
        if !legal {
            return false;
        }
    }

    if (0x80..0xC2).contains(&lead) || lead > 0xF4 {
        return false;
    }

    // A lead byte only ever starts a sequence of its own length.
    let expected = match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        _ => 4,
    };
    expected == seq.len()
}

/**
Returns `ch` if it is a Unicode scalar value, and `REPLACEMENT_CHAR` otherwise.
*/
#[inline]
pub fn validate_scalar(ch: u32) -> u32 {
    if ch > MAX_LEGAL_UTF32 || is_surrogate(ch) {
        REPLACEMENT_CHAR
    } else {
        ch
    }
}

/**
Returns `true` if `ch` is a Unicode scalar value.
*/
#[inline]
pub fn is_scalar(ch: u32) -> bool {
    ch <= MAX_LEGAL_UTF32 && !is_surrogate(ch)
}
