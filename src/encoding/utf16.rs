/*!
UTF-16 codec.

Generic over the unit type so that a two-byte `wchar_t` shares this code; only the low sixteen bits of each unit are used.
*/
use super::tables::{
    is_high_surrogate, is_low_surrogate, is_surrogate, HALF_BASE, HALF_MASK, HALF_SHIFT,
    MAX_BMP, MAX_LEGAL_UTF32, REPLACEMENT_CHAR, SUR_HIGH_START, SUR_LOW_START,
};
use super::Unit;

/**
Decodes the scalar value at the start of `units`.

A high surrogate followed by a low surrogate decodes to the combined value.  A high surrogate followed by the terminator (or the end of `units`) is a truncated sequence and yields `None` without consuming anything.  A high surrogate followed by anything else, and a low surrogate on its own, decode to `REPLACEMENT_CHAR` and consume one unit; the unit after it is left for the next call.
*/
pub fn decode_next<U: Unit>(units: &[U]) -> Option<(u32, usize)> {
    let cu0 = match units.first() {
        Some(u) if !u.is_zero() => u.to_bits() & 0xFFFF,
        _ => return None,
    };

    if is_low_surrogate(cu0) {
        return Some((REPLACEMENT_CHAR, 1));
    }

    if !is_high_surrogate(cu0) {
        return Some((cu0, 1));
    }

    let cu1 = match units.get(1) {
        Some(u) if !u.is_zero() => u.to_bits() & 0xFFFF,
        _ => return None,
    };

    if !is_low_surrogate(cu1) {
        return Some((REPLACEMENT_CHAR, 1));
    }

    let ch = ((cu0 - SUR_HIGH_START) << HALF_SHIFT) + (cu1 - SUR_LOW_START) + HALF_BASE;
    Some((ch, 2))
}

/**
Returns the number of 16-bit units needed to encode `ch`, or `0` for surrogates and values above U+10FFFF.
*/
#[inline]
pub fn char_width(ch: u32) -> usize {
    if is_surrogate(ch) {
        0
    } else if ch <= MAX_BMP {
        1
    } else if ch <= MAX_LEGAL_UTF32 {
        2
    } else {
        0
    }
}

/**
Writes `ch` to the start of `dest`, as a surrogate pair if it lies outside the basic multilingual plane.
*/
pub fn encode_char<U: Unit>(dest: &mut [U], ch: u32) -> usize {
    match char_width(ch) {
        1 => {
            dest[0] = U::from_bits(ch);
            1
        },
        2 => {
            let ch = ch - HALF_BASE;
            dest[0] = U::from_bits((ch >> HALF_SHIFT) + SUR_HIGH_START);
            dest[1] = U::from_bits((ch & HALF_MASK) + SUR_LOW_START);
            2
        },
        _ => {
            dest[0] = U::from_bits(REPLACEMENT_CHAR);
            1
        },
    }
}
