/*!
C wide character codec.

The size of `wchar_t` is fixed when the crate is compiled, so `WCHAR_SIZE` is a constant and each `match` below folds to a single arm.
*/
use std::mem;
use libc::wchar_t;
use super::{utf16, utf32, utf8};

/// Size of `wchar_t`, in bytes.
pub const WCHAR_SIZE: usize = mem::size_of::<wchar_t>();

pub const MAX_CHAR_UNITS: usize = match WCHAR_SIZE {
    1 => 4,
    2 => 2,
    _ => 1,
};

#[inline]
pub fn decode_next(units: &[wchar_t]) -> Option<(u32, usize)> {
    match WCHAR_SIZE {
        1 => utf8::decode_next(units),
        2 => utf16::decode_next(units),
        _ => utf32::decode_next(units),
    }
}

#[inline]
pub fn char_width(ch: u32) -> usize {
    match WCHAR_SIZE {
        1 => utf8::char_width(ch),
        2 => utf16::char_width(ch),
        _ => utf32::char_width(ch),
    }
}

#[inline]
pub fn encode_char(dest: &mut [wchar_t], ch: u32) -> usize {
    match WCHAR_SIZE {
        1 => utf8::encode_char(dest, ch),
        2 => utf16::encode_char(dest, ch),
        _ => utf32::encode_char(dest, ch),
    }
}
