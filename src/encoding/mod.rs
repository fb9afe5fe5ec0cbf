/*!
Encoding types and traits.

Each encoding is a marker type (never instantiated) which names the storage unit it packs code points into, and the three primitive operations every other part of the crate is built on: decoding the next scalar value, computing how many units a scalar value needs, and writing those units.
*/
use std::fmt::Debug;
use libc::wchar_t;

pub mod conv;
pub mod tables;
pub mod utf16;
pub mod utf32;
pub mod utf8;
pub mod validate;
pub mod wide;

pub use self::tables::REPLACEMENT_CHAR;

macro_rules! naive_unit_impl {
    ($ty_name:ident => $unsigned:ident) => {
        impl Unit for $ty_name {
            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn is_zero(&self) -> bool {
                *self == 0
            }

            #[inline]
            fn to_bits(self) -> u32 {
                self as $unsigned as u32
            }

            #[inline]
            fn from_bits(bits: u32) -> Self {
                bits as $unsigned as $ty_name
            }
        }
    };
}

/**
A fixed-width storage unit.

Units are plain integers; signed types are accepted so that `c_char` and `wchar_t` can be used directly on platforms where they are signed.  The raw bits are always interpreted as unsigned.
*/
pub trait Unit: Copy + Eq + Debug {
    /**
    The terminating unit.
    */
    fn zero() -> Self;

    fn is_zero(&self) -> bool;

    /**
    Returns the unit's bits, zero-extended.
    */
    fn to_bits(self) -> u32;

    /**
    Builds a unit from the low bits of `bits`; higher bits are discarded.
    */
    fn from_bits(bits: u32) -> Self;
}

naive_unit_impl! { u8 => u8 }
naive_unit_impl! { u16 => u16 }
naive_unit_impl! { u32 => u32 }
naive_unit_impl! { i8 => u8 }
naive_unit_impl! { i16 => u16 }
naive_unit_impl! { i32 => u32 }

/**
Abstracts over the supported Unicode encoding forms.

All operations work on scalar values represented as `u32`.  A scalar value of `0` is never a character; it is the terminator.
*/
pub trait Encoding {
    /**
    The storage unit of this encoding.
    */
    type Unit: Unit;

    /**
    The largest number of units a single scalar value can occupy.
    */
    const MAX_CHAR_UNITS: usize;

    /**
    Returns a string which can be used to identify this encoding in debug output.
    */
    fn debug_prefix() -> &'static str;

    /**
    Decodes the scalar value at the start of `units`.

    Returns the value and the number of units it occupied.  Returns `None` when `units` starts with the terminator, is empty, or ends (or hits a terminator) in the middle of a multi-unit sequence; in that case nothing has been consumed.

    Malformed sequences are never reported as `None`: they decode to `REPLACEMENT_CHAR` and consume at least one unit.
    */
    fn decode_next(units: &[Self::Unit]) -> Option<(u32, usize)>;

    /**
    Returns the number of units needed to represent `ch`, or `0` if `ch` cannot be represented.
    */
    fn char_width(ch: u32) -> usize;

    /**
    Writes `ch` to the start of `dest`, returning the number of units written.

    If `ch` cannot be represented, `REPLACEMENT_CHAR` is written instead.

    # Panics

    Panics if `dest` is shorter than `encoded_width(ch)`.
    */
    fn encode_char(dest: &mut [Self::Unit], ch: u32) -> usize;

    /**
    Returns the number of units `encode_char` writes for `ch`.  Unlike `char_width`, this is never zero.
    */
    #[inline]
    fn encoded_width(ch: u32) -> usize {
        match Self::char_width(ch) {
            0 => Self::char_width(REPLACEMENT_CHAR),
            width => width,
        }
    }
}

/**
UTF-8, stored as bytes.
*/
pub enum Utf8 {}

impl Encoding for Utf8 {
    type Unit = u8;
    const MAX_CHAR_UNITS: usize = 4;

    fn debug_prefix() -> &'static str { "Utf8" }

    #[inline]
    fn decode_next(units: &[u8]) -> Option<(u32, usize)> {
        utf8::decode_next(units)
    }

    #[inline]
    fn char_width(ch: u32) -> usize {
        utf8::char_width(ch)
    }

    #[inline]
    fn encode_char(dest: &mut [u8], ch: u32) -> usize {
        utf8::encode_char(dest, ch)
    }
}

/**
UTF-16, stored as native-endian 16-bit units.
*/
pub enum Utf16 {}

impl Encoding for Utf16 {
    type Unit = u16;
    const MAX_CHAR_UNITS: usize = 2;

    fn debug_prefix() -> &'static str { "Utf16" }

    #[inline]
    fn decode_next(units: &[u16]) -> Option<(u32, usize)> {
        utf16::decode_next(units)
    }

    #[inline]
    fn char_width(ch: u32) -> usize {
        utf16::char_width(ch)
    }

    #[inline]
    fn encode_char(dest: &mut [u16], ch: u32) -> usize {
        utf16::encode_char(dest, ch)
    }
}

/**
UTF-32, stored as native-endian 32-bit units.
*/
pub enum Utf32 {}

impl Encoding for Utf32 {
    type Unit = u32;
    const MAX_CHAR_UNITS: usize = 1;

    fn debug_prefix() -> &'static str { "Utf32" }

    #[inline]
    fn decode_next(units: &[u32]) -> Option<(u32, usize)> {
        utf32::decode_next(units)
    }

    #[inline]
    fn char_width(ch: u32) -> usize {
        utf32::char_width(ch)
    }

    #[inline]
    fn encode_char(dest: &mut [u32], ch: u32) -> usize {
        utf32::encode_char(dest, ch)
    }
}

/**
The C runtime wide character encoding.

The unit is the platform `wchar_t`.  Its size picks the encoding form: UTF-16 where `wchar_t` is two bytes (Windows), UTF-32 where it is four bytes (most everything else).
*/
pub enum Wide {}

impl Encoding for Wide {
    type Unit = wchar_t;
    const MAX_CHAR_UNITS: usize = wide::MAX_CHAR_UNITS;

    fn debug_prefix() -> &'static str { "W" }

    #[inline]
    fn decode_next(units: &[wchar_t]) -> Option<(u32, usize)> {
        wide::decode_next(units)
    }

    #[inline]
    fn char_width(ch: u32) -> usize {
        wide::char_width(ch)
    }

    #[inline]
    fn encode_char(dest: &mut [wchar_t], ch: u32) -> usize {
        wide::encode_char(dest, ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_units_use_unsigned_bits() {
        assert_eq!((-1i8).to_bits(), 0xFF);
        assert_eq!((-1i16).to_bits(), 0xFFFF);
        assert_eq!((-1i32).to_bits(), 0xFFFF_FFFF);
        assert_eq!(i8::from_bits(0xC3), -61);
        assert_eq!(u16::from_bits(0x1_D83D), 0xD83D);
    }

    #[test]
    fn encoded_width_never_zero() {
        for &ch in &[0x41, 0xD800, 0xDFFF, 0x11_0000, 0xFFFF_FFFF] {
            assert!(Utf8::encoded_width(ch) >= 1);
            assert!(Utf16::encoded_width(ch) >= 1);
            assert!(Utf32::encoded_width(ch) >= 1);
            assert!(Wide::encoded_width(ch) >= 1);
        }
        assert_eq!(Utf8::encoded_width(0xD800), 3);
        assert_eq!(Utf16::encoded_width(0x11_0000), 1);
    }
}
