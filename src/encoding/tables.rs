/*!
Constants and lookup tables shared by the codecs.
*/

/// U+FFFD, substituted for anything that cannot be decoded or encoded.
pub const REPLACEMENT_CHAR: u32 = 0xFFFD;

/// U+FEFF, the byte-order mark.
pub const BOM_CHAR: u32 = 0xFEFF;

pub const MAX_BMP: u32 = 0xFFFF;
pub const MAX_LEGAL_UTF32: u32 = 0x10_FFFF;

pub const SUR_HIGH_START: u32 = 0xD800;
pub const SUR_HIGH_END: u32 = 0xDBFF;
pub const SUR_LOW_START: u32 = 0xDC00;
pub const SUR_LOW_END: u32 = 0xDFFF;

pub const HALF_SHIFT: u32 = 10;
pub const HALF_BASE: u32 = 0x1_0000;
pub const HALF_MASK: u32 = 0x3FF;

/**
Number of trailing bytes expected after each possible lead byte.

Lead bytes `0xF8..=0xFF` map to 4 and 5.  No legal sequence is that long any more; the entries are kept so that such leads consume the right number of bytes before being rejected.
*/
pub static TRAILING_BYTES_FOR_UTF8: [u8; 256] = [
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0, 0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0, 0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0, 0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0, 0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0, 0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0, 0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1, 1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,
    2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2, 3,3,3,3,3,3,3,3,4,4,4,4,5,5,5,5,
];

/**
Subtracted from the shifted-and-summed bytes of a sequence, indexed by trailing byte count.  Cancels the marker bits of the lead and continuation bytes in one step.
*/
pub static OFFSETS_FROM_UTF8: [u32; 6] = [
    0x0000_0000, 0x0000_3080, 0x000E_2080,
    0x03C8_2080, 0xFA08_2080, 0x8208_2080,
];

/**
OR-ed into the lead byte, indexed by total sequence length.
*/
pub static FIRST_BYTE_MARK: [u8; 7] = [0x00, 0x00, 0xC0, 0xE0, 0xF0, 0xF8, 0xFC];

#[inline]
pub fn is_surrogate(ch: u32) -> bool {
    (SUR_HIGH_START..=SUR_LOW_END).contains(&ch)
}

#[inline]
pub fn is_high_surrogate(ch: u32) -> bool {
    (SUR_HIGH_START..=SUR_HIGH_END).contains(&ch)
}

#[inline]
pub fn is_low_surrogate(ch: u32) -> bool {
    (SUR_LOW_START..=SUR_LOW_END).contains(&ch)
}
