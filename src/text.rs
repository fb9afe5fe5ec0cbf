/*!
String operations built on the character cursor.

Everything here works one scalar value at a time, so any mix of encodings can be compared, searched or concatenated without first converting to a common one.
*/
use std::cmp::Ordering;
use tracing::debug;

use crate::cursor::Cursor;
use crate::encoding::conv::{self, TranscodeError};
use crate::encoding::tables::BOM_CHAR;
use crate::encoding::{Encoding, Unit};
use crate::structure;
use crate::util::EncodeUnitsExt;

/**
Counts the characters (scalar values) in a string.
*/
pub fn char_count<E>(units: &[E::Unit]) -> usize where E: Encoding {
    Cursor::<E>::new(units).count()
}

/**
Returns the character at character index `index`, or `None` if the string is shorter than that.
*/
pub fn char_at<E>(units: &[E::Unit], index: usize) -> Option<u32> where E: Encoding {
    Cursor::<E>::new(units).nth(index)
}

/**
Returns the unit offset of the first occurrence of `ch`.
*/
pub fn find_char<E>(units: &[E::Unit], ch: u32) -> Option<usize> where E: Encoding {
    let mut cur = Cursor::<E>::new(units);
    loop {
        let at = cur.position();
        match cur.next_char() {
            Some(c) if c == ch => return Some(at),
            Some(_) => (),
            None => return None,
        }
    }
}

/**
Returns the unit offset of the first character of `units` which also appears in `set`.

The set may be in a different encoding from the string being searched.
*/
pub fn find_first_of<E, S>(units: &[E::Unit], set: &[S::Unit]) -> Option<usize>
where
    E: Encoding,
    S: Encoding,
{
    let mut cur = Cursor::<E>::new(units);
    loop {
        let at = cur.position();
        let ch = cur.next_char()?;
        if Cursor::<S>::new(set).any(|c| c == ch) {
            return Some(at);
        }
    }
}

/**
Returns the units needed to hold the string once every `old` character is replaced with `new`, terminator included.

Units that do not form `old` are counted as they are, malformed or not.  A `new` of `0` ends the string at the first occurrence.
*/
pub fn replace_size<E>(units: &[E::Unit], old: u32, new: u32) -> usize where E: Encoding {
    let len = structure::length(units);
    let mut cur = Cursor::<E>::new(&units[..len]);
    let mut size = 0;
    loop {
        let at = cur.position();
        match cur.next_char() {
            Some(ch) if ch == old => {
                if new == 0 {
                    return size + 1;
                }
                size += E::encoded_width(new);
            },
            Some(_) => size += cur.position() - at,
            None => return size + (len - at) + 1,
        }
    }
}

/**
Replaces every `old` character of the string in `buf` with `new`, in place.

The rest of the string moves up or down whenever the two characters encode to different widths.  Returns the units used, terminator included.

# Failure

Fails with `BufferTooSmall`, leaving `buf` untouched, if the result would not fit.
*/
pub fn replace<E>(buf: &mut [E::Unit], old: u32, new: u32) -> Result<usize, TranscodeError> where E: Encoding {
    if buf.is_empty() {
        return Err(TranscodeError::ZeroCapacity);
    }

    let needed = replace_size::<E>(buf, old, new);
    if needed > buf.len() {
        debug!(needed, available = buf.len(), "replacement does not fit");
        return Err(TranscodeError::BufferTooSmall { needed, available: buf.len() });
    }

    let len = structure::length(buf);
    let mut out = Vec::with_capacity(needed);
    let mut cur = Cursor::<E>::new(&buf[..len]);
    loop {
        let at = cur.position();
        match cur.next_char() {
            Some(ch) if ch == old => {
                if new == 0 {
                    break;
                }
                out.extend(Some(new).into_iter().encode_units::<E>());
            },
            Some(_) => out.extend_from_slice(&buf[at..cur.position()]),
            None => {
                out.extend_from_slice(&buf[at..len]);
                break;
            },
        }
    }
    out.push(E::Unit::zero());

    buf[..out.len()].copy_from_slice(&out);
    Ok(out.len())
}

/**
Compares two strings by scalar value, regardless of their encodings.

Malformed sequences compare as `REPLACEMENT_CHAR`, exactly as they would decode.
*/
pub fn compare<A, B>(a: &[A::Unit], b: &[B::Unit]) -> Ordering
where
    A: Encoding,
    B: Encoding,
{
    let mut a = Cursor::<A>::new(a);
    let mut b = Cursor::<B>::new(b);
    loop {
        match (a.next_char(), b.next_char()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x != y => return x.cmp(&y),
            _ => (),
        }
    }
}

/**
Returns `true` if both strings hold the same sequence of scalar values.
*/
pub fn equal<A, B>(a: &[A::Unit], b: &[B::Unit]) -> bool
where
    A: Encoding,
    B: Encoding,
{
    compare::<A, B>(a, b) == Ordering::Equal
}

/**
Returns the number of `D` units needed to append `source` to the string in `dest`, including the single terminator.
*/
pub fn append_size<D, S>(dest: &[D::Unit], source: &[S::Unit]) -> usize
where
    D: Encoding,
    S: Encoding,
{
    structure::length(dest) + conv::required_size::<D, S>(source)
}

/**
Appends `source` to the zero-terminated string held in `dest`, transcoding as needed.

The existing terminator is overwritten and a new one written after the appended text.  As with `transcode`, only whole characters are appended if space runs out.  Returns the total units used, terminator included.

# Failure

Fails if `dest` is empty, or holds no terminator within its length.
*/
pub fn append<D, S>(dest: &mut [D::Unit], source: &[S::Unit]) -> Result<usize, TranscodeError>
where
    D: Encoding,
    S: Encoding,
{
    if dest.is_empty() {
        return Err(TranscodeError::ZeroCapacity);
    }

    let len = structure::length(dest);
    if len == dest.len() {
        debug!(len, "append target is not terminated");
        return Err(TranscodeError::BufferTooSmall { needed: len + 1, available: dest.len() });
    }

    Ok(len + conv::transcode::<D, S>(&mut dest[len..], source)?)
}

/**
Returns `true` if the string starts with a byte-order mark.
*/
pub fn has_bom<E>(units: &[E::Unit]) -> bool where E: Encoding {
    Cursor::<E>::new(units).peek_char() == Some(BOM_CHAR)
}

/**
Returns the string with any leading byte-order mark skipped.
*/
pub fn skip_bom<E>(units: &[E::Unit]) -> &[E::Unit] where E: Encoding {
    let mut cur = Cursor::<E>::new(units);
    match cur.peek_char() {
        Some(BOM_CHAR) => {
            cur.next_char();
            cur.remaining()
        },
        _ => units,
    }
}

/**
Removes a leading byte-order mark in place, shifting the rest of the string down.

Returns the number of units removed; `0` if there was no mark.
*/
pub fn remove_bom<E>(buf: &mut [E::Unit]) -> usize where E: Encoding {
    let width = match E::decode_next(buf) {
        Some((BOM_CHAR, width)) => width,
        _ => return 0,
    };

    let len = structure::length(buf);
    buf.copy_within(width..len, 0);
    buf[len - width] = E::Unit::zero();
    width
}

/**
Inserts a byte-order mark in place at the start of the string, shifting it up.  A string that already starts with one is left as it is.

Returns the units used, terminator included.

# Failure

Fails if the buffer holds no terminator, or is too small to hold the mark, the string and a terminator.
*/
pub fn attach_bom<E>(buf: &mut [E::Unit]) -> Result<usize, TranscodeError> where E: Encoding {
    let len = structure::length(buf);
    if len == buf.len() {
        debug!(len, "byte-order mark target is not terminated");
        return Err(TranscodeError::BufferTooSmall { needed: len + 1, available: buf.len() });
    }
    if has_bom::<E>(buf) {
        return Ok(len + 1);
    }

    let width = E::encoded_width(BOM_CHAR);
    let needed = len + width + 1;
    if needed > buf.len() {
        debug!(needed, available = buf.len(), "no room for byte-order mark");
        return Err(TranscodeError::BufferTooSmall { needed, available: buf.len() });
    }

    buf.copy_within(0..len, width);
    E::encode_char(&mut buf[..width], BOM_CHAR);
    buf[len + width] = E::Unit::zero();
    Ok(needed)
}

/**
Encodes a Rust string into a zero-terminated buffer.

An interior NUL in `s` ends up as an interior terminator, truncating the string as seen by every other function in this crate.
*/
pub fn encode_str<E>(s: &str) -> Vec<E::Unit> where E: Encoding {
    s.chars()
        .map(|c| c as u32)
        .encode_units::<E>()
        .chain(Some(E::Unit::zero()))
        .collect()
}

/**
Decodes a string into a Rust `String`, keeping any replacement characters produced by malformed input.
*/
pub fn decode_lossy<E>(units: &[E::Unit]) -> String where E: Encoding {
    Cursor::<E>::new(units)
        .map(|ch| char::from_u32(ch).unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}
