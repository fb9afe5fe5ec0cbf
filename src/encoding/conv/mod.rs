/*!
Encoding conversion support.

Every conversion is a decode/encode loop: a `Cursor` over the source yields scalar values, and a `UnitWriter` over the destination encodes them.  The same loop serves both halves of the "measure, allocate, write" idiom: `required_size` runs it with a measuring writer, `transcode` with a real buffer.

Sizes are always in units of the *destination* encoding, and always include the terminator.
*/
use thiserror::Error;
use tracing::{debug, trace};

use crate::cursor::{Cursor, UnitWriter};
use crate::encoding::{Encoding, Unit};
use crate::structure;

/**
Passed as a source length to mean "unknown; scan for the terminator".
*/
pub const UNKNOWN_LEN: usize = usize::MAX;

/**
Structural errors.  Malformed text is never an error; it is replaced at the character level.
*/
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq, Hash)]
pub enum TranscodeError {
    #[error("source string is null")]
    NullSource,
    #[error("destination buffer has zero capacity")]
    ZeroCapacity,
    #[error("destination buffer too small: {needed} units needed, {available} available")]
    BufferTooSmall { needed: usize, available: usize },
}

/**
Restricts `source` to its first `len` units.  `UNKNOWN_LEN`, or any length past the end of `source`, leaves it unrestricted.

A character cut in half by the limit is dropped; decoding treats the cut exactly like a terminator in the middle of a sequence.
*/
#[inline]
pub fn limit<U>(source: &[U], len: usize) -> &[U] {
    &source[..len.min(source.len())]
}

fn transcode_with<D, S>(mut out: UnitWriter<D>, source: &[S::Unit]) -> Result<usize, TranscodeError>
where
    D: Encoding,
    S: Encoding,
{
    let mut src = Cursor::<S>::new(source);
    let mut consumed = 0;
    let mut truncated = false;

    while let Some(ch) = src.next_char() {
        if !out.has_room_for(D::encoded_width(ch)) {
            truncated = true;
            break;
        }
        out.write_char(ch)?;
        consumed = src.position();
    }

    let measuring = out.is_measuring();
    let used = out.terminate()?;
    trace!(
        from = S::debug_prefix(),
        to = D::debug_prefix(),
        consumed,
        used,
        measuring,
        truncated,
        "transcoded"
    );
    Ok(used)
}

/**
Returns the number of `D` units needed to hold `source` transcoded from `S`, including the terminator.

Allocating exactly this many units and passing them to `transcode` always succeeds without truncation.
*/
pub fn required_size<D, S>(source: &[S::Unit]) -> usize
where
    D: Encoding,
    S: Encoding,
{
    // A measuring writer has nowhere to run out of room.
    transcode_with::<D, S>(UnitWriter::measure(), source).unwrap_or(0)
}

/**
Transcodes `source` from `S` into `dest` as `D`, and terminates it.

`dest.len()` is the capacity, terminator included.  If the text does not fit, as many whole characters as fit are written; a character is never split.  Returns the number of units written, terminator included.

# Failure

Fails with `ZeroCapacity` if `dest` is empty.
*/
pub fn transcode<D, S>(dest: &mut [D::Unit], source: &[S::Unit]) -> Result<usize, TranscodeError>
where
    D: Encoding,
    S: Encoding,
{
    if dest.is_empty() {
        debug!("transcode into zero-capacity buffer");
        return Err(TranscodeError::ZeroCapacity);
    }
    transcode_with::<D, S>(UnitWriter::new(dest), source)
}

/**
Transcodes `source` into a newly allocated, terminated buffer.
*/
pub fn transcode_to_vec<D, S>(source: &[S::Unit]) -> Vec<D::Unit>
where
    D: Encoding,
    S: Encoding,
{
    let mut out = vec![D::Unit::zero(); required_size::<D, S>(source)];
    let used = transcode::<D, S>(&mut out, source).unwrap_or(0);
    out.truncate(used);
    out
}

/**
Returns the units of `source` up to the end of its last complete character.

Anything past that point is either the terminator or a character cut short by the end of the slice, which decoding would drop.
*/
fn complete_units<E>(source: &[E::Unit]) -> &[E::Unit] where E: Encoding {
    let units = structure::slice_units(source);
    let mut cur = Cursor::<E>::new(units);
    while cur.next_char().is_some() {}
    &units[..cur.position()]
}

/**
Returns the number of units needed to copy `source` without changing its encoding, including the terminator.

A character cut short by the end of `source` is not counted.
*/
#[inline]
pub fn copy_size<E>(source: &[E::Unit]) -> usize where E: Encoding {
    complete_units::<E>(source).len() + 1
}

/**
Copies `source` into `dest` without changing its encoding, and terminates it.

When everything fits, this is a straight unit copy of every complete character; a character cut short by the end of `source` is dropped.  Otherwise it falls back to the transcoding path so that, as there, only whole characters are written.  For well-formed input the result is identical to `transcode::<E, E>`; malformed units are copied as they are rather than replaced.

# Failure

Fails with `ZeroCapacity` if `dest` is empty.
*/
pub fn copy<E>(dest: &mut [E::Unit], source: &[E::Unit]) -> Result<usize, TranscodeError>
where
    E: Encoding,
{
    if dest.is_empty() {
        debug!("copy into zero-capacity buffer");
        return Err(TranscodeError::ZeroCapacity);
    }

    let units = complete_units::<E>(source);
    if units.len() < dest.len() {
        dest[..units.len()].copy_from_slice(units);
        dest[units.len()] = E::Unit::zero();
        return Ok(units.len() + 1);
    }

    transcode_with::<E, E>(UnitWriter::new(dest), source)
}
