/*!
Raw pointer interface.

These functions follow the conventions foreign callers expect from a C string library:

* A null destination means "report the required size only".
* A written destination is always zero-terminated.
* Sizes include the terminator.
* `UNKNOWN_LEN` as a source length means the source is zero-terminated and its length must be discovered by scanning.
* `0` is returned for a null source, or for a non-null destination with zero capacity.

They are thin wrappers around the slice functions in `encoding::conv`.
*/
use std::slice;
use tracing::debug;

use crate::encoding::conv::{self, TranscodeError, UNKNOWN_LEN};
use crate::encoding::{Encoding, Unit};
use crate::structure;

/**
Flattens a result into the `0`-on-error convention.
*/
fn size_or_zero(result: Result<usize, TranscodeError>) -> usize {
    match result {
        Ok(size) => size,
        Err(err) => {
            debug!(%err, "reporting failure as zero size");
            0
        },
    }
}

/**
Borrows the source, honouring a length limit.  A null source is an error.
*/
unsafe fn source_units<'a, U: Unit>(source: *const U, source_len: usize) -> Result<&'a [U], TranscodeError> {
    structure::borrow_from_ffi_ptr_bounded(source, source_len).ok_or(TranscodeError::NullSource)
}

/**
Returns the number of units before the terminator of `s`, or `0` if `s` is null.

# Safety

A non-null `s` must point to a zero-terminated sequence of units.
*/
pub unsafe fn length<U: Unit>(s: *const U) -> usize {
    if s.is_null() {
        0
    } else {
        structure::length_from_ptr(s)
    }
}

/**
Borrows a zero-terminated foreign string as a slice, *excluding* the terminator.  Returns `None` if `s` is null.

# Safety

See `structure::borrow_from_ffi_ptr`.
*/
pub unsafe fn from_ptr<'a, U: Unit>(s: *const U) -> Option<&'a [U]> {
    structure::borrow_from_ffi_ptr(s)
}

/**
Copies `source`, encoded as `S`, into `dest`, encoded as `D`.

`dest_size` is the capacity of `dest` in `D` units, terminator included; `UNKNOWN_LEN` promises the buffer is at least as large as the required size.  `source_len` limits how many `S` units are read.

Returns the number of `D` units written (or, with a null `dest`, required), terminator included, or `0` on failure.

# Safety

`source`, if non-null, must point to a zero-terminated string or to at least `source_len` readable units.  `dest`, if non-null, must point to at least `dest_size` writable units (or the required size, for `UNKNOWN_LEN`), none of which overlap `source`.
*/
pub unsafe fn copy<D, S>(dest: *mut D::Unit, source: *const S::Unit, dest_size: usize, source_len: usize) -> usize
where
    D: Encoding,
    S: Encoding,
{
    size_or_zero(copy_inner::<D, S>(dest, source, dest_size, source_len))
}

unsafe fn copy_inner<D, S>(
    dest: *mut D::Unit,
    source: *const S::Unit,
    dest_size: usize,
    source_len: usize,
) -> Result<usize, TranscodeError>
where
    D: Encoding,
    S: Encoding,
{
    let units = source_units(source, source_len)?;

    if dest.is_null() {
        return Ok(conv::required_size::<D, S>(units));
    }

    let capacity = match dest_size {
        0 => return Err(TranscodeError::ZeroCapacity),
        UNKNOWN_LEN => conv::required_size::<D, S>(units),
        size => size,
    };

    let dest = slice::from_raw_parts_mut(dest, capacity);
    conv::transcode::<D, S>(dest, units)
}

/**
Copies `source` into `dest` without changing the encoding.  Parameters and result are as for `copy`.

# Safety

As for `copy`.
*/
pub unsafe fn copy_units<E>(dest: *mut E::Unit, source: *const E::Unit, dest_size: usize, source_len: usize) -> usize
where
    E: Encoding,
{
    size_or_zero(copy_units_inner::<E>(dest, source, dest_size, source_len))
}

unsafe fn copy_units_inner<E>(
    dest: *mut E::Unit,
    source: *const E::Unit,
    dest_size: usize,
    source_len: usize,
) -> Result<usize, TranscodeError>
where
    E: Encoding,
{
    let units = source_units(source, source_len)?;

    if dest.is_null() {
        return Ok(conv::copy_size::<E>(units));
    }

    let capacity = match dest_size {
        0 => return Err(TranscodeError::ZeroCapacity),
        UNKNOWN_LEN => conv::copy_size::<E>(units),
        size => size,
    };

    let dest = slice::from_raw_parts_mut(dest, capacity);
    conv::copy::<E>(dest, units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;
    use crate::encoding::{Utf16, Utf8};

    const MIXED_UTF8: &[u8] = b"A\xE2\x82\xAC\xF0\x9F\x98\x80\0";

    #[test]
    fn measure_then_write() {
        unsafe {
            let size = copy::<Utf16, Utf8>(ptr::null_mut(), MIXED_UTF8.as_ptr(), UNKNOWN_LEN, UNKNOWN_LEN);
            assert_eq!(size, 5);

            let mut buf = vec![0xAAAAu16; size];
            let written = copy::<Utf16, Utf8>(buf.as_mut_ptr(), MIXED_UTF8.as_ptr(), size, UNKNOWN_LEN);
            assert_eq!(written, 5);
            assert_eq!(buf, vec![0x0041, 0x20AC, 0xD83D, 0xDE00, 0]);
        }
    }

    #[test]
    fn structural_errors_return_zero() {
        let mut buf = [0u16; 4];
        unsafe {
            assert_eq!(copy::<Utf16, Utf8>(buf.as_mut_ptr(), ptr::null(), 4, UNKNOWN_LEN), 0);
            assert_eq!(copy::<Utf16, Utf8>(ptr::null_mut(), ptr::null(), 4, UNKNOWN_LEN), 0);
            assert_eq!(copy::<Utf16, Utf8>(buf.as_mut_ptr(), MIXED_UTF8.as_ptr(), 0, UNKNOWN_LEN), 0);
            assert_eq!(copy_units::<Utf8>(ptr::null_mut(), ptr::null(), 4, UNKNOWN_LEN), 0);
        }
    }

    #[test]
    fn null_dest_with_zero_size_still_measures() {
        unsafe {
            assert_eq!(copy::<Utf16, Utf8>(ptr::null_mut(), MIXED_UTF8.as_ptr(), 0, UNKNOWN_LEN), 5);
        }
    }

    #[test]
    fn source_len_limits_reading() {
        // No terminator within the first four bytes; nothing past them may be read.
        let src = b"A\xE2\x82\xAC\xF0";
        unsafe {
            assert_eq!(copy::<Utf16, Utf8>(ptr::null_mut(), src.as_ptr(), UNKNOWN_LEN, 4), 3);
            assert_eq!(copy_units::<Utf8>(ptr::null_mut(), src.as_ptr(), UNKNOWN_LEN, 4), 3);
        }
    }

    #[test]
    fn copy_units_drops_a_cut_character() {
        let src = b"A\xE2\x82\xAC\0";
        let pair: [u16; 4] = [0x41, 0xD83D, 0xDE00, 0];
        let mut out = [0xFFu8; 4];
        let mut out16 = [0xFFFFu16; 4];
        unsafe {
            assert_eq!(copy_units::<Utf8>(ptr::null_mut(), src.as_ptr(), UNKNOWN_LEN, 2), 2);
            assert_eq!(copy_units::<Utf8>(out.as_mut_ptr(), src.as_ptr(), out.len(), 2), 2);
            assert_eq!(copy_units::<Utf16>(out16.as_mut_ptr(), pair.as_ptr(), out16.len(), 2), 2);
        }
        assert_eq!(&out[..2], b"A\0");
        assert_eq!(&out16[..2], &[0x41, 0]);
    }

    #[test]
    fn unknown_dest_size_trusts_required_size() {
        let mut buf = [0xFFu8; 9];
        unsafe {
            let n = copy_units::<Utf8>(buf.as_mut_ptr(), MIXED_UTF8.as_ptr(), UNKNOWN_LEN, UNKNOWN_LEN);
            assert_eq!(n, 9);
        }
        assert_eq!(&buf[..], MIXED_UTF8);
    }

    #[test]
    fn length_and_borrow() {
        unsafe {
            assert_eq!(length(MIXED_UTF8.as_ptr()), 8);
            assert_eq!(length::<u8>(ptr::null()), 0);
            assert_eq!(from_ptr(MIXED_UTF8.as_ptr()), Some(&MIXED_UTF8[..8]));
            assert_eq!(from_ptr::<u16>(ptr::null()), None);
        }
    }
}
