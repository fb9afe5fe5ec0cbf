/*!
Zero-terminated string structure.

Strings handled by this crate are sequences of units terminated by a zero unit.  When a string is given as a slice, the slice end acts as a second, hard limit: nothing past it is ever read, whether or not a terminator was found.

Interior zero units are not supported; the first one ends the string.
*/
use std::slice;
use crate::encoding::Unit;

/**
Returns the number of units before the terminator, or the slice length if there is none.
*/
#[inline]
pub fn length<U: Unit>(units: &[U]) -> usize {
    units.iter().position(|u| u.is_zero()).unwrap_or(units.len())
}

/**
Returns the content of the string, *excluding* the terminator.
*/
#[inline]
pub fn slice_units<U: Unit>(units: &[U]) -> &[U] {
    &units[..length(units)]
}

/**
Counts the units before the terminator of a foreign string.

# Safety

`ptr` must be non-null and point to a zero-terminated sequence of units.
*/
pub unsafe fn length_from_ptr<U: Unit>(ptr: *const U) -> usize {
    let mut len = 0;
    let mut cur = ptr;

    while !(*cur).is_zero() {
        len += 1;
        cur = cur.offset(1);
    }

    len
}

/**
Counts the units before the terminator of a foreign string, reading at most `max_len` units.

# Safety

`ptr` must be non-null and point to at least `max_len` readable units, or to a zero-terminated sequence shorter than that.
*/
pub unsafe fn bounded_length_from_ptr<U: Unit>(ptr: *const U, max_len: usize) -> usize {
    let mut len = 0;

    while len < max_len && !(*ptr.add(len)).is_zero() {
        len += 1;
    }

    len
}

/**
Borrows the content of a foreign zero-terminated string, *excluding* the terminator.

Returns `None` if `ptr` is null.

# Safety

A non-null `ptr` must point to a zero-terminated sequence of units which outlives `'a` and is not mutated during it.
*/
pub unsafe fn borrow_from_ffi_ptr<'a, U: Unit>(ptr: *const U) -> Option<&'a [U]> {
    if ptr.is_null() {
        None
    } else {
        Some(slice::from_raw_parts(ptr, length_from_ptr(ptr)))
    }
}

/**
Borrows at most `max_len` units of a foreign string, stopping early at a terminator.  `UNKNOWN_LEN` makes this identical to `borrow_from_ffi_ptr`.

Returns `None` if `ptr` is null.

# Safety

As for `bounded_length_from_ptr`, and the units must outlive `'a` without being mutated.
*/
pub unsafe fn borrow_from_ffi_ptr_bounded<'a, U: Unit>(ptr: *const U, max_len: usize) -> Option<&'a [U]> {
    if ptr.is_null() {
        None
    } else {
        Some(slice::from_raw_parts(ptr, bounded_length_from_ptr(ptr, max_len)))
    }
}
