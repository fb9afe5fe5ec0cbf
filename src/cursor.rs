/*!
Read and write positions over encoded buffers.
*/
use std::fmt;
use std::marker::PhantomData;
use tracing::debug;

use crate::encoding::conv::TranscodeError;
use crate::encoding::{Encoding, Unit};

/**
A read position within an encoded buffer.

The buffer ends at its first terminator unit or at the end of the slice, whichever comes first.  Decoding never moves the cursor when no complete character is available, so a cursor that stops advancing has reached the end of the string.
*/
pub struct Cursor<'a, E> where E: Encoding {
    units: &'a [E::Unit],
    pos: usize,
}

impl<'a, E> Cursor<'a, E> where E: Encoding {
    pub fn new(units: &'a [E::Unit]) -> Self {
        Cursor {
            units: units,
            pos: 0,
        }
    }

    /**
    Decodes the next scalar value and moves past it.

    Returns `None`, without moving, at the terminator or when the remaining units hold only part of a character.
    */
    #[inline]
    pub fn next_char(&mut self) -> Option<u32> {
        let (ch, len) = E::decode_next(self.remaining())?;
        self.pos += len;
        Some(ch)
    }

    /**
    Decodes the next scalar value without moving.
    */
    #[inline]
    pub fn peek_char(&self) -> Option<u32> {
        E::decode_next(self.remaining()).map(|(ch, _)| ch)
    }

    /**
    The offset, in units, of the next unit to be read.
    */
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /**
    The units from the current position to the end of the slice.
    */
    #[inline]
    pub fn remaining(&self) -> &'a [E::Unit] {
        &self.units[self.pos..]
    }

    pub fn is_at_end(&self) -> bool {
        self.peek_char().is_none()
    }
}

impl<'a, E> Clone for Cursor<'a, E> where E: Encoding {
    fn clone(&self) -> Self {
        Cursor {
            units: self.units,
            pos: self.pos,
        }
    }
}

impl<'a, E> fmt::Debug for Cursor<'a, E> where E: Encoding {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}Cursor {{ pos: {}, len: {} }}", E::debug_prefix(), self.pos, self.units.len())
    }
}

impl<'a, E> Iterator for Cursor<'a, E> where E: Encoding {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        self.next_char()
    }
}

/**
A write position within an encoded buffer, or a counter standing in for one.

A writer built with `measure` has no buffer: it accepts every character and only tracks how many units would have been written.  This is the "compute required size" half of every write operation; a writer built with `new` performs the write.
*/
pub struct UnitWriter<'a, E> where E: Encoding {
    buf: Option<&'a mut [E::Unit]>,
    pos: usize,
    _marker: PhantomData<E>,
}

impl<'a, E> UnitWriter<'a, E> where E: Encoding {
    pub fn new(buf: &'a mut [E::Unit]) -> Self {
        UnitWriter {
            buf: Some(buf),
            pos: 0,
            _marker: PhantomData,
        }
    }

    pub fn measure() -> Self {
        UnitWriter {
            buf: None,
            pos: 0,
            _marker: PhantomData,
        }
    }

    pub fn is_measuring(&self) -> bool {
        self.buf.is_none()
    }

    /**
    Units written (or counted) so far, excluding any terminator.
    */
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /**
    Units still free in the buffer, or `None` when measuring.
    */
    #[inline]
    pub fn available(&self) -> Option<usize> {
        self.buf.as_ref().map(|buf| buf.len() - self.pos)
    }

    /**
    Returns `true` if `units` more units, plus a terminator, can still be written.
    */
    #[inline]
    pub fn has_room_for(&self, units: usize) -> bool {
        match self.available() {
            Some(available) => units < available,
            None => true,
        }
    }

    /**
    Encodes `ch` at the current position and moves past it.

    Returns the number of units written; subtracting it from `position` recovers where the character starts.  Unrepresentable values are written as `REPLACEMENT_CHAR`, and the count reflects that.

    # Failure

    Fails if the buffer cannot hold the character; nothing is written in that case.
    */
    pub fn write_char(&mut self, ch: u32) -> Result<usize, TranscodeError> {
        let width = E::encoded_width(ch);
        if let Some(buf) = self.buf.as_mut() {
            let available = buf.len() - self.pos;
            if width > available {
                debug!(needed = width, available, "character does not fit in destination");
                return Err(TranscodeError::BufferTooSmall { needed: width, available });
            }
            E::encode_char(&mut buf[self.pos..], ch);
        }
        self.pos += width;
        Ok(width)
    }

    /**
    Writes the terminator after the last character and returns the total number of units used, terminator included.

    # Failure

    Fails if there is no room left for the terminator.
    */
    pub fn terminate(self) -> Result<usize, TranscodeError> {
        if let Some(buf) = self.buf {
            match buf.get_mut(self.pos) {
                Some(slot) => *slot = E::Unit::zero(),
                None => {
                    debug!(pos = self.pos, "no room for terminator");
                    return Err(TranscodeError::BufferTooSmall { needed: 1, available: 0 });
                },
            }
        }
        Ok(self.pos + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{Utf16, Utf8, REPLACEMENT_CHAR};

    #[test]
    fn cursor_walks_mixed_widths() {
        let units = b"A\xE2\x82\xAC\xF0\x9F\x98\x80\0";
        let mut cur = Cursor::<Utf8>::new(units);
        assert_eq!(cur.next_char(), Some(0x41));
        assert_eq!(cur.position(), 1);
        assert_eq!(cur.next_char(), Some(0x20AC));
        assert_eq!(cur.position(), 4);
        assert_eq!(cur.peek_char(), Some(0x1_F600));
        assert_eq!(cur.position(), 4);
        assert_eq!(cur.next_char(), Some(0x1_F600));
        assert_eq!(cur.position(), 8);
        assert!(cur.is_at_end());
        assert_eq!(cur.next_char(), None);
        assert_eq!(cur.position(), 8);
    }

    #[test]
    fn cursor_does_not_move_on_truncation() {
        let units = b"\xE2\0";
        let mut cur = Cursor::<Utf8>::new(units);
        assert_eq!(cur.next_char(), None);
        assert_eq!(cur.position(), 0);
    }

    #[test]
    fn cursor_overlong_advances_one_byte() {
        let units = b"\xC0\x80\0";
        let mut cur = Cursor::<Utf8>::new(units);
        assert_eq!(cur.next_char(), Some(REPLACEMENT_CHAR));
        assert_eq!(cur.position(), 1);
        // The orphaned continuation byte is itself illegal.
        assert_eq!(cur.next_char(), Some(REPLACEMENT_CHAR));
        assert_eq!(cur.position(), 2);
        assert_eq!(cur.next_char(), None);
    }

    #[test]
    fn cursor_as_iterator() {
        let units: &[u16] = &[0x41, 0xD83D, 0xDE00, 0x42, 0, 0x43];
        let chars: Vec<u32> = Cursor::<Utf16>::new(units).collect();
        assert_eq!(chars, vec![0x41, 0x1_F600, 0x42]);
    }

    #[test]
    fn writer_position_recovers_start() {
        let mut buf = [0u8; 8];
        let mut w = UnitWriter::<Utf8>::new(&mut buf);
        assert_eq!(w.write_char(0x41), Ok(1));
        let n = w.write_char(0x20AC).unwrap();
        assert_eq!(w.position() - n, 1);
        assert_eq!(w.terminate(), Ok(5));
        assert_eq!(&buf[..5], b"A\xE2\x82\xAC\0");
    }

    #[test]
    fn writer_refuses_overflow() {
        let mut buf = [0u8; 2];
        let mut w = UnitWriter::<Utf8>::new(&mut buf);
        assert_eq!(
            w.write_char(0x20AC),
            Err(TranscodeError::BufferTooSmall { needed: 3, available: 2 })
        );
        assert_eq!(w.position(), 0);
        assert_eq!(w.write_char(0x41), Ok(1));
        assert!(!w.has_room_for(1));
        assert_eq!(w.terminate(), Ok(2));
        assert_eq!(buf, *b"A\0");
    }

    #[test]
    fn measuring_writer_counts_replacements() {
        let mut w = UnitWriter::<Utf16>::measure();
        assert!(w.is_measuring());
        assert_eq!(w.write_char(0x1_F600), Ok(2));
        assert_eq!(w.write_char(0xD800), Ok(1));
        assert_eq!(w.available(), None);
        assert_eq!(w.terminate(), Ok(4));
    }
}
