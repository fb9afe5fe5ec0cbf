use std::marker::PhantomData;
use crate::encoding::{Encoding, Unit};

pub trait EncodeUnitsExt: Sized + Iterator<Item=u32> {
    fn encode_units<E>(self) -> EncodeUnitsIter<Self, E> where E: Encoding {
        EncodeUnitsIter::new(self)
    }
}

impl<It> EncodeUnitsExt for It where It: Iterator<Item=u32> {}

/**
Encodes a stream of scalar values into a stream of units.
*/
pub struct EncodeUnitsIter<It, E> where It: Iterator<Item=u32>, E: Encoding {
    iter: It,
    buf: [E::Unit; 4],
    off: u8,
    len: u8,
    _marker: PhantomData<E>,
}

impl<It, E> EncodeUnitsIter<It, E> where It: Iterator<Item=u32>, E: Encoding {
    pub fn new(iter: It) -> Self {
        EncodeUnitsIter {
            iter: iter,
            buf: [E::Unit::zero(); 4],
            off: 0,
            len: 0,
            _marker: PhantomData,
        }
    }
}

impl<It, E> Iterator for EncodeUnitsIter<It, E> where It: Iterator<Item=u32>, E: Encoding {
    type Item = E::Unit;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len - self.off == 0 {
            // Buffer is empty; encode next code point.
            let cp = self.iter.next()?;
            self.off = 0;
            self.len = E::encode_char(&mut self.buf[..], cp) as u8;
        }

        let cu = self.buf[self.off as usize];
        self.off += 1;
        Some(cu)
    }
}
