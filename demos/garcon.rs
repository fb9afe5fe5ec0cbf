extern crate unitstr;

use unitstr::text::decode_lossy;
use unitstr::{required_size, transcode, Utf16, Utf32, Utf8, Wide};

const WORD: &'static [u8] = b"A\xe2\x82\xac\xf0\x9f\x98\x80\0";

fn main() {
    println!("utf8: {:?}", decode_lossy::<Utf8>(WORD));
    println!("utf8 bytes: {:?}", WORD);

    let size = required_size::<Utf16, Utf8>(WORD);
    println!("utf16 size: {}", size);

    let mut utf16 = vec![0u16; size];
    let used = transcode::<Utf16, Utf8>(&mut utf16, WORD).expect("utf16 buffer was sized by required_size");
    println!("utf16 units ({}): {:x?}", used, utf16);

    let mut utf32 = vec![0u32; required_size::<Utf32, Utf16>(&utf16)];
    transcode::<Utf32, Utf16>(&mut utf32, &utf16).expect("utf32 buffer was sized by required_size");
    println!("utf32 units: {:x?}", utf32);

    let mut wide = vec![0; required_size::<Wide, Utf32>(&utf32)];
    transcode::<Wide, Utf32>(&mut wide, &utf32).expect("wide buffer was sized by required_size");
    println!("wide units: {:x?}", wide);
    println!("wide: {:?}", decode_lossy::<Wide>(&wide));

    // Too small for the emoji: only whole characters are written.
    let mut short = [0u16; 3];
    let used = transcode::<Utf16, Utf8>(&mut short, WORD).expect("non-empty buffer");
    println!("truncated utf16 ({}): {:x?}", used, short);
}
