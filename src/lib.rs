/*!
This crate moves text between zero-terminated buffers of UTF-8, UTF-16, UTF-32 and C wide characters, one Unicode scalar value at a time.

For more details, see the [additional documentation](doc/index.html).

# Quick Reference

Every operation is generic over the encodings involved; the encoding is a type parameter, never a runtime tag.  Sizes are counted in units of the destination encoding and *include* the terminator.

| Task | Function |
| ---: | --- |
| Decode one character and advance | `Cursor::next_char` |
| Units needed for one character | `Encoding::char_width` |
| Encode one character | `Encoding::encode_char`, `UnitWriter::write_char` |
| Units needed for a whole conversion | `required_size` |
| Convert into a buffer | `transcode` |
| Convert into a new `Vec` | `transcode_to_vec` |
| Copy without converting | `copy`, `copy_size` |
| Search, replace, compare, append | `text` module |
| Same, through raw pointers | `ffi::copy`, `ffi::copy_units` |

The usual pattern is to measure, allocate, then write:

```
use unitstr::{required_size, transcode, Utf16, Utf8};

let src = b"A\xE2\x82\xAC\xF0\x9F\x98\x80\0";
let mut buf = vec![0u16; required_size::<Utf16, Utf8>(src)];
assert_eq!(transcode::<Utf16, Utf8>(&mut buf, src), Ok(5));
assert_eq!(buf, [0x0041, 0x20AC, 0xD83D, 0xDE00, 0x0000]);
```

Malformed input is never an error: each bad sequence becomes U+FFFD and decoding carries on.
*/
extern crate libc;

#[doc(hidden)] pub mod doc;
pub mod cursor;
pub mod encoding;
pub mod ffi;
pub mod structure;
pub mod text;

mod util;

pub use cursor::{Cursor, UnitWriter};
pub use encoding::conv::{
    copy, copy_size, limit, required_size, transcode, transcode_to_vec, TranscodeError, UNKNOWN_LEN,
};
pub use encoding::validate::{is_legal_utf8, validate_scalar};
pub use encoding::{Encoding, Unit, Utf16, Utf32, Utf8, Wide, REPLACEMENT_CHAR};
