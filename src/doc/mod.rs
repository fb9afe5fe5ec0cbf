/*!
Additional documentation.

# Components

## Encodings

See the `encoding` module.

| Name    | Unit      | Units per character | Encoding |
| ------- | --------- | ------------------- | -------- |
| `Utf8`  | `u8`      | 1–4 | Possibly invalid UTF-8. |
| `Utf16` | `u16`     | 1–2 | Possibly invalid UTF-16, native endian. |
| `Utf32` | `u32`     | 1   | Possibly invalid UTF-32, native endian. |
| `Wide`  | `wchar_t` | platform | UTF-16 where `wchar_t` is 16 bits, UTF-32 where it is 32 bits. |

## Structure

See the `structure` module.  All strings are zero-terminated; a slice end is an additional hard limit.  There is no support for interior zeroes.

# Recovery Rules

Decoding always either produces a character and moves forward, or produces nothing and stays put.  The rules, by encoding:

| Input | Result | Units consumed |
| ----- | ------ | -------------- |
| Terminator | none | 0 |
| Well-formed sequence | its scalar value | sequence length |
| UTF-8: illegal sequence (overlong, encoded surrogate, bad continuation, stray continuation, `F5`–`FF` lead) | U+FFFD | 1 |
| UTF-8: lead byte whose trailing bytes run into a terminator or the slice end | none | 0 |
| UTF-16: high surrogate followed by terminator or slice end | none | 0 |
| UTF-16: high surrogate followed by a non-low-surrogate | U+FFFD | 1 |
| UTF-16: lone low surrogate | U+FFFD | 1 |
| UTF-32: surrogate or value above U+10FFFF | U+FFFD | 1 |

Encoding never produces an ill-formed sequence: a value that cannot be represented (a surrogate, or anything above U+10FFFF) is written as U+FFFD, and the size functions count it that way.

# Common Misconceptions and Mistakes

* *"The size includes only the text."*  Every size in this crate includes the terminator.  Allocate exactly what `required_size` returns.

* *"A truncated destination means an error."*  `transcode` writes as many whole characters as fit and still terminates.  Compare the result against `required_size` if truncation matters.

* *"Stopping early means the string ended."*  It may also mean the input ended in the middle of a character.  A scan that needs to tell the two apart should look at `Cursor::remaining`.

* *"`copy` and `transcode::<E, E>` are interchangeable."*  For well-formed input, yes.  `copy` does not decode, so malformed units are copied as they are rather than replaced.

* *"The C wide encoding is UTF-32."*  On Windows, it's UTF-16.

* *"UTF-16 and UTF-32 from the operating system are valid."*  Generally, operating systems *do not* check for validity of strings.  This is why this crate assumes all UTF-* text is potentially invalid, and why the decoders validate everything they read.
*/
