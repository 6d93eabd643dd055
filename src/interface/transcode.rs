/*!
Conversions for moving text across a byte-oriented boundary.

- [escape] and [unescape] percent-encode arbitrary bytes as printable text, in the manner of the JavaScript `escape` family.
  Alphanumerics and the characters `-_.!~*'()#;,/?:@&=+$` are kept, and every other byte is written as `%xx`.
- [encode] and [decode] move a string to and from a null-terminated buffer of UTF-8 bytes.

```rust
# use websat::interface::transcode::{decode, encode, escape, unescape};
assert_eq!(escape("p ∨ q".as_bytes()), "p%20%e2%88%a8%20q");
assert_eq!(unescape("p%20%e2%88%a8%20q").unwrap(), "p ∨ q".as_bytes());

let buffer = encode("clause");
assert_eq!(buffer.last(), Some(&0));
assert_eq!(decode(&buffer), "clause");
```
*/

use crate::types::err::ParseError;

/// Whether `byte` is written as itself when escaped.
fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || b"-_.!~*'()#;,/?:@&=+$".contains(&byte)
}

/// Percent-escapes every byte other than alphanumerics and `-_.!~*'()#;,/?:@&=+$`, with lowercase hex digits.
pub fn escape(bytes: &[u8]) -> String {
    let mut escaped = String::with_capacity(bytes.len());
    for byte in bytes {
        match is_unreserved(*byte) {
            true => escaped.push(*byte as char),
            false => escaped.push_str(&format!("%{byte:02x}")),
        }
    }
    escaped
}

/// Reverses [escape].
///
/// Hex digits of either case are accepted.
/// A `%` not followed by two hex digits is an [Escape](ParseError::Escape) error at the offset of the `%`.
pub fn unescape(text: &str) -> Result<Vec<u8>, ParseError> {
    let bytes = text.as_bytes();
    let mut unescaped = Vec::with_capacity(bytes.len());
    let mut index = 0;

    while index < bytes.len() {
        match bytes[index] {
            b'%' => {
                let digits = bytes
                    .get(index + 1..index + 3)
                    .filter(|digits| digits.iter().all(u8::is_ascii_hexdigit))
                    .and_then(|digits| std::str::from_utf8(digits).ok())
                    .and_then(|digits| u8::from_str_radix(digits, 16).ok());
                match digits {
                    Some(byte) => unescaped.push(byte),
                    None => return Err(ParseError::Escape(index)),
                }
                index += 3;
            }

            byte => {
                unescaped.push(byte);
                index += 1;
            }
        }
    }

    Ok(unescaped)
}

/// The UTF-8 bytes of `text`, followed by a null byte.
pub fn encode(text: &str) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(text.len() + 1);
    buffer.extend_from_slice(text.as_bytes());
    buffer.push(0);
    buffer
}

/// The text of a buffer up to the first null byte, or the whole buffer if there is no null byte.
///
/// Invalid UTF-8 is replaced with the replacement character.
pub fn decode(buffer: &[u8]) -> String {
    let end = buffer
        .iter()
        .position(|byte| *byte == 0)
        .unwrap_or(buffer.len());
    String::from_utf8_lossy(&buffer[..end]).into_owned()
}
