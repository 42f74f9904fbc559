//! Hex token parser
//!
//! Turns a line of whitespace-separated hex tokens into a bounded
//! [`ByteSequence`]. A line either parses completely or not at all.

use crate::types::{ByteSequence, CodecError, Result, TokenFault};

/// Characters that separate tokens within a line
const SEPARATORS: &[char] = &[' ', '\t'];

/// Character that ends a line; a `\r` directly before it is dropped too
const LINE_TERMINATOR: char = '\n';

/// Parse a single hex byte token such as `3A`, `0x3A` or `a`
///
/// A one-digit token is taken as the low nibble (`"A"` -> `0x0A`).
pub fn parse_hex_byte(token: &str) -> Result<u8> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);

    if digits.is_empty() {
        return Err(CodecError::malformed(token, TokenFault::EmptyToken));
    }
    if digits.len() > 2 {
        return Err(CodecError::malformed(token, TokenFault::TooLong));
    }

    let mut value = 0u8;
    for b in digits.bytes() {
        let nibble = hex_nibble(b).ok_or_else(|| CodecError::malformed(token, TokenFault::InvalidDigit))?;
        value = (value << 4) | nibble;
    }
    Ok(value)
}

/// Parse a whole line into at most `max_bytes` bytes
///
/// Text after the first `\n` is ignored, as is a `\r` right before it or at
/// the very end. A bare `\r` elsewhere stays inside its token and makes it
/// malformed. Runs of spaces and tabs separate tokens. Errors:
/// * `CapacityExceeded` if the line holds more than `max_bytes` tokens
/// * `MalformedToken` for the first token that is not a valid hex byte
/// * `EmptyLine` if no token is present
pub fn parse_hex_line(line: &str, max_bytes: usize) -> Result<ByteSequence> {
    let content = match line.find(LINE_TERMINATOR) {
        Some(end) => &line[..end],
        None => line,
    };
    let content = content.strip_suffix('\r').unwrap_or(content);

    let mut bytes = ByteSequence::bounded(max_bytes);
    for token in content.split(SEPARATORS).filter(|t| !t.is_empty()) {
        // Check room before parsing so nothing is ever written past the bound
        if bytes.is_full() {
            return Err(CodecError::CapacityExceeded { capacity: max_bytes });
        }
        bytes.try_push(parse_hex_byte(token)?)?;
    }

    if bytes.is_empty() {
        return Err(CodecError::EmptyLine);
    }

    log::trace!("Parsed {} byte(s) from line", bytes.len());
    Ok(bytes)
}

fn hex_nibble(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'A'..=b'F' => Some(b - b'A' + 10),
        b'a'..=b'f' => Some(b - b'a' + 10),
        _ => None,
    }
}
