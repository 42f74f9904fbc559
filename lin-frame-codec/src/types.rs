//! Core types for the LIN frame codec
//!
//! This module defines the byte container produced by the hex parser, the
//! checksum mode selector, and the error type shared by every codec operation.
//! Nothing here retains state between lines.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Capacity used by the original line tool (one 64-byte buffer per line)
pub const DEFAULT_MAX_BYTES: usize = 64;

/// Errors that can occur while decoding a line
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("Empty line: no hex tokens found")]
    EmptyLine,

    #[error("Malformed token {token:?}: {reason}")]
    MalformedToken { token: String, reason: TokenFault },

    #[error("Too many tokens: line holds more than {capacity} bytes")]
    CapacityExceeded { capacity: usize },

    #[error("Need at least PID and length, found {found} byte(s)")]
    MissingHeader { found: usize },

    #[error("Declared length {declared} but only {available} data byte(s) present")]
    TruncatedFrame { declared: u8, available: usize },
}

impl CodecError {
    /// Number of data bytes missing from a truncated frame
    pub fn shortfall(&self) -> Option<usize> {
        match self {
            CodecError::TruncatedFrame { declared, available } => {
                Some((*declared as usize).saturating_sub(*available))
            }
            _ => None,
        }
    }

    pub(crate) fn malformed(token: &str, reason: TokenFault) -> Self {
        CodecError::MalformedToken {
            token: token.to_string(),
            reason,
        }
    }
}

/// Why a hex token was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenFault {
    /// Nothing left after the optional `0x` prefix
    EmptyToken,
    /// More than two digits after the optional `0x` prefix
    TooLong,
    /// A character outside `0-9A-Fa-f`
    InvalidDigit,
}

impl fmt::Display for TokenFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenFault::EmptyToken => write!(f, "no hex digits"),
            TokenFault::TooLong => write!(f, "more than two hex digits"),
            TokenFault::InvalidDigit => write!(f, "invalid hex digit"),
        }
    }
}

/// LIN checksum variant
///
/// There is intentionally no `Default` here: the caller's configuration
/// decides which mode a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecksumMode {
    /// LIN 1.x - sum over data bytes only
    Classic,
    /// LIN 2.x - sum over the protected identifier plus data bytes
    Enhanced,
}

impl ChecksumMode {
    /// Lowercase name as used in configuration files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            ChecksumMode::Classic => "classic",
            ChecksumMode::Enhanced => "enhanced",
        }
    }
}

impl fmt::Display for ChecksumMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A checksum mode name other than `classic` or `enhanced`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown checksum mode: {0} (expected classic or enhanced)")]
pub struct UnknownChecksumMode(pub String);

impl FromStr for ChecksumMode {
    type Err = UnknownChecksumMode;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" => Ok(ChecksumMode::Classic),
            "enhanced" => Ok(ChecksumMode::Enhanced),
            _ => Err(UnknownChecksumMode(s.to_string())),
        }
    }
}

/// Ordered bytes parsed from one line, bounded by a fixed capacity
///
/// Writes go through [`ByteSequence::try_push`], which refuses to grow past
/// the capacity instead of truncating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteSequence {
    bytes: Vec<u8>,
    capacity: usize,
}

impl ByteSequence {
    /// Create an empty sequence that can hold at most `capacity` bytes
    pub fn bounded(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity.min(DEFAULT_MAX_BYTES)),
            capacity,
        }
    }

    /// Append a byte, failing with `CapacityExceeded` when full
    pub fn try_push(&mut self, byte: u8) -> Result<()> {
        if self.is_full() {
            return Err(CodecError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.bytes.push(byte);
        Ok(())
    }

    /// True once no further byte can be appended
    pub fn is_full(&self) -> bool {
        self.bytes.len() >= self.capacity
    }

    /// Maximum number of bytes this sequence accepts
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}

impl Deref for ByteSequence {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for ByteSequence {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for ByteSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_hex_string(&self.bytes))
    }
}

/// Render bytes as two-digit uppercase hex separated by single spaces
pub fn to_hex_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format!("{:02X}", byte));
    }
    out
}
