//! Frame validation
//!
//! Interprets parsed bytes as `[PID, LEN, data...]` and checks that the
//! declared data length is actually present. Frames borrow from the parsed
//! bytes; nothing is copied.

use crate::checksum;
use crate::types::{ChecksumMode, CodecError, Result};

/// Offset of the first data byte (after PID and LEN)
pub const HEADER_LEN: usize = 2;

/// A validated LIN frame view over parsed bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    /// Protected identifier, treated opaquely
    pub pid: u8,
    /// Number of data bytes declared by the LEN field
    pub declared_len: u8,
    /// Exactly `declared_len` data bytes
    pub data: &'a [u8],
    /// Bytes present after the declared data, not covered by the checksum
    pub trailing: &'a [u8],
}

impl<'a> Frame<'a> {
    /// Compute the checksum of this frame for the given mode
    pub fn checksum(&self, mode: ChecksumMode) -> u8 {
        checksum::compute(mode, self.pid, self.data)
    }
}

/// Validate parsed bytes as a LIN frame
///
/// # Errors
/// * `MissingHeader` if fewer than two bytes are present
/// * `TruncatedFrame` if LEN declares more data bytes than are present
pub fn validate_frame(bytes: &[u8]) -> Result<Frame<'_>> {
    if bytes.len() < HEADER_LEN {
        return Err(CodecError::MissingHeader { found: bytes.len() });
    }

    let pid = bytes[0];
    let declared_len = bytes[1];
    let payload = &bytes[HEADER_LEN..];

    if payload.len() < declared_len as usize {
        return Err(CodecError::TruncatedFrame {
            declared: declared_len,
            available: payload.len(),
        });
    }

    let (data, trailing) = payload.split_at(declared_len as usize);
    Ok(Frame {
        pid,
        declared_len,
        data,
        trailing,
    })
}
