//! Main decoder API
//!
//! `LineDecoder` is the entry point for callers that feed text one line at a
//! time. It runs the hex parser, validates the frame layout and applies the
//! configured checksum. The decoder holds only its configuration, so a single
//! instance can be shared across threads.

use crate::config::CodecConfig;
use crate::frame::{validate_frame, HEADER_LEN};
use crate::hex::parse_hex_line;
use crate::types::{to_hex_string, ChecksumMode, Result};
use serde::Serialize;
use std::fmt;

/// A successfully decoded line: every parsed byte plus the computed checksum
///
/// Only [`LineDecoder::decode_line`] builds these, so `bytes` always holds at
/// least the header and the declared data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedFrame {
    bytes: Vec<u8>,
    pid: u8,
    declared_len: u8,
    checksum: u8,
    mode: ChecksumMode,
}

impl DecodedFrame {
    /// All bytes parsed from the line, in input order
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Protected identifier (first byte)
    pub fn pid(&self) -> u8 {
        self.pid
    }

    /// Declared data length (second byte)
    pub fn declared_len(&self) -> u8 {
        self.declared_len
    }

    /// Checksum computed over the declared data
    pub fn checksum(&self) -> u8 {
        self.checksum
    }

    /// Mode the checksum was computed with
    pub fn mode(&self) -> ChecksumMode {
        self.mode
    }

    /// The declared data bytes
    pub fn data(&self) -> &[u8] {
        self.bytes
            .get(HEADER_LEN..HEADER_LEN + self.declared_len as usize)
            .unwrap_or_default()
    }

    /// Canonical output form: input bytes then checksum, uppercase hex
    pub fn render(&self) -> String {
        format!("{} {:02X}", to_hex_string(&self.bytes), self.checksum)
    }
}

impl fmt::Display for DecodedFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Stateless line decoder
#[derive(Debug, Clone, Default)]
pub struct LineDecoder {
    config: CodecConfig,
}

impl LineDecoder {
    /// Create a decoder with the default configuration (64 bytes, classic)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with an explicit configuration
    pub fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Decode one line of hex text into a frame and its checksum
    ///
    /// # Example
    /// ```
    /// use lin_frame_codec::{ChecksumMode, CodecConfig, LineDecoder};
    ///
    /// let decoder = LineDecoder::with_config(CodecConfig::new().with_mode(ChecksumMode::Enhanced));
    /// let frame = decoder.decode_line("3A 04 11 22 33 44\n").unwrap();
    /// assert_eq!(frame.checksum(), 0x1B);
    /// assert_eq!(frame.render(), "3A 04 11 22 33 44 1B");
    /// ```
    pub fn decode_line(&self, line: &str) -> Result<DecodedFrame> {
        let bytes = parse_hex_line(line, self.config.max_bytes)?;
        let frame = validate_frame(&bytes)?;
        let checksum = frame.checksum(self.config.mode);

        log::debug!(
            "Decoded frame PID=0x{:02X} LEN={} checksum=0x{:02X} ({})",
            frame.pid,
            frame.declared_len,
            checksum,
            self.config.mode
        );

        Ok(DecodedFrame {
            pid: frame.pid,
            declared_len: frame.declared_len,
            checksum,
            mode: self.config.mode,
            bytes: bytes.into_vec(),
        })
    }
}
