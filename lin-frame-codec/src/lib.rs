//! LIN Frame Codec Library
//!
//! A stateless, reusable library for decoding textual hex records of LIN
//! (Local Interconnect Network) frames and computing their checksum.
//!
//! # Architecture
//!
//! This library is intentionally minimal and focused on decoding:
//! - Parses a line of hex tokens into a bounded byte sequence
//! - Validates the `[PID, LEN, data...]` frame layout
//! - Computes the classic (LIN 1.x) or enhanced (LIN 2.x) checksum
//!
//! The library does NOT:
//! - Open or read files
//! - Skip comment lines
//! - Print or persist results
//! - Interpret PID parity bits
//!
//! All higher-level functionality is in the application layer (lin-checksum-cli).
//!
//! # Example Usage
//!
//! ```
//! use lin_frame_codec::{ChecksumMode, CodecConfig, LineDecoder};
//!
//! let config = CodecConfig::new()
//!     .with_mode(ChecksumMode::Classic)
//!     .with_max_bytes(64);
//! let decoder = LineDecoder::with_config(config);
//!
//! for line in ["3A 04 11 22 33 44", "10 05 20"] {
//!     match decoder.decode_line(line) {
//!         Ok(frame) => println!("{}", frame),
//!         Err(e) => eprintln!("Decode error: {}", e),
//!     }
//! }
//! ```

// Public modules
pub mod checksum;
pub mod config;
pub mod decoder;
pub mod frame;
pub mod hex;
pub mod types;

// Re-export main types for convenience
pub use checksum::{classic_checksum, enhanced_checksum};
pub use config::CodecConfig;
pub use decoder::{DecodedFrame, LineDecoder};
pub use frame::{validate_frame, Frame};
pub use hex::{parse_hex_byte, parse_hex_line};
pub use types::{
    to_hex_string, ByteSequence, ChecksumMode, CodecError, Result, TokenFault, UnknownChecksumMode,
    DEFAULT_MAX_BYTES,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
