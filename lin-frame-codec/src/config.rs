//! Codec configuration types
//!
//! The codec needs only two knobs: how many bytes a line may hold and which
//! checksum variant to apply. Everything else (file handling, output) belongs
//! to the application layer.

use crate::types::{ChecksumMode, DEFAULT_MAX_BYTES};
use serde::{Deserialize, Serialize};

/// Configuration for the line decoder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Maximum number of bytes accepted from one line (default: 64)
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,

    /// Checksum variant applied to every frame (default: classic)
    #[serde(default = "default_mode")]
    pub mode: ChecksumMode,
}

fn default_max_bytes() -> usize {
    DEFAULT_MAX_BYTES
}

fn default_mode() -> ChecksumMode {
    ChecksumMode::Classic
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_bytes: default_max_bytes(),
            mode: default_mode(),
        }
    }
}

impl CodecConfig {
    /// Create a new codec configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the per-line byte capacity
    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Builder method: set the checksum mode
    pub fn with_mode(mut self, mode: ChecksumMode) -> Self {
        self.mode = mode;
        self
    }
}
