//! LIN checksum engine
//!
//! Both variants invert the low byte of a plain modulo-256 sum. The only
//! difference is whether the protected identifier takes part in the sum.

use crate::types::ChecksumMode;

/// Classic checksum: inverted modulo-256 sum of the data bytes
pub fn classic_checksum(data: &[u8]) -> u8 {
    invert_sum(0, data)
}

/// Enhanced checksum: inverted modulo-256 sum of the PID and data bytes
pub fn enhanced_checksum(pid: u8, data: &[u8]) -> u8 {
    invert_sum(u32::from(pid), data)
}

/// Compute the checksum for `mode`; `pid` is ignored in classic mode
pub fn compute(mode: ChecksumMode, pid: u8, data: &[u8]) -> u8 {
    match mode {
        ChecksumMode::Classic => classic_checksum(data),
        ChecksumMode::Enhanced => enhanced_checksum(pid, data),
    }
}

impl ChecksumMode {
    /// Compute this mode's checksum over `data`
    pub fn checksum(self, pid: u8, data: &[u8]) -> u8 {
        compute(self, pid, data)
    }
}

fn invert_sum(seed: u32, data: &[u8]) -> u8 {
    // Only the low byte matters, so wrapping on the wide accumulator is harmless
    let sum = data
        .iter()
        .fold(seed, |acc, &b| acc.wrapping_add(u32::from(b)));
    !((sum & 0xFF) as u8)
}
