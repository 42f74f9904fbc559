//! Standalone LIN line decoder tool
//!
//! Decodes hex frame lines given on the command line and prints each frame
//! with its checksum and a short breakdown.
//!
//! Usage:
//!   decode_line [--enhanced] [--verbose] "<line>" ["<line>" ...]
//!
//! Example:
//!   decode_line --enhanced "3A 04 11 22 33 44" "10 05 20"

use lin_frame_codec::{to_hex_string, ChecksumMode, CodecConfig, LineDecoder};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut mode = ChecksumMode::Classic;
    let mut verbose = false;
    let mut lines = Vec::new();

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--enhanced" => mode = ChecksumMode::Enhanced,
            "--classic" => mode = ChecksumMode::Classic,
            "--verbose" | "-v" => verbose = true,
            _ => lines.push(arg),
        }
    }

    if lines.is_empty() {
        eprintln!("Usage: decode_line [--enhanced] [--verbose] \"<line>\" ...");
        std::process::exit(1);
    }

    let decoder = LineDecoder::with_config(CodecConfig::new().with_mode(mode));
    println!("=== LIN Line Decoder ({} checksum) ===\n", mode);

    let mut failed = 0;
    for (i, line) in lines.iter().enumerate() {
        match decoder.decode_line(line) {
            Ok(frame) => {
                println!("[{}] {}", i + 1, frame);
                if verbose {
                    println!("    PID:      0x{:02X}", frame.pid());
                    println!("    LEN:      {}", frame.declared_len());
                    println!("    Data:     {}", to_hex_string(frame.data()));
                    println!("    Checksum: 0x{:02X}", frame.checksum());
                }
            }
            Err(e) => {
                failed += 1;
                eprintln!("[{}] Error decoding {:?}: {}", i + 1, line, e);
            }
        }
    }

    println!("\n=== SUMMARY ===");
    println!("Lines decoded: {}", lines.len() - failed);
    println!("Lines failed:  {}", failed);

    Ok(())
}
