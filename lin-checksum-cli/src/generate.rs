//! Random input generation
//!
//! Produces well-formed frame lines (`PID LEN data...`) for exercising the
//! decoder. A fixed seed gives a reproducible file.

use anyhow::{Context, Result};
use lin_frame_codec::to_hex_string;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Number of frames written when no count is given
pub const DEFAULT_FRAME_COUNT: usize = 5;

/// Largest data length a generated frame declares
const MAX_GENERATED_DATA_LEN: u8 = 8;

/// Build one random frame: any PID, LEN in 1..=8, LEN data bytes
pub fn random_frame<R: Rng>(rng: &mut R) -> Vec<u8> {
    let pid: u8 = rng.gen();
    let len = rng.gen_range(1..=MAX_GENERATED_DATA_LEN);

    let mut frame = Vec::with_capacity(2 + len as usize);
    frame.push(pid);
    frame.push(len);
    frame.extend((0..len).map(|_| rng.gen::<u8>()));
    frame
}

/// Render `count` random frames as hex lines
pub fn generate_lines<R: Rng>(rng: &mut R, count: usize) -> Vec<String> {
    (0..count)
        .map(|_| to_hex_string(&random_frame(rng)))
        .collect()
}

/// Write `count` random frames to `path`
pub fn write_frames(path: &Path, count: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {:?}", path))?;
    let mut out = BufWriter::new(file);

    for line in generate_lines(&mut rng, count) {
        writeln!(out, "{}", line)?;
    }
    out.flush()
        .with_context(|| format!("Failed to write output file: {:?}", path))?;

    log::info!("Generated {} frame(s) into {:?}", count, path);
    Ok(())
}
