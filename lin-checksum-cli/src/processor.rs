//! Line processing loop
//!
//! Splits input text into numbered lines, drops comments and blank lines, and
//! hands every remaining line to the codec. Lines are independent, so the
//! batch is decoded on the rayon pool and collected back in file order.

use lin_frame_codec::{CodecError, DecodedFrame, LineDecoder};
use rayon::prelude::*;

/// What happened to one input line
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    Decoded(DecodedFrame),
    /// Blank or `#` comment line, never sent to the parser
    Skipped,
    Failed(CodecError),
}

/// Outcome of one line, numbered from 1
#[derive(Debug, Clone, PartialEq)]
pub struct LineResult {
    pub line_no: usize,
    pub outcome: LineOutcome,
}

/// Per-run counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub decoded: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn from_results(results: &[LineResult]) -> Self {
        results
            .iter()
            .fold(Self::default(), |mut summary, result| {
                match result.outcome {
                    LineOutcome::Decoded(_) => summary.decoded += 1,
                    LineOutcome::Skipped => summary.skipped += 1,
                    LineOutcome::Failed(_) => summary.failed += 1,
                }
                summary
            })
    }
}

/// True for lines the parser should never see: blank or starting with `#`
pub fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Decode every line of `text`
pub fn process_text(text: &str, decoder: &LineDecoder) -> Vec<LineResult> {
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .collect();

    lines
        .into_par_iter()
        .map(|(line_no, line)| {
            let outcome = if is_skippable(line) {
                LineOutcome::Skipped
            } else {
                match decoder.decode_line(line) {
                    Ok(frame) => LineOutcome::Decoded(frame),
                    Err(e) => LineOutcome::Failed(e),
                }
            };
            LineResult { line_no, outcome }
        })
        .collect()
}
