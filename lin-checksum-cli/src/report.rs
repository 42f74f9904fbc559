//! Report generation
//!
//! Console lines carry a `Line N:` prefix. Output files come in two formats:
//! `txt` (re-readable hex, one frame per line, `#` header) and `json`
//! (one object per frame).

use crate::config::OutputFormat;
use crate::processor::{LineOutcome, LineResult};
use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use lin_frame_codec::{ChecksumMode, DecodedFrame};
use serde::Serialize;
use std::io::Write;

/// One frame in a JSON report
#[derive(Debug, Serialize)]
struct JsonRecord<'a> {
    line: usize,
    pid: u8,
    len: u8,
    data: &'a [u8],
    bytes: &'a [u8],
    checksum: u8,
    mode: ChecksumMode,
}

impl<'a> JsonRecord<'a> {
    fn new(line: usize, frame: &'a DecodedFrame) -> Self {
        Self {
            line,
            pid: frame.pid(),
            len: frame.declared_len(),
            data: frame.data(),
            bytes: frame.bytes(),
            checksum: frame.checksum(),
            mode: frame.mode(),
        }
    }
}

/// Console form of a decoded line
pub fn console_line(line_no: usize, frame: &DecodedFrame) -> String {
    format!("Line {}: {}", line_no, frame.render())
}

/// Write every decoded frame of a run to `out`
///
/// Returns the number of frames written.
pub fn write_report<W: Write>(
    out: &mut W,
    results: &[LineResult],
    format: OutputFormat,
    mode: ChecksumMode,
    generated_at: DateTime<Utc>,
) -> Result<usize> {
    if format == OutputFormat::Txt {
        writeln!(
            out,
            "# lin-checksum v{} mode={} generated={}",
            env!("CARGO_PKG_VERSION"),
            mode,
            generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        )?;
    }

    let mut written = 0;
    for result in results {
        let LineOutcome::Decoded(frame) = &result.outcome else {
            continue;
        };

        match format {
            OutputFormat::Txt => writeln!(out, "{}", frame.render())?,
            OutputFormat::Json => {
                let record = serde_json::to_string(&JsonRecord::new(result.line_no, frame))
                    .context("Failed to serialize frame")?;
                writeln!(out, "{}", record)?;
            }
        }
        written += 1;
    }

    out.flush()?;
    Ok(written)
}
