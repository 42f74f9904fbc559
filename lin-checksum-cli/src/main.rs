//! LIN Checksum CLI Application
//!
//! This is the command-line interface for the LIN frame codec.
//! It uses the lin-frame-codec library and adds:
//! - Input file reading with comment/blank-line skipping
//! - Per-line reporting of frames and failures
//! - Optional output file (TXT/JSON)
//! - Random input generation

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use lin_frame_codec::{ChecksumMode, LineDecoder};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

mod config;
mod generate;
mod processor;
mod report;

use config::{AppConfig, OutputFormat, DEFAULT_INPUT};
use processor::{LineOutcome, RunSummary};

/// LIN Checksum - Compute LIN frame checksums from hex records
#[derive(Parser, Debug)]
#[command(name = "lin-checksum")]
#[command(about = "Compute classic/enhanced LIN checksums for hex frame records", long_about = None)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Input file with one hex frame per line (default: inputs.txt)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Checksum mode: classic or enhanced
    #[arg(short, long, value_name = "MODE")]
    mode: Option<ChecksumMode>,

    /// Also write results to an output file
    #[arg(short, long)]
    write: bool,

    /// Output file (implies --write; default: <input>_checksums.txt)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output file format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Maximum number of bytes accepted per line
    #[arg(long, value_name = "COUNT", value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(2..))]
    max_bytes: Option<usize>,

    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write random well-formed frames to a file
    Generate {
        /// Number of frames to generate
        #[arg(short = 'n', long, default_value_t = generate::DEFAULT_FRAME_COUNT)]
        count: usize,

        /// Destination file
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_INPUT)]
        output: PathBuf,

        /// Seed for a reproducible file
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::debug!("LIN Checksum CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using codec library v{}", lin_frame_codec::VERSION);

    match &args.command {
        Some(Command::Generate {
            count,
            output,
            seed,
        }) => generate::write_frames(output, *count, *seed),
        None => {
            let config = resolve_config(&args)?;
            let summary = process_mode(&config)?;
            log::info!(
                "Done: {} decoded, {} skipped, {} failed",
                summary.decoded,
                summary.skipped,
                summary.failed
            );
            Ok(())
        }
    }
}

/// Merge the optional config file with command-line overrides
fn resolve_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    if let Some(input) = &args.input {
        config.input.file = Some(input.clone());
    }
    if let Some(mode) = args.mode {
        config.checksum.mode = mode;
    }
    if let Some(max_bytes) = args.max_bytes {
        config.checksum.max_bytes = max_bytes;
    }
    if args.write {
        config.output.write = true;
    }
    if let Some(output) = &args.output {
        config.output.write = true;
        config.output.path = Some(output.clone());
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }

    log::debug!("Effective configuration: {:?}", config);
    Ok(config)
}

/// Decode every line of the input file, print results, optionally write them
fn process_mode(config: &AppConfig) -> Result<RunSummary> {
    let input_path = config.input_path();
    let mode = config.checksum.mode;
    log::info!("Processing {:?} ({} checksum)", input_path, mode);

    let text = read_input(&input_path)?;
    let decoder = LineDecoder::with_config(config.codec_config());
    let results = processor::process_text(&text, &decoder);

    for result in &results {
        match &result.outcome {
            LineOutcome::Decoded(frame) => {
                println!("{}", report::console_line(result.line_no, frame))
            }
            LineOutcome::Failed(e) => log::warn!("Skipping line {}: {}", result.line_no, e),
            LineOutcome::Skipped => log::trace!("Line {} skipped", result.line_no),
        }
    }

    if config.output.write {
        write_output(&config.output_path(), &results, config.output.format, mode)?;
    }

    Ok(RunSummary::from_results(&results))
}

/// Read the input file, falling back to Latin-1 for non-UTF-8 content
fn read_input(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Cannot open input file: {:?}", path))?;

    Ok(String::from_utf8(bytes).unwrap_or_else(|e| {
        log::warn!("Input file is not UTF-8, reading it as Latin-1");
        e.into_bytes().iter().map(|&b| b as char).collect()
    }))
}

fn write_output(
    path: &Path,
    results: &[processor::LineResult],
    format: OutputFormat,
    mode: ChecksumMode,
) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {:?}", path))?;
    let mut out = BufWriter::new(file);

    let written = report::write_report(&mut out, results, format, mode, Utc::now())
        .with_context(|| format!("Failed to write output file: {:?}", path))?;
    log::info!("Wrote {} frame(s) to {:?}", written, path);
    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
