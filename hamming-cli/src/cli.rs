use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use hamming::{DEFAULT_CHUNK_SIZE, DistanceEngine, EngineConfig, SourceDescriptor, output};

use crate::logging;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Hamming distance between two literal strings, text files or binary files.
///
/// Rooted paths are read as files (`.txt` in memory, anything else in chunks);
/// everything else is compared as literal text.
#[derive(Debug, Parser)]
#[command(name = "hamming", version)]
pub struct Cli {
    /// First source: literal text or a rooted path to a file
    pub source1: Option<String>,

    /// Second source: literal text or a rooted path to a file
    pub source2: Option<String>,

    /// Bytes read from each file per chunk when streaming binary files
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse arguments, run one comparison and print it to stdout.
///
/// Returns whether the distance was computed.
pub fn run() -> Result<bool> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let mut stdout = std::io::stdout().lock();
    execute(&cli, &mut stdout)
}

fn execute(cli: &Cli, out: &mut dyn Write) -> Result<bool> {
    let first = SourceDescriptor::new(cli.source1.clone().unwrap_or_default());
    let second = SourceDescriptor::new(cli.source2.clone().unwrap_or_default());
    let engine = DistanceEngine::new(EngineConfig::with_chunk_size(cli.chunk_size));

    tracing::debug!(chunk_size = engine.config().chunk_size, "starting comparison");
    let result = engine
        .compute(&first, &second)
        .context("comparison aborted")?;

    match cli.format {
        OutputFormat::Json => output::write_json(&result, out)?,
        OutputFormat::Human => {
            writeln!(out, "HAMMING DISTANCE CALCULATOR")?;
            writeln!(out)?;
            writeln!(out, "  Input source 1 : {first}")?;
            writeln!(out, "  Input source 2 : {second}")?;
            writeln!(out)?;
            output::write_human(&result, out)?;
            writeln!(out)?;
            if result.is_ok() {
                writeln!(out, "{}", "\u{2713} Sources compared".green().bold())?;
            } else {
                let line = format!("\u{2717} {}", result.status);
                writeln!(out, "{}", line.red().bold())?;
            }
        }
    }

    Ok(result.is_ok())
}
