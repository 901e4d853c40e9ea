//! hexframe CLI
//!
//! Usage:
//!   hexframe <INPUT> <OUTPUT> [--format text|json] [--lenient-hex]
//!                             [--telemetry <PATH>] [-v]
//!
//! Exit code 0 when every frame decoded, verified and transformed; 1 otherwise.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use hexframe_core::api::{process_files, ApiConfig};
use hexframe_core::codec::HexMode;
use hexframe_core::report::ReportFormat;
use hexframe_core::telemetry::TelemetrySnapshot;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for ReportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => ReportFormat::Text,
            Format::Json => ReportFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "hexframe",
    version,
    about = "Decode hex frames, verify their CRC-32 and apply the mask"
)]
struct Args {
    /// Input file with `mess=...mask=...` units
    input: PathBuf,

    /// Report file (created or truncated)
    output: PathBuf,

    /// Report layout
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Treat non-hex characters leniently instead of failing
    #[arg(long)]
    lenient_hex: bool,

    /// Write the run telemetry as JSON to this path
    #[arg(long)]
    telemetry: Option<PathBuf>,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn write_telemetry(path: &Path, telemetry: &TelemetrySnapshot) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, telemetry)
        .with_context(|| format!("writing telemetry to {}", path.display()))?;
    out.flush()?;
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let config = ApiConfig {
        hex_mode: if args.lenient_hex { HexMode::Lenient } else { HexMode::Strict },
        report_format: args.format.into(),
        emit_summary: true,
    };

    info!(
        input = %args.input.display(),
        output = %args.output.display(),
        format = %config.report_format,
        "processing"
    );

    let outcome = process_files(&args.input, &args.output, &config).map_err(|e| {
        error!("{}", e.report_line());
        anyhow::Error::new(e)
    })?;

    if let Some(path) = &args.telemetry {
        write_telemetry(path, &outcome.telemetry)?;
    }

    info!(frames = outcome.telemetry.frames(), "all messages parsed successfully");
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("hexframe: {:#}", e);
            ExitCode::from(1)
        }
    }
}
