//! Stable public entry points.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::codec::HexMode;
use crate::io::{open_input, open_output, InputSource, OutputSink};
use crate::pipeline::{run_pipeline, PipelineConfig};
use crate::report::{report_for, ReportFormat};
use crate::telemetry::TelemetrySnapshot;
use crate::types::PipelineError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Hex parsing policy for every field.
    pub hex_mode: HexMode,
    /// Layout of the report written to the output sink.
    pub report_format: ReportFormat,
    /// Append the telemetry summary to the report (JSON format only renders it).
    pub emit_summary: bool,
}

impl ApiConfig {
    pub fn pipeline(&self) -> PipelineConfig {
        PipelineConfig {
            hex_mode: self.hex_mode,
            emit_summary: self.emit_summary,
        }
    }
}

/// Result of [`process_stream`].
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    pub telemetry: TelemetrySnapshot,
    /// Captured report when the output sink was [`OutputSink::Memory`].
    pub output: Option<Vec<u8>>,
}

/// Decode, verify and transform every frame of `input`, reporting to `output`.
pub fn process_stream(
    input: InputSource,
    output: OutputSink,
    config: &ApiConfig,
) -> Result<ProcessOutcome, PipelineError> {
    let reader = open_input(input)?;
    let (writer, maybe_buf) = open_output(output)?;

    let mut sink = report_for(config.report_format, writer);
    let telemetry = run_pipeline(reader, &mut sink, &config.pipeline())?;
    drop(sink);

    let output = match maybe_buf {
        Some(buf) => {
            let guard = buf
                .lock()
                .map_err(|_| PipelineError::InvalidArguments("report buffer lock poisoned".into()))?;
            Some(guard.clone())
        }
        None => None,
    };

    Ok(ProcessOutcome { telemetry, output })
}

/// File-to-file convenience used by the CLI.
pub fn process_files(input: &Path, output: &Path, config: &ApiConfig) -> Result<ProcessOutcome, PipelineError> {
    if input.as_os_str().is_empty() || output.as_os_str().is_empty() {
        return Err(PipelineError::InvalidArguments(
            "input and output paths must not be empty".into(),
        ));
    }
    process_stream(
        InputSource::File(input.to_path_buf()),
        OutputSink::File(output.to_path_buf()),
        config,
    )
}
