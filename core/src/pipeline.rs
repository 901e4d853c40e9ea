//! Pipeline driver.
//!
//! One frame per iteration: decode → report original → read mask → verify →
//! pad → mask → recompute → report updated. End of input at a frame boundary
//! ends the run successfully; every other failure ends it with an error,
//! reported once through the sink.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::codec::HexMode;
use crate::framing::{FrameDecoder, SnapshotStage};
use crate::io::ByteSource;
use crate::report::ReportSink;
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::transform::{apply_mask, pad_to_word, recompute_checksum, verify_checksum, TransformOutcome};
use crate::types::PipelineError;

#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    pub hex_mode: HexMode,
    /// Hand the telemetry snapshot to the sink when the run succeeds.
    pub emit_summary: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            hex_mode: HexMode::Strict,
            emit_summary: false,
        }
    }
}

/// Run the pipeline over `source`, reporting into `sink`.
///
/// # Returns
/// - `Ok(TelemetrySnapshot)` once the input is exhausted at a frame boundary.
/// - `Err(PipelineError)` on the first failure; the sink has already received
///   the error line.
pub fn run_pipeline<S, R>(
    source: S,
    sink: &mut R,
    config: &PipelineConfig,
) -> Result<TelemetrySnapshot, PipelineError>
where
    S: ByteSource,
    R: ReportSink + ?Sized,
{
    let mut counters = TelemetryCounters::default();
    let mut timer = TelemetryTimer::new();
    let mut decoder = FrameDecoder::with_mode(source, config.hex_mode);

    info!(hex_mode = %config.hex_mode, "pipeline start");
    let result = drive(&mut decoder, sink, &mut counters, &mut timer);
    timer.finish();
    let snapshot = TelemetrySnapshot::from(&counters, &timer);

    match result {
        Ok(()) => {
            if config.emit_summary {
                sink.finish(&snapshot)?;
            }
            sink.flush()?;
            info!(
                frames = snapshot.frames(),
                elapsed_us = snapshot.elapsed.as_micros() as u64,
                "all frames processed"
            );
            Ok(snapshot)
        }
        Err(err) => {
            warn!(
                code = err.code().as_i32(),
                category = %err.category(),
                state = %decoder.state(),
                frames = counters.frames_transformed,
                "pipeline aborted: {}", err
            );
            // The original error wins over a failing sink.
            if let Err(report_err) = sink.error(&err).and_then(|_| sink.flush()) {
                warn!("error report could not be written: {}", report_err);
            }
            Err(err)
        }
    }
}

fn drive<S, R>(
    decoder: &mut FrameDecoder<S>,
    sink: &mut R,
    counters: &mut TelemetryCounters,
    timer: &mut TelemetryTimer,
) -> Result<(), PipelineError>
where
    S: ByteSource,
    R: ReportSink + ?Sized,
{
    let mut index = 0u64;

    loop {
        let t = Instant::now();
        let decoded = decoder.decode_next();
        timer.add_stage_time(Stage::Decode, t.elapsed());

        let Some(mut frame) = decoded? else {
            debug!(frames = index, "end of stream");
            return Ok(());
        };
        counters.add_decoded(frame.data_len());

        timer.time(Stage::Report, || sink.frame(&frame.snapshot(index, SnapshotStage::Original)))?;

        let mask = timer.time(Stage::ReadMask, || decoder.read_mask())?;
        counters.add_mask();
        sink.mask(index, mask)?;

        if let Err(e) = timer.time(Stage::Verify, || verify_checksum(&frame)) {
            counters.add_checksum_failure();
            return Err(e.into());
        }

        let padding = timer.time(Stage::Pad, || pad_to_word(&mut frame.data))?;
        let words_masked = timer.time(Stage::Mask, || apply_mask(&mut frame.data, mask));
        let crc32 = timer.time(Stage::Recompute, || recompute_checksum(&mut frame));
        counters.add_transform(&TransformOutcome { padding, words_masked, crc32 });

        timer.time(Stage::Report, || sink.frame(&frame.snapshot(index, SnapshotStage::Updated)))?;

        info!(
            index,
            frame_type = frame.frame_type,
            data_len = frame.data_len(),
            padding,
            words_masked,
            crc32 = %format!("{:08X}", crc32),
            "frame transformed"
        );
        index += 1;
    }
}
