//! Report sinks.
//!
//! The pipeline hands every frame to a [`ReportSink`] twice (original and
//! updated snapshot), plus the mask, a fatal error line and the closing
//! telemetry. Formatting is the sink's business.

use std::fmt;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::framing::FrameSnapshot;
use crate::telemetry::TelemetrySnapshot;
use crate::types::{ErrorCategory, PipelineError};

/// Receiver of pipeline reports.
pub trait ReportSink {
    fn frame(&mut self, snapshot: &FrameSnapshot) -> Result<(), PipelineError>;

    fn mask(&mut self, _index: u64, _mask: u32) -> Result<(), PipelineError> {
        Ok(())
    }

    /// Fatal error, reported once before the run fails.
    fn error(&mut self, err: &PipelineError) -> Result<(), PipelineError>;

    fn finish(&mut self, _telemetry: &TelemetrySnapshot) -> Result<(), PipelineError> {
        Ok(())
    }

    fn flush(&mut self) -> Result<(), PipelineError> {
        Ok(())
    }
}

impl<T: ReportSink + ?Sized> ReportSink for Box<T> {
    fn frame(&mut self, snapshot: &FrameSnapshot) -> Result<(), PipelineError> {
        (**self).frame(snapshot)
    }
    fn mask(&mut self, index: u64, mask: u32) -> Result<(), PipelineError> {
        (**self).mask(index, mask)
    }
    fn error(&mut self, err: &PipelineError) -> Result<(), PipelineError> {
        (**self).error(err)
    }
    fn finish(&mut self, telemetry: &TelemetrySnapshot) -> Result<(), PipelineError> {
        (**self).finish(telemetry)
    }
    fn flush(&mut self) -> Result<(), PipelineError> {
        (**self).flush()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable dump, one block per snapshot.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => f.write_str("text"),
            ReportFormat::Json => f.write_str("json"),
        }
    }
}

/// Build the sink for `format` over `out`.
pub fn report_for<W: Write + 'static>(format: ReportFormat, out: W) -> Box<dyn ReportSink> {
    match format {
        ReportFormat::Text => Box::new(TextReport::new(out)),
        ReportFormat::Json => Box::new(JsonLinesReport::new(out)),
    }
}

// ================= Text =================

/// Plain text dump:
///
/// ```text
/// [0] Original message:
///   Type: 1
///   Payload length: 8
///   Data length: 4
///   CRC32: AABBCCDD
///   Dump:  12 34 56 78
/// ```
pub struct TextReport<W: Write> {
    out: W,
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for TextReport<W> {
    fn frame(&mut self, s: &FrameSnapshot) -> Result<(), PipelineError> {
        let dump = s
            .data
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect::<Vec<_>>()
            .join(" ");

        writeln!(self.out, "[{}] {}:", s.index, s.stage.title()).map_err(PipelineError::Report)?;
        writeln!(self.out, "  Type: {}", s.frame_type).map_err(PipelineError::Report)?;
        writeln!(self.out, "  Payload length: {}", s.payload_length).map_err(PipelineError::Report)?;
        writeln!(self.out, "  Data length: {}", s.data_length).map_err(PipelineError::Report)?;
        writeln!(self.out, "  CRC32: {:08X}", s.crc32).map_err(PipelineError::Report)?;
        writeln!(self.out, "  Dump:  {}", dump).map_err(PipelineError::Report)?;
        Ok(())
    }

    fn mask(&mut self, index: u64, mask: u32) -> Result<(), PipelineError> {
        writeln!(self.out, "[{}] Mask: {:08X}", index, mask).map_err(PipelineError::Report)
    }

    fn error(&mut self, err: &PipelineError) -> Result<(), PipelineError> {
        writeln!(self.out, "{}", err.report_line()).map_err(PipelineError::Report)
    }

    fn flush(&mut self) -> Result<(), PipelineError> {
        self.out.flush().map_err(PipelineError::Report)
    }
}

// ================= JSON lines =================

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
enum ReportEvent<'a> {
    Frame(&'a FrameSnapshot),
    Mask {
        index: u64,
        mask: String,
    },
    Error {
        code: i32,
        category: ErrorCategory,
        message: String,
    },
    Summary(&'a TelemetrySnapshot),
}

pub struct JsonLinesReport<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, event: &ReportEvent<'_>) -> Result<(), PipelineError> {
        serde_json::to_writer(&mut self.out, event)?;
        self.out.write_all(b"\n").map_err(PipelineError::Report)
    }
}

impl<W: Write> ReportSink for JsonLinesReport<W> {
    fn frame(&mut self, snapshot: &FrameSnapshot) -> Result<(), PipelineError> {
        self.emit(&ReportEvent::Frame(snapshot))
    }

    fn mask(&mut self, index: u64, mask: u32) -> Result<(), PipelineError> {
        self.emit(&ReportEvent::Mask { index, mask: format!("{:08X}", mask) })
    }

    fn error(&mut self, err: &PipelineError) -> Result<(), PipelineError> {
        let code = err.code();
        self.emit(&ReportEvent::Error {
            code: code.as_i32(),
            category: code.category(),
            message: err.report_line(),
        })
    }

    fn finish(&mut self, telemetry: &TelemetrySnapshot) -> Result<(), PipelineError> {
        self.emit(&ReportEvent::Summary(telemetry))
    }

    fn flush(&mut self) -> Result<(), PipelineError> {
        self.out.flush().map_err(PipelineError::Report)
    }
}

// ================= Memory =================

/// Collects everything in memory (API callers, tests).
#[derive(Debug, Default, Clone)]
pub struct MemoryReport {
    pub snapshots: Vec<FrameSnapshot>,
    pub masks: Vec<(u64, u32)>,
    pub errors: Vec<String>,
    pub summary: Option<TelemetrySnapshot>,
}

impl MemoryReport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportSink for MemoryReport {
    fn frame(&mut self, snapshot: &FrameSnapshot) -> Result<(), PipelineError> {
        self.snapshots.push(snapshot.clone());
        Ok(())
    }

    fn mask(&mut self, index: u64, mask: u32) -> Result<(), PipelineError> {
        self.masks.push((index, mask));
        Ok(())
    }

    fn error(&mut self, err: &PipelineError) -> Result<(), PipelineError> {
        self.errors.push(err.report_line());
        Ok(())
    }

    fn finish(&mut self, telemetry: &TelemetrySnapshot) -> Result<(), PipelineError> {
        self.summary = Some(telemetry.clone());
        Ok(())
    }
}
