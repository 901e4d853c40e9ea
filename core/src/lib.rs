//! hexframe-core
//!
//! Decoder for hex-encoded, CRC-32 protected frames with an out-of-band
//! AND mask. Pure Rust, single pass, single threaded.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Building blocks
pub mod codec;
pub mod checksum;
pub mod framing;
pub mod transform;
pub mod telemetry;

// Stream layers
pub mod io;
pub mod report;
pub mod pipeline;
pub mod api;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::api::{process_files, process_stream, ApiConfig, ProcessOutcome};
    pub use crate::checksum::crc32;
    pub use crate::codec::{decode_hex, HexMode};
    pub use crate::framing::{Frame, FrameDecoder, FrameSnapshot, SnapshotStage};
    pub use crate::io::{InputSource, OutputSink};
    pub use crate::pipeline::{run_pipeline, PipelineConfig};
    pub use crate::report::{MemoryReport, ReportFormat, ReportSink};
    pub use crate::telemetry::TelemetrySnapshot;
    pub use crate::types::{ErrorCategory, ErrorCode, PipelineError};
}
