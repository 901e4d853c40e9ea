//! telemetry/counters.rs
//! Mutable counters used during a pipeline run.
//!
//! Converted into an immutable `TelemetrySnapshot` at the end of the run.
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::transform::TransformOutcome;

/// Deterministic counters collected during stream processing
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    pub frames_decoded: u64,
    pub frames_transformed: u64,
    pub frames_padded: u64,
    pub masks_read: u64,
    pub checksum_failures: u64,
    pub bytes_data: u64,
    pub bytes_padding: u64,
    pub words_masked: u64,
}

impl TelemetryCounters {
    /// Record one decoded frame carrying `data_len` payload bytes.
    pub fn add_decoded(&mut self, data_len: usize) {
        self.frames_decoded += 1;
        self.bytes_data += data_len as u64;
    }

    pub fn add_mask(&mut self) {
        self.masks_read += 1;
    }

    pub fn add_checksum_failure(&mut self) {
        self.checksum_failures += 1;
    }

    /// Record a completed transform.
    pub fn add_transform(&mut self, outcome: &TransformOutcome) {
        self.frames_transformed += 1;
        if outcome.padding > 0 {
            self.frames_padded += 1;
            self.bytes_padding += outcome.padding as u64;
        }
        self.words_masked += outcome.words_masked as u64;
    }

    pub fn merge(&mut self, other: &TelemetryCounters) {
        self.frames_decoded += other.frames_decoded;
        self.frames_transformed += other.frames_transformed;
        self.frames_padded += other.frames_padded;
        self.masks_read += other.masks_read;
        self.checksum_failures += other.checksum_failures;
        self.bytes_data += other.bytes_data;
        self.bytes_padding += other.bytes_padding;
        self.words_masked += other.words_masked;
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
