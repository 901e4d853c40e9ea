use std::fmt;
use std::io;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::checksum::crc32;
use crate::codec::{encode_hex, HexError};
use crate::constants::{CHECKSUM_LEN, MAX_DATA_LEN};
use crate::types::ErrorCode;

/// Decoder states, traversed strictly in order once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeState {
    ExpectHeader,
    ReadType,
    ReadLength,
    ReadPayload,
    ReadChecksum,
    Done,
}

impl fmt::Display for DecodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DecodeState::ExpectHeader => "expect-header",
            DecodeState::ReadType     => "read-type",
            DecodeState::ReadLength   => "read-length",
            DecodeState::ReadPayload  => "read-payload",
            DecodeState::ReadChecksum => "read-checksum",
            DecodeState::Done         => "done",
        };
        f.write_str(name)
    }
}

/// Wire field being read when an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    MessageMarker,
    Type,
    Length,
    Payload,
    Checksum,
    MaskMarker,
    Mask,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::MessageMarker => "message marker",
            Field::Type          => "type",
            Field::Length        => "payload length",
            Field::Payload       => "payload",
            Field::Checksum      => "checksum",
            Field::MaskMarker    => "mask marker",
            Field::Mask          => "mask",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum FrameError {
    /// Marker bytes differ from the expected literal.
    #[error("{field} mismatch: expected {:?}, found {:?}", String::from_utf8_lossy(.expected), String::from_utf8_lossy(.found))]
    MarkerMismatch {
        field: Field,
        expected: [u8; 5],
        found: Vec<u8>,
    },

    /// Input ended part-way through a marker.
    #[error("truncated {field}: got {actual} of 5 bytes")]
    TruncatedMarker { field: Field, actual: usize },

    /// `payload_len` cannot cover the trailing checksum.
    #[error("payload length {payload_len} is shorter than the 4-byte checksum")]
    PayloadTooShort { payload_len: u8 },

    /// Input ended (or ran short) inside a field.
    #[error("unexpected length in {field}: expected {expected} bytes, got {actual}")]
    UnexpectedLength {
        field: Field,
        expected: usize,
        actual: usize,
    },

    /// Field text is not valid hex.
    #[error("conversion error in {field}: {source}")]
    Conversion {
        field: Field,
        #[source]
        source: HexError,
    },

    /// Payload buffer could not be allocated.
    #[error("allocation of {len} bytes failed")]
    Allocation { len: usize },

    /// Frame data does not fit in a one-byte payload length.
    #[error("data length {len} exceeds the 251-byte limit")]
    DataTooLong { len: usize },

    /// Underlying read failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl FrameError {
    pub fn code(&self) -> ErrorCode {
        match self {
            FrameError::MarkerMismatch { .. }
            | FrameError::TruncatedMarker { .. }
            | FrameError::PayloadTooShort { .. }
            | FrameError::DataTooLong { .. } => ErrorCode::MessageFormat,
            FrameError::UnexpectedLength { .. } => ErrorCode::FileLength,
            FrameError::Conversion { .. } => ErrorCode::MessageConversion,
            FrameError::Allocation { .. } => ErrorCode::MemoryAllocation,
            FrameError::Io(_) => ErrorCode::FileRead,
        }
    }
}

/// One decoded frame. Lives for exactly one pipeline iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Opaque tag, carried through unchanged.
    pub frame_type: u8,
    /// On-wire length: data plus the 4-byte checksum.
    pub payload_len: u8,
    /// Claimed checksum after decode; recomputed after the transform.
    pub crc32: u32,
    pub data: Vec<u8>,
}

impl Frame {
    /// Data length implied by an on-wire payload length.
    ///
    /// Rejects `payload_len < 4` instead of wrapping.
    pub fn data_len_for(payload_len: u8) -> Result<usize, FrameError> {
        (payload_len as usize)
            .checked_sub(CHECKSUM_LEN)
            .ok_or(FrameError::PayloadTooShort { payload_len })
    }

    /// Build a well-formed frame whose checksum matches `data`.
    pub fn with_checksum(frame_type: u8, data: Vec<u8>) -> Result<Self, FrameError> {
        if data.len() > MAX_DATA_LEN {
            return Err(FrameError::DataTooLong { len: data.len() });
        }
        Ok(Self {
            frame_type,
            payload_len: (data.len() + CHECKSUM_LEN) as u8,
            crc32: crc32(&data),
            data,
        })
    }

    #[inline]
    pub fn data_len(&self) -> usize {
        self.data.len()
    }

    pub fn snapshot(&self, index: u64, stage: SnapshotStage) -> FrameSnapshot {
        FrameSnapshot {
            index,
            stage,
            frame_type: self.frame_type,
            payload_length: self.payload_len,
            data_length: self.data.len(),
            crc32: self.crc32,
            data: self.data.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotStage {
    /// As decoded, before verification.
    Original,
    /// After padding, masking and checksum recompute.
    Updated,
}

impl SnapshotStage {
    pub fn title(self) -> &'static str {
        match self {
            SnapshotStage::Original => "Original message",
            SnapshotStage::Updated => "Updated message",
        }
    }
}

/// Report view of a frame at one pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameSnapshot {
    pub index: u64,
    pub stage: SnapshotStage,
    pub frame_type: u8,
    pub payload_length: u8,
    pub data_length: usize,
    #[serde(serialize_with = "hex_word")]
    pub crc32: u32,
    #[serde(serialize_with = "hex_bytes")]
    pub data: Vec<u8>,
}

fn hex_word<S: Serializer>(v: &u32, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format!("{:08X}", v))
}

fn hex_bytes<S: Serializer>(v: &[u8], s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&encode_hex(v))
}
