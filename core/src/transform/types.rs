use thiserror::Error;

use crate::types::ErrorCode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Decoded payload does not match the claimed checksum.
    #[error("checksum mismatch: frame claims {expected:08X}, computed {actual:08X}")]
    ChecksumMismatch { expected: u32, actual: u32 },

    /// Padding could not grow the payload buffer.
    #[error("allocation of {len} padding bytes failed")]
    Allocation { len: usize },
}

impl TransformError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TransformError::ChecksumMismatch { .. } => ErrorCode::MessageChecksum,
            TransformError::Allocation { .. } => ErrorCode::MemoryAllocation,
        }
    }
}

/// What the stage did to one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformOutcome {
    /// Zero bytes appended to reach a word boundary.
    pub padding: usize,
    /// Words rewritten by the mask.
    pub words_masked: usize,
    /// Checksum of the transformed payload.
    pub crc32: u32,
}
