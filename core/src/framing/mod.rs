//! Wire framing for hex frames.
//!
//! Responsibilities:
//! - Define the decoded frame and its snapshots
//! - Decode frames and masks with strict validation (state machine)
//! - Encode canonical frame text (fixtures, round trips)
//!
//! Non-responsibilities:
//! - Checksum verification and masking (see `transform`)
//! - Opening files
//! - Report formatting

pub mod types;
pub mod encode;
pub mod decode;

pub use types::{
    DecodeState,
    Field,
    Frame,
    FrameError,
    FrameSnapshot,
    SnapshotStage,
};
pub use decode::{read_mask, FrameDecoder};
pub use encode::{encode_frame, encode_mask, encode_unit};
