//! Integrity & transform stage.
//!
//! Order per frame: verify → pad → mask → recompute. A checksum mismatch is
//! fatal to the run.

pub mod types;
pub mod verify;
pub mod pad;
pub mod mask;

pub use types::{TransformError, TransformOutcome};
pub use verify::{recompute_checksum, verify_checksum};
pub use pad::pad_to_word;
pub use mask::apply_mask;

use crate::framing::Frame;

/// Run the whole stage on `frame`.
///
/// On success `frame.data` is word aligned and masked, and `frame.crc32`
/// holds the checksum of the transformed data.
pub fn transform_frame(frame: &mut Frame, mask: u32) -> Result<TransformOutcome, TransformError> {
    verify_checksum(frame)?;
    let padding = pad_to_word(&mut frame.data)?;
    let words_masked = apply_mask(&mut frame.data, mask);
    let crc32 = recompute_checksum(frame);
    Ok(TransformOutcome { padding, words_masked, crc32 })
}
