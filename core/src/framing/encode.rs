use std::fmt::Write;

use crate::codec::encode_hex;
use crate::constants::{MARKER_LEN, MASK_MARKER, MSG_MARKER};
use crate::framing::types::{Field, Frame, FrameError};

fn push_marker(out: &mut String, marker: &[u8; MARKER_LEN]) {
    out.extend(marker.iter().map(|&b| b as char));
}

/// Encode a frame into canonical wire text.
///
/// Layout:
///
/// ```text
/// [ "mess=" ]
/// [ type (2 hex) ]
/// [ payload_len (2 hex) ]
/// [ data ((payload_len - 4) * 2 hex) ]
/// [ crc32 (8 hex, big-endian) ]
/// ```
///
/// The stored `crc32` is written as-is, so a frame with a wrong checksum
/// encodes faithfully (negative fixtures).
pub fn encode_frame(frame: &Frame) -> Result<String, FrameError> {
    let expected = Frame::data_len_for(frame.payload_len)?;
    if frame.data.len() != expected {
        return Err(FrameError::UnexpectedLength {
            field: Field::Payload,
            expected,
            actual: frame.data.len(),
        });
    }

    let mut out = String::with_capacity(MARKER_LEN + 4 + 2 * frame.data.len() + 8);
    push_marker(&mut out, &MSG_MARKER);
    // Writing into a String cannot fail.
    let _ = write!(out, "{:02X}{:02X}", frame.frame_type, frame.payload_len);
    out.push_str(&encode_hex(&frame.data));
    let _ = write!(out, "{:08X}", frame.crc32);
    Ok(out)
}

/// Encode the `mask=` unit.
pub fn encode_mask(mask: u32) -> String {
    let mut out = String::with_capacity(MARKER_LEN + 8);
    push_marker(&mut out, &MASK_MARKER);
    let _ = write!(out, "{:08X}", mask);
    out
}

/// Frame followed by its mask: one complete wire unit.
pub fn encode_unit(frame: &Frame, mask: u32) -> Result<String, FrameError> {
    let mut out = encode_frame(frame)?;
    out.push_str(&encode_mask(mask));
    Ok(out)
}
