use byteorder::{BigEndian, ByteOrder};
use tracing::{debug, trace};

use crate::codec::{decode_hex_with, HexMode};
use crate::constants::{
    BYTE_FIELD_HEX_LEN, HEX_CHARS_PER_BYTE, MARKER_LEN, MASK_MARKER, MSG_MARKER, WORD_FIELD_HEX_LEN,
};
use crate::framing::types::{DecodeState, Field, Frame, FrameError};
use crate::io::{ByteSource, Fill};

/// Result of reading a marker at a frame boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkerRead {
    Matched,
    /// Zero bytes were available.
    Eof,
}

fn read_marker<S: ByteSource + ?Sized>(
    source: &mut S,
    marker: [u8; MARKER_LEN],
    field: Field,
) -> Result<MarkerRead, FrameError> {
    let mut buf = [0u8; MARKER_LEN];
    match source.read_chunk(&mut buf)? {
        Fill::Eof => Ok(MarkerRead::Eof),
        Fill::Short(actual) => Err(FrameError::TruncatedMarker { field, actual }),
        Fill::Complete if buf == marker => Ok(MarkerRead::Matched),
        Fill::Complete => Err(FrameError::MarkerMismatch {
            field,
            expected: marker,
            found: buf.to_vec(),
        }),
    }
}

/// Read exactly `hex.len()` characters and decode them into `out`.
fn read_hex_into<S: ByteSource + ?Sized>(
    source: &mut S,
    field: Field,
    hex: &mut [u8],
    out: &mut [u8],
    mode: HexMode,
) -> Result<(), FrameError> {
    let actual = match source.read_chunk(hex)? {
        Fill::Complete => hex.len(),
        Fill::Eof => 0,
        Fill::Short(n) => n,
    };
    if actual != hex.len() {
        return Err(FrameError::UnexpectedLength { field, expected: hex.len(), actual });
    }

    decode_hex_with(hex, out, mode).map_err(|source| FrameError::Conversion { field, source })?;
    Ok(())
}

fn read_u8_field<S: ByteSource + ?Sized>(source: &mut S, field: Field, mode: HexMode) -> Result<u8, FrameError> {
    let mut hex = [0u8; BYTE_FIELD_HEX_LEN];
    let mut out = [0u8; 1];
    read_hex_into(source, field, &mut hex, &mut out, mode)?;
    Ok(out[0])
}

/// 8 hex characters, most significant byte first.
fn read_u32_field<S: ByteSource + ?Sized>(source: &mut S, field: Field, mode: HexMode) -> Result<u32, FrameError> {
    let mut hex = [0u8; WORD_FIELD_HEX_LEN];
    let mut out = [0u8; 4];
    read_hex_into(source, field, &mut hex, &mut out, mode)?;
    Ok(BigEndian::read_u32(&out))
}

fn read_payload<S: ByteSource + ?Sized>(source: &mut S, data_len: usize, mode: HexMode) -> Result<Vec<u8>, FrameError> {
    let hex_len = data_len * HEX_CHARS_PER_BYTE;

    let mut hex = Vec::new();
    hex.try_reserve_exact(hex_len)
        .map_err(|_| FrameError::Allocation { len: hex_len })?;
    hex.resize(hex_len, 0);

    let mut data = Vec::new();
    data.try_reserve_exact(data_len)
        .map_err(|_| FrameError::Allocation { len: data_len })?;
    data.resize(data_len, 0);

    read_hex_into(source, Field::Payload, &mut hex, &mut data, mode)?;
    Ok(data)
}

/// Read the mandatory `mask=` unit that follows every frame.
///
/// # Errors
/// - `UnexpectedLength` if the input ends before the marker or inside the value.
/// - `TruncatedMarker` / `MarkerMismatch` for a partial or wrong marker.
/// - `Conversion` for non-hex mask text.
pub fn read_mask<S: ByteSource + ?Sized>(source: &mut S, mode: HexMode) -> Result<u32, FrameError> {
    if read_marker(source, MASK_MARKER, Field::MaskMarker)? == MarkerRead::Eof {
        return Err(FrameError::UnexpectedLength {
            field: Field::MaskMarker,
            expected: MARKER_LEN,
            actual: 0,
        });
    }
    let mask = read_u32_field(source, Field::Mask, mode)?;
    debug!(mask = %format!("{:08X}", mask), "mask read");
    Ok(mask)
}

/// Frame decoder over a [`ByteSource`].
///
/// Each call to [`FrameDecoder::decode_next`] walks the states
/// `ExpectHeader → ReadType → ReadLength → ReadPayload → ReadChecksum → Done`
/// once, with no backtracking. On failure [`FrameDecoder::state`] names the
/// state that failed.
#[derive(Debug)]
pub struct FrameDecoder<S> {
    source: S,
    mode: HexMode,
    state: DecodeState,
    frames: u64,
}

impl<S: ByteSource> FrameDecoder<S> {
    pub fn new(source: S) -> Self {
        Self::with_mode(source, HexMode::Strict)
    }

    pub fn with_mode(source: S, mode: HexMode) -> Self {
        Self {
            source,
            mode,
            state: DecodeState::ExpectHeader,
            frames: 0,
        }
    }

    pub fn state(&self) -> DecodeState {
        self.state
    }

    /// Frames fully decoded so far.
    pub fn frames_decoded(&self) -> u64 {
        self.frames
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    /// Decode the next frame.
    ///
    /// # Returns
    /// - `Ok(Some(frame))` once all five fields were read.
    /// - `Ok(None)` when the input is exhausted at a frame boundary.
    /// - `Err(FrameError)` for anything else, including a partial marker.
    pub fn decode_next(&mut self) -> Result<Option<Frame>, FrameError> {
        self.state = DecodeState::ExpectHeader;

        let mut frame_type = 0u8;
        let mut payload_len = 0u8;
        let mut data_len = 0usize;
        let mut data = Vec::new();
        let mut crc32 = 0u32;

        loop {
            trace!(state = %self.state, "decoder step");
            self.state = match self.state {
                DecodeState::ExpectHeader => {
                    self.source.skip_line_breaks()?;
                    match read_marker(&mut self.source, MSG_MARKER, Field::MessageMarker)? {
                        MarkerRead::Eof => return Ok(None),
                        MarkerRead::Matched => DecodeState::ReadType,
                    }
                }
                DecodeState::ReadType => {
                    frame_type = read_u8_field(&mut self.source, Field::Type, self.mode)?;
                    DecodeState::ReadLength
                }
                DecodeState::ReadLength => {
                    payload_len = read_u8_field(&mut self.source, Field::Length, self.mode)?;
                    data_len = Frame::data_len_for(payload_len)?;
                    DecodeState::ReadPayload
                }
                DecodeState::ReadPayload => {
                    data = read_payload(&mut self.source, data_len, self.mode)?;
                    DecodeState::ReadChecksum
                }
                DecodeState::ReadChecksum => {
                    crc32 = read_u32_field(&mut self.source, Field::Checksum, self.mode)?;
                    DecodeState::Done
                }
                DecodeState::Done => break,
            };
        }

        self.frames += 1;
        debug!(
            frame_type,
            payload_len,
            data_len,
            crc32 = %format!("{:08X}", crc32),
            "frame decoded"
        );

        Ok(Some(Frame {
            frame_type,
            payload_len,
            crc32,
            data,
        }))
    }

    /// Read the mask unit following the frame just decoded.
    pub fn read_mask(&mut self) -> Result<u32, FrameError> {
        read_mask(&mut self.source, self.mode)
    }
}
