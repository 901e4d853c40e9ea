use crate::codec::types::{HexError, HexMode};
use crate::constants::HEX_CHARS_PER_BYTE;

#[inline]
fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Decode two ASCII hex characters into one byte (strict).
///
/// `hi` is the most significant nibble. Fails with
/// [`HexError::InvalidDigit`] when either character is not `[0-9a-fA-F]`;
/// the reported offset is 0 for `hi` and 1 for `lo`.
#[inline]
pub fn decode_hex_pair(hi: u8, lo: u8) -> Result<u8, HexError> {
    let h = nibble(hi).ok_or(HexError::InvalidDigit { pos: 0, byte: hi })?;
    let l = nibble(lo).ok_or(HexError::InvalidDigit { pos: 1, byte: lo })?;
    Ok((h << 4) | l)
}

/// Decode a pair under the given [`HexMode`].
///
/// Lenient mode never fails: it reads digits left to right and stops at the
/// first non-hex character, so `"1G"` yields `0x01` and `"G1"` yields `0x00`.
#[inline]
pub fn decode_hex_pair_with(hi: u8, lo: u8, mode: HexMode) -> Result<u8, HexError> {
    match mode {
        HexMode::Strict => decode_hex_pair(hi, lo),
        HexMode::Lenient => Ok(match (nibble(hi), nibble(lo)) {
            (Some(h), Some(l)) => (h << 4) | l,
            (Some(h), None) => h,
            (None, _) => 0,
        }),
    }
}

/// Decode an ASCII hex string into `dst` (strict).
///
/// # Returns
/// - `Ok(n)` with the number of bytes written (`src.len() / 2`).
/// - `Err(HexError::InvalidLength)` if `src.len()` is odd.
/// - `Err(HexError::BufferTooSmall)` if `src.len() / 2 > dst.len()`.
/// - `Err(HexError::InvalidDigit)` on the first bad character.
///
/// # Notes
/// - Nothing is written to `dst` unless the whole input decodes.
pub fn decode_hex(src: &[u8], dst: &mut [u8]) -> Result<usize, HexError> {
    decode_hex_with(src, dst, HexMode::Strict)
}

/// [`decode_hex`] under an explicit [`HexMode`].
pub fn decode_hex_with(src: &[u8], dst: &mut [u8], mode: HexMode) -> Result<usize, HexError> {
    if src.len() % HEX_CHARS_PER_BYTE != 0 {
        return Err(HexError::InvalidLength { len: src.len() });
    }

    let need = src.len() / HEX_CHARS_PER_BYTE;
    if need > dst.len() {
        return Err(HexError::BufferTooSmall { need, have: dst.len() });
    }

    if mode == HexMode::Strict {
        if let Some(pos) = src.iter().position(|&c| nibble(c).is_none()) {
            return Err(HexError::InvalidDigit { pos, byte: src[pos] });
        }
    }

    for (out, pair) in dst.iter_mut().zip(src.chunks_exact(HEX_CHARS_PER_BYTE)) {
        *out = decode_hex_pair_with(pair[0], pair[1], mode)?;
    }

    Ok(need)
}

/// Canonical upper-case hex rendering (`[0x0A, 0xFF]` → `"0AFF"`).
pub fn encode_hex(bytes: &[u8]) -> String {
    ::hex::encode_upper(bytes)
}
