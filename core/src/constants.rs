//! Wire constants for the hex frame format.
//!
//! One frame unit on the wire:
//!
//! ```text
//! "mess=" <type: 2 hex> <payload_len: 2 hex> <data: (payload_len - 4) * 2 hex> <crc32: 8 hex>
//! "mask=" <mask: 8 hex>
//! ```

/// Literal marker opening every frame.
pub const MSG_MARKER: [u8; 5] = *b"mess=";

/// Literal marker opening the out-of-band mask following every frame.
pub const MASK_MARKER: [u8; 5] = *b"mask=";

/// Marker width in bytes (both markers share it).
pub const MARKER_LEN: usize = 5;

/// Size of the trailing checksum counted by `payload_len`.
pub const CHECKSUM_LEN: usize = 4;

/// Payload word size used by padding and masking.
pub const WORD_LEN: usize = 4;

/// Hex characters per decoded byte.
pub const HEX_CHARS_PER_BYTE: usize = 2;

/// Hex width of the one-byte fields (type, payload length).
pub const BYTE_FIELD_HEX_LEN: usize = HEX_CHARS_PER_BYTE;

/// Hex width of the 32-bit fields (checksum, mask).
pub const WORD_FIELD_HEX_LEN: usize = 4 * HEX_CHARS_PER_BYTE;

/// Largest data length a frame can carry (`u8::MAX - CHECKSUM_LEN`).
pub const MAX_DATA_LEN: usize = u8::MAX as usize - CHECKSUM_LEN;

/// CRC-32/ISO-HDLC generator polynomial, forward (non-reflected) form.
pub const CRC32_POLY: u32 = 0x04C1_1DB7;

/// CRC-32 register seed.
pub const CRC32_INIT: u32 = 0xFFFF_FFFF;

/// Legacy error code families. A raw code `c` belongs to family `b`
/// when `b - ERR_FAMILY_WIDTH < c <= b`.
pub mod error_families {
    pub const SYSTEM: i32 = -1000;
    pub const MESSAGE: i32 = -2000;
    pub const APPLICATION: i32 = -3000;
}

/// Width of every legacy error code family.
pub const ERR_FAMILY_WIDTH: i32 = 1000;
