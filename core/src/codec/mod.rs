//! Hexadecimal codec.
//!
//! Responsibilities:
//! - Convert ASCII hex digit pairs into bytes (strict or lenient)
//! - Decode whole hex fields into caller-provided buffers
//! - Encode bytes back into canonical upper-case hex
//!
//! Non-responsibilities:
//! - IO
//! - Field layout (see `framing`)

pub mod types;
pub mod hex;

pub use types::{HexError, HexMode};
pub use self::hex::{decode_hex, decode_hex_pair, decode_hex_pair_with, decode_hex_with, encode_hex};
