use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How non-hex characters inside a field are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HexMode {
    /// Any non-hex character is a conversion error.
    #[default]
    Strict,
    /// Parse the longest valid hex prefix of each pair; no prefix yields `0`.
    Lenient,
}

impl fmt::Display for HexMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexMode::Strict => f.write_str("strict"),
            HexMode::Lenient => f.write_str("lenient"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    /// Source text has an odd number of characters.
    #[error("invalid hex length: {len} is odd")]
    InvalidLength { len: usize },

    /// Destination cannot hold the decoded bytes.
    #[error("hex destination too small: need {need} bytes, have {have}")]
    BufferTooSmall { need: usize, have: usize },

    /// Character at `pos` is not a hex digit.
    #[error("invalid hex digit {byte:#04x} at offset {pos}")]
    InvalidDigit { pos: usize, byte: u8 },
}
