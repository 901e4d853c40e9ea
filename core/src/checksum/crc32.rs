use crate::checksum::table::{finalize, Crc32Table};
use crate::constants::CRC32_INIT;

/// Reverse the bit order of a 32-bit word.
#[inline]
pub fn reflect32(x: u32) -> u32 {
    x.reverse_bits()
}

/// CRC-32/ISO-HDLC of `data`.
///
/// `crc32(b"") == 0` and `crc32(b"123456789") == 0xCBF43926`.
#[inline]
pub fn crc32(data: &[u8]) -> u32 {
    Crc32Table::shared().checksum(data)
}

/// Incremental CRC-32, same result as [`crc32`] over the concatenated input.
#[derive(Debug, Clone, Copy)]
pub struct Crc32Hasher {
    state: u32,
    amount: u64,
}

impl Default for Crc32Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Crc32Hasher {
    pub fn new() -> Self {
        Self { state: CRC32_INIT, amount: 0 }
    }

    pub fn update(&mut self, data: &[u8]) {
        self.state = Crc32Table::shared().update(self.state, data);
        self.amount += data.len() as u64;
    }

    /// Bytes fed so far.
    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn finalize(self) -> u32 {
        finalize(self.state)
    }
}
