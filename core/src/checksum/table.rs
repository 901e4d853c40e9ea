use std::sync::OnceLock;

use crate::constants::{CRC32_INIT, CRC32_POLY};

static SHARED: OnceLock<Crc32Table> = OnceLock::new();

/// Lookup tables for the MSB-first CRC-32 step.
///
/// - `forward[i]`: register contribution of byte `i` shifted through the
///   polynomial in forward form.
/// - `reflect8[i]`: `i` with its bit order reversed; input bytes are
///   reflected before entering the forward table.
#[derive(Clone, PartialEq, Eq)]
pub struct Crc32Table {
    forward: [u32; 256],
    reflect8: [u8; 256],
}

impl std::fmt::Debug for Crc32Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Crc32Table")
            .field("poly", &format_args!("{:#010x}", CRC32_POLY))
            .finish_non_exhaustive()
    }
}

impl Crc32Table {
    /// Build a fresh table set. Prefer [`Crc32Table::shared`] outside tests.
    pub fn build() -> Self {
        let mut forward = [0u32; 256];
        let mut reflect8 = [0u8; 256];

        for (byte, slot) in forward.iter_mut().enumerate() {
            let mut crc = (byte as u32) << 24;
            for _ in 0..8 {
                crc = if crc & 0x8000_0000 != 0 {
                    (crc << 1) ^ CRC32_POLY
                } else {
                    crc << 1
                };
            }
            *slot = crc;
        }

        for (byte, slot) in reflect8.iter_mut().enumerate() {
            *slot = (byte as u8).reverse_bits();
        }

        tracing::debug!(poly = CRC32_POLY, "crc32 tables built");

        Self { forward, reflect8 }
    }

    /// Process-wide table, built on first use.
    #[inline]
    pub fn shared() -> &'static Self {
        SHARED.get_or_init(Self::build)
    }

    /// Whether the shared table has been built yet.
    pub fn is_initialized() -> bool {
        SHARED.get().is_some()
    }

    /// Advance a running (non-finalized) register over `bytes`.
    #[inline]
    pub fn update(&self, mut crc: u32, bytes: &[u8]) -> u32 {
        for &b in bytes {
            let idx = ((crc >> 24) ^ self.reflect8[b as usize] as u32) & 0xFF;
            crc = self.forward[idx as usize] ^ (crc << 8);
        }
        crc
    }

    /// One-shot CRC-32 of `bytes` using this table.
    #[inline]
    pub fn checksum(&self, bytes: &[u8]) -> u32 {
        finalize(self.update(CRC32_INIT, bytes))
    }

    pub fn forward(&self) -> &[u32; 256] {
        &self.forward
    }
}

/// Final step: bit-reflect the one's complement of the register.
#[inline]
pub(crate) fn finalize(crc: u32) -> u32 {
    (!crc).reverse_bits()
}
