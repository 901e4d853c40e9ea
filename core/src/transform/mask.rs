use byteorder::{BigEndian, ByteOrder};

use crate::constants::WORD_LEN;

/// AND `mask` into every other big-endian word of `data`, starting at word 1.
///
/// Words 0, 2, 4, … are never touched. A trailing partial word (unpadded
/// input) is ignored. Returns the number of words visited.
pub fn apply_mask(data: &mut [u8], mask: u32) -> usize {
    let mut visited = 0;
    for word in data.chunks_exact_mut(WORD_LEN).skip(1).step_by(2) {
        let before = BigEndian::read_u32(word);
        let after = before & mask;
        BigEndian::write_u32(word, after);
        tracing::trace!(
            before = %format!("{:08X}", before),
            after = %format!("{:08X}", after),
            "word masked"
        );
        visited += 1;
    }
    visited
}
