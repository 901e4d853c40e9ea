#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use hexframe_core::codec::{
        decode_hex, decode_hex_pair, decode_hex_pair_with, decode_hex_with, encode_hex, HexError, HexMode,
    };

// # ✅ 1. Pair decoding

    #[test]
    fn pair_decodes_upper_and_lower_case() {
        assert_eq!(decode_hex_pair(b'F', b'F').unwrap(), 0xFF);
        assert_eq!(decode_hex_pair(b'0', b'a').unwrap(), 0x0A);
        assert_eq!(decode_hex_pair(b'7', b'f').unwrap(), 0x7F);
        assert_eq!(decode_hex_pair(b'0', b'0').unwrap(), 0x00);
    }

    #[test]
    fn pair_rejects_non_hex_strictly() {
        assert_eq!(
            decode_hex_pair(b'G', b'0'),
            Err(HexError::InvalidDigit { pos: 0, byte: b'G' })
        );
        assert_eq!(
            decode_hex_pair(b'0', b' '),
            Err(HexError::InvalidDigit { pos: 1, byte: b' ' })
        );
    }

    #[test]
    fn lenient_pair_parses_longest_prefix() {
        assert_eq!(decode_hex_pair_with(b'1', b'G', HexMode::Lenient).unwrap(), 0x01);
        assert_eq!(decode_hex_pair_with(b'G', b'1', HexMode::Lenient).unwrap(), 0x00);
        assert_eq!(decode_hex_pair_with(b'A', b'b', HexMode::Lenient).unwrap(), 0xAB);
    }

// # ✅ 2. Buffer decoding

    #[test]
    fn decode_reports_bytes_written() {
        let mut dst = [0u8; 8];
        let n = decode_hex(b"DEADBEEF", &mut dst).unwrap();
        assert_eq!(n, 4);
        assert_eq!(&dst[..4], &[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(&dst[4..], &[0u8; 4]);
    }

    #[test]
    fn empty_input_writes_nothing() {
        let mut dst = [0u8; 0];
        assert_eq!(decode_hex(b"", &mut dst).unwrap(), 0);
    }

// # ❌ 3. Length errors never touch the destination

    #[test]
    fn odd_length_is_rejected_without_writing() {
        let mut dst = [0xEEu8; 4];
        assert_eq!(
            decode_hex(b"ABC", &mut dst),
            Err(HexError::InvalidLength { len: 3 })
        );
        assert_eq!(dst, [0xEE; 4]);
    }

    #[test]
    fn small_destination_is_rejected() {
        let mut dst = [0xEEu8; 1];
        assert_eq!(
            decode_hex(b"ABCD", &mut dst),
            Err(HexError::BufferTooSmall { need: 2, have: 1 })
        );
        assert_eq!(dst, [0xEE]);
    }

    #[test]
    fn bad_digit_reports_offset_and_leaves_destination() {
        let mut dst = [0xEEu8; 3];
        assert_eq!(
            decode_hex(b"00x011", &mut dst),
            Err(HexError::InvalidDigit { pos: 2, byte: b'x' })
        );
        assert_eq!(dst, [0xEE; 3]);
    }

    #[test]
    fn lenient_buffer_never_fails_on_digits() {
        let mut dst = [0u8; 2];
        assert_eq!(decode_hex_with(b"1ZZZ", &mut dst, HexMode::Lenient).unwrap(), 2);
        assert_eq!(dst, [0x01, 0x00]);

        // Length rules still apply.
        assert!(matches!(
            decode_hex_with(b"1", &mut dst, HexMode::Lenient),
            Err(HexError::InvalidLength { .. })
        ));
    }

    #[test]
    fn encode_is_upper_case() {
        assert_eq!(encode_hex(&[0x0a, 0xff, 0x10]), "0AFF10");
    }

// # ✅ 4. Properties

    proptest! {
        #[test]
        fn prop_decode_inverts_encode(bytes in proptest::collection::vec(any::<u8>(), 0..300)) {
            let text = encode_hex(&bytes);
            let mut out = vec![0u8; bytes.len()];
            let n = decode_hex(text.as_bytes(), &mut out).unwrap();
            prop_assert_eq!(n, bytes.len());
            prop_assert_eq!(out, bytes);
        }

        #[test]
        fn prop_odd_length_always_fails(s in "[0-9A-F]{0,40}") {
            let odd = if s.len() % 2 == 0 { format!("{}0", s) } else { s };
            let mut out = vec![0x55u8; odd.len()];
            prop_assert_eq!(
                decode_hex(odd.as_bytes(), &mut out),
                Err(HexError::InvalidLength { len: odd.len() })
            );
            prop_assert!(out.iter().all(|&b| b == 0x55));
        }
    }
}
