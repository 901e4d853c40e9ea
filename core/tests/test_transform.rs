#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use hexframe_core::checksum::crc32;
    use hexframe_core::framing::Frame;
    use hexframe_core::transform::{
        apply_mask, pad_to_word, recompute_checksum, transform_frame, verify_checksum, TransformError,
    };
    use hexframe_core::types::ErrorCode;

// # ✅ 1. Verify

    #[test]
    fn verify_accepts_matching_checksum() {
        let frame = Frame::with_checksum(1, vec![1, 2, 3]).unwrap();
        assert_eq!(verify_checksum(&frame).unwrap(), frame.crc32);
    }

    #[test]
    fn verify_reports_both_values() {
        let frame = Frame { frame_type: 1, payload_len: 8, crc32: 0xAABB_CCDD, data: vec![0x12, 0x34, 0x56, 0x78] };
        let err = verify_checksum(&frame).unwrap_err();
        assert_eq!(
            err,
            TransformError::ChecksumMismatch {
                expected: 0xAABB_CCDD,
                actual: crc32fast::hash(&[0x12, 0x34, 0x56, 0x78]),
            }
        );
        assert_eq!(err.code(), ErrorCode::MessageChecksum);
        assert!(err.to_string().contains("AABBCCDD"));
    }

// # ✅ 2. Pad

    #[test]
    fn pad_leaves_aligned_buffers() {
        let mut empty = Vec::new();
        assert_eq!(pad_to_word(&mut empty).unwrap(), 0);
        assert!(empty.is_empty());

        let mut eight = vec![9u8; 8];
        assert_eq!(pad_to_word(&mut eight).unwrap(), 0);
        assert_eq!(eight, vec![9u8; 8]);
    }

    #[test]
    fn pad_appends_zeroes_only() {
        let mut data = vec![0xAA];
        assert_eq!(pad_to_word(&mut data).unwrap(), 3);
        assert_eq!(data, vec![0xAA, 0, 0, 0]);

        let mut data = vec![1, 2, 3, 4, 5];
        assert_eq!(pad_to_word(&mut data).unwrap(), 3);
        assert_eq!(data, vec![1, 2, 3, 4, 5, 0, 0, 0]);

        // Idempotent.
        assert_eq!(pad_to_word(&mut data).unwrap(), 0);
        assert_eq!(data.len(), 8);
    }

// # ✅ 3. Mask

    #[test]
    fn mask_touches_odd_words_only() {
        let mut data = vec![0xFFu8; 16];
        let visited = apply_mask(&mut data, 0x0F00_00F0);
        assert_eq!(visited, 2);
        assert_eq!(&data[0..4], &[0xFF; 4]);
        assert_eq!(&data[4..8], &[0x0F, 0x00, 0x00, 0xF0]);
        assert_eq!(&data[8..12], &[0xFF; 4]);
        assert_eq!(&data[12..16], &[0x0F, 0x00, 0x00, 0xF0]);
    }

    #[test]
    fn mask_word_counts() {
        assert_eq!(apply_mask(&mut [0u8; 0], 0), 0);
        assert_eq!(apply_mask(&mut [0u8; 4], 0), 0);
        assert_eq!(apply_mask(&mut [0u8; 8], 0), 1);
        assert_eq!(apply_mask(&mut [0u8; 12], 0), 1);
        assert_eq!(apply_mask(&mut [0u8; 20], 0), 2);
    }

    #[test]
    fn all_ones_mask_is_identity() {
        let original: Vec<u8> = (0..24).collect();
        let mut data = original.clone();
        apply_mask(&mut data, 0xFFFF_FFFF);
        assert_eq!(data, original);
    }

// # ✅ 4. Whole stage

    #[test]
    fn recompute_updates_frame() {
        let mut frame = Frame { frame_type: 0, payload_len: 5, crc32: 0, data: vec![0x31] };
        let crc = recompute_checksum(&mut frame);
        assert_eq!(crc, crc32(&[0x31]));
        assert_eq!(frame.crc32, crc);
    }

    #[test]
    fn transform_pads_masks_and_rechecksums() {
        let mut frame = Frame::with_checksum(3, vec![0xAA; 5]).unwrap();
        let outcome = transform_frame(&mut frame, 0x0000_0000).unwrap();

        assert_eq!(outcome.padding, 3);
        assert_eq!(outcome.words_masked, 1);
        assert_eq!(frame.data, vec![0xAA, 0xAA, 0xAA, 0xAA, 0, 0, 0, 0]);
        assert_eq!(outcome.crc32, crc32(&frame.data));
        assert_eq!(frame.crc32, outcome.crc32);
        // payload_len keeps the on-wire value.
        assert_eq!(frame.payload_len, 9);
    }

    #[test]
    fn transform_aborts_before_touching_data() {
        let mut frame = Frame { frame_type: 1, payload_len: 5, crc32: 0xDEAD_BEEF, data: vec![1] };
        assert!(transform_frame(&mut frame, 0).is_err());
        assert_eq!(frame.data, vec![1]);
        assert_eq!(frame.crc32, 0xDEAD_BEEF);
    }

    proptest! {
        #[test]
        fn prop_transformed_frame_is_consistent(
            data in proptest::collection::vec(any::<u8>(), 0..=251),
            mask in any::<u32>(),
        ) {
            let original = data.clone();
            let mut frame = Frame::with_checksum(0, data).unwrap();
            transform_frame(&mut frame, mask).unwrap();

            prop_assert_eq!(frame.data.len() % 4, 0);
            prop_assert!(frame.data.len() - original.len() < 4);
            prop_assert!(verify_checksum(&frame).is_ok());

            for (i, word) in frame.data.chunks(4).enumerate() {
                let src: Vec<u8> = (0..4)
                    .map(|k| original.get(i * 4 + k).copied().unwrap_or(0))
                    .collect();
                if i % 2 == 0 {
                    prop_assert_eq!(word, &src[..]);
                } else {
                    let m = mask.to_be_bytes();
                    let expect: Vec<u8> = src.iter().zip(m.iter()).map(|(a, b)| a & b).collect();
                    prop_assert_eq!(word, &expect[..]);
                }
            }
        }
    }
}
