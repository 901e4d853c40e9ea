use crate::checksum::crc32;
use crate::framing::Frame;
use crate::transform::types::TransformError;

/// Check the decoded payload against the checksum the frame claims.
///
/// Returns the computed checksum on success.
pub fn verify_checksum(frame: &Frame) -> Result<u32, TransformError> {
    let actual = crc32(&frame.data);
    tracing::debug!(
        claimed = %format!("{:08X}", frame.crc32),
        computed = %format!("{:08X}", actual),
        "checking frame crc32"
    );

    if actual != frame.crc32 {
        return Err(TransformError::ChecksumMismatch {
            expected: frame.crc32,
            actual,
        });
    }
    Ok(actual)
}

/// Store the checksum of the current payload in the frame.
pub fn recompute_checksum(frame: &mut Frame) -> u32 {
    frame.crc32 = crc32(&frame.data);
    frame.crc32
}
