use crate::constants::WORD_LEN;
use crate::transform::types::TransformError;

/// Zero-pad `data` up to the next multiple of [`WORD_LEN`].
///
/// Existing bytes are untouched; aligned buffers are left as they are.
/// Returns the number of bytes appended.
pub fn pad_to_word(data: &mut Vec<u8>) -> Result<usize, TransformError> {
    let rem = data.len() % WORD_LEN;
    if rem == 0 {
        return Ok(0);
    }

    let padding = WORD_LEN - rem;
    data.try_reserve_exact(padding)
        .map_err(|_| TransformError::Allocation { len: padding })?;
    data.resize(data.len() + padding, 0);

    tracing::debug!(padding, data_len = data.len(), "payload padded");
    Ok(padding)
}
