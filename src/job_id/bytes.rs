use super::JobId;
use crate::error::{JobIdError, JobIdResult};

const COMPONENT_LEN: usize = std::mem::size_of::<i64>();
const ENCODED_LEN: usize = 2 * COMPONENT_LEN;

impl JobId {
    /// Length of the binary form produced by [`JobId::to_bytes`]
    pub const ENCODED_LEN: usize = ENCODED_LEN;

    /// Encode as two big endian integers, epoch first.
    ///
    /// This is the layout used when job ids are embedded in storage row keys. For non-negative
    /// ids the byte order of encodings matches the order of the ids.
    pub fn to_bytes(&self) -> [u8; ENCODED_LEN] {
        let mut encoded = [0u8; ENCODED_LEN];
        encoded[..COMPONENT_LEN].copy_from_slice(&self.epoch.to_be_bytes());
        encoded[COMPONENT_LEN..].copy_from_slice(&self.sequence.to_be_bytes());
        encoded
    }

    /// Decode the binary form produced by [`JobId::to_bytes`]
    ///
    /// # Returns
    ///
    /// The decoded id, or [`JobIdError::InvalidLength`] if `bytes` is not exactly
    /// [`JobId::ENCODED_LEN`] long
    pub fn from_bytes(bytes: &[u8]) -> JobIdResult<Self> {
        let encoded: &[u8; ENCODED_LEN] =
            bytes.try_into().map_err(|_| JobIdError::InvalidLength {
                expected: ENCODED_LEN,
                actual: bytes.len(),
            })?;

        let (epoch, sequence) = encoded.split_at(COMPONENT_LEN);
        Ok(Self::new(read_i64(epoch), read_i64(sequence)))
    }
}

fn read_i64(bytes: &[u8]) -> i64 {
    let mut buf = [0u8; COMPONENT_LEN];
    buf.copy_from_slice(bytes);
    i64::from_be_bytes(buf)
}
