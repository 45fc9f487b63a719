use std::io;

use thiserror::Error;

/// Failures while turning records into bytes.
///
/// None of these depend on caller input: they mean an encoder produced
/// something the format cannot hold, and the file must not be written.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Writing into the in-memory record buffer failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// A fixed-size record came out at the wrong length.
    #[error("{record} encoded to {actual} bytes, expected {expected}")]
    LengthMismatch {
        record: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The scaling exponent does not fit the signed byte the header stores.
    #[error("exponent {0} does not fit in a signed byte (max 127)")]
    ExponentOverflow(u32),

    /// A section offset or size exceeds the format's 32-bit fields.
    #[error("{what} {value} exceeds the 32-bit range of the format")]
    OffsetOverflow { what: &'static str, value: u64 },
}

/// Fails with [`EncodeError::LengthMismatch`] unless `buf` is exactly `expected` bytes.
pub(crate) fn check_len(
    record: &'static str,
    buf: &[u8],
    expected: usize,
) -> Result<(), EncodeError> {
    if buf.len() != expected {
        log::error!(
            "{} length was {} instead of {}",
            record,
            buf.len(),
            expected
        );
        return Err(EncodeError::LengthMismatch {
            record,
            expected,
            actual: buf.len(),
        });
    }
    Ok(())
}

/// Narrows a byte count to the format's `u32` fields.
pub(crate) fn to_u32(what: &'static str, value: u64) -> Result<u32, EncodeError> {
    u32::try_from(value).map_err(|_| EncodeError::OffsetOverflow { what, value })
}
