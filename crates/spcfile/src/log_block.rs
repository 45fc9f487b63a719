use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Write;

use crate::error::{check_len, to_u32, EncodeError};
use crate::format::LOG_HEADER_BYTES;

const LOG_RESERVED_BYTES: usize = 44;
const MEM_BLOCK_GRANULE: u64 = 4096;

/// Header of the optional log block appended after the trace data.
///
/// The block is `header | binary payload | text payload`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogBlockHeader {
    /// Header plus both payloads.
    pub block_size: u32,
    /// `block_size` rounded to the nearest 4096-byte multiple.
    pub mem_block_size: u32,
    /// Offset of the text payload from the start of the block.
    pub text_offset: u32,
    pub data_len: u32,
    /// Always zero.
    pub disk_len: u32,
}

impl LogBlockHeader {
    /// Sizes a log block for the given payloads.
    pub fn for_payload(data: &[u8], text: &str) -> Result<Self, EncodeError> {
        let data_len = data.len() as u64;
        let block_size = LOG_HEADER_BYTES as u64 + text.len() as u64 + data_len;
        Ok(Self {
            block_size: to_u32("log block size", block_size)?,
            mem_block_size: to_u32("log memory block", round_to_granule(block_size))?,
            text_offset: to_u32("log text offset", LOG_HEADER_BYTES as u64 + data_len)?,
            data_len: to_u32("log data length", data_len)?,
            disk_len: 0,
        })
    }

    /// Serializes the header into exactly [`LOG_HEADER_BYTES`] bytes.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let mut buf = Vec::with_capacity(LOG_HEADER_BYTES);

        buf.write_u32::<LittleEndian>(self.block_size)?;
        buf.write_u32::<LittleEndian>(self.mem_block_size)?;
        buf.write_u32::<LittleEndian>(self.text_offset)?;
        buf.write_u32::<LittleEndian>(self.data_len)?;
        buf.write_u32::<LittleEndian>(self.disk_len)?;
        buf.write_all(&[0u8; LOG_RESERVED_BYTES])?;

        check_len("log header", &buf, LOG_HEADER_BYTES)?;
        Ok(buf)
    }
}

/// Nearest multiple of 4096, halfway cases to the even multiple.
///
/// Small blocks round down to zero; readers only use this as an allocation
/// hint.
fn round_to_granule(size: u64) -> u64 {
    let whole = size / MEM_BLOCK_GRANULE;
    let rem = size % MEM_BLOCK_GRANULE;
    let half = MEM_BLOCK_GRANULE / 2;
    let rounded = if rem > half || (rem == half && whole % 2 == 1) {
        whole + 1
    } else {
        whole
    };
    rounded * MEM_BLOCK_GRANULE
}
