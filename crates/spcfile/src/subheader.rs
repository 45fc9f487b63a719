use byteorder::{LittleEndian, WriteBytesExt};

use crate::codes::subfile;
use crate::error::{check_len, EncodeError};
use crate::format::{FLOAT_EXPONENT, SUBFILE_HEADER_BYTES};

/// The 32-byte header that precedes every trace.
///
/// Optional fields are written as zero when unset, except `end_z`, which
/// falls back to `start_z`.
#[derive(Debug, Clone, PartialEq)]
pub struct SubfileHeaderRecord {
    pub flags: u8,
    pub exponent: i8,
    pub index: u16,
    pub start_z: f32,
    pub end_z: Option<f32>,
    pub noise: Option<f32>,
    /// Only set for XYXY files, where each trace has its own length.
    pub num_points: Option<u32>,
    pub num_coadded: Option<u32>,
    pub w_value: f32,
}

impl Default for SubfileHeaderRecord {
    fn default() -> Self {
        Self {
            flags: subfile::NONE,
            exponent: FLOAT_EXPONENT,
            index: 0,
            start_z: 0.0,
            end_z: None,
            noise: None,
            num_points: None,
            num_coadded: None,
            w_value: 0.0,
        }
    }
}

impl SubfileHeaderRecord {
    /// Serializes the record into exactly [`SUBFILE_HEADER_BYTES`] bytes.
    ///
    /// Layout:
    /// `flags(u8) | exp(i8) | index(u16) | start_z(f32) | end_z(f32) |
    /// noise(f32) | points(u32) | coadded(u32) | w(f32) | reserved(4)`
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let mut buf = Vec::with_capacity(SUBFILE_HEADER_BYTES);

        buf.write_u8(self.flags)?;
        buf.write_i8(self.exponent)?;
        buf.write_u16::<LittleEndian>(self.index)?;
        buf.write_f32::<LittleEndian>(self.start_z)?;
        buf.write_f32::<LittleEndian>(self.end_z.unwrap_or(self.start_z))?;
        buf.write_f32::<LittleEndian>(self.noise.unwrap_or(0.0))?;
        buf.write_u32::<LittleEndian>(self.num_points.unwrap_or(0))?;
        buf.write_u32::<LittleEndian>(self.num_coadded.unwrap_or(0))?;
        buf.write_f32::<LittleEndian>(self.w_value)?;
        buf.write_u32::<LittleEndian>(0)?;

        check_len("subfile header", &buf, SUBFILE_HEADER_BYTES)?;
        Ok(buf)
    }
}
