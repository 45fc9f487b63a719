use byteorder::{LittleEndian, WriteBytesExt};
use fields::{fit, CompressedDate};
use std::io::Write;

use crate::codes::{disposition, process, technique, x_units, y_units};
use crate::error::{check_len, EncodeError};
use crate::format::{FormatFlags, FILE_HEADER_BYTES, FILE_VERSION, FLOAT_EXPONENT};

/// Width of the resolution description (`fres`).
pub const RESOLUTION_WIDTH: usize = 9;
/// Width of the source instrument description (`fsource`).
pub const SOURCE_WIDTH: usize = 9;
/// Width of the memo (`fcmnt`).
pub const MEMO_WIDTH: usize = 130;
/// Width of the custom axis label block (`fcatxt`).
pub const AXIS_LABELS_WIDTH: usize = 30;
/// Width of the method file name (`fmethod`).
pub const METHOD_FILE_WIDTH: usize = 48;

const SPARE_BYTES: usize = 32;
const DATA_FACTOR_BYTES: usize = 4;
const RESERVED_BYTES: usize = 187;

/// The 512-byte global header.
///
/// `log_offset` carries the computed position of the log block for the
/// caller's benefit only: the on-disk field is always zero, matching the
/// reference files readers are validated against.
#[derive(Debug, Clone, PartialEq)]
pub struct FileHeaderRecord {
    pub flags: FormatFlags,
    pub version: u8,
    pub technique: u8,
    pub exponent: i8,
    /// Points per trace, or the directory offset for multi-trace XYXY files.
    pub num_points: u32,
    pub first_x: f64,
    pub last_x: f64,
    pub subfile_count: i32,
    pub x_units: u8,
    pub y_units: u8,
    pub z_units: u8,
    pub post_disposition: u8,
    pub date: CompressedDate,
    pub resolution: String,
    pub source_instrument: String,
    /// Interferogram peak point, a legacy 16-bit word.
    pub peak_point: u16,
    pub memo: String,
    pub axis_labels: Vec<String>,
    pub log_offset: u32,
    pub modifications: i32,
    pub process_code: u8,
    pub method_file: String,
    pub z_increment: f32,
    pub w_planes: i32,
    pub w_increment: f32,
    pub w_units: u8,
}

impl Default for FileHeaderRecord {
    fn default() -> Self {
        Self {
            flags: FormatFlags::DEFAULT,
            version: FILE_VERSION,
            technique: technique::GENERAL,
            exponent: FLOAT_EXPONENT,
            num_points: 0,
            first_x: 0.0,
            last_x: 0.0,
            subfile_count: 0,
            x_units: x_units::ARBITRARY,
            y_units: y_units::ARBITRARY,
            z_units: x_units::ARBITRARY,
            post_disposition: disposition::DEFAULT,
            date: CompressedDate::NONE,
            resolution: String::new(),
            source_instrument: String::new(),
            peak_point: 0,
            memo: String::new(),
            axis_labels: Vec::new(),
            log_offset: 0,
            modifications: 0,
            process_code: process::COMPUTE,
            method_file: String::new(),
            z_increment: 1.0,
            w_planes: 0,
            w_increment: 0.0,
            w_units: x_units::ARBITRARY,
        }
    }
}

impl FileHeaderRecord {
    /// Serializes the header into exactly [`FILE_HEADER_BYTES`] bytes.
    ///
    /// # Errors
    ///
    /// [`EncodeError::LengthMismatch`] if the assembled record is not 512
    /// bytes long. That is an encoder defect; nothing should be written.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let mut buf = Vec::with_capacity(FILE_HEADER_BYTES);

        buf.write_u8(self.flags.bits())?;
        buf.write_u8(self.version)?;
        buf.write_u8(self.technique)?;
        buf.write_i8(self.exponent)?;
        buf.write_u32::<LittleEndian>(self.num_points)?;
        buf.write_f64::<LittleEndian>(self.first_x)?;
        buf.write_f64::<LittleEndian>(self.last_x)?;
        buf.write_i32::<LittleEndian>(self.subfile_count)?;
        buf.write_u8(self.x_units)?;
        buf.write_u8(self.y_units)?;
        buf.write_u8(self.z_units)?;
        buf.write_u8(self.post_disposition)?;
        self.date.write_to(&mut buf)?;
        buf.write_all(&fit(self.resolution.as_bytes(), RESOLUTION_WIDTH))?;
        buf.write_all(&fit(self.source_instrument.as_bytes(), SOURCE_WIDTH))?;
        buf.write_u16::<LittleEndian>(self.peak_point)?;
        buf.write_all(&[0u8; SPARE_BYTES])?;
        buf.write_all(&fit(self.memo.as_bytes(), MEMO_WIDTH))?;
        buf.write_all(&fit(self.axis_label_block().as_bytes(), AXIS_LABELS_WIDTH))?;
        // flogoff stays zero even when a log block follows
        buf.write_i32::<LittleEndian>(0)?;
        buf.write_i32::<LittleEndian>(self.modifications)?;
        buf.write_u8(self.process_code)?;
        buf.write_u8(0)?; // flevel
        buf.write_u16::<LittleEndian>(0)?; // fsampin
        buf.write_all(&[0u8; DATA_FACTOR_BYTES])?;
        buf.write_all(&fit(self.method_file.as_bytes(), METHOD_FILE_WIDTH))?;
        buf.write_f32::<LittleEndian>(self.z_increment)?;
        buf.write_i32::<LittleEndian>(self.w_planes)?;
        buf.write_f32::<LittleEndian>(self.w_increment)?;
        buf.write_u8(self.w_units)?;
        buf.write_all(&[0u8; RESERVED_BYTES])?;

        check_len("file header", &buf, FILE_HEADER_BYTES)?;
        Ok(buf)
    }

    /// Custom axis labels (X, Y, Z order) joined by NUL separators.
    fn axis_label_block(&self) -> String {
        self.axis_labels.join("\0")
    }
}
