use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{self, Write};

/// One entry of the trailing directory table of a multi-trace XYXY file.
///
/// Layout: `[offset: u32 LE][size: u32 LE][z: f32 LE]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectoryEntry {
    /// Absolute file offset of the subfile header.
    pub offset: u32,
    /// Subfile header plus sample bytes.
    pub size: u32,
    pub z: f32,
}

impl DirectoryEntry {
    #[must_use]
    pub fn new(offset: u32, size: u32, z: f32) -> Self {
        Self { offset, size, z }
    }

    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_u32::<LittleEndian>(self.offset)?;
        w.write_u32::<LittleEndian>(self.size)?;
        w.write_f32::<LittleEndian>(self.z)?;
        Ok(())
    }
}
