//! Format constants, the file-type flag set and the layout it selects.
//!
//! Section offsets follow from the layout alone:
//!
//! ```text
//! log = 512 + 32·traces
//!     + 4·shared_x                     (SharedX)
//!     + 4·points·traces                (EvenY, SharedX)
//!     + 4·Σ(x_i + y_i)                 (IndependentXY)
//! directory = log, then log += 12·traces   (multi-trace IndependentXY)
//! ```

use std::fmt;
use std::ops::BitOr;

use traces::{Axis, F32_BYTES};

use crate::error::{to_u32, EncodeError};

/// Size of the global file header.
pub const FILE_HEADER_BYTES: usize = 512;

/// Size of each per-trace subfile header.
pub const SUBFILE_HEADER_BYTES: usize = 32;

/// Size of each directory entry: offset (u32) + size (u32) + z (f32).
pub const DIRECTORY_ENTRY_BYTES: usize = 4 + 4 + 4;

/// Size of the log block header.
pub const LOG_HEADER_BYTES: usize = 64;

/// Version byte of the "new format" little-endian header.
pub const FILE_VERSION: u8 = 0x4B;

/// Exponent value meaning "samples are IEEE 32-bit floats, not scaled integers".
pub const FLOAT_EXPONENT: i8 = -128;

/// The file-type flag byte (`ftflgs`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FormatFlags(u8);

impl FormatFlags {
    /// Single trace, 32-bit samples, evenly spaced X.
    pub const DEFAULT: FormatFlags = FormatFlags(0);
    /// 16-bit samples. Not produced by this writer.
    pub const SIXTEEN_BIT: FormatFlags = FormatFlags(0x01);
    /// Enables the technique byte in very old software.
    pub const CGRAM: FormatFlags = FormatFlags(0x02);
    /// More than one trace.
    pub const MULTI: FormatFlags = FormatFlags(0x04);
    /// Arbitrary (random) Z values per trace.
    pub const RANDOM_Z: FormatFlags = FormatFlags(0x08);
    /// Ordered but unevenly spaced Z values.
    pub const ORDERED_Z: FormatFlags = FormatFlags(0x10);
    /// Use the custom axis labels block.
    pub const AXIS_LABELS: FormatFlags = FormatFlags(0x20);
    /// Every trace carries its own X array (XYXYXY).
    pub const XYXY: FormatFlags = FormatFlags(0x40);
    /// Explicit, non-uniform X values.
    pub const X_VALUES: FormatFlags = FormatFlags(0x80);

    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` if every bit of `other` is set.
    #[must_use]
    pub const fn contains(self, other: FormatFlags) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn union(self, other: FormatFlags) -> Self {
        Self(self.0 | other.0)
    }
}

impl BitOr for FormatFlags {
    type Output = FormatFlags;

    fn bitor(self, rhs: FormatFlags) -> FormatFlags {
        self.union(rhs)
    }
}

impl fmt::Debug for FormatFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FormatFlags({:#04x})", self.0)
    }
}

/// How trace data is laid out, decided once per write from the flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// Y only; X is implied by first/last X and the point count.
    EvenY,
    /// One explicit X array shared by every trace, written after the header.
    SharedX,
    /// Each trace carries its own X and Y arrays.
    IndependentXY,
}

impl LayoutKind {
    #[must_use]
    pub fn from_flags(flags: FormatFlags) -> Self {
        if flags.contains(FormatFlags::XYXY) {
            LayoutKind::IndependentXY
        } else if flags.contains(FormatFlags::X_VALUES) {
            LayoutKind::SharedX
        } else {
            LayoutKind::EvenY
        }
    }

    /// Returns `true` if the layout needs caller-supplied X values.
    #[must_use]
    pub fn requires_x(self) -> bool {
        !matches!(self, LayoutKind::EvenY)
    }

    /// Returns `true` if a trailing directory table is emitted.
    #[must_use]
    pub fn emits_directory(self, flags: FormatFlags) -> bool {
        self == LayoutKind::IndependentXY && flags.contains(FormatFlags::MULTI)
    }
}

/// Byte positions derived from the layout before anything is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionOffsets {
    /// Where the directory table starts, when one is emitted.
    pub directory: Option<u32>,
    /// Where the log block starts (the end of file if there is no log).
    pub log: u32,
}

impl SectionOffsets {
    /// Computes the directory and log offsets for `subfile_count` traces.
    pub fn compute(
        kind: LayoutKind,
        directory: bool,
        subfile_count: usize,
        x: &Axis<'_>,
        y: &Axis<'_>,
    ) -> Result<Self, EncodeError> {
        let n = subfile_count as u64;
        let f32_bytes = F32_BYTES as u64;
        let mut log = FILE_HEADER_BYTES as u64 + SUBFILE_HEADER_BYTES as u64 * n;

        match kind {
            LayoutKind::EvenY => log += f32_bytes * y.trailing_len() as u64 * n,
            LayoutKind::SharedX => {
                log += f32_bytes * x.size() as u64;
                log += f32_bytes * y.trailing_len() as u64 * n;
            }
            LayoutKind::IndependentXY => {
                log += f32_bytes * (x.size() as u64 + y.size() as u64);
            }
        }

        let directory = if directory {
            let at = to_u32("directory offset", log)?;
            log += DIRECTORY_ENTRY_BYTES as u64 * n;
            Some(at)
        } else {
            None
        };

        Ok(Self {
            directory,
            log: to_u32("log offset", log)?,
        })
    }
}
