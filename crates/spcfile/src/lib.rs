//! # SPC file records
//!
//! Byte-exact encoders for the records of the legacy "new format" SPC
//! spectral file (version byte `0x4B`). Every encoder is a pure function from
//! a record to little-endian bytes and refuses to return a record of the
//! wrong length.
//!
//! ## File layout
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │ FILE HEADER (512 bytes)                                        │
//! ├───────────────────────────────────────────────────────────────┤
//! │ SHARED X (f32 LE × points)      only for the shared-X layout   │
//! ├───────────────────────────────────────────────────────────────┤
//! │ SUBFILE 0                                                      │
//! │   subfile header (32 bytes)                                   │
//! │   [X (f32 × n)]                 only for the XYXY layout       │
//! │   Y (f32 × n)                                                 │
//! │ ... repeated for each trace ...                                │
//! ├───────────────────────────────────────────────────────────────┤
//! │ DIRECTORY (12 bytes × traces)   only for multi-trace XYXY      │
//! │   offset (u32) | size (u32) | z (f32)                          │
//! ├───────────────────────────────────────────────────────────────┤
//! │ LOG BLOCK                       only when a log payload exists │
//! │   log header (64 bytes) | binary payload | text payload        │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! For the multi-trace XYXY layout the header's point-count field holds the
//! directory offset instead. The header's log-offset field is always written
//! as zero; the log block position follows from [`SectionOffsets`].
//!
//! ## Layouts
//!
//! | Flags                | [`LayoutKind`]      | Data                         |
//! |----------------------|---------------------|------------------------------|
//! | none / `MULTI`       | `EvenY`             | Y per trace, implicit X      |
//! | `X_VALUES`           | `SharedX`           | one X array, Y per trace     |
//! | `XYXY`               | `IndependentXY`     | X and Y per trace, directory |

pub mod codes;
mod directory;
mod error;
mod exponent;
mod format;
mod header;
mod log_block;
mod subheader;

pub use directory::DirectoryEntry;
pub use error::EncodeError;
pub use exponent::scaling_exponent;
pub use format::{
    FormatFlags, LayoutKind, SectionOffsets, DIRECTORY_ENTRY_BYTES, FILE_HEADER_BYTES,
    FILE_VERSION, FLOAT_EXPONENT, LOG_HEADER_BYTES, SUBFILE_HEADER_BYTES,
};
pub use header::{
    FileHeaderRecord, AXIS_LABELS_WIDTH, MEMO_WIDTH, METHOD_FILE_WIDTH, RESOLUTION_WIDTH,
    SOURCE_WIDTH,
};
pub use log_block::LogBlockHeader;
pub use subheader::SubfileHeaderRecord;

#[cfg(test)]
mod tests;
