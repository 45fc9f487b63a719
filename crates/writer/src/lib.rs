//! # Writer - SPC file assembly
//!
//! Ties the [`spcfile`] record encoders to caller-owned trace data and a
//! storage sink.
//!
//! ## Write path
//!
//! ```text
//! TraceSet (borrowed)
//!   |
//!   v
//! layout.rs  → Layout::plan()      validate, pick EvenY / SharedX / IndependentXY
//!   |
//!   v
//! encode.rs  → SpcWriter::encode()  header | [shared X] | subfiles | [directory] | [log]
//!   |
//!   v
//! write.rs   → write_to() / write_file()   one blocking write of the buffer
//! ```
//!
//! Validation failures are reported before anything is encoded. Encoder
//! invariant failures abort before anything reaches the sink. A storage
//! failure can leave a partial file behind; writes are not atomic, so callers
//! that need atomic publication should write to a temporary path and rename.
//!
//! ## Example
//!
//! ```rust,no_run
//! use config::SpcConfig;
//! use traces::{Axis, TraceSet};
//! use writer::SpcWriter;
//!
//! let y = [1.0, 2.0, 3.0];
//! let writer = SpcWriter::new(SpcConfig::default());
//! let summary = writer.write_file("out.spc", &TraceSet::new(Axis::Flat(&y))).unwrap();
//! assert_eq!(summary.bytes, 556);
//! ```

mod encode;
mod error;
mod layout;
mod write;

use config::SpcConfig;
use spcfile::{FormatFlags, LayoutKind};

pub use error::{ValidationError, WriteError};
pub use layout::Layout;

/// Writes SPC files for one set of header metadata.
///
/// The writer holds configuration only. Every call builds its records from
/// scratch and keeps nothing from the trace data it was lent.
#[derive(Debug, Clone)]
pub struct SpcWriter {
    config: SpcConfig,
    flags: FormatFlags,
}

/// What a successful write produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteSummary {
    pub layout: LayoutKind,
    pub traces: usize,
    /// Total file size.
    pub bytes: usize,
    /// Start of the log block, or the end of file without one. The header
    /// field for it is always zero, so readers need this value.
    pub log_offset: u32,
    /// Start of the directory table, when one was written.
    pub directory_offset: Option<u32>,
    /// Legacy scaling exponent for multi-trace files with explicit X.
    pub exponent: Option<i8>,
    pub has_log: bool,
}

impl SpcWriter {
    #[must_use]
    pub fn new(config: SpcConfig) -> Self {
        let flags = FormatFlags::from_bits(config.flags);
        Self { config, flags }
    }

    #[must_use]
    pub fn config(&self) -> &SpcConfig {
        &self.config
    }

    #[must_use]
    pub fn flags(&self) -> FormatFlags {
        self.flags
    }
}

#[cfg(test)]
mod tests;
