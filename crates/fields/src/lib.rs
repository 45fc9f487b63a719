//! # Fields - fixed-width building blocks of the SPC layout
//!
//! Two leaf encoders shared by every record in an SPC file:
//!
//! - [`fit`] pads or truncates a byte string to an exact field width.
//! - [`CompressedDate`] packs a minute-resolution timestamp into the 32-bit
//!   bitfield the file header stores.
//!
//! ## Date bitfield
//!
//! ```text
//!  31                  20 19   16 15   11 10    6 5      0
//! ┌──────────────────────┬───────┬───────┬───────┬────────┐
//! │ year (12)            │ month │ day   │ hour  │ minute │
//! └──────────────────────┴───────┴───────┴───────┴────────┘
//! ```
//!
//! Stored little-endian. The all-zero value means "no timestamp".
//!
//! ## Example
//!
//! ```rust
//! use fields::{fit, CompressedDate, DateStamp};
//!
//! assert_eq!(fit(b"abc", 5), vec![b'a', b'b', b'c', 0, 0]);
//!
//! let date = CompressedDate::pack(Some(&DateStamp::new(2024, 3, 15, 9, 30)));
//! assert_eq!(date.unpack(), Some(DateStamp::new(2024, 3, 15, 9, 30)));
//! ```

mod bytefield;
mod date;

pub use bytefield::fit;
pub use date::{CompressedDate, DateStamp};

#[cfg(test)]
mod tests;
