//! # Traces - borrowed numeric buffers for the SPC writer
//!
//! The writer never owns sample data. Callers lend it one-dimensional or
//! row-indexable two-dimensional `f64` buffers through [`Axis`], bundled per
//! write call in a [`TraceSet`]. Nothing here is mutated or retained past the
//! call that borrowed it.
//!
//! Samples are always persisted as little-endian IEEE 32-bit floats
//! ([`write_f32_le`]).
//!
//! ## Example
//!
//! ```rust
//! use traces::{Axis, TraceSet};
//!
//! let y = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
//! let set = TraceSet::new(Axis::Rows(&y));
//! assert_eq!(set.trace_count(), 2);
//! assert_eq!(set.y.trailing_len(), 2);
//! ```

use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{self, Write};

/// Bytes per persisted sample.
pub const F32_BYTES: usize = 4;

/// One axis of sample data: a single series or one series per trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Axis<'a> {
    /// A single series (one trace, or one shared X array).
    Flat(&'a [f64]),
    /// One series per trace, indexed by trace number.
    Rows(&'a [Vec<f64>]),
}

impl Default for Axis<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a> Axis<'a> {
    /// A flat axis with no elements.
    #[must_use]
    pub fn empty() -> Self {
        Axis::Flat(&[])
    }

    /// Total number of elements across all rows.
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            Axis::Flat(v) => v.len(),
            Axis::Rows(rows) => rows.iter().map(Vec::len).sum(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Length of the last dimension: the series length for a flat axis, the
    /// first row's length for a row axis (rows share length except in the
    /// independent-X layout).
    #[must_use]
    pub fn trailing_len(&self) -> usize {
        match self {
            Axis::Flat(v) => v.len(),
            Axis::Rows(rows) => rows.first().map_or(0, Vec::len),
        }
    }

    /// Number of traces this axis describes. A flat axis is always one trace.
    #[must_use]
    pub fn trace_count(&self) -> usize {
        match self {
            Axis::Flat(_) => 1,
            Axis::Rows(rows) => rows.len(),
        }
    }

    /// The series of trace `i`, or `None` past the end.
    #[must_use]
    pub fn row(&self, i: usize) -> Option<&'a [f64]> {
        match *self {
            Axis::Flat(v) => (i == 0).then_some(v),
            Axis::Rows(rows) => rows.get(i).map(Vec::as_slice),
        }
    }

    /// Iterates the per-trace series in index order.
    pub fn rows(&self) -> impl Iterator<Item = &'a [f64]> {
        let axis = *self;
        (0..axis.trace_count()).filter_map(move |i| axis.row(i))
    }

    /// Iterates every element, row by row.
    pub fn values(&self) -> impl Iterator<Item = f64> + 'a {
        self.rows().flat_map(|r| r.iter().copied())
    }

    /// Smallest element; NaNs are skipped unless every element is NaN.
    #[must_use]
    pub fn min(&self) -> Option<f64> {
        self.values().reduce(f64::min)
    }

    /// Largest element; NaNs are skipped unless every element is NaN.
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.values().reduce(f64::max)
    }

    /// Largest absolute value.
    #[must_use]
    pub fn max_abs(&self) -> Option<f64> {
        self.values().map(f64::abs).reduce(f64::max)
    }

    /// Writes every element as a packed little-endian `f32`, row by row.
    pub fn write_f32_le<W: Write>(&self, w: &mut W) -> io::Result<()> {
        for row in self.rows() {
            write_f32_le(row, w)?;
        }
        Ok(())
    }
}

/// Writes `values` narrowed to `f32`, little-endian, back to back.
pub fn write_f32_le<W: Write>(values: &[f64], w: &mut W) -> io::Result<()> {
    for &v in values {
        w.write_f32::<LittleEndian>(v as f32)?;
    }
    Ok(())
}

/// Everything one write call borrows from the caller.
///
/// `y` decides the trace count. `x` is empty for evenly spaced data, a flat
/// shared array, or one row per trace for the independent-X layout. `z`
/// holds per-trace scalars (or a single broadcast value) and `w` one value
/// per W plane.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TraceSet<'a> {
    pub x: Axis<'a>,
    pub y: Axis<'a>,
    pub z: &'a [f64],
    pub w: &'a [f64],
}

impl<'a> TraceSet<'a> {
    #[must_use]
    pub fn new(y: Axis<'a>) -> Self {
        Self {
            y,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_x(mut self, x: Axis<'a>) -> Self {
        self.x = x;
        self
    }

    #[must_use]
    pub fn with_z(mut self, z: &'a [f64]) -> Self {
        self.z = z;
        self
    }

    #[must_use]
    pub fn with_w(mut self, w: &'a [f64]) -> Self {
        self.w = w;
        self
    }

    /// Number of traces (subfiles) the write will produce.
    #[must_use]
    pub fn trace_count(&self) -> usize {
        self.y.trace_count()
    }
}
