//! Layout planning: validates a [`TraceSet`] against the flags and derives
//! everything the encoders need before a single byte is produced.

use log::{debug, warn};
use spcfile::{scaling_exponent, EncodeError, FormatFlags, LayoutKind};
use traces::{Axis, TraceSet};

use crate::error::ValidationError;

/// Largest trace count a 16-bit subfile index can address.
const MAX_TRACES: usize = u16::MAX as usize + 1;

/// The validated shape of one write call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub kind: LayoutKind,
    /// Number of subfiles.
    pub traces: usize,
    /// Points per trace for layouts whose traces share a length.
    pub points: usize,
    pub first_x: f64,
    pub last_x: f64,
    /// A directory table follows the trace data.
    pub directory: bool,
}

impl Layout {
    /// Validates `set` for `flags` and derives the layout.
    ///
    /// # Errors
    ///
    /// Any [`ValidationError`]; the caller must not write anything.
    pub fn plan(flags: FormatFlags, set: &TraceSet<'_>) -> Result<Self, ValidationError> {
        let kind = LayoutKind::from_flags(flags);
        let (x, y) = (&set.x, &set.y);

        if kind == LayoutKind::IndependentXY && !x.is_empty() {
            // one count per subfile covers both X and Y, so check even when Y is empty
            if x.trace_count() != y.trace_count() {
                return Err(ValidationError::TraceCountMismatch {
                    x: x.trace_count(),
                    y: y.trace_count(),
                });
            }
            for (i, (xr, yr)) in x.rows().zip(y.rows()).enumerate() {
                if xr.len() != yr.len() {
                    return Err(ValidationError::ExtentMismatch {
                        x: xr.len(),
                        y: yr.len(),
                        trace: Some(i),
                    });
                }
            }
        } else if !x.is_empty() && !y.is_empty() && x.trailing_len() != y.trailing_len() {
            return Err(ValidationError::ExtentMismatch {
                x: x.trailing_len(),
                y: y.trailing_len(),
                trace: None,
            });
        }

        if x.is_empty() && kind.requires_x() {
            return Err(ValidationError::MissingX(kind));
        }

        let points = y.trailing_len();
        let (first_x, last_x) = match (x.min(), x.max()) {
            (Some(min), Some(max)) => (min, max),
            // implicit range: point count of a single series, row count of a 2-D one
            _ => match y {
                Axis::Flat(v) => (0.0, v.len() as f64),
                Axis::Rows(rows) => (0.0, rows.len() as f64),
            },
        };

        let traces = set.trace_count();
        if traces > MAX_TRACES {
            return Err(ValidationError::TooManyTraces(traces));
        }

        if !set.w.is_empty() && traces % set.w.len() != 0 {
            return Err(ValidationError::WPlaneMismatch {
                planes: set.w.len(),
                traces,
            });
        }

        let layout = Self {
            kind,
            traces,
            points,
            first_x,
            last_x,
            directory: kind.emits_directory(flags),
        };
        debug!(
            "planned {:?} layout: {} traces, {} points, x {}..{}, directory={}",
            layout.kind, layout.traces, layout.points, layout.first_x, layout.last_x, layout.directory
        );
        Ok(layout)
    }

    /// Returns `true` for multi-trace layouts that carry explicit X values.
    ///
    /// XYXY files qualify only with the multi-trace flag, which is exactly
    /// when a directory is written.
    #[must_use]
    pub fn needs_exponent(&self) -> bool {
        match self.kind {
            LayoutKind::EvenY => false,
            LayoutKind::SharedX => self.traces > 1,
            LayoutKind::IndependentXY => self.directory,
        }
    }

    /// Computes the legacy scaling exponent over all X and Y values.
    ///
    /// The result is diagnostic only: samples are stored as IEEE floats and
    /// the headers keep the float exponent.
    pub fn exponent(&self, set: &TraceSet<'_>) -> Result<Option<i8>, EncodeError> {
        if !self.needs_exponent() {
            return Ok(None);
        }
        let max_abs = set
            .x
            .max_abs()
            .into_iter()
            .chain(set.y.max_abs())
            .fold(0.0, f64::max);
        let exponent = scaling_exponent(max_abs)?;
        debug!("scaling exponent {} for max |value| {}", exponent, max_abs);
        Ok(Some(exponent))
    }
}

/// Z value of trace `i`.
///
/// No values means zero, a single value is broadcast, and an index past the
/// end falls back to zero without failing the write.
pub(crate) fn z_for(z: &[f64], i: usize) -> f64 {
    match z {
        [] => 0.0,
        [only] => *only,
        _ => z.get(i).copied().unwrap_or_else(|| {
            warn!("no z value for trace {} ({} supplied), using 0", i, z.len());
            0.0
        }),
    }
}

/// W value of trace `i`: traces are split into `w.len()` equal planes.
pub(crate) fn w_for(w: &[f64], traces: usize, i: usize) -> f64 {
    if w.is_empty() {
        return 0.0;
    }
    let per_plane = (traces / w.len()).max(1);
    w.get(i / per_plane).copied().unwrap_or(0.0)
}
