use spcfile::{EncodeError, LayoutKind};
use std::io;

use thiserror::Error;

/// Caller input that cannot be written. Nothing reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// X and Y disagree on the number of points (per trace for XYXY files).
    #[error("x has {x} points but y has {y}{}", trace_suffix(.trace))]
    ExtentMismatch {
        x: usize,
        y: usize,
        trace: Option<usize>,
    },

    /// The layout stores X values but none were supplied.
    #[error("{0:?} layout requires x values")]
    MissingX(LayoutKind),

    /// XYXY files need exactly one X row per Y row.
    #[error("{x} x traces supplied for {y} y traces")]
    TraceCountMismatch { x: usize, y: usize },

    /// W values must split the traces into equal planes.
    #[error("{planes} w values do not evenly divide {traces} traces")]
    WPlaneMismatch { planes: usize, traces: usize },

    /// Subfile indexes are 16-bit.
    #[error("{0} traces exceed the subfile index range")]
    TooManyTraces(usize),
}

fn trace_suffix(trace: &Option<usize>) -> String {
    trace.map(|t| format!(" in trace {}", t)).unwrap_or_default()
}

/// Everything that can stop a write.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// An encoder broke a layout invariant; no bytes were written.
    #[error("encoder invariant violated: {0}")]
    Invariant(#[from] EncodeError),

    /// The sink failed; the destination may hold a partial file.
    #[error("storage error: {0}")]
    Storage(#[source] io::Error),
}
