//! Text input for `spc-write`: one row of numbers per line, separated by
//! whitespace or commas. Blank lines and lines starting with `#` are skipped.

use anyhow::{bail, Context, Result};
use spcfile::LayoutKind;
use traces::{Axis, TraceSet};

/// Parses every data line into a row of values.
pub fn parse_rows(text: &str) -> Result<Vec<Vec<f64>>> {
    let mut rows = Vec::new();
    for (n, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let row = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|tok| !tok.is_empty())
            .map(|tok| {
                tok.parse::<f64>()
                    .with_context(|| format!("line {}: bad number {:?}", n + 1, tok))
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }
    Ok(rows)
}

/// Rows sorted into X and Y according to the layout.
#[derive(Debug, Default, PartialEq)]
pub struct TraceInput {
    /// Empty, one shared row, or one row per trace.
    pub x: Vec<Vec<f64>>,
    pub y: Vec<Vec<f64>>,
}

impl TraceInput {
    /// EvenY: every row is a trace. SharedX: the first row is X. XYXY: rows
    /// alternate X then Y.
    pub fn from_rows(kind: LayoutKind, mut rows: Vec<Vec<f64>>) -> Result<Self> {
        let input = match kind {
            LayoutKind::EvenY => Self {
                x: Vec::new(),
                y: rows,
            },
            LayoutKind::SharedX => {
                if rows.is_empty() {
                    bail!("shared-x input needs an x row");
                }
                let y = rows.split_off(1);
                Self { x: rows, y }
            }
            LayoutKind::IndependentXY => {
                if rows.len() % 2 != 0 {
                    bail!("xyxy input needs x/y row pairs, got {} rows", rows.len());
                }
                let mut x = Vec::with_capacity(rows.len() / 2);
                let mut y = Vec::with_capacity(rows.len() / 2);
                let mut it = rows.into_iter();
                while let (Some(xr), Some(yr)) = (it.next(), it.next()) {
                    x.push(xr);
                    y.push(yr);
                }
                Self { x, y }
            }
        };
        if input.y.is_empty() {
            bail!("input has no traces");
        }
        Ok(input)
    }

    pub fn trace_count(&self) -> usize {
        self.y.len()
    }

    /// Borrows the rows for one write call. A single Y row is passed as a
    /// flat series.
    pub fn trace_set(&self, kind: LayoutKind) -> TraceSet<'_> {
        let x = match (kind, self.x.as_slice()) {
            (_, []) => Axis::empty(),
            (LayoutKind::SharedX, [shared, ..]) => Axis::Flat(shared),
            _ => Axis::Rows(&self.x),
        };
        let y = match self.y.as_slice() {
            [single] => Axis::Flat(single),
            rows => Axis::Rows(rows),
        };
        TraceSet::new(y).with_x(x)
    }
}
