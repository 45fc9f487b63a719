//! # spc-write - text traces to an SPC file
//!
//! Reads rows of numbers from a text file, arranges them according to the
//! layout selected by the configured flags, and writes one SPC file.
//!
//! ## Input
//!
//! ```text
//! # EvenY: one trace per line
//! 1.0 2.0 3.0
//! 4.0 5.0 6.0
//!
//! # SharedX (flags include 0x80): first line is X
//! 400, 500, 600
//! 1.0, 2.0, 3.0
//!
//! # XYXY (flags include 0x40): X and Y lines alternate
//! 1 2 3
//! 10 20 30
//! ```
//!
//! ## Configuration
//!
//! All settings are controlled via environment variables:
//!
//! ```text
//! SPC_CONFIG     TOML header metadata       (default: none, built-in defaults)
//! SPC_INPUT      input text file            (default: "traces.txt")
//! SPC_OUTPUT     output SPC file            (default: "out.spc")
//! SPC_STAMP_NOW  stamp local time if unset  (default: "false")
//! RUST_LOG       log filter                 (e.g. "debug")
//! ```
//!
//! ## Example
//!
//! ```text
//! $ SPC_INPUT=raman.txt SPC_OUTPUT=raman.spc cargo run -p cli --bin spc-write
//! wrote raman.spc: 1 traces, 4620 bytes, EvenY layout
//! ```

mod input;

use anyhow::{Context, Result};
use config::SpcConfig;
use fields::DateStamp;
use log::info;
use spcfile::LayoutKind;
use writer::SpcWriter;

use crate::input::{parse_rows, TraceInput};

/// Reads a configuration value from the environment, falling back to `default`.
fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn main() -> Result<()> {
    env_logger::init();

    let config_path = env_or("SPC_CONFIG", "");
    let input_path = env_or("SPC_INPUT", "traces.txt");
    let output_path = env_or("SPC_OUTPUT", "out.spc");
    let stamp_now: bool = env_or("SPC_STAMP_NOW", "false").parse().unwrap_or(false);

    let mut config = if config_path.is_empty() {
        SpcConfig::default()
    } else {
        SpcConfig::load(&config_path)?
    };
    if stamp_now && config.timestamp.is_none() {
        config.timestamp = Some(DateStamp::now());
    }

    let writer = SpcWriter::new(config);
    let kind = LayoutKind::from_flags(writer.flags());

    let text = std::fs::read_to_string(&input_path)
        .with_context(|| format!("reading input {}", input_path))?;
    let traces = TraceInput::from_rows(kind, parse_rows(&text)?)
        .with_context(|| format!("arranging {} for {:?} layout", input_path, kind))?;
    info!(
        "read {} traces from {} for {:?} layout",
        traces.trace_count(),
        input_path,
        kind
    );

    let summary = writer
        .write_file(&output_path, &traces.trace_set(kind))
        .with_context(|| format!("writing {}", output_path))?;

    println!(
        "wrote {}: {} traces, {} bytes, {:?} layout",
        output_path, summary.traces, summary.bytes, summary.layout
    );
    if let Some(exp) = summary.exponent {
        println!("scaling exponent (informational): {}", exp);
    }
    Ok(())
}
