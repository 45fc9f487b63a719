/// Encode path: turns a validated layout into the complete file image.
///
/// Order: file header, shared X, then for each trace its subfile header and
/// samples, then the directory table and the log block when present.
use fields::CompressedDate;
use log::debug;
use spcfile::{
    DirectoryEntry, EncodeError, FileHeaderRecord, LayoutKind, LogBlockHeader, SectionOffsets,
    SubfileHeaderRecord, LOG_HEADER_BYTES,
};
use traces::{write_f32_le, TraceSet};

use crate::layout::{w_for, z_for, Layout};
use crate::{SpcWriter, WriteError, WriteSummary};

impl SpcWriter {
    /// Encodes `set` into an in-memory SPC file.
    ///
    /// # Errors
    ///
    /// [`WriteError::Validation`] for unusable input and
    /// [`WriteError::Invariant`] if an encoder produced an impossible record.
    pub fn encode(&self, set: &TraceSet<'_>) -> Result<(Vec<u8>, WriteSummary), WriteError> {
        let layout = Layout::plan(self.flags, set)?;
        let exponent = layout.exponent(set)?;
        let offsets =
            SectionOffsets::compute(layout.kind, layout.directory, layout.traces, &set.x, &set.y)?;

        let header = self.file_header(&layout, &offsets)?;
        let cfg = &self.config;
        let log_len = if cfg.has_log() {
            LOG_HEADER_BYTES + cfg.log_data.len() + cfg.log_text.len()
        } else {
            0
        };
        let mut buf = Vec::with_capacity(offsets.log as usize + log_len);
        buf.extend_from_slice(&header.encode()?);

        if layout.kind == LayoutKind::SharedX {
            set.x.write_f32_le(&mut buf).map_err(EncodeError::from)?;
        }

        let mut directory = Vec::with_capacity(if layout.directory { layout.traces } else { 0 });
        for i in 0..layout.traces {
            let start = buf.len();
            let z = z_for(set.z, i);
            let y = set.y.row(i).unwrap_or(&[]);

            let sub = SubfileHeaderRecord {
                // plan() caps traces at the u16 range
                index: i as u16,
                start_z: z as f32,
                num_points: match layout.kind {
                    LayoutKind::IndependentXY => Some(point_count(y.len())?),
                    _ => None,
                },
                w_value: w_for(set.w, layout.traces, i) as f32,
                ..SubfileHeaderRecord::default()
            };
            buf.extend_from_slice(&sub.encode()?);

            if layout.kind == LayoutKind::IndependentXY {
                write_f32_le(set.x.row(i).unwrap_or(&[]), &mut buf).map_err(EncodeError::from)?;
            }
            write_f32_le(y, &mut buf).map_err(EncodeError::from)?;

            if layout.directory {
                directory.push(DirectoryEntry::new(
                    byte_offset("subfile offset", start)?,
                    byte_offset("subfile size", buf.len() - start)?,
                    z as f32,
                ));
            }
        }

        if let Some(at) = offsets.directory {
            if at as usize != buf.len() {
                return Err(EncodeError::LengthMismatch {
                    record: "trace data",
                    expected: at as usize,
                    actual: buf.len(),
                }
                .into());
            }
            for entry in &directory {
                entry.write_to(&mut buf).map_err(EncodeError::from)?;
            }
            debug!("wrote {} directory entries at {}", directory.len(), at);
        }

        if cfg.has_log() {
            let log_header = LogBlockHeader::for_payload(&cfg.log_data, &cfg.log_text)?;
            debug!(
                "appending log block at {} ({} bytes)",
                buf.len(),
                log_header.block_size
            );
            buf.extend_from_slice(&log_header.encode()?);
            buf.extend_from_slice(&cfg.log_data);
            buf.extend_from_slice(cfg.log_text.as_bytes());
        }

        let summary = WriteSummary {
            layout: layout.kind,
            traces: layout.traces,
            bytes: buf.len(),
            log_offset: offsets.log,
            directory_offset: offsets.directory,
            exponent,
            has_log: cfg.has_log(),
        };
        Ok((buf, summary))
    }

    fn file_header(
        &self,
        layout: &Layout,
        offsets: &SectionOffsets,
    ) -> Result<FileHeaderRecord, EncodeError> {
        let cfg = &self.config;
        let num_points = match layout.kind {
            LayoutKind::IndependentXY => offsets.directory.unwrap_or(0),
            _ => point_count(layout.points)?,
        };
        Ok(FileHeaderRecord {
            flags: self.flags,
            technique: cfg.technique,
            num_points,
            first_x: layout.first_x,
            last_x: layout.last_x,
            subfile_count: layout.traces as i32,
            x_units: cfg.x_units,
            y_units: cfg.y_units,
            z_units: cfg.z_units,
            date: CompressedDate::pack(cfg.timestamp.as_ref()),
            resolution: cfg.resolution.clone(),
            source_instrument: cfg.source_instrument.clone(),
            peak_point: cfg.peak_point,
            memo: cfg.memo.clone(),
            axis_labels: cfg.axis_labels.clone(),
            log_offset: offsets.log,
            modifications: cfg.modifications,
            method_file: cfg.method_file.clone(),
            z_increment: cfg.z_increment,
            w_planes: cfg.w_planes,
            w_increment: cfg.w_increment,
            w_units: cfg.w_units,
            ..FileHeaderRecord::default()
        })
    }
}

fn point_count(n: usize) -> Result<u32, EncodeError> {
    byte_offset("point count", n)
}

fn byte_offset(what: &'static str, n: usize) -> Result<u32, EncodeError> {
    u32::try_from(n).map_err(|_| EncodeError::OffsetOverflow {
        what,
        value: n as u64,
    })
}
