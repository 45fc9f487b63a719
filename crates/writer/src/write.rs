use log::{error, info};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use traces::TraceSet;

use crate::{SpcWriter, WriteError, WriteSummary};

impl SpcWriter {
    /// Encodes `set` and writes the whole file to `sink`.
    ///
    /// Nothing is written unless encoding succeeded.
    ///
    /// # Errors
    ///
    /// [`WriteError::Validation`] or [`WriteError::Invariant`] before any byte
    /// reaches `sink`; [`WriteError::Storage`] if the sink fails part way.
    pub fn write_to<W: Write>(
        &self,
        sink: &mut W,
        set: &TraceSet<'_>,
    ) -> Result<WriteSummary, WriteError> {
        let (bytes, summary) = self.encode(set)?;
        sink.write_all(&bytes).map_err(WriteError::Storage)?;
        sink.flush().map_err(WriteError::Storage)?;
        Ok(summary)
    }

    /// Writes `set` to a new or truncated file at `path`.
    ///
    /// # File Handling
    ///
    /// The file is opened only after encoding succeeds, so invalid input never
    /// creates or truncates it. The data is fsynced before returning. A failed
    /// write may leave a partial file in place.
    pub fn write_file<P: AsRef<Path>>(
        &self,
        path: P,
        set: &TraceSet<'_>,
    ) -> Result<WriteSummary, WriteError> {
        let path = path.as_ref();
        let (bytes, summary) = self.encode(set)?;

        let persist = || -> std::io::Result<()> {
            let mut file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(path)?;
            file.write_all(&bytes)?;
            file.sync_all()?;
            Ok(())
        };

        if let Err(e) = persist() {
            error!("failed writing {}: {}", path.display(), e);
            return Err(WriteError::Storage(e));
        }

        info!(
            "wrote {} ({} bytes, {} traces, {:?})",
            path.display(),
            summary.bytes,
            summary.traces,
            summary.layout
        );
        Ok(summary)
    }
}
