// 📝 Incremental CSV report writer
// Shared output stage of both pipelines

use crate::entry::{EventEntry, HEADERS};
use anyhow::{Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Appends entries to the output file one at a time.
///
/// One piece of state: whether the header row has been written. Headers are
/// lazy, so a run that produces zero entries leaves the output file created
/// but empty. The `csv` writer terminates every record with a single `\n`;
/// no extra newline is appended on top.
pub struct ReportWriter {
    writer: csv::Writer<File>,
    path: PathBuf,
    headers_done: bool,
}

impl ReportWriter {
    /// Create the output file. The caller has already verified the path was
    /// free; an existing file at this point is a race we don't defend against.
    pub fn create(path: &Path) -> Result<Self> {
        let file =
            File::create(path).with_context(|| format!("No se pudo crear {}", path.display()))?;
        Ok(ReportWriter {
            writer: csv::Writer::from_writer(file),
            path: path.to_path_buf(),
            headers_done: false,
        })
    }

    /// Append one entry, writing the header row first if this is the first.
    pub fn write(&mut self, entry: &EventEntry) -> Result<()> {
        if !self.headers_done {
            self.writer
                .write_record(HEADERS)
                .with_context(|| format!("Error escribiendo {}", self.path.display()))?;
            self.headers_done = true;
        }
        self.writer
            .write_record(entry.to_record())
            .with_context(|| format!("Error escribiendo {}", self.path.display()))?;
        Ok(())
    }

    /// Flush and close the stream, returning the resolved output path for the
    /// final "Generado archivo" message.
    pub fn finish(mut self) -> Result<PathBuf> {
        self.writer
            .flush()
            .with_context(|| format!("Error cerrando {}", self.path.display()))?;
        Ok(self.path.canonicalize().unwrap_or(self.path))
    }
}

// ============================================================================
// TESTS
// ============================================================================
