//! Storage Module
//!
//! Whole-file persistence for the record list.
//!
//! ## Responsibilities
//! - Parse the marks file into records (lenient: bad lines are skipped)
//! - Rewrite the whole file after every mutation
//! - Optional temp-file-then-rename durability
//! - Optional checksummed binary snapshot format
//!
//! ## Text Format (default)
//! ```text
//! ┌────────────────────────────────────────┐
//! │ <count>                                │  header, informational
//! ├────────────────────────────────────────┤
//! │ <code>,<name>,<c1>,<c2>,<c3>,<exam>    │  one line per record
//! │ ...                                    │
//! └────────────────────────────────────────┘
//! ```
//!
//! ## Binary Snapshot Format
//! ```text
//! ┌──────────┬───────────┬─────────┬─────────┬─────────────────────┐
//! │Magic (4) │Version (2)│ CRC (4) │ Len (4) │ bincode(Vec<Record>)│
//! └──────────┴───────────┴─────────┴─────────┴─────────────────────┘
//! ```

pub mod snapshot;
pub mod text;
mod writer;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::config::{Config, FileFormat};
use crate::error::{GradebookError, Result};
use crate::record::StudentRecord;

pub use writer::write_file;

/// Outcome of a load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Count stated by the file header
    pub declared_count: usize,

    /// Records kept
    pub loaded: usize,

    /// Data lines dropped as malformed or duplicate
    pub skipped: usize,
}

impl LoadReport {
    /// Whether the header agrees with what was actually loaded
    pub fn count_matches(&self) -> bool {
        self.declared_count == self.loaded
    }
}

/// Load records in the configured format
pub fn load(config: &Config) -> Result<(Vec<StudentRecord>, LoadReport)> {
    let path = &config.data_file;
    let (records, report) = match config.format {
        FileFormat::Text => text::load(path)?,
        FileFormat::Binary => snapshot::load(path)?,
    };

    tracing::debug!(
        path = %path.display(),
        format = %config.format,
        loaded = report.loaded,
        skipped = report.skipped,
        "Loaded records"
    );

    if config.verify_declared_count && !report.count_matches() {
        tracing::warn!(
            path = %path.display(),
            declared = report.declared_count,
            loaded = report.loaded,
            "Header count does not match loaded records"
        );
    }

    Ok((records, report))
}

/// Save records in the configured format
pub fn save(config: &Config, records: &[StudentRecord]) -> Result<()> {
    save_as(
        &config.data_file,
        config.format,
        records,
        config.durable_writes,
    )
}

/// Save records to an explicit path and format
pub fn save_as(
    path: &Path,
    format: FileFormat,
    records: &[StudentRecord],
    durable: bool,
) -> Result<()> {
    let bytes = match format {
        FileFormat::Text => text::encode(records)?.into_bytes(),
        FileFormat::Binary => snapshot::encode(records)?,
    };
    write_file(path, &bytes, durable)?;

    tracing::debug!(
        path = %path.display(),
        format = %format,
        count = records.len(),
        "Saved records"
    );
    Ok(())
}

/// Read a whole file, mapping a missing file to `FileNotFound`
pub(crate) fn read_existing(path: &Path) -> Result<Vec<u8>> {
    match fs::read(path) {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(GradebookError::FileNotFound(path.to_path_buf()))
        }
        Err(e) => Err(e.into()),
    }
}
