//! Record Store
//!
//! Owns the live record list and keeps the marks file in step with it.
//!
//! ## Responsibilities
//! - Load the marks file on open
//! - Validate and apply add/update/delete
//! - Rewrite the whole file after every successful mutation
//! - Expose read-only views for the derived view engine

use std::path::Path;

use crate::config::{Config, FileFormat};
use crate::error::{GradebookError, Result};
use crate::record::{self, StudentRecord, Update};
use crate::storage::{self, LoadReport};

/// A marks file and its in-memory records
///
/// ## Write Model
///
/// Every mutation runs on a copy of the list:
/// 1. Apply the operation to the copy (validation errors stop here)
/// 2. Save the copy to disk
/// 3. Replace the in-memory list with the copy
///
/// A failed validation or a failed write therefore leaves both the file
/// and `records()` unchanged.
pub struct RecordStore {
    /// Store configuration
    config: Config,

    /// Live records, in file order
    records: Vec<StudentRecord>,

    /// Outcome of the most recent load
    last_load: LoadReport,
}

impl RecordStore {
    /// Open an existing marks file
    pub fn open(config: Config) -> Result<Self> {
        let (records, last_load) = storage::load(&config)?;

        if last_load.skipped > 0 {
            tracing::info!(
                path = %config.data_file.display(),
                skipped = last_load.skipped,
                "Some record lines were skipped during load"
            );
        }

        Ok(Self {
            config,
            records,
            last_load,
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified marks file
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(Config::builder().data_file(path).build())
    }

    /// Create a new, empty marks file
    ///
    /// Fails with `AlreadyExists` rather than overwriting an existing file.
    pub fn create(config: Config) -> Result<Self> {
        if config.data_file.exists() {
            return Err(GradebookError::AlreadyExists(config.data_file.clone()));
        }

        storage::save(&config, &[])?;
        tracing::info!(path = %config.data_file.display(), "Created empty record store");

        Ok(Self {
            config,
            records: Vec::new(),
            last_load: LoadReport::default(),
        })
    }

    /// Re-read the marks file, discarding the in-memory list
    pub fn reload(&mut self) -> Result<()> {
        let (records, report) = storage::load(&self.config)?;
        self.records = records;
        self.last_load = report;
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All records in file order
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Record with exactly this code
    pub fn get(&self, code: &str) -> Option<&StudentRecord> {
        record::position(&self.records, code).map(|i| &self.records[i])
    }

    /// Case-insensitive search over code and name
    pub fn find(&self, query: &str) -> Vec<&StudentRecord> {
        record::find_by_code_or_name(&self.records, query)
    }

    /// Number of live records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add a record and persist
    pub fn add(&mut self, new_record: StudentRecord) -> Result<()> {
        let code = new_record.code.trim().to_string();
        self.commit(|records| record::add(records, new_record))?;
        tracing::info!(code = %code, "Added student");
        Ok(())
    }

    /// Apply a structured update and persist
    pub fn update(&mut self, code: &str, change: Update) -> Result<()> {
        let description = change.to_string();
        self.commit(|records| record::update(records, code, change))?;
        tracing::info!(code = %code, change = %description, "Updated student");
        Ok(())
    }

    /// Delete by exact code and persist; returns the removed record
    pub fn delete(&mut self, code: &str) -> Result<StudentRecord> {
        let mut removed = None;
        self.commit(|records| {
            removed = Some(record::delete(records, code)?);
            Ok(())
        })?;
        tracing::info!(code = %code, "Deleted student");
        removed.ok_or_else(|| GradebookError::NotFound(code.to_string()))
    }

    /// Write the current records in the configured format
    pub fn persist(&self) -> Result<()> {
        storage::save(&self.config, &self.records)
    }

    /// Write the current records to another file and format
    pub fn export(&self, path: &Path, format: FileFormat) -> Result<()> {
        storage::save_as(path, format, &self.records, self.config.durable_writes)?;
        tracing::info!(
            path = %path.display(),
            format = %format,
            count = self.records.len(),
            "Exported records"
        );
        Ok(())
    }

    /// Apply `op` to a copy, save the copy, then swap it in
    fn commit<F>(&mut self, op: F) -> Result<()>
    where
        F: FnOnce(&mut Vec<StudentRecord>) -> Result<()>,
    {
        let mut next = self.records.clone();
        op(&mut next)?;
        storage::save(&self.config, &next)?;
        self.records = next;
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the marks file path
    pub fn data_file(&self) -> &Path {
        &self.config.data_file
    }

    /// Get the outcome of the most recent load
    pub fn last_load(&self) -> LoadReport {
        self.last_load
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
