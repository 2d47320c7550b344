//! Configuration for Gradebook
//!
//! Centralized configuration with sensible defaults.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::GradebookError;

/// Main configuration for a record store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Path of the student marks file
    pub data_file: PathBuf,

    /// On-disk encoding of the marks file
    pub format: FileFormat,

    /// Write through a temporary file, fsync, then rename over the target
    pub durable_writes: bool,

    // -------------------------------------------------------------------------
    // Load Configuration
    // -------------------------------------------------------------------------
    /// Warn when the header count differs from the number of records loaded
    pub verify_declared_count: bool,
}

/// Encoding of the marks file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileFormat {
    /// `<count>` line followed by `code,name,c1,c2,c3,exam` lines
    #[default]
    Text,

    /// Checksummed bincode snapshot
    Binary,
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::Text => f.write_str("text"),
            FileFormat::Binary => f.write_str("binary"),
        }
    }
}

impl FromStr for FileFormat {
    type Err = GradebookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(FileFormat::Text),
            "binary" | "bin" => Ok(FileFormat::Binary),
            other => Err(GradebookError::InvalidInput(format!(
                "unknown file format '{}'",
                other
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("studentMarks.txt"),
            format: FileFormat::Text,
            durable_writes: true,
            verify_declared_count: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the marks file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Set the on-disk format
    pub fn format(mut self, format: FileFormat) -> Self {
        self.config.format = format;
        self
    }

    /// Enable or disable temp-file-then-rename writes
    pub fn durable_writes(mut self, enabled: bool) -> Self {
        self.config.durable_writes = enabled;
        self
    }

    /// Enable or disable the declared count check on load
    pub fn verify_declared_count(mut self, enabled: bool) -> Self {
        self.config.verify_declared_count = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
