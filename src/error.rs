//! Error types for Gradebook
//!
//! Provides a unified error type for all operations. Every variant is
//! recoverable at the call site.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using GradebookError
pub type Result<T> = std::result::Result<T, GradebookError>;

/// Unified error type for Gradebook operations
#[derive(Debug, Error)]
pub enum GradebookError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("File already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    // -------------------------------------------------------------------------
    // Format Errors
    // -------------------------------------------------------------------------
    #[error("Malformed header: {0}")]
    MalformedHeader(String),

    #[error("File is empty")]
    EmptyFile,

    #[error("Snapshot corruption detected: {0}")]
    Corruption(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Record Errors
    // -------------------------------------------------------------------------
    #[error("A student with code '{0}' already exists")]
    DuplicateKey(String),

    #[error("{field} must be between {min} and {max}, got {value}")]
    ValidationRange {
        field: &'static str,
        value: i64,
        min: i32,
        max: i32,
    },

    #[error("No student with code '{0}'")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
