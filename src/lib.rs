//! # Gradebook
//!
//! A single-user student mark manager with:
//! - A flat-file record store, rewritten in full after every change
//! - Lenient loading that drops malformed lines instead of failing
//! - Derived percentages, grades and aggregate statistics
//! - An optional checksummed binary snapshot format
//! - A ten-question arithmetic quiz held in an explicit session value
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     gradebook (CLI)                          │
//! └──────────────┬───────────────────────────────┬──────────────┘
//!                │                               │
//! ┌──────────────▼──────────────┐        ┌───────▼───────┐
//! │         RecordStore         │        │  QuizSession  │
//! │  (validate → save → commit) │        └───────────────┘
//! └──────┬───────────────┬──────┘
//!        │               │
//!        ▼               ▼
//! ┌─────────────┐ ┌─────────────┐
//! │   record    │ │    view     │
//! │ (list ops)  │ │ (% / grade) │
//! └──────┬──────┘ └─────────────┘
//!        ▼
//! ┌─────────────┐
//! │   storage   │
//! │(text / bin) │
//! └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

pub mod quiz;
pub mod record;
pub mod storage;
pub mod store;
pub mod view;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::{Config, FileFormat};
pub use error::{GradebookError, Result};
pub use record::{StudentRecord, Update};
pub use store::RecordStore;
pub use view::{Grade, RecordView};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Gradebook
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
