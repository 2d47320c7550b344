//! Record Module
//!
//! The student record and the operations that mutate a record list.
//!
//! ## Responsibilities
//! - Define `StudentRecord` and its mark limits
//! - Validate codes, names and mark ranges
//! - Search, add, update and delete against an in-memory list
//!
//! Operations here never touch the disk; `RecordStore` wraps them with
//! persistence.

mod ops;
mod update;

use serde::{Deserialize, Serialize};

use crate::error::{GradebookError, Result};

pub use ops::{add, delete, find_by_code_or_name, position, update};
pub use update::Update;

/// Number of coursework marks per student
pub const COURSEWORK_COUNT: usize = 3;

/// Maximum mark for a single coursework piece
pub const COURSEWORK_MAX: i32 = 20;

/// Maximum exam mark
pub const EXAM_MAX: i32 = 100;

/// Total marks available (3 × 20 coursework + 100 exam)
pub const TOTAL_MARKS: i32 = COURSEWORK_COUNT as i32 * COURSEWORK_MAX + EXAM_MAX;

/// One student's marks
///
/// Marks are signed so that whatever integer a hand-edited file holds
/// survives a load/save cycle. Range limits are enforced on `add` and
/// `update`, not on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Unique student code
    pub code: String,

    /// Display name
    pub name: String,

    /// Three coursework marks, each out of 20
    pub coursework: [i32; COURSEWORK_COUNT],

    /// Exam mark out of 100
    pub exam: i32,
}

impl StudentRecord {
    /// Create a record without validation
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        coursework: [i32; COURSEWORK_COUNT],
        exam: i32,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            coursework,
            exam,
        }
    }

    /// Sum of the three coursework marks (max 60)
    pub fn coursework_total(&self) -> i64 {
        self.coursework.iter().copied().map(i64::from).sum()
    }

    /// Coursework total plus exam (max 160)
    ///
    /// Widened to `i64` so loaded marks anywhere in the `i32` range cannot
    /// overflow.
    pub fn total_marks(&self) -> i64 {
        self.coursework_total() + i64::from(self.exam)
    }

    /// Check code, name and every mark against their limits
    pub fn validate(&self) -> Result<()> {
        check_text("code", &self.code)?;
        check_text("name", &self.name)?;
        for (i, mark) in self.coursework.iter().enumerate() {
            check_range(coursework_label(i), i64::from(*mark), COURSEWORK_MAX)?;
        }
        check_range("Exam", i64::from(self.exam), EXAM_MAX)?;
        Ok(())
    }

    /// Trim code and name in place
    pub(crate) fn normalize(&mut self) {
        let code = self.code.trim();
        if code.len() != self.code.len() {
            self.code = code.to_string();
        }
        let name = self.name.trim();
        if name.len() != self.name.len() {
            self.name = name.to_string();
        }
    }
}

// =============================================================================
// Validation Helpers
// =============================================================================

/// Display label for a coursework slot (0-based index)
pub(crate) fn coursework_label(index: usize) -> &'static str {
    match index {
        0 => "Coursework 1",
        1 => "Coursework 2",
        _ => "Coursework 3",
    }
}

/// Reject empty text and anything the line format cannot hold
pub(crate) fn check_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GradebookError::InvalidInput(format!(
            "{} must not be empty",
            field
        )));
    }
    if value.contains(',') || value.contains('\n') || value.contains('\r') {
        return Err(GradebookError::InvalidInput(format!(
            "{} must not contain commas or line breaks",
            field
        )));
    }
    Ok(())
}

/// Check `0 <= value <= max`
pub(crate) fn check_range(field: &'static str, value: i64, max: i32) -> Result<()> {
    if value < 0 || value > i64::from(max) {
        return Err(GradebookError::ValidationRange {
            field,
            value,
            min: 0,
            max,
        });
    }
    Ok(())
}
