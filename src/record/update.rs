//! Structured update requests
//!
//! A single field + value pair, parsed once and validated as a unit.

use std::fmt;

use crate::error::{GradebookError, Result};

use super::{coursework_label, COURSEWORK_COUNT};

/// A change to one field of a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    /// Replace the student code
    Code(String),

    /// Replace the name
    Name(String),

    /// Replace one coursework mark (`index` is 0-based)
    Coursework { index: usize, mark: i64 },

    /// Replace the exam mark
    Exam(i64),
}

impl Update {
    /// Parse a field name and raw value
    ///
    /// Field names are case-insensitive and ignore spaces, `_` and `-`:
    /// `code`, `name`, `coursework1`..`coursework3` (or `c1`..`c3`), `exam`.
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        let key: String = field
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();

        match key.as_str() {
            "code" | "studentcode" => Ok(Update::Code(value.trim().to_string())),
            "name" | "studentname" => Ok(Update::Name(value.trim().to_string())),
            "exam" => Ok(Update::Exam(parse_mark("Exam", value)?)),
            _ => {
                let index = coursework_index(&key).ok_or_else(|| {
                    GradebookError::InvalidInput(format!("unknown field '{}'", field))
                })?;
                Ok(Update::Coursework {
                    index,
                    mark: parse_mark(coursework_label(index), value)?,
                })
            }
        }
    }

    /// Trim the text of code and name updates
    pub(crate) fn normalized(self) -> Self {
        match self {
            Update::Code(v) => Update::Code(v.trim().to_string()),
            Update::Name(v) => Update::Name(v.trim().to_string()),
            other => other,
        }
    }

    /// Human-readable field label
    pub fn field_label(&self) -> &'static str {
        match self {
            Update::Code(_) => "Student Code",
            Update::Name(_) => "Student Name",
            Update::Coursework { index, .. } => coursework_label(*index),
            Update::Exam(_) => "Exam",
        }
    }
}

impl fmt::Display for Update {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Update::Code(v) | Update::Name(v) => write!(f, "{} = {}", self.field_label(), v),
            Update::Coursework { mark, .. } | Update::Exam(mark) => {
                write!(f, "{} = {}", self.field_label(), mark)
            }
        }
    }
}

/// "coursework2" / "c2" / "cw2" → Some(1)
fn coursework_index(key: &str) -> Option<usize> {
    let digits = key
        .strip_prefix("coursework")
        .or_else(|| key.strip_prefix("cw"))
        .or_else(|| key.strip_prefix('c'))?;
    let n: usize = digits.parse().ok()?;
    (1..=COURSEWORK_COUNT).contains(&n).then(|| n - 1)
}

fn parse_mark(label: &str, value: &str) -> Result<i64> {
    value.trim().parse::<i64>().map_err(|_| {
        GradebookError::InvalidInput(format!("{} must be an integer, got '{}'", label, value))
    })
}
