//! View Module
//!
//! Derived values computed on demand from the live record list. Nothing
//! here is stored; every call recomputes from the records it is given.
//!
//! ## Derived Values
//! - Overall percentage: (coursework total + exam) / 160 × 100
//! - Grade: A ≥ 70, B ≥ 60, C ≥ 50, D ≥ 40, F below
//! - Aggregates: count and mean percentage, highest/lowest, sorted order

mod grade;
mod stats;

use serde::Serialize;

use crate::record::StudentRecord;

pub use grade::{grade, percentage, Grade};
pub use stats::{extremum, sort_by_percentage, summary, Extremum, Summary};

/// A display row for one record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordView {
    pub code: String,
    pub name: String,
    pub coursework_total: i64,
    pub exam: i32,
    pub percentage: f64,
    pub grade: Grade,
}

impl From<&StudentRecord> for RecordView {
    fn from(record: &StudentRecord) -> Self {
        let pct = percentage(record);
        Self {
            code: record.code.clone(),
            name: record.name.clone(),
            coursework_total: record.coursework_total(),
            exam: record.exam,
            percentage: pct,
            grade: grade(pct),
        }
    }
}
