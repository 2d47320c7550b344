//! Percentage and grade bands

use std::fmt;

use serde::Serialize;

use crate::record::{StudentRecord, TOTAL_MARKS};

/// Letter grade for an overall percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Lower bound (inclusive) of each band, best first
    const BANDS: [(f64, Grade); 4] = [
        (70.0, Grade::A),
        (60.0, Grade::B),
        (50.0, Grade::C),
        (40.0, Grade::D),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall percentage out of 160 marks, scaled to 100
///
/// Not clamped: out-of-range marks loaded from a file give out-of-range
/// percentages.
pub fn percentage(record: &StudentRecord) -> f64 {
    record.total_marks() as f64 / f64::from(TOTAL_MARKS) * 100.0
}

/// Map a percentage to its band
pub fn grade(percentage: f64) -> Grade {
    Grade::BANDS
        .iter()
        .find(|(floor, _)| percentage >= *floor)
        .map(|(_, g)| *g)
        .unwrap_or(Grade::F)
}
