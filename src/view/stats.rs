//! Aggregate views: sorting, extremum, summary

use serde::Serialize;

use crate::record::StudentRecord;

use super::percentage;

/// Which end of the percentage range to pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    Max,
    Min,
}

/// Count and mean percentage of a non-empty record set
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub average_percentage: f64,
}

/// Records ordered by overall percentage
///
/// Stable in both directions: records with equal percentages keep their
/// original relative order.
pub fn sort_by_percentage(records: &[StudentRecord], ascending: bool) -> Vec<&StudentRecord> {
    let mut keyed: Vec<(f64, &StudentRecord)> =
        records.iter().map(|r| (percentage(r), r)).collect();

    if ascending {
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    } else {
        keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
    }

    keyed.into_iter().map(|(_, r)| r).collect()
}

/// The record with the highest or lowest percentage
///
/// On a tie the earliest record in list order wins. `None` when empty.
pub fn extremum(records: &[StudentRecord], mode: Extremum) -> Option<&StudentRecord> {
    let mut best: Option<(f64, &StudentRecord)> = None;

    for record in records {
        let pct = percentage(record);
        let replace = match best {
            None => true,
            // Strict comparison keeps the first of equal values
            Some((current, _)) => match mode {
                Extremum::Max => pct > current,
                Extremum::Min => pct < current,
            },
        };
        if replace {
            best = Some((pct, record));
        }
    }

    best.map(|(_, r)| r)
}

/// Count and mean percentage, or `None` when there is no data
pub fn summary(records: &[StudentRecord]) -> Option<Summary> {
    if records.is_empty() {
        return None;
    }

    let total: f64 = records.iter().map(percentage).sum();
    Some(Summary {
        count: records.len(),
        average_percentage: total / records.len() as f64,
    })
}
