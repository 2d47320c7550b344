//! Tests for the derived view engine
//!
//! These tests verify:
//! - Percentage formula and grade band boundaries
//! - Stable sorting in both directions
//! - Extremum with first-in-list tie-break
//! - Summary and the empty-set "no data" signal

use gradebook::record::StudentRecord;
use gradebook::view::{self, extremum, grade, percentage, summary, Extremum, Grade, RecordView};

// =============================================================================
// Helper Functions
// =============================================================================

fn rec(code: &str, coursework: [i32; 3], exam: i32) -> StudentRecord {
    StudentRecord::new(code, format!("Student {}", code), coursework, exam)
}

fn codes(records: &[&StudentRecord]) -> Vec<String> {
    records.iter().map(|r| r.code.clone()).collect()
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================================
// Percentage & Grade Tests
// =============================================================================

#[test]
fn test_full_marks_is_100_percent_a() {
    let record = StudentRecord::new("1001", "A", [20, 20, 20], 100);

    let pct = percentage(&record);

    assert!(approx_eq(pct, 100.0));
    assert_eq!(grade(pct), Grade::A);
}

#[test]
fn test_zero_marks_is_0_percent_f() {
    let record = StudentRecord::new("1002", "B", [0, 0, 0], 0);

    let pct = percentage(&record);

    assert!(approx_eq(pct, 0.0));
    assert_eq!(grade(pct), Grade::F);
}

#[test]
fn test_percentage_formula() {
    // (10 + 10 + 10 + 50) / 160 * 100 = 50
    assert!(approx_eq(percentage(&rec("x", [10, 10, 10], 50)), 50.0));
    // (15 + 16 + 14 + 72) / 160 * 100 = 73.125
    assert!(approx_eq(percentage(&rec("y", [15, 16, 14], 72)), 73.125));
}

#[test]
fn test_percentage_is_not_clamped() {
    // Out-of-range marks can come from a hand-edited file
    let pct = percentage(&rec("x", [20, 20, 20], 140));

    assert!(approx_eq(pct, 125.0));
    assert_eq!(grade(pct), Grade::A);
}

#[test]
fn test_grade_band_boundaries() {
    let cases = [
        (39.99, Grade::F),
        (40.0, Grade::D),
        (49.99, Grade::D),
        (50.0, Grade::C),
        (59.99, Grade::C),
        (60.0, Grade::B),
        (69.99, Grade::B),
        (70.0, Grade::A),
        (100.0, Grade::A),
        (0.0, Grade::F),
    ];

    for (pct, expected) in cases {
        assert_eq!(grade(pct), expected, "percentage {}", pct);
    }
}

#[test]
fn test_grade_from_exact_mark_totals() {
    // 64/160 = 40%, 63/160 = 39.375%
    assert_eq!(grade(percentage(&rec("d", [0, 0, 0], 64))), Grade::D);
    assert_eq!(grade(percentage(&rec("f", [0, 0, 0], 63))), Grade::F);
    // 112/160 = 70%
    assert_eq!(grade(percentage(&rec("a", [20, 20, 20], 52))), Grade::A);
}

#[test]
fn test_record_view() {
    let record = StudentRecord::new("1001", "Ada", [18, 19, 20], 91);

    let row = RecordView::from(&record);

    assert_eq!(row.code, "1001");
    assert_eq!(row.coursework_total, 57);
    assert_eq!(row.exam, 91);
    assert!(approx_eq(row.percentage, 92.5));
    assert_eq!(row.grade, Grade::A);
}

// =============================================================================
// Sort Tests
// =============================================================================

#[test]
fn test_sort_ascending_non_decreasing() {
    let records = vec![
        rec("a", [10, 10, 10], 70),
        rec("b", [0, 0, 0], 10),
        rec("c", [20, 20, 20], 100),
        rec("d", [5, 5, 5], 40),
    ];

    let sorted = view::sort_by_percentage(&records, true);

    assert_eq!(codes(&sorted), vec!["b", "d", "a", "c"]);
    assert!(sorted
        .windows(2)
        .all(|w| percentage(w[0]) <= percentage(w[1])));
}

#[test]
fn test_sort_descending_non_increasing() {
    let records = vec![
        rec("a", [10, 10, 10], 70),
        rec("b", [0, 0, 0], 10),
        rec("c", [20, 20, 20], 100),
        rec("d", [5, 5, 5], 40),
    ];

    let sorted = view::sort_by_percentage(&records, false);

    assert_eq!(codes(&sorted), vec!["c", "a", "d", "b"]);
    assert!(sorted
        .windows(2)
        .all(|w| percentage(w[0]) >= percentage(w[1])));
}

#[test]
fn test_sort_is_stable_for_ties() {
    // x1, x2, x3 share the same total of 80
    let records = vec![
        rec("x1", [20, 0, 0], 60),
        rec("low", [0, 0, 0], 5),
        rec("x2", [0, 20, 0], 60),
        rec("x3", [10, 10, 0], 60),
    ];

    let asc = view::sort_by_percentage(&records, true);
    let desc = view::sort_by_percentage(&records, false);

    assert_eq!(codes(&asc), vec!["low", "x1", "x2", "x3"]);
    assert_eq!(codes(&desc), vec!["x1", "x2", "x3", "low"]);
}

#[test]
fn test_sort_does_not_reorder_input() {
    let records = vec![rec("b", [0, 0, 0], 90), rec("a", [0, 0, 0], 10)];

    let _ = view::sort_by_percentage(&records, true);

    assert_eq!(records[0].code, "b");
}

#[test]
fn test_sort_empty() {
    assert!(view::sort_by_percentage(&[], true).is_empty());
}

// =============================================================================
// Extremum Tests
// =============================================================================

#[test]
fn test_extremum_max_and_min() {
    let records = vec![
        rec("mid", [10, 10, 10], 50),
        rec("top", [20, 20, 20], 95),
        rec("bottom", [1, 1, 1], 3),
    ];

    assert_eq!(extremum(&records, Extremum::Max).unwrap().code, "top");
    assert_eq!(extremum(&records, Extremum::Min).unwrap().code, "bottom");
}

#[test]
fn test_extremum_tie_picks_first_in_list() {
    let records = vec![
        rec("first_top", [20, 20, 20], 100),
        rec("first_low", [0, 0, 0], 0),
        rec("second_top", [20, 20, 20], 100),
        rec("second_low", [0, 0, 0], 0),
    ];

    assert_eq!(extremum(&records, Extremum::Max).unwrap().code, "first_top");
    assert_eq!(extremum(&records, Extremum::Min).unwrap().code, "first_low");
}

#[test]
fn test_extremum_single_record() {
    let records = vec![rec("only", [5, 5, 5], 5)];

    assert_eq!(extremum(&records, Extremum::Max).unwrap().code, "only");
    assert_eq!(extremum(&records, Extremum::Min).unwrap().code, "only");
}

#[test]
fn test_extremum_empty_is_none() {
    assert!(extremum(&[], Extremum::Max).is_none());
    assert!(extremum(&[], Extremum::Min).is_none());
}

// =============================================================================
// Summary Tests
// =============================================================================

#[test]
fn test_summary_average() {
    let records = vec![
        rec("a", [20, 20, 20], 100), // 100%
        rec("b", [0, 0, 0], 0),      // 0%
        rec("c", [10, 10, 10], 50),  // 50%
    ];

    let stats = summary(&records).unwrap();

    assert_eq!(stats.count, 3);
    assert!(approx_eq(stats.average_percentage, 50.0));
}

#[test]
fn test_summary_empty_is_no_data() {
    assert!(summary(&[]).is_none());
}
