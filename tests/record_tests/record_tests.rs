//! Tests for record list operations
//!
//! These tests verify:
//! - Case-insensitive search over code and name
//! - Add with duplicate-key and range validation
//! - Structured updates (field parsing, ranges, code collisions)
//! - Delete by exact code
//! - Failed operations leave the list untouched

use gradebook::record::{self, StudentRecord, Update};
use gradebook::GradebookError;

// =============================================================================
// Helper Functions
// =============================================================================

fn sample_records() -> Vec<StudentRecord> {
    vec![
        StudentRecord::new("1001", "Ada Lovelace", [18, 19, 20], 91),
        StudentRecord::new("1002", "Alan Turing", [15, 16, 14], 72),
        StudentRecord::new("2001", "Grace Hopper", [10, 12, 9], 48),
    ]
}

// =============================================================================
// Search Tests
// =============================================================================

#[test]
fn test_find_by_exact_code() {
    let records = sample_records();

    let matches = record::find_by_code_or_name(&records, "1002");

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "Alan Turing");
}

#[test]
fn test_find_by_partial_name_case_insensitive() {
    let records = sample_records();

    let matches = record::find_by_code_or_name(&records, "  HOPPER ");

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].code, "2001");
}

#[test]
fn test_find_multiple_matches_in_list_order() {
    let records = sample_records();

    // "10" is in both 1001 and 1002
    let matches = record::find_by_code_or_name(&records, "10");

    let codes: Vec<&str> = matches.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["1001", "1002"]);
}

#[test]
fn test_find_no_match() {
    let records = sample_records();

    assert!(record::find_by_code_or_name(&records, "zzz").is_empty());
}

#[test]
fn test_find_empty_query_matches_all() {
    let records = sample_records();

    assert_eq!(record::find_by_code_or_name(&records, "").len(), 3);
}

// =============================================================================
// Add Tests
// =============================================================================

#[test]
fn test_add_then_find_returns_exactly_one() {
    let mut records = sample_records();

    record::add(
        &mut records,
        StudentRecord::new("3001", "Barbara Liskov", [20, 20, 20], 99),
    )
    .unwrap();

    assert_eq!(records.len(), 4);
    let matches = record::find_by_code_or_name(&records, "3001");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "Barbara Liskov");
}

#[test]
fn test_add_trims_code_and_name() {
    let mut records = Vec::new();

    record::add(
        &mut records,
        StudentRecord::new(" 3001 ", "  Barbara Liskov ", [1, 2, 3], 4),
    )
    .unwrap();

    assert_eq!(records[0].code, "3001");
    assert_eq!(records[0].name, "Barbara Liskov");
}

#[test]
fn test_add_duplicate_code_fails() {
    let mut records = sample_records();

    let result = record::add(
        &mut records,
        StudentRecord::new("1001", "Someone Else", [1, 1, 1], 1),
    );

    assert!(matches!(result, Err(GradebookError::DuplicateKey(code)) if code == "1001"));
    assert_eq!(records, sample_records());
}

#[test]
fn test_add_coursework_out_of_range_fails() {
    let mut records = sample_records();

    let result = record::add(
        &mut records,
        StudentRecord::new("3001", "Over Achiever", [21, 0, 0], 50),
    );

    assert!(matches!(
        result,
        Err(GradebookError::ValidationRange { value: 21, max: 20, .. })
    ));
    assert_eq!(records.len(), 3);
}

#[test]
fn test_add_exam_out_of_range_fails() {
    let mut records = Vec::new();

    let result = record::add(
        &mut records,
        StudentRecord::new("3001", "Neg", [0, 0, 0], -1),
    );

    assert!(matches!(
        result,
        Err(GradebookError::ValidationRange { value: -1, max: 100, .. })
    ));
    assert!(records.is_empty());
}

#[test]
fn test_add_accepts_boundary_marks() {
    let mut records = Vec::new();

    record::add(&mut records, StudentRecord::new("a", "Zero", [0, 0, 0], 0)).unwrap();
    record::add(&mut records, StudentRecord::new("b", "Full", [20, 20, 20], 100)).unwrap();

    assert_eq!(records.len(), 2);
}

#[test]
fn test_add_rejects_comma_in_name() {
    let mut records = Vec::new();

    let result = record::add(
        &mut records,
        StudentRecord::new("3001", "Hopper, Grace", [1, 1, 1], 1),
    );

    assert!(matches!(result, Err(GradebookError::InvalidInput(_))));
}

#[test]
fn test_add_rejects_empty_code() {
    let mut records = Vec::new();

    let result = record::add(&mut records, StudentRecord::new("   ", "Nobody", [1, 1, 1], 1));

    assert!(matches!(result, Err(GradebookError::InvalidInput(_))));
}

// =============================================================================
// Update Tests
// =============================================================================

#[test]
fn test_update_parse_fields() {
    assert_eq!(
        Update::parse("code", " 9999 ").unwrap(),
        Update::Code("9999".to_string())
    );
    assert_eq!(
        Update::parse("Name", "New Name").unwrap(),
        Update::Name("New Name".to_string())
    );
    assert_eq!(
        Update::parse("coursework3", "7").unwrap(),
        Update::Coursework { index: 2, mark: 7 }
    );
    assert_eq!(
        Update::parse("c1", "0").unwrap(),
        Update::Coursework { index: 0, mark: 0 }
    );
    assert_eq!(Update::parse("EXAM", "55").unwrap(), Update::Exam(55));
}

#[test]
fn test_update_parse_rejects_unknown_field() {
    assert!(matches!(
        Update::parse("attendance", "5"),
        Err(GradebookError::InvalidInput(_))
    ));
    assert!(matches!(
        Update::parse("coursework4", "5"),
        Err(GradebookError::InvalidInput(_))
    ));
}

#[test]
fn test_update_parse_rejects_non_integer_mark() {
    assert!(matches!(
        Update::parse("exam", "fifty"),
        Err(GradebookError::InvalidInput(_))
    ));
}

#[test]
fn test_update_coursework() {
    let mut records = sample_records();

    record::update(&mut records, "1002", Update::Coursework { index: 1, mark: 20 }).unwrap();

    assert_eq!(records[1].coursework, [15, 20, 14]);
}

#[test]
fn test_update_exam() {
    let mut records = sample_records();

    record::update(&mut records, "2001", Update::Exam(100)).unwrap();

    assert_eq!(records[2].exam, 100);
}

#[test]
fn test_update_name() {
    let mut records = sample_records();

    record::update(&mut records, "1001", Update::Name("Augusta Ada King".into())).unwrap();

    assert_eq!(records[0].name, "Augusta Ada King");
}

#[test]
fn test_update_coursework_out_of_range_fails() {
    let mut records = sample_records();

    let result = record::update(&mut records, "1001", Update::Coursework { index: 0, mark: 25 });

    assert!(matches!(
        result,
        Err(GradebookError::ValidationRange { value: 25, .. })
    ));
    assert_eq!(records, sample_records());
}

#[test]
fn test_update_exam_out_of_range_fails() {
    let mut records = sample_records();

    let result = record::update(&mut records, "1001", Update::Exam(101));

    assert!(matches!(result, Err(GradebookError::ValidationRange { .. })));
    assert_eq!(records[0].exam, 91);
}

#[test]
fn test_update_code_collision_fails() {
    let mut records = sample_records();

    let result = record::update(&mut records, "1001", Update::Code("2001".into()));

    assert!(matches!(result, Err(GradebookError::DuplicateKey(code)) if code == "2001"));
    assert_eq!(records, sample_records());
}

#[test]
fn test_update_code_to_itself_is_allowed() {
    let mut records = sample_records();

    record::update(&mut records, "1001", Update::Code("1001".into())).unwrap();

    assert_eq!(records, sample_records());
}

#[test]
fn test_update_code_changes_key() {
    let mut records = sample_records();

    record::update(&mut records, "1001", Update::Code("1005".into())).unwrap();

    assert!(record::position(&records, "1001").is_none());
    assert_eq!(record::position(&records, "1005"), Some(0));
}

#[test]
fn test_update_unknown_code_fails() {
    let mut records = sample_records();

    let result = record::update(&mut records, "9999", Update::Exam(50));

    assert!(matches!(result, Err(GradebookError::NotFound(code)) if code == "9999"));
}

#[test]
fn test_update_bad_coursework_index_fails() {
    let mut records = sample_records();

    let result = record::update(&mut records, "1001", Update::Coursework { index: 3, mark: 5 });

    assert!(matches!(result, Err(GradebookError::InvalidInput(_))));
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_removes_exactly_one() {
    let mut records = sample_records();

    let removed = record::delete(&mut records, "1002").unwrap();

    assert_eq!(removed.name, "Alan Turing");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], sample_records()[0]);
    assert_eq!(records[1], sample_records()[2]);
}

#[test]
fn test_delete_requires_exact_code() {
    let mut records = sample_records();

    // Partial code is not enough
    let result = record::delete(&mut records, "100");

    assert!(matches!(result, Err(GradebookError::NotFound(_))));
    assert_eq!(records.len(), 3);
}

#[test]
fn test_delete_nonexistent_fails() {
    let mut records = sample_records();

    let result = record::delete(&mut records, "9999");

    assert!(matches!(result, Err(GradebookError::NotFound(_))));
    assert_eq!(records, sample_records());
}
