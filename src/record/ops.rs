//! Record list operations
//!
//! Every mutating function validates first and mutates last, so an `Err`
//! always leaves the list exactly as it was.

use crate::error::{GradebookError, Result};

use super::{
    check_range, check_text, coursework_label, StudentRecord, Update, COURSEWORK_COUNT,
    COURSEWORK_MAX, EXAM_MAX,
};

/// Case-insensitive substring search over code and name
///
/// Returns matches in list order. An empty query matches every record;
/// the caller disambiguates when more than one record comes back.
pub fn find_by_code_or_name<'a>(
    records: &'a [StudentRecord],
    query: &str,
) -> Vec<&'a StudentRecord> {
    let needle = query.trim().to_lowercase();
    records
        .iter()
        .filter(|r| {
            r.code.to_lowercase().contains(&needle) || r.name.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Index of the record with exactly this code
pub fn position(records: &[StudentRecord], code: &str) -> Option<usize> {
    records.iter().position(|r| r.code == code)
}

/// Append a new record
///
/// Code and name are trimmed before checking. Fails with `DuplicateKey`
/// if the code is taken, `ValidationRange` for out-of-range marks.
pub fn add(records: &mut Vec<StudentRecord>, mut record: StudentRecord) -> Result<()> {
    record.normalize();
    check_text("code", &record.code)?;

    if position(records, &record.code).is_some() {
        return Err(GradebookError::DuplicateKey(record.code));
    }

    record.validate()?;

    tracing::debug!(code = %record.code, "Appending record");
    records.push(record);
    Ok(())
}

/// Apply a structured update to the record with `code`
pub fn update(records: &mut [StudentRecord], code: &str, update: Update) -> Result<()> {
    let index =
        position(records, code).ok_or_else(|| GradebookError::NotFound(code.to_string()))?;
    let update = update.normalized();

    // Validate the whole request before touching the record
    match &update {
        Update::Code(new_code) => {
            check_text("code", new_code)?;
            let collides = records
                .iter()
                .enumerate()
                .any(|(i, r)| i != index && r.code == *new_code);
            if collides {
                return Err(GradebookError::DuplicateKey(new_code.clone()));
            }
        }
        Update::Name(new_name) => check_text("name", new_name)?,
        Update::Coursework { index: slot, mark } => {
            if *slot >= COURSEWORK_COUNT {
                return Err(GradebookError::InvalidInput(format!(
                    "coursework index {} out of range",
                    slot
                )));
            }
            check_range(coursework_label(*slot), *mark, COURSEWORK_MAX)?;
        }
        Update::Exam(mark) => check_range("Exam", *mark, EXAM_MAX)?,
    }

    tracing::debug!(code = %code, update = %update, "Updating record");

    let record = &mut records[index];
    match update {
        Update::Code(new_code) => record.code = new_code,
        Update::Name(new_name) => record.name = new_name,
        // Range checked above, so the narrowing cannot truncate
        Update::Coursework { index: slot, mark } => record.coursework[slot] = mark as i32,
        Update::Exam(mark) => record.exam = mark as i32,
    }

    Ok(())
}

/// Remove the record with exactly this code and return it
pub fn delete(records: &mut Vec<StudentRecord>, code: &str) -> Result<StudentRecord> {
    let index =
        position(records, code).ok_or_else(|| GradebookError::NotFound(code.to_string()))?;
    Ok(records.remove(index))
}
