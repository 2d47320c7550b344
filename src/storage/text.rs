//! Text format
//!
//! Line-oriented `code,name,c1,c2,c3,exam` records behind a count header.
//! Parsing is lenient: a bad data line is logged and dropped,
//! only a missing or unreadable header fails the load.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::path::Path;

use crate::error::{GradebookError, Result};
use crate::record::StudentRecord;

use super::{read_existing, LoadReport};

/// Number of fields in a data line
pub const FIELD_COUNT: usize = 6;

/// Why a data line was dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Fewer than six comma-separated fields
    TooFewFields(usize),

    /// A mark field did not parse as an integer
    NotAnInteger(String),

    /// The code was already seen earlier in the file
    DuplicateCode(String),
}

/// Load and parse a text marks file
pub fn load(path: &Path) -> Result<(Vec<StudentRecord>, LoadReport)> {
    let bytes = read_existing(path)?;
    let contents = String::from_utf8(bytes).map_err(|e| {
        GradebookError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })?;
    parse(&contents)
}

/// Parse text file contents
///
/// A line repeating an earlier code is skipped like a malformed one, so
/// the next save drops it from the file for good.
pub fn parse(contents: &str) -> Result<(Vec<StudentRecord>, LoadReport)> {
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
    let mut lines = contents.lines();

    let header = lines.next().ok_or(GradebookError::EmptyFile)?;
    let declared_count = parse_header(header)?;

    let mut records = Vec::new();
    let mut seen = HashSet::new();
    let mut skipped = 0;

    // Line numbers are 1-based and include the header
    for (line_no, line) in lines.enumerate().map(|(i, l)| (i + 2, l)) {
        if line.trim().is_empty() {
            continue;
        }

        let outcome = parse_line(line).and_then(|record| {
            if seen.contains(&record.code) {
                Err(SkipReason::DuplicateCode(record.code))
            } else {
                Ok(record)
            }
        });

        match outcome {
            Ok(record) => {
                seen.insert(record.code.clone());
                records.push(record);
            }
            Err(reason) => {
                tracing::warn!(line = line_no, reason = ?reason, "Skipping malformed record line");
                skipped += 1;
            }
        }
    }

    let report = LoadReport {
        declared_count,
        loaded: records.len(),
        skipped,
    };
    Ok((records, report))
}

/// Parse the count header
pub fn parse_header(line: &str) -> Result<usize> {
    let trimmed = line.trim();
    trimmed.parse::<usize>().map_err(|_| {
        GradebookError::MalformedHeader(format!(
            "first line must be the number of students, got '{}'",
            trimmed
        ))
    })
}

/// Parse one data line
///
/// Fields are trimmed; anything after the sixth field is ignored.
pub fn parse_line(line: &str) -> std::result::Result<StudentRecord, SkipReason> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() < FIELD_COUNT {
        return Err(SkipReason::TooFewFields(parts.len()));
    }

    let mark = |s: &str| {
        s.parse::<i32>()
            .map_err(|_| SkipReason::NotAnInteger(s.to_string()))
    };

    Ok(StudentRecord {
        code: parts[0].to_string(),
        name: parts[1].to_string(),
        coursework: [mark(parts[2])?, mark(parts[3])?, mark(parts[4])?],
        exam: mark(parts[5])?,
    })
}

/// Render one record as a data line (no trailing newline)
pub fn encode_line(record: &StudentRecord) -> String {
    let [c1, c2, c3] = record.coursework;
    format!(
        "{},{},{},{},{},{}",
        record.code, record.name, c1, c2, c3, record.exam
    )
}

/// Render the whole file: count line then one line per record
///
/// Fails with `InvalidInput` if a code or name holds a separator, since
/// that line would be skipped on the next load.
pub fn encode(records: &[StudentRecord]) -> Result<String> {
    let mut out = String::with_capacity(16 + records.len() * 32);
    let _ = writeln!(out, "{}", records.len());
    for record in records {
        check_separators("code", &record.code)?;
        check_separators("name", &record.name)?;
        out.push_str(&encode_line(record));
        out.push('\n');
    }
    Ok(out)
}

fn check_separators(field: &str, value: &str) -> Result<()> {
    if value.contains([',', '\n', '\r']) {
        return Err(GradebookError::InvalidInput(format!(
            "{} '{}' cannot be written to a text marks file",
            field,
            value.escape_debug()
        )));
    }
    Ok(())
}
