//! Bulk student import.
//!
//! Each non-blank line holds `year,department,register`, fields optionally
//! quoted. Fields past the third are ignored. A line that cannot be turned
//! into a student is skipped and reported; it never aborts the batch.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use tracing::{debug, warn};

use seat_model::{RegisterNumber, StudentRangeEntry, Year};

use crate::error::{IngestError, Result};
use crate::read_text;

/// A line dropped during import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number in the source text.
    pub line: u64,
    pub content: String,
    pub reason: String,
}

/// Students read from one import batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportOutcome {
    /// One single-register entry per accepted line, in file order.
    pub entries: Vec<StudentRangeEntry>,
    pub skipped: Vec<SkippedLine>,
}

impl ImportOutcome {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parses student lines from `text`.
///
/// Lines are read one at a time, so an unbalanced quote only costs the line
/// it appears on.
pub fn parse_student_records(text: &str) -> ImportOutcome {
    let mut outcome = ImportOutcome::default();
    for (index, raw) in text.lines().enumerate() {
        let line = index as u64 + 1;
        let content = raw.trim();
        if content.is_empty() {
            continue;
        }
        match read_record(content).and_then(|record| parse_record(&record)) {
            Ok(entry) => outcome.entries.push(entry),
            Err(reason) => skip(&mut outcome, line, content.to_string(), reason),
        }
    }
    debug!(
        accepted = outcome.entries.len(),
        skipped = outcome.skipped.len(),
        "parsed student records"
    );
    outcome
}

/// Reads and parses a student file.
///
/// # Errors
///
/// Fails when the file cannot be read or holds no valid student line.
pub fn read_student_file(path: &Path) -> Result<ImportOutcome> {
    let text = read_text(path)?;
    let outcome = parse_student_records(&text);
    if outcome.is_empty() {
        return Err(IngestError::NoStudents {
            path: path.to_path_buf(),
        });
    }
    Ok(outcome)
}

fn read_record(line: &str) -> std::result::Result<StringRecord, String> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(line.as_bytes());
    match reader.records().next() {
        Some(record) => record.map_err(|e| e.to_string()),
        None => Err("expected year, department and register".to_string()),
    }
}

fn parse_record(record: &StringRecord) -> std::result::Result<StudentRangeEntry, String> {
    let field = |index: usize| record.get(index).map(strip_quotes).unwrap_or("");
    let (year, department, register) = (field(0), field(1), field(2));
    if year.is_empty() || department.is_empty() || register.is_empty() {
        return Err("expected year, department and register".to_string());
    }
    let year: Year = year.parse().map_err(|e: seat_model::ModelError| e.to_string())?;
    let register = RegisterNumber::parse(register).map_err(|e| e.to_string())?;
    StudentRangeEntry::single(year, department, register).map_err(|e| e.to_string())
}

fn strip_quotes(value: &str) -> &str {
    let value = value.trim();
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}

fn skip(outcome: &mut ImportOutcome, line: u64, content: String, reason: String) {
    warn!(line, content = %content, reason = %reason, "skipping invalid student line");
    outcome.skipped.push(SkippedLine {
        line,
        content,
        reason,
    });
}
