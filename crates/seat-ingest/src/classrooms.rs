//! Classroom definitions from CSV or JSON files.
//!
//! Unlike student lines, classroom rows are configuration: the first invalid
//! row or repeated hall number fails the whole file.

use std::collections::BTreeSet;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use seat_model::{Classroom, SeatingType};

use crate::error::{IngestError, Result};
use crate::read_text;

const HALL_NO: &str = "hall_no";
const ROWS: &str = "rows";
const COLUMNS: &str = "columns";
const SEATING_TYPE: &str = "seating_type";
const BLOCK: &str = "block";
const ENABLED: &str = "enabled";

/// Reads classrooms from `path`, choosing the format by extension.
///
/// # Errors
///
/// Fails on unreadable files, malformed rows, invalid dimensions and
/// duplicate hall numbers.
pub fn read_classrooms(path: &Path) -> Result<Vec<Classroom>> {
    let text = read_text(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let classrooms = if is_json {
        parse_classroom_json(&text, path)?
    } else {
        parse_classroom_csv(&text, path)?
    };
    info!(path = %path.display(), classrooms = classrooms.len(), "loaded classrooms");
    Ok(classrooms)
}

/// Parses a JSON array of classrooms.
pub fn parse_classroom_json(text: &str, path: &Path) -> Result<Vec<Classroom>> {
    let classrooms: Vec<Classroom> =
        serde_json::from_str(text).map_err(|source| IngestError::JsonParse {
            path: path.to_path_buf(),
            source,
        })?;
    let mut checked = Vec::with_capacity(classrooms.len());
    let mut seen = BTreeSet::new();
    for (index, mut classroom) in classrooms.into_iter().enumerate() {
        classroom.hall_no = classroom.hall_no.trim().to_string();
        if classroom.block.is_empty() {
            classroom.block = classroom.hall_no.chars().take(1).collect();
        }
        classroom
            .validate()
            .map_err(|source| IngestError::InvalidClassroom {
                path: path.to_path_buf(),
                line: index as u64 + 1,
                reason: source.to_string(),
            })?;
        ensure_unique(&mut seen, &classroom.hall_no, path)?;
        checked.push(classroom);
    }
    Ok(checked)
}

/// Parses a classroom sheet with a header row.
///
/// Header names are matched case-insensitively; `block` and `enabled` are
/// optional columns.
pub fn parse_classroom_csv(text: &str, path: &Path) -> Result<Vec<Classroom>> {
    let csv_error = |source: csv::Error| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());
    let headers = reader.headers().map_err(csv_error)?.clone();
    let columns = ColumnIndex::from_headers(&headers, path)?;

    let mut classrooms = Vec::new();
    let mut seen = BTreeSet::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line = record.position().map_or(0, csv::Position::line);
        let classroom =
            columns
                .classroom(&record)
                .map_err(|reason| IngestError::InvalidClassroom {
                    path: path.to_path_buf(),
                    line,
                    reason,
                })?;
        ensure_unique(&mut seen, &classroom.hall_no, path)?;
        debug!(hall_no = %classroom.hall_no, line, "parsed classroom row");
        classrooms.push(classroom);
    }
    Ok(classrooms)
}

fn ensure_unique(seen: &mut BTreeSet<String>, hall_no: &str, path: &Path) -> Result<()> {
    if !seen.insert(hall_no.to_string()) {
        return Err(IngestError::DuplicateHall {
            hall_no: hall_no.to_string(),
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

fn normalize_header(raw: &str) -> String {
    raw.trim()
        .trim_matches('\u{feff}')
        .to_ascii_lowercase()
        .replace([' ', '-'], "_")
}

struct ColumnIndex {
    hall_no: usize,
    rows: usize,
    columns: usize,
    seating_type: usize,
    block: Option<usize>,
    enabled: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord, path: &Path) -> Result<Self> {
        let names: Vec<String> = headers.iter().map(normalize_header).collect();
        let find = |column: &str| names.iter().position(|name| name == column);
        let require = |column: &str| {
            find(column).ok_or_else(|| IngestError::MissingColumn {
                column: column.to_string(),
                path: path.to_path_buf(),
            })
        };
        Ok(Self {
            hall_no: require(HALL_NO)?,
            rows: require(ROWS)?,
            columns: require(COLUMNS)?,
            seating_type: require(SEATING_TYPE)?,
            block: find(BLOCK),
            enabled: find(ENABLED),
        })
    }

    fn classroom(&self, record: &StringRecord) -> std::result::Result<Classroom, String> {
        let cell = |index: usize| record.get(index).unwrap_or("");
        let rows = parse_dimension(cell(self.rows), ROWS)?;
        let columns = parse_dimension(cell(self.columns), COLUMNS)?;
        let seating_type: SeatingType = cell(self.seating_type)
            .parse()
            .map_err(|e: seat_model::ModelError| e.to_string())?;
        let mut classroom = Classroom::new(cell(self.hall_no), rows, columns, seating_type)
            .map_err(|e| e.to_string())?;
        if let Some(block) = self.block.map(cell).filter(|block| !block.is_empty()) {
            classroom = classroom.with_block(block);
        }
        if let Some(enabled) = self.enabled.map(cell).filter(|flag| !flag.is_empty()) {
            classroom = classroom.with_enabled(parse_flag(enabled)?);
        }
        Ok(classroom)
    }
}

fn parse_dimension(value: &str, column: &str) -> std::result::Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| format!("{column} must be a whole number, got '{value}'"))
}

fn parse_flag(value: &str) -> std::result::Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        _ => Err(format!("enabled must be true or false, got '{value}'")),
    }
}
