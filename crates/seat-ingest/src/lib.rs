//! Input file import for exam seat allocation.
//!
//! Student files are forgiving: bad lines are skipped and reported. Classroom
//! files are strict: any invalid row fails the load.

pub mod classrooms;
pub mod error;
pub mod students;

use std::io::ErrorKind;
use std::path::Path;

pub use classrooms::{parse_classroom_csv, parse_classroom_json, read_classrooms};
pub use error::{IngestError, Result};
pub use students::{ImportOutcome, SkippedLine, parse_student_records, read_student_file};

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => IngestError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
    })
}
