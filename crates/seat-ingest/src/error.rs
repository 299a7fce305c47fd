//! Error types for roster and classroom import.

use std::path::PathBuf;
use thiserror::Error;

use seat_model::ModelError;

/// Errors that can occur while importing input files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// CSV structure could not be read.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// JSON classroom list could not be read.
    #[error("failed to parse JSON {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Required column missing from a classroom sheet.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// A classroom row failed validation.
    #[error("invalid classroom on line {line} of {path}: {reason}")]
    InvalidClassroom {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    // === Content Errors ===
    /// Hall number appears more than once.
    #[error("duplicate hall number {hall_no} in {path}")]
    DuplicateHall { hall_no: String, path: PathBuf },

    /// Student file contained no usable record.
    #[error("no valid student data found in {path}")]
    NoStudents { path: PathBuf },

    #[error("{path}: {source}")]
    Model {
        path: PathBuf,
        #[source]
        source: ModelError,
    },
}

/// Result type for import operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/students.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /path/to/students.csv");
    }

    #[test]
    fn test_duplicate_hall_display() {
        let err = IngestError::DuplicateHall {
            hall_no: "A313".to_string(),
            path: PathBuf::from("halls.csv"),
        };
        assert_eq!(err.to_string(), "duplicate hall number A313 in halls.csv");
    }
}
