use thiserror::Error;

/// Validation failures for seating model values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid register number '{0}': expected digits with an optional uppercase letter prefix (e.g. 15 or A15)")]
    InvalidRegister(String),
    #[error("unknown year '{0}': expected 1st, 2nd, 3rd, 4th or I, II, III, IV")]
    InvalidYear(String),
    #[error("start register {start} is greater than end register {end}")]
    InvertedRange { start: String, end: String },
    #[error("department must not be empty")]
    EmptyDepartment,
    #[error("hall number must not be empty")]
    EmptyHallNo,
    #[error("classroom {hall_no} has invalid dimensions {rows}x{columns}")]
    InvalidDimensions {
        hall_no: String,
        rows: usize,
        columns: usize,
    },
    #[error("unknown seating type '{0}'")]
    UnknownSeatingType(String),
    #[error("unknown exam mode '{0}'")]
    UnknownExamMode(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
