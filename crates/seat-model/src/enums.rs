//! Type-safe enumerations for seating concepts.
//!
//! These enums replace the free-form strings that show up in roster files
//! and classroom sheets ("1st", "Two Seater", "semester").

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Year of study, rendered as a roman numeral.
///
/// Input is accepted as ordinal words ("1st".."4th"), roman numerals or bare
/// digits. Ordering follows the ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Year {
    #[serde(rename = "I", alias = "1st", alias = "1")]
    I,
    #[serde(rename = "II", alias = "2nd", alias = "2")]
    II,
    #[serde(rename = "III", alias = "3rd", alias = "3")]
    III,
    #[serde(rename = "IV", alias = "4th", alias = "4")]
    IV,
}

impl Year {
    pub const ALL: [Year; 4] = [Year::I, Year::II, Year::III, Year::IV];

    /// Returns the roman numeral.
    pub fn as_str(&self) -> &'static str {
        match self {
            Year::I => "I",
            Year::II => "II",
            Year::III => "III",
            Year::IV => "IV",
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Year {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "1ST" | "I" | "1" => Ok(Year::I),
            "2ND" | "II" | "2" => Ok(Year::II),
            "3RD" | "III" | "3" => Ok(Year::III),
            "4TH" | "IV" | "4" => Ok(Year::IV),
            _ => Err(ModelError::InvalidYear(s.to_string())),
        }
    }
}

/// Configured seat density of a classroom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeatingType {
    /// One student per desk.
    #[default]
    #[serde(rename = "Single Seater", alias = "single", alias = "SingleSeater")]
    SingleSeater,
    /// Two students share a desk.
    #[serde(rename = "Two Seater", alias = "two", alias = "TwoSeater")]
    TwoSeater,
}

impl SeatingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeatingType::SingleSeater => "Single Seater",
            SeatingType::TwoSeater => "Two Seater",
        }
    }

    /// Number of students a single desk holds.
    pub fn capacity(&self) -> usize {
        match self {
            SeatingType::SingleSeater => 1,
            SeatingType::TwoSeater => 2,
        }
    }
}

impl fmt::Display for SeatingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeatingType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', '_'], " ");

        match normalized.as_str() {
            "SINGLE SEATER" | "SINGLESEATER" | "SINGLE" | "1" => Ok(SeatingType::SingleSeater),
            "TWO SEATER" | "TWOSEATER" | "TWO" | "2" => Ok(SeatingType::TwoSeater),
            _ => Err(ModelError::UnknownSeatingType(s.to_string())),
        }
    }
}

/// Kind of examination being seated.
///
/// Internal assessments honour the configured desk density and only keep
/// same-year students apart on shared desks. End-semester exams force one
/// student per desk and keep same-department students from sitting
/// orthogonally adjacent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamMode {
    #[default]
    Internal,
    #[serde(alias = "end-semester")]
    Semester,
}

impl ExamMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExamMode::Internal => "internal",
            ExamMode::Semester => "semester",
        }
    }
}

impl fmt::Display for ExamMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExamMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");

        match normalized.as_str() {
            "internal" => Ok(ExamMode::Internal),
            "semester" | "end semester" => Ok(ExamMode::Semester),
            _ => Err(ModelError::UnknownExamMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_from_str() {
        assert_eq!("1st".parse::<Year>().unwrap(), Year::I);
        assert_eq!(" 2ND ".parse::<Year>().unwrap(), Year::II);
        assert_eq!("iii".parse::<Year>().unwrap(), Year::III);
        assert_eq!("4".parse::<Year>().unwrap(), Year::IV);
        assert!("5th".parse::<Year>().is_err());
    }

    #[test]
    fn test_year_order() {
        assert!(Year::I < Year::II);
        assert!(Year::III < Year::IV);
        assert_eq!(Year::III.to_string(), "III");
    }

    #[test]
    fn test_seating_type_from_str() {
        assert_eq!(
            "Two Seater".parse::<SeatingType>().unwrap(),
            SeatingType::TwoSeater
        );
        assert_eq!(
            "single-seater".parse::<SeatingType>().unwrap(),
            SeatingType::SingleSeater
        );
        assert!("bench".parse::<SeatingType>().is_err());
    }

    #[test]
    fn test_exam_mode_from_str() {
        assert_eq!("internal".parse::<ExamMode>().unwrap(), ExamMode::Internal);
        assert_eq!(
            "End-Semester".parse::<ExamMode>().unwrap(),
            ExamMode::Semester
        );
    }
}
