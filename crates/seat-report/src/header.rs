//! Institution header printed at the top of every seating page.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_COLLEGE_NAME: &str = "KNOWLEDGE INSTITUTE OF TECHNOLOGY, SALEM - 637 504.";
pub const DEFAULT_INSTITUTION_TYPE: &str = "(An Autonomous Institution)";
pub const DEFAULT_DEPARTMENT: &str = "Department of Computer Science & Engineering";

/// Date format used on printed pages.
pub const PAGE_DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentHeader {
    pub college_name: String,
    pub institution_type: String,
    pub department: String,
    /// Assessment title, e.g. "Internal Assessment - II". Omitted when blank.
    pub assessment: String,
    pub date: Option<NaiveDate>,
}

impl Default for DocumentHeader {
    fn default() -> Self {
        Self {
            college_name: DEFAULT_COLLEGE_NAME.to_string(),
            institution_type: DEFAULT_INSTITUTION_TYPE.to_string(),
            department: DEFAULT_DEPARTMENT.to_string(),
            assessment: String::new(),
            date: None,
        }
    }
}

impl DocumentHeader {
    /// Non-blank title lines in print order.
    pub fn title_lines(&self) -> Vec<&str> {
        [
            self.college_name.as_str(),
            self.institution_type.as_str(),
            self.department.as_str(),
            self.assessment.as_str(),
        ]
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
    }

    /// Formatted exam date, blank when unset.
    pub fn date_label(&self) -> String {
        self.date
            .map(|date| date.format(PAGE_DATE_FORMAT).to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_assessment_is_skipped() {
        let header = DocumentHeader::default();
        assert_eq!(
            header.title_lines(),
            vec![DEFAULT_COLLEGE_NAME, DEFAULT_INSTITUTION_TYPE, DEFAULT_DEPARTMENT]
        );
        assert_eq!(header.date_label(), "");
    }

    #[test]
    fn formats_date() {
        let header = DocumentHeader {
            assessment: "Internal Assessment - I".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 7),
            ..DocumentHeader::default()
        };
        assert_eq!(header.title_lines().len(), 4);
        assert_eq!(header.date_label(), "07-03-2024");
    }
}
