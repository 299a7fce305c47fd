use serde::{Deserialize, Serialize};

use crate::{ModelError, RegisterNumber, Result, Year};

/// A contiguous run of register numbers sharing year and department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRangeEntry {
    pub year: Year,
    pub department: String,
    pub start_register: RegisterNumber,
    pub end_register: RegisterNumber,
}

impl StudentRangeEntry {
    /// Builds a validated range.
    ///
    /// # Errors
    ///
    /// Fails when the department is blank or the start register's numeric
    /// value exceeds the end register's.
    pub fn new(
        year: Year,
        department: impl Into<String>,
        start_register: RegisterNumber,
        end_register: RegisterNumber,
    ) -> Result<Self> {
        let department = department.into().trim().to_string();
        if department.is_empty() {
            return Err(ModelError::EmptyDepartment);
        }
        if start_register.value() > end_register.value() {
            return Err(ModelError::InvertedRange {
                start: start_register.to_string(),
                end: end_register.to_string(),
            });
        }
        Ok(Self {
            year,
            department,
            start_register,
            end_register,
        })
    }

    /// A range holding exactly one register.
    pub fn single(year: Year, department: impl Into<String>, register: RegisterNumber) -> Result<Self> {
        Self::new(year, department, register.clone(), register)
    }

    /// Parses the raw form fields used by manual entry.
    pub fn parse(year: &str, department: &str, start: &str, end: &str) -> Result<Self> {
        Self::new(
            year.parse()?,
            department,
            RegisterNumber::parse(start.trim())?,
            RegisterNumber::parse(end.trim())?,
        )
    }

    pub fn start(&self) -> u64 {
        self.start_register.value()
    }

    pub fn end(&self) -> u64 {
        self.end_register.value()
    }

    /// Number of students covered by the range.
    pub fn student_count(&self) -> u64 {
        self.end() - self.start() + 1
    }

    pub fn contains(&self, value: u64) -> bool {
        (self.start()..=self.end()).contains(&value)
    }

    /// True when `next` continues this range: same cohort and its first
    /// register immediately follows this range's last.
    pub fn is_continued_by(&self, next: &StudentRangeEntry) -> bool {
        self.year == next.year
            && self.department == next.department
            && self.end().checked_add(1) == Some(next.start())
    }
}

/// One student as seated by the allocator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student {
    pub year: Year,
    pub register: String,
    pub department: String,
}

impl Student {
    /// `"{year} {department}"`, e.g. `"II CSE"`.
    pub fn cohort(&self) -> String {
        format!("{} {}", self.year, self.department)
    }
}
