use serde::{Deserialize, Serialize};

use crate::{ExamMode, ModelError, Result, SeatingType};

/// An exam hall with a rectangular desk layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classroom {
    pub hall_no: String,
    pub rows: usize,
    pub columns: usize,
    #[serde(default)]
    pub seating_type: SeatingType,
    #[serde(default)]
    pub block: String,
    #[serde(default = "enabled_by_default")]
    pub is_enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl Classroom {
    /// Builds an enabled classroom whose block is the hall number's first
    /// character (`"A313"` sits in block `"A"`).
    ///
    /// # Errors
    ///
    /// Fails on a blank hall number or a zero dimension.
    pub fn new(
        hall_no: impl Into<String>,
        rows: usize,
        columns: usize,
        seating_type: SeatingType,
    ) -> Result<Self> {
        let hall_no = hall_no.into().trim().to_string();
        let block = block_of(&hall_no);
        let classroom = Self {
            hall_no,
            rows,
            columns,
            seating_type,
            block,
            is_enabled: true,
        };
        classroom.validate()?;
        Ok(classroom)
    }

    #[must_use]
    pub fn with_block(mut self, block: impl Into<String>) -> Self {
        self.block = block.into();
        self
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.is_enabled = enabled;
        self
    }

    /// Checks the invariants that deserialized records may violate.
    pub fn validate(&self) -> Result<()> {
        if self.hall_no.trim().is_empty() {
            return Err(ModelError::EmptyHallNo);
        }
        if self.rows == 0 || self.columns == 0 {
            return Err(ModelError::InvalidDimensions {
                hall_no: self.hall_no.clone(),
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }

    /// Seating density actually applied for `mode`: end-semester exams
    /// always seat one student per desk.
    pub fn effective_seating(&self, mode: ExamMode) -> SeatingType {
        match (mode, self.seating_type) {
            (ExamMode::Internal, SeatingType::TwoSeater) => SeatingType::TwoSeater,
            _ => SeatingType::SingleSeater,
        }
    }

    pub fn desk_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Maximum number of students the hall can take under `mode`.
    pub fn capacity(&self, mode: ExamMode) -> usize {
        self.desk_count() * self.effective_seating(mode).capacity()
    }
}

fn block_of(hall_no: &str) -> String {
    hall_no.chars().next().map(String::from).unwrap_or_default()
}
