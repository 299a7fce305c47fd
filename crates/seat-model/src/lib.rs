//! Data model for exam seat allocation.
//!
//! Rosters are described as register ranges ([`StudentRangeEntry`]), halls as
//! [`Classroom`]s, and an allocation run produces a [`SeatingPlan`] holding a
//! [`SeatGrid`] per enabled hall.

pub mod classroom;
pub mod enums;
pub mod error;
pub mod grid;
pub mod register;
pub mod student;

pub use classroom::Classroom;
pub use enums::{ExamMode, SeatingType, Year};
pub use error::{ModelError, Result};
pub use grid::{AllocationResult, SeatGrid, SeatingPlan};
pub use register::{EXPANDED_REGISTER_WIDTH, RegisterNumber};
pub use student::{Student, StudentRangeEntry};
