//! Seat compatibility rules.
//!
//! A [`SeatRule`] decides whether a candidate may join a desk given what is
//! already seated in the grid. The rule in force depends on the exam mode and
//! the classroom's effective density; see [`rule_for`].

use seat_model::{ExamMode, SeatGrid, SeatingType, Student};

/// Compatibility predicate evaluated for every candidate at every desk.
pub trait SeatRule: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Returns true if `candidate` may be seated at (`row`, `column`).
    ///
    /// Desk capacity is enforced by the allocator; rules only judge who may
    /// sit together or side by side.
    fn admits(&self, grid: &SeatGrid, row: usize, column: usize, candidate: &Student) -> bool;
}

/// Internal exam on single-seat desks: anyone may sit anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unrestricted;

impl SeatRule for Unrestricted {
    fn name(&self) -> &'static str {
        "unrestricted"
    }

    fn admits(&self, _grid: &SeatGrid, _row: usize, _column: usize, _candidate: &Student) -> bool {
        true
    }
}

/// Internal exam on shared desks: desk mates must be from different years.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistinctYearPerDesk;

impl SeatRule for DistinctYearPerDesk {
    fn name(&self) -> &'static str {
        "distinct-year-per-desk"
    }

    fn admits(&self, grid: &SeatGrid, row: usize, column: usize, candidate: &Student) -> bool {
        let seat = grid.seat(row, column);
        seat.len() < SeatingType::TwoSeater.capacity()
            && seat.iter().all(|occupant| occupant.year != candidate.year)
    }
}

/// End-semester exam: no occupant of an orthogonally adjacent desk may share
/// the candidate's department. Diagonal neighbours are not checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAdjacentDepartment;

impl SeatRule for NoAdjacentDepartment {
    fn name(&self) -> &'static str {
        "no-adjacent-department"
    }

    fn admits(&self, grid: &SeatGrid, row: usize, column: usize, candidate: &Student) -> bool {
        grid.neighbours(row, column).all(|(r, c)| {
            grid.seat(r, c)
                .iter()
                .all(|occupant| occupant.department != candidate.department)
        })
    }
}

/// Selects the rule for a classroom seated with `seating` density under
/// `mode`.
pub fn rule_for(mode: ExamMode, seating: SeatingType) -> &'static dyn SeatRule {
    match (mode, seating) {
        (ExamMode::Internal, SeatingType::SingleSeater) => &Unrestricted,
        (ExamMode::Internal, SeatingType::TwoSeater) => &DistinctYearPerDesk,
        (ExamMode::Semester, _) => &NoAdjacentDepartment,
    }
}
