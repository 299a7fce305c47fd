//! Cohort header for classroom documents.

use seat_model::{SeatGrid, Year};

/// Lists the distinct `"{year} {department}"` cohorts seated in `grid`,
/// ordered by year and joined with `", "`.
///
/// Cohorts of the same year keep the order in which a row-major scan of the
/// grid first meets them.
pub fn cohort_summary(grid: &SeatGrid) -> String {
    let mut cohorts: Vec<(Year, &str)> = Vec::new();
    for student in grid.students() {
        let key = (student.year, student.department.as_str());
        if !cohorts.contains(&key) {
            cohorts.push(key);
        }
    }
    cohorts.sort_by_key(|(year, _)| *year);
    cohorts
        .iter()
        .map(|(year, department)| format!("{year} {department}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use seat_model::Student;

    fn student(year: Year, department: &str) -> Student {
        Student {
            year,
            register: "001".to_string(),
            department: department.to_string(),
        }
    }

    #[test]
    fn orders_by_year_and_dedupes() {
        let mut grid = SeatGrid::new(2, 2);
        grid.place(0, 0, student(Year::III, "ECE"));
        grid.place(0, 1, student(Year::I, "MECH"));
        grid.place(1, 0, student(Year::III, "CSE"));
        grid.place(1, 1, student(Year::I, "MECH"));
        grid.place(1, 1, student(Year::II, "CSE"));
        assert_eq!(cohort_summary(&grid), "I MECH, II CSE, III ECE, III CSE");
    }

    #[test]
    fn empty_grid_has_empty_summary() {
        assert_eq!(cohort_summary(&SeatGrid::new(3, 3)), "");
    }
}
