//! Greedy seat allocation.
//!
//! Classrooms are filled one after another in list order. Desks are visited
//! in serpentine order and each desk takes the first compatible students from
//! the pool until it is full or nobody left in the pool fits. There is no
//! backtracking: identical inputs always give identical grids.

use tracing::{debug, info, info_span, warn};

use seat_model::{
    AllocationResult, Classroom, ExamMode, SeatGrid, SeatingPlan, Student, StudentRangeEntry,
};

use crate::pool::StudentPool;
use crate::rules::rule_for;
use crate::traversal::serpentine;

/// Expands `entries` and allocates the resulting students to `classrooms`.
pub fn generate_seating_plan(
    entries: &[StudentRangeEntry],
    classrooms: &[Classroom],
    mode: ExamMode,
) -> SeatingPlan {
    allocate_seats(StudentPool::from_entries(entries), classrooms, mode)
}

/// Seats students from `pool` across the enabled `classrooms`.
///
/// Disabled classrooms are skipped and get no result. Students left in the
/// pool afterwards are returned in [`SeatingPlan::unseated`].
pub fn allocate_seats(
    mut pool: StudentPool,
    classrooms: &[Classroom],
    mode: ExamMode,
) -> SeatingPlan {
    let span = info_span!("allocate", exam_mode = %mode, students = pool.len());
    let _guard = span.enter();

    let mut results = Vec::new();
    for classroom in classrooms.iter().filter(|classroom| classroom.is_enabled) {
        let result = fill_classroom(classroom, &mut pool, mode);
        debug!(
            hall_no = %result.hall_no,
            seating_type = %result.seating_type,
            seated = result.seated_count,
            remaining = pool.len(),
            "classroom filled"
        );
        results.push(result);
    }

    let unseated: Vec<Student> = pool.into_remaining();
    let plan = SeatingPlan {
        exam_mode: mode,
        results,
        unseated,
    };
    if plan.unseated.is_empty() {
        info!(
            classrooms = plan.results.len(),
            seated = plan.seated_count(),
            "allocation complete"
        );
    } else {
        warn!(
            classrooms = plan.results.len(),
            seated = plan.seated_count(),
            unseated = plan.unseated_count(),
            "not enough compatible seats for all students"
        );
    }
    plan
}

/// Fills a single classroom from `pool`, regardless of its enabled flag.
pub fn fill_classroom(
    classroom: &Classroom,
    pool: &mut StudentPool,
    mode: ExamMode,
) -> AllocationResult {
    let seating_type = classroom.effective_seating(mode);
    let capacity = seating_type.capacity();
    let rule = rule_for(mode, seating_type);
    let span = info_span!("classroom", hall_no = %classroom.hall_no, rule = rule.name());
    let _guard = span.enter();
    let mut grid = SeatGrid::new(classroom.rows, classroom.columns);
    let mut seated_count = 0usize;

    for (row, column) in serpentine(classroom.rows, classroom.columns) {
        if pool.is_empty() {
            break;
        }
        while grid.seat(row, column).len() < capacity {
            let Some(student) = pool.take_first(|candidate| rule.admits(&grid, row, column, candidate))
            else {
                break;
            };
            grid.place(row, column, student);
            seated_count += 1;
        }
    }

    AllocationResult {
        hall_no: classroom.hall_no.clone(),
        seating_type,
        grid,
        seated_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seat_model::{SeatingType, Year};

    fn entry(year: &str, department: &str, start: &str, end: &str) -> StudentRangeEntry {
        StudentRangeEntry::parse(year, department, start, end).unwrap()
    }

    fn classroom(hall_no: &str, rows: usize, columns: usize, seating: SeatingType) -> Classroom {
        Classroom::new(hall_no, rows, columns, seating).unwrap()
    }

    fn register_at(result: &AllocationResult, row: usize, column: usize) -> Vec<&str> {
        result
            .grid
            .seat(row, column)
            .iter()
            .map(|s| s.register.as_str())
            .collect()
    }

    #[test]
    fn fills_in_serpentine_order() {
        let plan = generate_seating_plan(
            &[entry("1st", "CSE", "1", "4")],
            &[classroom("A313", 2, 2, SeatingType::SingleSeater)],
            ExamMode::Internal,
        );
        let result = &plan.results[0];
        assert_eq!(result.seated_count, 4);
        assert_eq!(plan.unseated_count(), 0);
        assert_eq!(register_at(result, 0, 0), vec!["001"]);
        assert_eq!(register_at(result, 1, 0), vec!["002"]);
        assert_eq!(register_at(result, 1, 1), vec!["003"]);
        assert_eq!(register_at(result, 0, 1), vec!["004"]);
    }

    #[test]
    fn semester_leaves_adjacent_same_department_unseated() {
        let plan = generate_seating_plan(
            &[entry("1st", "CSE", "1", "2")],
            &[classroom("A313", 1, 2, SeatingType::SingleSeater)],
            ExamMode::Semester,
        );
        assert_eq!(plan.results[0].seated_count, 1);
        assert_eq!(plan.unseated_count(), 1);
        assert_eq!(plan.unseated[0].register, "002");
    }

    #[test]
    fn two_seater_pairs_different_years() {
        let plan = generate_seating_plan(
            &[entry("1st", "CSE", "1", "2"), entry("2nd", "CSE", "10", "11")],
            &[classroom("B308", 1, 2, SeatingType::TwoSeater)],
            ExamMode::Internal,
        );
        let result = &plan.results[0];
        assert_eq!(result.seating_type, SeatingType::TwoSeater);
        assert_eq!(register_at(result, 0, 0), vec!["001", "010"]);
        assert_eq!(register_at(result, 0, 1), vec!["002", "011"]);
        assert!(plan.is_complete());
    }

    #[test]
    fn two_seater_desk_stays_half_full_without_other_years() {
        let plan = generate_seating_plan(
            &[entry("3rd", "EEE", "1", "3")],
            &[classroom("C201", 1, 2, SeatingType::TwoSeater)],
            ExamMode::Internal,
        );
        let result = &plan.results[0];
        assert_eq!(register_at(result, 0, 0), vec!["001"]);
        assert_eq!(register_at(result, 0, 1), vec!["002"]);
        assert_eq!(plan.unseated_count(), 1);
    }

    #[test]
    fn semester_ignores_two_seater_configuration() {
        let plan = generate_seating_plan(
            &[entry("1st", "CSE", "1", "2"), entry("2nd", "ECE", "1", "2")],
            &[classroom("B308", 2, 2, SeatingType::TwoSeater)],
            ExamMode::Semester,
        );
        let result = &plan.results[0];
        assert_eq!(result.seating_type, SeatingType::SingleSeater);
        assert!(result.grid.occupied_seats().all(|(_, _, seat)| seat.len() == 1));
        // (0,0) CSE, (1,0) must skip CSE, (1,1) CSE next to ECE, (0,1) ECE.
        assert_eq!(register_at(result, 0, 0), vec!["001"]);
        assert_eq!(register_at(result, 1, 0), vec!["001"]);
        assert_eq!(result.grid.seat(1, 0)[0].department, "ECE");
        assert_eq!(result.grid.seat(1, 1)[0].department, "CSE");
        assert_eq!(result.grid.seat(0, 1)[0].department, "ECE");
        assert!(plan.is_complete());
    }

    #[test]
    fn skips_disabled_classrooms_and_carries_remainder() {
        let plan = generate_seating_plan(
            &[entry("1st", "CSE", "1", "5")],
            &[
                classroom("A313", 1, 2, SeatingType::SingleSeater),
                classroom("A314", 5, 5, SeatingType::SingleSeater).with_enabled(false),
                classroom("A302", 1, 2, SeatingType::SingleSeater),
            ],
            ExamMode::Internal,
        );
        let halls: Vec<_> = plan.results.iter().map(|r| r.hall_no.as_str()).collect();
        assert_eq!(halls, vec!["A313", "A302"]);
        assert_eq!(register_at(&plan.results[1], 0, 0), vec!["003"]);
        assert_eq!(plan.unseated_count(), 1);
        assert_eq!(plan.unseated[0].register, "005");
    }

    #[test]
    fn empty_inputs_are_not_errors() {
        let no_rooms = generate_seating_plan(&[entry("1st", "CSE", "1", "3")], &[], ExamMode::Internal);
        assert!(no_rooms.results.is_empty());
        assert_eq!(no_rooms.unseated_count(), 3);

        let no_students = generate_seating_plan(
            &[],
            &[classroom("A313", 2, 2, SeatingType::SingleSeater)],
            ExamMode::Semester,
        );
        assert_eq!(no_students.results.len(), 1);
        assert_eq!(no_students.results[0].seated_count, 0);
        assert_eq!(no_students.unseated_count(), 0);
    }

    #[test]
    fn leftmost_eligible_student_wins() {
        let plan = generate_seating_plan(
            &[
                entry("1st", "CSE", "1", "1"),
                entry("1st", "CSE", "2", "2"),
                entry("2nd", "ECE", "50", "50"),
                entry("3rd", "MECH", "70", "70"),
            ],
            &[classroom("D209", 1, 2, SeatingType::TwoSeater)],
            ExamMode::Internal,
        );
        let result = &plan.results[0];
        assert_eq!(register_at(result, 0, 0), vec!["001", "050"]);
        assert_eq!(register_at(result, 0, 1), vec!["002", "070"]);
        assert_eq!(result.grid.seat(0, 1)[1].year, Year::III);
    }
}
