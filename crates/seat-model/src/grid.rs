use serde::{Deserialize, Serialize};

use crate::{ExamMode, SeatingType, Student};

/// Desk layout of one classroom after allocation.
///
/// Cells are stored row-major; each cell lists its occupants in seating
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatGrid {
    rows: usize,
    columns: usize,
    cells: Vec<Vec<Student>>,
}

impl SeatGrid {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![Vec::new(); rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    fn index(&self, row: usize, column: usize) -> usize {
        assert!(
            row < self.rows && column < self.columns,
            "seat ({row}, {column}) outside {}x{} grid",
            self.rows,
            self.columns
        );
        row * self.columns + column
    }

    /// Occupants of the desk at (`row`, `column`).
    ///
    /// # Panics
    ///
    /// Panics when the position lies outside the grid.
    pub fn seat(&self, row: usize, column: usize) -> &[Student] {
        &self.cells[self.index(row, column)]
    }

    /// Adds `student` to the desk at (`row`, `column`).
    ///
    /// # Panics
    ///
    /// Panics when the position lies outside the grid.
    pub fn place(&mut self, row: usize, column: usize, student: Student) {
        let index = self.index(row, column);
        self.cells[index].push(student);
    }

    /// Orthogonal neighbours of (`row`, `column`) that lie inside the grid.
    pub fn neighbours(&self, row: usize, column: usize) -> impl Iterator<Item = (usize, usize)> {
        let (rows, columns) = (self.rows, self.columns);
        [
            (Some(row), column.checked_sub(1)),
            (Some(row), Some(column + 1)),
            (row.checked_sub(1), Some(column)),
            (Some(row + 1), Some(column)),
        ]
        .into_iter()
        .filter_map(move |position| match position {
            (Some(r), Some(c)) if r < rows && c < columns => Some((r, c)),
            _ => None,
        })
    }

    /// Rows top to bottom, each a slice of desks left to right.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Vec<Student>]> {
        self.cells.chunks(self.columns.max(1))
    }

    /// Every seated student, row-major.
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.cells.iter().flatten()
    }

    /// Occupied desks with their positions, row-major.
    pub fn occupied_seats(&self) -> impl Iterator<Item = (usize, usize, &[Student])> {
        let columns = self.columns.max(1);
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, seat)| !seat.is_empty())
            .map(move |(index, seat)| (index / columns, index % columns, seat.as_slice()))
    }

    pub fn occupant_count(&self) -> usize {
        self.cells.iter().map(Vec::len).sum()
    }
}

/// Seating produced for one enabled classroom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub hall_no: String,
    /// Effective density used while filling the grid.
    pub seating_type: SeatingType,
    pub grid: SeatGrid,
    pub seated_count: usize,
}

/// Outcome of one allocation run across all classrooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingPlan {
    pub exam_mode: ExamMode,
    pub results: Vec<AllocationResult>,
    /// Students left over once every enabled classroom was filled, in pool
    /// order.
    pub unseated: Vec<Student>,
}

impl SeatingPlan {
    pub fn seated_count(&self) -> usize {
        self.results.iter().map(|result| result.seated_count).sum()
    }

    pub fn unseated_count(&self) -> usize {
        self.unseated.len()
    }

    pub fn is_complete(&self) -> bool {
        self.unseated.is_empty()
    }

    pub fn result(&self, hall_no: &str) -> Option<&AllocationResult> {
        self.results.iter().find(|result| result.hall_no == hall_no)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Year;

    fn student(register: &str) -> Student {
        Student {
            year: Year::I,
            register: register.to_string(),
            department: "CSE".to_string(),
        }
    }

    #[test]
    fn neighbours_are_bounds_checked() {
        let grid = SeatGrid::new(2, 3);
        let mut corner: Vec<_> = grid.neighbours(0, 0).collect();
        corner.sort_unstable();
        assert_eq!(corner, vec![(0, 1), (1, 0)]);

        let mut edge: Vec<_> = grid.neighbours(1, 1).collect();
        edge.sort_unstable();
        assert_eq!(edge, vec![(0, 1), (1, 0), (1, 2)]);
    }

    #[test]
    fn places_and_lists_occupants() {
        let mut grid = SeatGrid::new(2, 2);
        grid.place(1, 0, student("001"));
        grid.place(1, 0, student("002"));
        grid.place(0, 1, student("003"));

        assert_eq!(grid.seat(1, 0).len(), 2);
        assert_eq!(grid.occupant_count(), 3);
        let occupied: Vec<_> = grid
            .occupied_seats()
            .map(|(row, column, seat)| (row, column, seat.len()))
            .collect();
        assert_eq!(occupied, vec![(0, 1, 1), (1, 0, 2)]);
        assert_eq!(grid.iter_rows().count(), 2);
    }

    #[test]
    #[should_panic(expected = "outside 2x2 grid")]
    fn seat_outside_grid_panics() {
        let grid = SeatGrid::new(2, 2);
        let _ = grid.seat(2, 0);
    }
}
