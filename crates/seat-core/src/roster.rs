//! Ordered list of register ranges awaiting allocation.
//!
//! New entries are merged into the entry directly before them when they
//! continue it (same year and department, next register number). Only that
//! one neighbour is inspected, so a range inserted ahead of its continuation
//! stays a separate entry.

use tracing::debug;

use seat_model::{RegisterNumber, Student, StudentRangeEntry};

use crate::error::RosterError;
use crate::pool::build_student_pool;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentRoster {
    entries: Vec<StudentRangeEntry>,
}

impl StudentRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster by adding `entries` one at a time.
    pub fn from_entries(entries: impl IntoIterator<Item = StudentRangeEntry>) -> Self {
        let mut roster = Self::new();
        roster.extend(entries);
        roster
    }

    pub fn entries(&self) -> &[StudentRangeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of students across all entries.
    pub fn total_students(&self) -> u64 {
        self.entries
            .iter()
            .map(StudentRangeEntry::student_count)
            .sum()
    }

    /// Appends `entry`, extending the last entry instead when it continues it.
    pub fn add(&mut self, entry: StudentRangeEntry) {
        if let Some(last) = self.entries.last_mut()
            && last.is_continued_by(&entry)
        {
            debug!(
                year = %last.year,
                department = %last.department,
                start = %last.start_register,
                end = %entry.end_register,
                "merged register range"
            );
            last.end_register = entry.end_register;
            return;
        }
        self.entries.push(entry);
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = StudentRangeEntry>) {
        for entry in entries {
            self.add(entry);
        }
    }

    /// Removes the whole entry at `index`.
    pub fn remove(&mut self, index: usize) -> Result<StudentRangeEntry, RosterError> {
        self.check_index(index)?;
        Ok(self.entries.remove(index))
    }

    /// Removes a single register from the entry at `index`.
    ///
    /// The entry disappears when it held only that register, shrinks when the
    /// register sits on either edge, and is otherwise split in two with the
    /// upper part inserted right after it.
    pub fn delete_register(
        &mut self,
        index: usize,
        register: &RegisterNumber,
    ) -> Result<(), RosterError> {
        self.check_index(index)?;
        let entry = &mut self.entries[index];
        let value = register.value();
        if !entry.contains(value) {
            return Err(RosterError::RegisterOutOfRange {
                register: register.to_string(),
                start: entry.start_register.to_string(),
                end: entry.end_register.to_string(),
            });
        }

        let (start, end) = (entry.start(), entry.end());
        if start == end {
            self.entries.remove(index);
        } else if value == start {
            entry.start_register = entry.start_register.with_value(start + 1);
        } else if value == end {
            entry.end_register = entry.end_register.with_value(end - 1);
        } else {
            let upper = StudentRangeEntry {
                year: entry.year,
                department: entry.department.clone(),
                start_register: entry.start_register.with_value(value + 1),
                end_register: entry.end_register.clone(),
            };
            entry.end_register = entry.end_register.with_value(value - 1);
            self.entries.insert(index + 1, upper);
        }
        Ok(())
    }

    /// Expands the roster into individual students.
    pub fn pool(&self) -> Vec<Student> {
        build_student_pool(&self.entries)
    }

    fn check_index(&self, index: usize) -> Result<(), RosterError> {
        if index >= self.entries.len() {
            return Err(RosterError::IndexOutOfBounds {
                index,
                len: self.entries.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(year: &str, department: &str, start: &str, end: &str) -> StudentRangeEntry {
        StudentRangeEntry::parse(year, department, start, end).unwrap()
    }

    fn bounds(roster: &StudentRoster) -> Vec<(String, String)> {
        roster
            .entries()
            .iter()
            .map(|e| (e.start_register.to_string(), e.end_register.to_string()))
            .collect()
    }

    fn register(raw: &str) -> RegisterNumber {
        RegisterNumber::parse(raw).unwrap()
    }

    #[test]
    fn merges_continuation_of_previous_entry() {
        let mut roster = StudentRoster::new();
        roster.add(entry("1st", "CSE", "001", "005"));
        roster.add(entry("1st", "CSE", "006", "010"));
        assert_eq!(bounds(&roster), vec![("001".into(), "010".into())]);
        assert_eq!(roster.total_students(), 10);
    }

    // Consolidation only looks at the immediately preceding entry; a full
    // interval merge would combine these.
    #[test]
    fn reverse_order_does_not_merge() {
        let mut roster = StudentRoster::new();
        roster.add(entry("1st", "CSE", "006", "010"));
        roster.add(entry("1st", "CSE", "001", "005"));
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn only_immediate_predecessor_is_checked() {
        let roster = StudentRoster::from_entries([
            entry("1st", "CSE", "001", "005"),
            entry("2nd", "ECE", "001", "003"),
            entry("1st", "CSE", "006", "010"),
        ]);
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn different_cohort_does_not_merge() {
        let roster = StudentRoster::from_entries([
            entry("1st", "CSE", "001", "005"),
            entry("2nd", "CSE", "006", "010"),
        ]);
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn single_registers_collapse_into_a_range() {
        let roster = StudentRoster::from_entries(
            ["A01", "A02", "A03"].map(|r| entry("3rd", "MECH", r, r)),
        );
        assert_eq!(bounds(&roster), vec![("A01".into(), "A03".into())]);
    }

    #[test]
    fn delete_splits_middle_register() {
        let mut roster = StudentRoster::from_entries([entry("1st", "CSE", "A001", "A010")]);
        roster.delete_register(0, &register("A005")).unwrap();
        assert_eq!(
            bounds(&roster),
            vec![
                ("A001".into(), "A004".into()),
                ("A006".into(), "A010".into())
            ]
        );
        assert_eq!(roster.total_students(), 9);
    }

    #[test]
    fn delete_shrinks_edges() {
        let mut roster = StudentRoster::from_entries([entry("1st", "CSE", "001", "010")]);
        roster.delete_register(0, &register("1")).unwrap();
        roster.delete_register(0, &register("10")).unwrap();
        assert_eq!(bounds(&roster), vec![("002".into(), "009".into())]);
    }

    #[test]
    fn delete_last_register_destroys_entry() {
        let mut roster = StudentRoster::from_entries([
            entry("1st", "CSE", "007", "007"),
            entry("2nd", "ECE", "001", "002"),
        ]);
        roster.delete_register(0, &register("007")).unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.entries()[0].department, "ECE");
    }

    #[test]
    fn delete_rejects_out_of_range_and_bad_index() {
        let mut roster = StudentRoster::from_entries([entry("1st", "CSE", "001", "005")]);
        assert!(matches!(
            roster.delete_register(0, &register("006")),
            Err(RosterError::RegisterOutOfRange { .. })
        ));
        assert_eq!(
            roster.delete_register(3, &register("001")),
            Err(RosterError::IndexOutOfBounds { index: 3, len: 1 })
        );
        assert!(roster.remove(1).is_err());
        assert!(roster.remove(0).is_ok());
        assert!(roster.is_empty());
    }

    #[test]
    fn pool_expands_entries() {
        let roster = StudentRoster::from_entries([entry("4th", "CIVIL", "B9", "B11")]);
        let registers: Vec<_> = roster.pool().into_iter().map(|s| s.register).collect();
        assert_eq!(registers, vec!["B009", "B010", "B011"]);
    }
}
