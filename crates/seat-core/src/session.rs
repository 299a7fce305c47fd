//! Editable seating session.
//!
//! A [`SeatingSession`] owns the roster, the classrooms and the exam mode.
//! Every edit bumps the revision and drops the cached plan; the next call to
//! [`SeatingSession::plan`] recomputes it from scratch. Recomputation is
//! synchronous, so there is never more than one run in flight.

use tracing::debug;

use seat_model::{Classroom, ExamMode, RegisterNumber, SeatingPlan, StudentRangeEntry};

use crate::allocator::generate_seating_plan;
use crate::error::{RegistryError, RosterError};
use crate::registry::ClassroomRegistry;
use crate::roster::StudentRoster;

#[derive(Debug, Clone, Default)]
pub struct SeatingSession {
    roster: StudentRoster,
    classrooms: ClassroomRegistry,
    exam_mode: ExamMode,
    revision: u64,
    cached: Option<(u64, SeatingPlan)>,
}

impl SeatingSession {
    pub fn new(exam_mode: ExamMode) -> Self {
        Self {
            exam_mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_roster(mut self, roster: StudentRoster) -> Self {
        self.roster = roster;
        self.touch();
        self
    }

    #[must_use]
    pub fn with_classrooms(mut self, classrooms: ClassroomRegistry) -> Self {
        self.classrooms = classrooms;
        self.touch();
        self
    }

    pub fn roster(&self) -> &StudentRoster {
        &self.roster
    }

    pub fn classrooms(&self) -> &ClassroomRegistry {
        &self.classrooms
    }

    pub fn exam_mode(&self) -> ExamMode {
        self.exam_mode
    }

    /// Incremented on every edit.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_exam_mode(&mut self, mode: ExamMode) {
        if self.exam_mode != mode {
            self.exam_mode = mode;
            self.touch();
        }
    }

    pub fn add_students(&mut self, entry: StudentRangeEntry) {
        self.roster.add(entry);
        self.touch();
    }

    pub fn import_students(&mut self, entries: impl IntoIterator<Item = StudentRangeEntry>) {
        self.roster.extend(entries);
        self.touch();
    }

    pub fn remove_students(&mut self, index: usize) -> Result<StudentRangeEntry, RosterError> {
        let removed = self.roster.remove(index)?;
        self.touch();
        Ok(removed)
    }

    pub fn delete_register(
        &mut self,
        index: usize,
        register: &RegisterNumber,
    ) -> Result<(), RosterError> {
        self.roster.delete_register(index, register)?;
        self.touch();
        Ok(())
    }

    pub fn add_classroom(&mut self, classroom: Classroom) -> Result<(), RegistryError> {
        self.classrooms.insert(classroom)?;
        self.touch();
        Ok(())
    }

    pub fn replace_classroom(
        &mut self,
        hall_no: &str,
        classroom: Classroom,
    ) -> Result<(), RegistryError> {
        self.classrooms.replace(hall_no, classroom)?;
        self.touch();
        Ok(())
    }

    pub fn remove_classroom(&mut self, hall_no: &str) -> Result<Classroom, RegistryError> {
        let removed = self.classrooms.remove(hall_no)?;
        self.touch();
        Ok(removed)
    }

    pub fn toggle_classroom(&mut self, hall_no: &str) -> Result<bool, RegistryError> {
        let enabled = self.classrooms.toggle(hall_no)?;
        self.touch();
        Ok(enabled)
    }

    /// True when the cached plan reflects the current inputs.
    pub fn is_fresh(&self) -> bool {
        matches!(&self.cached, Some((revision, _)) if *revision == self.revision)
    }

    /// Current seating plan, recomputed if any input changed since the last
    /// call.
    pub fn plan(&mut self) -> &SeatingPlan {
        if !self.is_fresh() {
            self.cached = None;
        }
        let revision = self.revision;
        let (roster, classrooms, mode) = (&self.roster, &self.classrooms, self.exam_mode);
        let (_, plan) = self.cached.get_or_insert_with(|| {
            debug!(revision, "recomputing seating plan");
            (
                revision,
                generate_seating_plan(roster.entries(), classrooms.as_slice(), mode),
            )
        });
        plan
    }

    fn touch(&mut self) {
        self.revision += 1;
        self.cached = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seat_model::SeatingType;

    fn entry(year: &str, department: &str, start: &str, end: &str) -> StudentRangeEntry {
        StudentRangeEntry::parse(year, department, start, end).unwrap()
    }

    #[test]
    fn recomputes_after_edits_only() {
        let mut session = SeatingSession::new(ExamMode::Internal);
        session
            .add_classroom(Classroom::new("A313", 1, 2, SeatingType::SingleSeater).unwrap())
            .unwrap();
        session.add_students(entry("1st", "CSE", "1", "3"));

        assert_eq!(session.plan().unseated_count(), 1);
        assert!(session.is_fresh());
        let revision = session.revision();

        session.toggle_classroom("A313").unwrap();
        assert!(!session.is_fresh());
        assert!(session.revision() > revision);
        assert!(session.plan().results.is_empty());
        assert_eq!(session.plan().unseated_count(), 3);
    }

    #[test]
    fn exam_mode_change_invalidates_plan() {
        let mut session = SeatingSession::new(ExamMode::Internal)
            .with_roster(StudentRoster::from_entries([entry("1st", "CSE", "1", "2")]))
            .with_classrooms(
                ClassroomRegistry::from_classrooms([
                    Classroom::new("A313", 1, 2, SeatingType::SingleSeater).unwrap()
                ])
                .unwrap(),
            );
        assert!(session.plan().is_complete());

        session.set_exam_mode(ExamMode::Semester);
        assert!(!session.is_fresh());
        assert_eq!(session.plan().unseated_count(), 1);

        let revision = session.revision();
        session.set_exam_mode(ExamMode::Semester);
        assert_eq!(session.revision(), revision);
    }

    #[test]
    fn roster_and_classroom_edits_flow_into_plan() {
        let mut session = SeatingSession::new(ExamMode::Internal);
        session
            .add_classroom(Classroom::new("A313", 1, 3, SeatingType::SingleSeater).unwrap())
            .unwrap();
        session.import_students([
            entry("1st", "CSE", "A001", "A001"),
            entry("1st", "CSE", "A002", "A002"),
            entry("1st", "CSE", "A003", "A003"),
        ]);
        assert_eq!(session.roster().len(), 1);

        session
            .delete_register(0, &RegisterNumber::parse("A002").unwrap())
            .unwrap();
        assert_eq!(session.roster().len(), 2);
        let registers: Vec<_> = session
            .plan()
            .results[0]
            .grid
            .students()
            .map(|s| s.register.clone())
            .collect();
        assert_eq!(registers, vec!["A001", "A003"]);

        session
            .replace_classroom("A313", Classroom::new("A314", 1, 1, SeatingType::SingleSeater).unwrap())
            .unwrap();
        assert_eq!(session.plan().results[0].hall_no, "A314");
        assert_eq!(session.plan().unseated_count(), 1);
        assert_eq!(session.remove_students(1).unwrap().start_register.to_string(), "A003");
        assert!(session.plan().is_complete());
    }

    #[test]
    fn failed_edits_keep_cache() {
        let mut session = SeatingSession::new(ExamMode::Internal);
        let _ = session.plan();
        assert!(session.remove_classroom("missing").is_err());
        assert!(session.remove_students(0).is_err());
        assert!(session.is_fresh());
    }
}
