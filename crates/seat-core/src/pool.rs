//! Student pool construction.
//!
//! [`build_student_pool`] expands register ranges into individual students and
//! [`StudentPool`] is the shrinking collection the allocator draws from.

use seat_model::{Student, StudentRangeEntry};

/// Expands `entries` into one [`Student`] per register, in range order and
/// ascending register order within a range.
///
/// The start register's letter prefix is carried onto every student and the
/// numeric part is zero-padded to three digits.
pub fn build_student_pool(entries: &[StudentRangeEntry]) -> Vec<Student> {
    let total: u64 = entries.iter().map(StudentRangeEntry::student_count).sum();
    let mut students = Vec::with_capacity(usize::try_from(total).unwrap_or(0));
    for entry in entries {
        for value in entry.start()..=entry.end() {
            students.push(Student {
                year: entry.year,
                register: entry.start_register.expanded(value),
                department: entry.department.clone(),
            });
        }
    }
    students
}

/// Ordered pool of students awaiting a seat.
///
/// Removal marks a slot as taken instead of shifting the remainder, so scans
/// always see the surviving students in their original relative order.
#[derive(Debug, Clone, Default)]
pub struct StudentPool {
    slots: Vec<Option<Student>>,
    /// Index of the first slot that may still be occupied.
    head: usize,
    remaining: usize,
}

impl StudentPool {
    pub fn new(students: Vec<Student>) -> Self {
        let remaining = students.len();
        Self {
            slots: students.into_iter().map(Some).collect(),
            head: 0,
            remaining,
        }
    }

    pub fn from_entries(entries: &[StudentRangeEntry]) -> Self {
        Self::new(build_student_pool(entries))
    }

    pub fn len(&self) -> usize {
        self.remaining
    }

    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Students still in the pool, in order.
    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.slots[self.head..].iter().flatten()
    }

    /// Removes and returns the first remaining student accepted by
    /// `predicate`.
    pub fn take_first<F>(&mut self, mut predicate: F) -> Option<Student>
    where
        F: FnMut(&Student) -> bool,
    {
        let index = self.slots[self.head..]
            .iter()
            .position(|slot| slot.as_ref().is_some_and(&mut predicate))?
            + self.head;
        let student = self.slots[index].take();
        self.remaining -= 1;
        while self.head < self.slots.len() && self.slots[self.head].is_none() {
            self.head += 1;
        }
        student
    }

    /// Consumes the pool, returning the students that were never taken.
    pub fn into_remaining(self) -> Vec<Student> {
        self.slots.into_iter().flatten().collect()
    }
}

impl From<Vec<Student>> for StudentPool {
    fn from(students: Vec<Student>) -> Self {
        Self::new(students)
    }
}
