//! Classroom collection keyed by hall number.

use seat_model::{Classroom, ExamMode};

use crate::error::RegistryError;

/// Ordered set of classrooms with unique hall numbers.
///
/// Order matters: the allocator fills enabled classrooms in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassroomRegistry {
    classrooms: Vec<Classroom>,
}

impl ClassroomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry, failing on the first invalid or duplicate entry.
    pub fn from_classrooms(
        classrooms: impl IntoIterator<Item = Classroom>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for classroom in classrooms {
            registry.insert(classroom)?;
        }
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.classrooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classrooms.is_empty()
    }

    pub fn as_slice(&self) -> &[Classroom] {
        &self.classrooms
    }

    pub fn iter(&self) -> impl Iterator<Item = &Classroom> {
        self.classrooms.iter()
    }

    pub fn enabled(&self) -> impl Iterator<Item = &Classroom> {
        self.classrooms.iter().filter(|classroom| classroom.is_enabled)
    }

    pub fn contains(&self, hall_no: &str) -> bool {
        self.position(hall_no).is_some()
    }

    pub fn get(&self, hall_no: &str) -> Option<&Classroom> {
        self.classrooms.iter().find(|c| c.hall_no == hall_no)
    }

    /// Appends a classroom.
    ///
    /// # Errors
    ///
    /// Fails when the classroom is invalid or its hall number is taken.
    pub fn insert(&mut self, classroom: Classroom) -> Result<(), RegistryError> {
        classroom.validate()?;
        if self.contains(&classroom.hall_no) {
            return Err(RegistryError::DuplicateHall(classroom.hall_no));
        }
        self.classrooms.push(classroom);
        Ok(())
    }

    /// Appends every classroom whose hall number is not registered yet and
    /// returns how many were added.
    pub fn insert_missing(
        &mut self,
        classrooms: impl IntoIterator<Item = Classroom>,
    ) -> Result<usize, RegistryError> {
        let mut added = 0;
        for classroom in classrooms {
            if self.contains(&classroom.hall_no) {
                continue;
            }
            self.insert(classroom)?;
            added += 1;
        }
        Ok(added)
    }

    /// Replaces the classroom registered as `hall_no`, keeping its position.
    ///
    /// The replacement may carry a new hall number as long as no other
    /// classroom uses it.
    pub fn replace(&mut self, hall_no: &str, classroom: Classroom) -> Result<(), RegistryError> {
        classroom.validate()?;
        let index = self
            .position(hall_no)
            .ok_or_else(|| RegistryError::UnknownHall(hall_no.to_string()))?;
        if classroom.hall_no != hall_no && self.contains(&classroom.hall_no) {
            return Err(RegistryError::DuplicateHall(classroom.hall_no));
        }
        self.classrooms[index] = classroom;
        Ok(())
    }

    pub fn remove(&mut self, hall_no: &str) -> Result<Classroom, RegistryError> {
        let index = self
            .position(hall_no)
            .ok_or_else(|| RegistryError::UnknownHall(hall_no.to_string()))?;
        Ok(self.classrooms.remove(index))
    }

    pub fn set_enabled(&mut self, hall_no: &str, enabled: bool) -> Result<(), RegistryError> {
        let classroom = self.get_mut(hall_no)?;
        classroom.is_enabled = enabled;
        Ok(())
    }

    /// Flips the enabled flag and returns the new value.
    pub fn toggle(&mut self, hall_no: &str) -> Result<bool, RegistryError> {
        let classroom = self.get_mut(hall_no)?;
        classroom.is_enabled = !classroom.is_enabled;
        Ok(classroom.is_enabled)
    }

    /// Seats available across enabled classrooms under `mode`.
    pub fn total_capacity(&self, mode: ExamMode) -> usize {
        self.enabled().map(|classroom| classroom.capacity(mode)).sum()
    }

    fn position(&self, hall_no: &str) -> Option<usize> {
        self.classrooms.iter().position(|c| c.hall_no == hall_no)
    }

    fn get_mut(&mut self, hall_no: &str) -> Result<&mut Classroom, RegistryError> {
        self.classrooms
            .iter_mut()
            .find(|c| c.hall_no == hall_no)
            .ok_or_else(|| RegistryError::UnknownHall(hall_no.to_string()))
    }
}
