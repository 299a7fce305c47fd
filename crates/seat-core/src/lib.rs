//! Seat allocation core.
//!
//! - [`pool`] expands register ranges into students and holds the shrinking
//!   pool the allocator draws from.
//! - [`allocator`] fills classrooms greedily in serpentine order under the
//!   exam mode's [`rules`].
//! - [`roster`] and [`registry`] keep the inputs consistent while they are
//!   edited; [`session`] ties them together and caches the latest plan.

pub mod allocator;
pub mod error;
pub mod pool;
pub mod registry;
pub mod roster;
pub mod rules;
pub mod session;
pub mod summary;
pub mod traversal;

pub use allocator::{allocate_seats, fill_classroom, generate_seating_plan};
pub use error::{RegistryError, RosterError};
pub use pool::{StudentPool, build_student_pool};
pub use registry::ClassroomRegistry;
pub use roster::StudentRoster;
pub use rules::{DistinctYearPerDesk, NoAdjacentDepartment, SeatRule, Unrestricted, rule_for};
pub use session::SeatingSession;
pub use summary::cohort_summary;
pub use traversal::{SerpentineOrder, serpentine};
