//! Error types for roster and classroom bookkeeping.
//!
//! Allocation itself never fails; these errors cover the edits that feed it.

use thiserror::Error;

use seat_model::ModelError;

/// Errors raised while editing the student roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// No roster entry at the given position.
    #[error("no roster entry at index {index} (roster has {len} entries)")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Register to delete lies outside the entry's range.
    #[error("register {register} is not within {start}..={end}")]
    RegisterOutOfRange {
        register: String,
        start: String,
        end: String,
    },

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Errors raised while editing the classroom registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("a classroom with hall number {0} already exists")]
    DuplicateHall(String),

    #[error("unknown classroom {0}")]
    UnknownHall(String),

    #[error(transparent)]
    Model(#[from] ModelError),
}
