//! Error types for the aula library.
//!
//! This module provides the error hierarchy for all operations in the
//! aula library, using `thiserror` for ergonomic error handling.

use chrono::NaiveTime;
use thiserror::Error;

use crate::reservation::ReservationKind;
use crate::room::{InvalidIdError, InvalidSelectionError, RoomType};

/// Result type alias for operations that may fail with an aula error.
///
/// # Examples
///
/// ```
/// use aula::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(1)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the aula library.
///
/// This enum encompasses all possible error conditions that can occur
/// during room and reservation operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A reservation's start time is not strictly before its end time.
    #[error("invalid reservation schedule")]
    InvalidSchedule {
        /// The start time that was requested.
        start: NaiveTime,
        /// The end time that was requested.
        end: NaiveTime,
    },

    /// A reservation kind was booked into a room type it refuses.
    #[error("{} cannot be booked in {}", kind_phrase(*.kind), room_phrase(*.room_type))]
    IncompatibleRoomType {
        /// The kind of booking that was requested.
        kind: ReservationKind,
        /// The type of the refused room.
        room_type: RoomType,
    },

    /// A 1-based menu selection was out of range.
    #[error("invalid selection {value}: expected a value between 1 and {max}")]
    InvalidSelection {
        /// The rejected selection.
        value: usize,
        /// The highest accepted selection.
        max: usize,
    },

    /// An identifier outside the assignable range was provided.
    #[error("invalid identifier {value}: identifiers start at 1")]
    InvalidId {
        /// The rejected value.
        value: u32,
    },

    /// A room catalog file could not be parsed.
    #[error("catalog error: {0}")]
    Catalog(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn kind_phrase(kind: ReservationKind) -> &'static str {
    match kind {
        ReservationKind::ClassSession => "a class session",
        ReservationKind::PracticalSession => "a practical session",
        ReservationKind::Event(_) => "an event",
    }
}

fn room_phrase(room_type: RoomType) -> &'static str {
    match room_type {
        RoomType::Lecture => "a lecture room",
        RoomType::Laboratory => "a laboratory",
        RoomType::Auditorium => "an auditorium",
    }
}

// Additional conversions for better ergonomics

impl From<InvalidIdError> for Error {
    fn from(err: InvalidIdError) -> Self {
        Self::InvalidId { value: err.value }
    }
}

impl From<InvalidSelectionError> for Error {
    fn from(err: InvalidSelectionError) -> Self {
        Self::InvalidSelection {
            value: err.value,
            max: err.max,
        }
    }
}

impl Error {
    /// Check if error indicates a missing room or reservation.
    ///
    /// # Examples
    ///
    /// ```
    /// use aula::Error;
    ///
    /// let err = Error::NotFound { resource: "room 7".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error indicates a rejected schedule.
    #[must_use]
    pub fn is_invalid_schedule(&self) -> bool {
        matches!(self, Self::InvalidSchedule { .. })
    }

    /// Check if error indicates a kind/room-type mismatch.
    ///
    /// # Examples
    ///
    /// ```
    /// use aula::{Error, ReservationKind, RoomType};
    ///
    /// let err = Error::IncompatibleRoomType {
    ///     kind: ReservationKind::ClassSession,
    ///     room_type: RoomType::Auditorium,
    /// };
    /// assert!(err.is_incompatible_room_type());
    /// ```
    #[must_use]
    pub fn is_incompatible_room_type(&self) -> bool {
        matches!(self, Self::IncompatibleRoomType { .. })
    }

    /// Check if error indicates an out-of-range menu selection.
    #[must_use]
    pub fn is_invalid_selection(&self) -> bool {
        matches!(self, Self::InvalidSelection { .. })
    }
}
