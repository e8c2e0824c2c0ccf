//! Validation rules for reservation requests.
//!
//! Every request passes through [`validate`] before the registry inserts
//! it. The schedule rule applies to all kinds of booking; each kind then
//! adds at most one room-compatibility constraint, expressed as the room
//! type it refuses. The order is fixed: schedule first, then room
//! compatibility, and the first failing rule reports.

use crate::error::{Error, Result};
use crate::reservation::{ReservationKind, ReservationRequest};
use crate::room::{Room, RoomType};

impl ReservationKind {
    /// Returns the room type this kind of booking refuses, if any.
    ///
    /// Class sessions refuse auditoria, practical sessions refuse
    /// lecture rooms, and events accept every room type.
    ///
    /// # Examples
    ///
    /// ```
    /// use aula::{EventKind, ReservationKind, RoomType};
    ///
    /// assert_eq!(
    ///     ReservationKind::ClassSession.forbidden_room_type(),
    ///     Some(RoomType::Auditorium)
    /// );
    /// assert_eq!(
    ///     ReservationKind::Event(EventKind::Conference).forbidden_room_type(),
    ///     None
    /// );
    /// ```
    #[must_use]
    pub const fn forbidden_room_type(self) -> Option<RoomType> {
        match self {
            Self::ClassSession => Some(RoomType::Auditorium),
            Self::PracticalSession => Some(RoomType::Lecture),
            Self::Event(_) => None,
        }
    }
}

/// Checks a reservation request against the room it targets.
///
/// # Errors
///
/// Returns [`Error::InvalidSchedule`] unless the start time is strictly
/// before the end time, and [`Error::IncompatibleRoomType`] if the room's
/// type is the one the request's kind refuses.
///
/// # Examples
///
/// ```
/// use aula::{validation, Registry, ReservationKind, ReservationRequest, RoomType};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let mut registry = Registry::new();
/// let room = registry.create_room("Auditorio Principal", RoomType::Auditorium);
///
/// let request = ReservationRequest::new(
///     room.id(),
///     "Dean's office",
///     NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
///     ReservationKind::ClassSession,
/// );
///
/// // Class sessions refuse auditoria
/// assert!(validation::validate(&request, &room).is_err());
/// ```
pub fn validate(request: &ReservationRequest, room: &Room) -> Result<()> {
    if request.start_time >= request.end_time {
        return Err(Error::InvalidSchedule {
            start: request.start_time,
            end: request.end_time,
        });
    }

    if let Some(forbidden) = request.kind.forbidden_room_type() {
        if room.room_type() == forbidden {
            return Err(Error::IncompatibleRoomType {
                kind: request.kind,
                room_type: room.room_type(),
            });
        }
    }

    Ok(())
}
