//! Reservation types for tracking room bookings.
//!
//! This module provides the reservation side of the system: typed
//! reservation identifiers, the closed set of reservation kinds, the
//! lifecycle status, and the reservation entity together with its
//! pre-insertion request form.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::room::{InvalidIdError, InvalidSelectionError, RoomId};

/// A registry-assigned reservation identifier (1 or greater).
///
/// Like [`RoomId`], identifiers are minted sequentially and zero is
/// rejected on conversion.
///
/// # Examples
///
/// ```
/// use aula::ReservationId;
///
/// let id = ReservationId::try_from(1).unwrap();
/// assert_eq!(id.value(), 1);
///
/// assert!(ReservationId::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(u32);

impl ReservationId {
    /// The first identifier a registry hands out.
    pub(crate) const FIRST: Self = Self(1);

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the identifier that follows this one.
    #[must_use]
    pub(crate) const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl TryFrom<u32> for ReservationId {
    type Error = InvalidIdError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value == 0 {
            Err(InvalidIdError { value })
        } else {
            Ok(Self(value))
        }
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kind of occasion an event reservation is held for.
///
/// # Examples
///
/// ```
/// use aula::EventKind;
///
/// assert_eq!(EventKind::from_index(1).unwrap(), EventKind::Conference);
/// assert!(EventKind::from_index(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// A conference or talk.
    Conference,
    /// A hands-on workshop.
    Workshop,
    /// An internal meeting.
    Meeting,
}

impl EventKind {
    /// All event kinds, in menu order.
    pub const ALL: [Self; 3] = [Self::Conference, Self::Workshop, Self::Meeting];

    /// Resolves a 1-based menu selection to an event kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection is 0 or past the end of the list.
    pub fn from_index(index: usize) -> Result<Self, InvalidSelectionError> {
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(InvalidSelectionError {
                value: index,
                max: Self::ALL.len(),
            })
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conference => write!(f, "conference"),
            Self::Workshop => write!(f, "workshop"),
            Self::Meeting => write!(f, "meeting"),
        }
    }
}

/// The kind of booking a reservation represents.
///
/// The kind decides which validation rules apply when the reservation is
/// created. Events carry the occasion they are held for; the other kinds
/// have no payload.
///
/// # Examples
///
/// ```
/// use aula::{EventKind, ReservationKind};
///
/// let kind = ReservationKind::Event(EventKind::Conference);
/// assert_eq!(format!("{kind}"), "event (conference)");
/// assert_eq!(format!("{}", ReservationKind::ClassSession), "class session");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReservationKind {
    /// A taught class session.
    ClassSession,
    /// A hands-on practical session.
    PracticalSession,
    /// A one-off event of the given kind.
    Event(EventKind),
}

impl fmt::Display for ReservationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClassSession => write!(f, "class session"),
            Self::PracticalSession => write!(f, "practical session"),
            Self::Event(kind) => write!(f, "event ({kind})"),
        }
    }
}

/// Lifecycle status of a reservation.
///
/// Reservations start out `Active` and may be moved to `Cancelled`.
/// `Historical` marks bookings whose date has passed; no operation
/// currently transitions into it, but it is part of the status taxonomy
/// and listings render it like any other status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    /// The reservation is in force.
    Active,
    /// The reservation has been cancelled by the operator.
    Cancelled,
    /// The reservation's date lies in the past.
    Historical,
}

impl ReservationStatus {
    /// Returns `true` if the reservation is in force.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Cancelled => write!(f, "cancelled"),
            Self::Historical => write!(f, "historical"),
        }
    }
}

/// The pre-insertion form of a reservation.
///
/// A request carries everything the operator chose; the registry
/// validates it against the target room, mints the identifier and turns
/// it into a [`Reservation`]. Requests that fail validation leave the
/// registry untouched.
///
/// # Examples
///
/// ```
/// use aula::{ReservationKind, ReservationRequest, RoomId};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let request = ReservationRequest::new(
///     RoomId::try_from(1).unwrap(),
///     "  Prof. Diaz  ",
///     NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
///     ReservationKind::ClassSession,
/// );
///
/// // Requester names are trimmed on intake
/// assert_eq!(request.requester, "Prof. Diaz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRequest {
    /// The room the booking is for.
    pub room: RoomId,
    /// Who the booking is for. Free text; may be empty.
    pub requester: String,
    /// The calendar date of the booking.
    pub date: NaiveDate,
    /// When the booking starts.
    pub start_time: NaiveTime,
    /// When the booking ends.
    pub end_time: NaiveTime,
    /// What kind of booking this is.
    pub kind: ReservationKind,
}

impl ReservationRequest {
    /// Creates a reservation request.
    ///
    /// The requester is trimmed of surrounding whitespace; an empty
    /// requester is accepted.
    pub fn new(
        room: RoomId,
        requester: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        kind: ReservationKind,
    ) -> Self {
        Self {
            room,
            requester: requester.into().trim().to_string(),
            date,
            start_time,
            end_time,
            kind,
        }
    }
}

/// A room booking held by the registry.
///
/// Reservations are created through [`Registry::create_reservation`],
/// which validates the request first; a reservation value therefore
/// always satisfies the scheduling and room-compatibility rules that
/// were in force when it was made. The room is referenced by identifier,
/// so later room renames show up when listings resolve the name.
///
/// [`Registry::create_reservation`]: crate::Registry::create_reservation
///
/// # Examples
///
/// ```
/// use aula::{Registry, ReservationKind, ReservationRequest, RoomType};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let mut registry = Registry::new();
/// let room = registry.create_room("Aula 1", RoomType::Lecture);
///
/// let request = ReservationRequest::new(
///     room.id(),
///     "Prof. Diaz",
///     NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
///     ReservationKind::ClassSession,
/// );
/// let reservation = registry.create_reservation(request).unwrap();
///
/// assert_eq!(reservation.id().value(), 1);
/// assert!(reservation.status().is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    room: RoomId,
    requester: String,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    kind: ReservationKind,
    status: ReservationStatus,
}

impl Reservation {
    /// Creates an active reservation from a validated request.
    pub(crate) fn new(id: ReservationId, request: ReservationRequest) -> Self {
        Self {
            id,
            room: request.room,
            requester: request.requester,
            date: request.date,
            start_time: request.start_time,
            end_time: request.end_time,
            kind: request.kind,
            status: ReservationStatus::Active,
        }
    }

    /// Returns the reservation identifier.
    #[must_use]
    pub const fn id(&self) -> ReservationId {
        self.id
    }

    /// Returns the identifier of the reserved room.
    #[must_use]
    pub const fn room(&self) -> RoomId {
        self.room
    }

    /// Returns the requester name.
    #[must_use]
    pub fn requester(&self) -> &str {
        &self.requester
    }

    /// Returns the booking date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the booking start time.
    #[must_use]
    pub const fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    /// Returns the booking end time.
    #[must_use]
    pub const fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    /// Returns the kind of booking.
    #[must_use]
    pub const fn kind(&self) -> ReservationKind {
        self.kind
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ReservationStatus {
        self.status
    }

    /// Marks the reservation as cancelled.
    ///
    /// Cancelling an already cancelled reservation changes nothing.
    pub(crate) fn cancel(&mut self) {
        self.status = ReservationStatus::Cancelled;
    }
}
