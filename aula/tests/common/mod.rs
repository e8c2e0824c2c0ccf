//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the aula library.

use aula::{Registry, ReservationKind, ReservationRequest, RoomId, RoomType};
use chrono::{NaiveDate, NaiveTime};

/// Creates a registry seeded with one room of each type.
///
/// Rooms are numbered in declaration order: 1 is a lecture room, 2 is a
/// laboratory and 3 is an auditorium.
#[allow(dead_code)]
pub fn three_room_registry() -> Registry {
    let mut registry = Registry::new();
    registry.create_room("Aula 1", RoomType::Lecture);
    registry.create_room("Lab Norte", RoomType::Laboratory);
    registry.create_room("Auditorio Principal", RoomType::Auditorium);
    registry
}

/// Parses an `HH:MM` time literal.
///
/// # Panics
///
/// Panics on malformed input. Acceptable in test code where we want to
/// fail fast on invalid fixtures.
#[allow(dead_code)]
pub fn time(value: &str) -> NaiveTime {
    NaiveTime::parse_from_str(value, "%H:%M").expect("fixture should have a valid time")
}

/// Builder for creating reservation requests with sensible defaults.
///
/// # Examples
///
/// ```no_run
/// # use common::RequestFixture;
/// let request = RequestFixture::new()
///     .with_room(2)
///     .with_kind(aula::ReservationKind::PracticalSession)
///     .build();
/// ```
#[allow(dead_code)]
pub struct RequestFixture {
    room: u32,
    requester: String,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    kind: ReservationKind,
}

#[allow(dead_code)]
impl RequestFixture {
    /// Creates a new fixture builder with default values.
    ///
    /// Defaults:
    /// - room: 1
    /// - requester: "Prof. Diaz"
    /// - date: 2025-03-14
    /// - times: 09:00 to 10:00
    /// - kind: class session
    pub fn new() -> Self {
        Self {
            room: 1,
            requester: "Prof. Diaz".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 14).expect("fixture date"),
            start: time("09:00"),
            end: time("10:00"),
            kind: ReservationKind::ClassSession,
        }
    }

    /// Sets the room identifier for the request.
    pub fn with_room(mut self, room: u32) -> Self {
        self.room = room;
        self
    }

    /// Sets the requester name.
    pub fn with_requester(mut self, requester: impl Into<String>) -> Self {
        self.requester = requester.into();
        self
    }

    /// Sets the reservation date.
    pub fn with_date(mut self, year: i32, month: u32, day: u32) -> Self {
        self.date = NaiveDate::from_ymd_opt(year, month, day).expect("fixture date");
        self
    }

    /// Sets the start and end times from `HH:MM` literals.
    pub fn with_times(mut self, start: &str, end: &str) -> Self {
        self.start = time(start);
        self.end = time(end);
        self
    }

    /// Sets the reservation kind.
    pub fn with_kind(mut self, kind: ReservationKind) -> Self {
        self.kind = kind;
        self
    }

    /// Builds the request.
    ///
    /// # Panics
    ///
    /// Panics if the room identifier is zero.
    pub fn build(self) -> ReservationRequest {
        let room = RoomId::try_from(self.room).expect("fixture should have a valid room id");
        ReservationRequest::new(
            room,
            self.requester,
            self.date,
            self.start,
            self.end,
            self.kind,
        )
    }
}

impl Default for RequestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_default() {
        let request = RequestFixture::new().build();
        assert_eq!(request.room.value(), 1);
        assert_eq!(request.requester, "Prof. Diaz");
        assert_eq!(request.kind, ReservationKind::ClassSession);
    }

    #[test]
    fn test_fixture_custom() {
        let request = RequestFixture::new()
            .with_room(3)
            .with_requester("Ana")
            .with_date(2025, 6, 1)
            .with_times("18:00", "20:30")
            .with_kind(ReservationKind::PracticalSession)
            .build();

        assert_eq!(request.room.value(), 3);
        assert_eq!(request.requester, "Ana");
        assert_eq!(request.date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(request.start_time, time("18:00"));
        assert_eq!(request.end_time, time("20:30"));
        assert_eq!(request.kind, ReservationKind::PracticalSession);
    }
}
