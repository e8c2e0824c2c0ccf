//! The in-memory registry of rooms and reservations.
//!
//! The registry owns every room and reservation for the lifetime of the
//! process and is the only way to create or change them. Identifiers are
//! minted sequentially per collection, starting at 1; nothing is ever
//! removed, so the identifier of a new entity is always the current count
//! plus one. State lives entirely in memory and is discarded when the
//! process exits.

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::reservation::{Reservation, ReservationId, ReservationRequest};
use crate::room::{Room, RoomId, RoomType};
use crate::validation;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

/// The repository owning all rooms and reservations.
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
/// registry.cancel_reservation(reservation.id()).unwrap();
/// assert_eq!(registry.reservations().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    rooms: Vec<Room>,
    reservations: Vec<Reservation>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with the rooms of a catalog.
    ///
    /// Seeded rooms get their identifiers the ordinary way, in catalog
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use aula::{Catalog, Registry};
    ///
    /// let registry = Registry::with_catalog(&Catalog::builtin());
    /// assert_eq!(registry.rooms().len(), 3);
    /// assert_eq!(registry.rooms()[0].name(), "Aula 1");
    /// ```
    #[must_use]
    pub fn with_catalog(catalog: &Catalog) -> Self {
        let mut registry = Self::new();
        for seed in &catalog.rooms {
            registry.create_room(seed.name.as_str(), seed.room_type);
        }
        log::debug!("Seeded {} room(s) from catalog", catalog.rooms.len());
        registry
    }

    /// Adds a room to the catalog and returns it.
    ///
    /// The identifier is assigned sequentially. Room names are free text
    /// and need not be unique.
    pub fn create_room(&mut self, name: impl Into<String>, room_type: RoomType) -> Room {
        let id = self.next_room_id();
        let room = Room::new(id, name, room_type);
        log::debug!("Created room {id} ({room_type})");
        self.rooms.push(room.clone());
        room
    }

    /// Returns every room, in creation order.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Looks up a room by identifier.
    #[must_use]
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id() == id)
    }

    /// Replaces a room's name and type, returning the updated room.
    ///
    /// Existing reservations for the room are left untouched, even if
    /// the new type would refuse their kind today.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no room has the given identifier.
    pub fn update_room(
        &mut self,
        id: RoomId,
        name: impl Into<String>,
        room_type: RoomType,
    ) -> Result<Room> {
        let room = self
            .rooms
            .iter_mut()
            .find(|room| room.id() == id)
            .ok_or_else(|| Error::NotFound {
                resource: format!("room {id}"),
            })?;
        room.update(name, room_type);
        log::debug!("Updated room {id}");
        Ok(room.clone())
    }

    /// Validates a request and, if it passes, stores and returns the new
    /// reservation.
    ///
    /// The reservation starts out `Active`. A failed request leaves the
    /// registry untouched and consumes no identifier. Overlapping
    /// bookings for the same room are accepted; the registry does not
    /// detect double-booking.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the requested room does not exist,
    /// [`Error::InvalidSchedule`] if the start time is not strictly
    /// before the end time, and [`Error::IncompatibleRoomType`] if the
    /// room's type refuses the request's kind.
    pub fn create_reservation(&mut self, request: ReservationRequest) -> Result<Reservation> {
        let room = self.room(request.room).ok_or_else(|| Error::NotFound {
            resource: format!("room {}", request.room),
        })?;
        validation::validate(&request, room)?;

        let id = self.next_reservation_id();
        let reservation = Reservation::new(id, request);
        log::debug!("Created reservation {id} for room {}", reservation.room());
        self.reservations.push(reservation.clone());
        Ok(reservation)
    }

    /// Returns every reservation, in creation order, regardless of
    /// status.
    #[must_use]
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Looks up a reservation by identifier.
    #[must_use]
    pub fn reservation(&self, id: ReservationId) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id() == id)
    }

    /// Cancels a reservation.
    ///
    /// Cancelling an already cancelled reservation succeeds and changes
    /// nothing. The reservation stays listed either way.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no reservation has the given
    /// identifier.
    pub fn cancel_reservation(&mut self, id: ReservationId) -> Result<()> {
        let reservation = self
            .reservations
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| Error::NotFound {
                resource: format!("reservation {id}"),
            })?;
        reservation.cancel();
        log::debug!("Cancelled reservation {id}");
        Ok(())
    }

    fn next_room_id(&self) -> RoomId {
        self.rooms
            .last()
            .map_or(RoomId::FIRST, |room| room.id().next())
    }

    fn next_reservation_id(&self) -> ReservationId {
        self.reservations
            .last()
            .map_or(ReservationId::FIRST, |r| r.id().next())
    }
}
