#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # aula
//!
//! A library for managing campus room reservations.
//!
//! This library provides the core types and rules for a room booking
//! system: a catalog of rooms, reservations of several kinds with
//! per-kind room-compatibility rules, and an in-memory registry that
//! owns both and assigns identifiers. State lives for the duration of
//! the process; there is no persistence layer.
//!
//! ## Core Types
//!
//! - [`Registry`]: The in-memory store of rooms and reservations
//! - [`Room`], [`RoomId`] and [`RoomType`]: The room catalog
//! - [`Reservation`], [`ReservationRequest`] and [`ReservationKind`]:
//!   Bookings and their pre-insertion form
//! - [`Catalog`]: Seed rooms, builtin or loaded from YAML
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use aula::{Registry, ReservationKind, ReservationRequest, RoomType};
//! use chrono::{NaiveDate, NaiveTime};
//!
//! let mut registry = Registry::new();
//! let room = registry.create_room("Aula 1", RoomType::Lecture);
//!
//! // Book a class session
//! let request = ReservationRequest::new(
//!     room.id(),
//!     "Prof. Diaz",
//!     NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
//!     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
//!     NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
//!     ReservationKind::ClassSession,
//! );
//! let reservation = registry.create_reservation(request).unwrap();
//! assert_eq!(reservation.id().value(), 1);
//!
//! // Cancelling is idempotent
//! registry.cancel_reservation(reservation.id()).unwrap();
//! registry.cancel_reservation(reservation.id()).unwrap();
//! ```

pub mod catalog;
pub mod error;
pub mod logging;
pub mod registry;
pub mod reservation;
pub mod room;
pub mod validation;

// Re-export key types at crate root for convenience
pub use catalog::{Catalog, RoomSeed, ROOMS_ENV};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger, LOG_MODE_ENV};
pub use registry::Registry;
pub use reservation::{
    EventKind, Reservation, ReservationId, ReservationKind, ReservationRequest, ReservationStatus,
};
pub use room::{Room, RoomId, RoomType};
