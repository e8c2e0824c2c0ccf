//! Property-based tests for the registry.
//!
//! These tests exercise identifier minting, validation outcomes and
//! cancellation across generated request sequences.

use chrono::{NaiveDate, NaiveTime};
use proptest::prelude::*;

use crate::{EventKind, Registry, ReservationKind, ReservationRequest, RoomType};

// Strategy for generating room types
fn room_type_strategy() -> impl Strategy<Value = RoomType> {
    prop_oneof![
        Just(RoomType::Lecture),
        Just(RoomType::Laboratory),
        Just(RoomType::Auditorium),
    ]
}

// Strategy for generating event kinds
fn event_kind_strategy() -> impl Strategy<Value = EventKind> {
    prop_oneof![
        Just(EventKind::Conference),
        Just(EventKind::Workshop),
        Just(EventKind::Meeting),
    ]
}

// Strategy for generating reservation kinds
fn kind_strategy() -> impl Strategy<Value = ReservationKind> {
    prop_oneof![
        Just(ReservationKind::ClassSession),
        Just(ReservationKind::PracticalSession),
        event_kind_strategy().prop_map(ReservationKind::Event),
    ]
}

// Strategy for generating wall-clock times at minute resolution
fn time_strategy() -> impl Strategy<Value = NaiveTime> {
    (0..24u32, 0..60u32)
        .prop_map(|(hour, minute)| NaiveTime::from_hms_opt(hour, minute, 0).unwrap())
}

// Strategy for generating booking dates
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2024i32..2028, 1..13u32, 1..29u32)
        .prop_map(|(year, month, day)| NaiveDate::from_ymd_opt(year, month, day).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Room identifiers are dense: the n-th room created gets id n
    #[test]
    fn room_ids_dense(
        names in prop::collection::vec("[A-Za-z ]{1,12}", 1..15)
    ) {
        let mut registry = Registry::new();
        for (position, name) in names.iter().enumerate() {
            let room_type = RoomType::ALL[position % RoomType::ALL.len()];
            let room = registry.create_room(name.as_str(), room_type);
            prop_assert_eq!(room.id().value(), u32::try_from(position).unwrap() + 1);
        }
        prop_assert_eq!(registry.rooms().len(), names.len());
    }

    // Accepted reservations get dense, strictly increasing identifiers,
    // and rejected requests leave no trace
    #[test]
    fn reservation_ids_dense(
        date in date_strategy(),
        ops in prop::collection::vec(
            (kind_strategy(), 0..3usize, time_strategy(), time_strategy()),
            1..20
        )
    ) {
        let mut registry = Registry::new();
        let rooms = [
            registry.create_room("one", RoomType::Lecture).id(),
            registry.create_room("two", RoomType::Laboratory).id(),
            registry.create_room("three", RoomType::Auditorium).id(),
        ];

        let mut ids = Vec::new();
        for (kind, room_index, start, end) in ops {
            let request =
                ReservationRequest::new(rooms[room_index], "someone", date, start, end, kind);
            if let Ok(reservation) = registry.create_reservation(request) {
                ids.push(reservation.id().value());
            }
        }

        prop_assert_eq!(registry.reservations().len(), ids.len());
        let expected: Vec<u32> = (1..=u32::try_from(ids.len()).unwrap()).collect();
        prop_assert_eq!(ids, expected);
    }

    // A start time at or after the end time is rejected for every kind
    // and every room type
    #[test]
    fn inverted_schedules_always_rejected(
        kind in kind_strategy(),
        room_type in room_type_strategy(),
        date in date_strategy(),
        a in time_strategy(),
        b in time_strategy()
    ) {
        let (start, end) = if a >= b { (a, b) } else { (b, a) };

        let mut registry = Registry::new();
        let room = registry.create_room("room", room_type);
        let request = ReservationRequest::new(room.id(), "someone", date, start, end, kind);

        let err = registry.create_reservation(request).unwrap_err();
        prop_assert!(err.is_invalid_schedule());
        prop_assert!(registry.reservations().is_empty());
    }

    // A well-scheduled event is accepted in every room type
    #[test]
    fn events_accept_every_room_type(
        event_kind in event_kind_strategy(),
        room_type in room_type_strategy(),
        date in date_strategy(),
        a in time_strategy(),
        b in time_strategy()
    ) {
        prop_assume!(a != b);
        let (start, end) = if a < b { (a, b) } else { (b, a) };

        let mut registry = Registry::new();
        let room = registry.create_room("room", room_type);
        let request = ReservationRequest::new(
            room.id(),
            "someone",
            date,
            start,
            end,
            ReservationKind::Event(event_kind),
        );

        prop_assert!(registry.create_reservation(request).is_ok());
    }

    // Class sessions never land in auditoria and practical sessions
    // never land in lecture rooms, regardless of schedule
    #[test]
    fn forbidden_room_types_always_rejected(
        class in any::<bool>(),
        date in date_strategy(),
        a in time_strategy(),
        b in time_strategy()
    ) {
        prop_assume!(a != b);
        let (start, end) = if a < b { (a, b) } else { (b, a) };
        let (kind, room_type) = if class {
            (ReservationKind::ClassSession, RoomType::Auditorium)
        } else {
            (ReservationKind::PracticalSession, RoomType::Lecture)
        };

        let mut registry = Registry::new();
        let room = registry.create_room("room", room_type);
        let request = ReservationRequest::new(room.id(), "someone", date, start, end, kind);

        let err = registry.create_reservation(request).unwrap_err();
        prop_assert!(err.is_incompatible_room_type());
        prop_assert!(registry.reservations().is_empty());
    }

    // Cancelling any number of times equals cancelling once, and never
    // touches the other reservations
    #[test]
    fn cancellation_is_idempotent(
        count in 1..10usize,
        target in 0..10usize,
        repeats in 1..4usize,
        date in date_strategy()
    ) {
        let target = target % count;

        let mut registry = Registry::new();
        let lab = registry.create_room("lab", RoomType::Laboratory);
        let ids: Vec<_> = (0..count)
            .map(|_| {
                let request = ReservationRequest::new(
                    lab.id(),
                    "someone",
                    date,
                    NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                    NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
                    ReservationKind::PracticalSession,
                );
                registry.create_reservation(request).unwrap().id()
            })
            .collect();

        for _ in 0..repeats {
            prop_assert!(registry.cancel_reservation(ids[target]).is_ok());
        }

        for (position, id) in ids.iter().enumerate() {
            let status = registry.reservation(*id).unwrap().status();
            prop_assert_eq!(status.is_active(), position != target);
        }
    }
}
