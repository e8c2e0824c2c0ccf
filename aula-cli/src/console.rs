//! Interactive console for driving the registry.
//!
//! All prompting, parsing and rendering lives here; every rule lives in
//! the library. The console is generic over its input and output
//! streams so whole sessions can be scripted in tests.

use std::io::{self, BufRead, Write};

use aula::{
    Error, EventKind, Registry, Reservation, ReservationId, ReservationKind, ReservationRequest,
    Room, RoomId, RoomType,
};
use chrono::{NaiveDate, NaiveTime};

/// What a menu interaction decided about the session.
enum Flow {
    /// Show the menu again.
    Continue,
    /// End the session (explicit exit or end of input).
    Quit,
}

/// The interactive menu loop over a registry.
pub struct Console<R, W> {
    input: R,
    output: W,
    registry: Registry,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams and registry.
    pub fn new(input: R, output: W, registry: Registry) -> Self {
        Self {
            input,
            output,
            registry,
        }
    }

    /// Runs the menu loop until the operator exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading from or writing to the streams
    /// fails; domain errors are printed and the loop continues.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.show_main_menu()?;
            let Some(choice) = self.read_line()? else { break };
            let flow = match choice.as_str() {
                "1" => self.manage_rooms()?,
                "2" => self.register_reservation()?,
                "3" => {
                    self.list_reservations()?;
                    Flow::Continue
                }
                "4" => self.cancel_reservation()?,
                "5" => Flow::Quit,
                _ => {
                    writeln!(self.output, "Invalid option.")?;
                    Flow::Continue
                }
            };
            if matches!(flow, Flow::Quit) {
                break;
            }
        }
        writeln!(self.output, "Goodbye.")?;
        Ok(())
    }

    fn show_main_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "==== Room Reservations ====")?;
        writeln!(self.output, "1. Manage rooms")?;
        writeln!(self.output, "2. Register reservation")?;
        writeln!(self.output, "3. List reservations")?;
        writeln!(self.output, "4. Cancel reservation")?;
        writeln!(self.output, "5. Exit")?;
        write!(self.output, "Option: ")?;
        self.output.flush()
    }

    fn show_rooms_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "---- Rooms ----")?;
        writeln!(self.output, "1. List rooms")?;
        writeln!(self.output, "2. Register room")?;
        writeln!(self.output, "3. Modify room")?;
        writeln!(self.output, "4. Back")?;
        write!(self.output, "Option: ")?;
        self.output.flush()
    }

    fn manage_rooms(&mut self) -> io::Result<Flow> {
        loop {
            self.show_rooms_menu()?;
            let Some(choice) = self.read_line()? else {
                return Ok(Flow::Quit);
            };
            let flow = match choice.as_str() {
                "1" => {
                    self.print_rooms()?;
                    Flow::Continue
                }
                "2" => self.register_room()?,
                "3" => self.modify_room()?,
                "4" => return Ok(Flow::Continue),
                _ => {
                    writeln!(self.output, "Invalid option.")?;
                    Flow::Continue
                }
            };
            if matches!(flow, Flow::Quit) {
                return Ok(Flow::Quit);
            }
        }
    }

    fn register_room(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt("Room name: ")? else {
            return Ok(Flow::Quit);
        };
        self.print_room_types()?;
        let Some(selection) = self.prompt_u32("Type: ")? else {
            return Ok(Flow::Quit);
        };
        let room_type = match RoomType::from_index(selection as usize) {
            Ok(room_type) => room_type,
            Err(err) => {
                writeln!(self.output, "{}", Error::from(err))?;
                return Ok(Flow::Continue);
            }
        };

        let room = self.registry.create_room(name, room_type);
        writeln!(self.output, "Room registered with id {}.", room.id())?;
        Ok(Flow::Continue)
    }

    fn modify_room(&mut self) -> io::Result<Flow> {
        self.print_rooms()?;
        let Some(value) = self.prompt_u32("Room id: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(current) = self.find_room(value).cloned() else {
            writeln!(self.output, "Room not found.")?;
            return Ok(Flow::Continue);
        };
        writeln!(self.output, "Editing {current}.")?;

        let Some(name) = self.prompt("New name: ")? else {
            return Ok(Flow::Quit);
        };
        self.print_room_types()?;
        let Some(selection) = self.prompt_u32("Type: ")? else {
            return Ok(Flow::Quit);
        };
        let room_type = match RoomType::from_index(selection as usize) {
            Ok(room_type) => room_type,
            Err(err) => {
                writeln!(self.output, "{}", Error::from(err))?;
                return Ok(Flow::Continue);
            }
        };

        match self.registry.update_room(current.id(), name, room_type) {
            Ok(room) => writeln!(self.output, "Room updated: {room}.")?,
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(Flow::Continue)
    }

    fn register_reservation(&mut self) -> io::Result<Flow> {
        let Some(requester) = self.prompt("Requester name: ")? else {
            return Ok(Flow::Quit);
        };
        self.print_rooms()?;
        let Some(value) = self.prompt_u32("Room id: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(room_id) = self.find_room(value).map(Room::id) else {
            writeln!(self.output, "Room not found.")?;
            return Ok(Flow::Continue);
        };

        let Some(date) = self.prompt_date("Date (YYYY-MM-DD): ")? else {
            return Ok(Flow::Quit);
        };
        let Some(start) = self.prompt_time("Start time (HH:MM): ")? else {
            return Ok(Flow::Quit);
        };
        let Some(end) = self.prompt_time("End time (HH:MM): ")? else {
            return Ok(Flow::Quit);
        };

        writeln!(self.output, "Reservation kind:")?;
        writeln!(self.output, "  1. class session")?;
        writeln!(self.output, "  2. practical session")?;
        writeln!(self.output, "  3. event")?;
        let Some(selection) = self.prompt_u32("Kind: ")? else {
            return Ok(Flow::Quit);
        };
        let kind = match selection {
            1 => ReservationKind::ClassSession,
            2 => ReservationKind::PracticalSession,
            3 => {
                let Some(event_kind) = self.ask_event_kind()? else {
                    return Ok(Flow::Quit);
                };
                match event_kind {
                    Ok(event_kind) => ReservationKind::Event(event_kind),
                    Err(err) => {
                        writeln!(self.output, "{err}")?;
                        return Ok(Flow::Continue);
                    }
                }
            }
            other => {
                let err = Error::InvalidSelection {
                    value: other as usize,
                    max: 3,
                };
                writeln!(self.output, "{err}")?;
                return Ok(Flow::Continue);
            }
        };

        let request = ReservationRequest::new(room_id, requester, date, start, end, kind);
        match self.registry.create_reservation(request) {
            Ok(reservation) => writeln!(
                self.output,
                "Reservation registered with id {}.",
                reservation.id()
            )?,
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(Flow::Continue)
    }

    /// Asks for an event kind. The outer `Option` is end-of-input, the
    /// inner `Result` an out-of-range selection.
    fn ask_event_kind(&mut self) -> io::Result<Option<Result<EventKind, Error>>> {
        writeln!(self.output, "Event kind:")?;
        for (position, kind) in EventKind::ALL.iter().enumerate() {
            writeln!(self.output, "  {}. {kind}", position + 1)?;
        }
        let Some(selection) = self.prompt_u32("Event kind: ")? else {
            return Ok(None);
        };
        Ok(Some(
            EventKind::from_index(selection as usize).map_err(Error::from),
        ))
    }

    fn list_reservations(&mut self) -> io::Result<()> {
        if self.registry.reservations().is_empty() {
            writeln!(self.output, "No reservations registered.")?;
            return Ok(());
        }
        for reservation in self.registry.reservations() {
            let line = Self::render_reservation(&self.registry, reservation);
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn render_reservation(registry: &Registry, reservation: &Reservation) -> String {
        let room_name = registry
            .room(reservation.room())
            .map_or("unknown room", Room::name);
        format!(
            "{} - {} {}-{} - {} - {} - {} [{}]",
            reservation.id(),
            reservation.date(),
            reservation.start_time().format("%H:%M"),
            reservation.end_time().format("%H:%M"),
            reservation.kind(),
            room_name,
            reservation.requester(),
            reservation.status(),
        )
    }

    fn cancel_reservation(&mut self) -> io::Result<Flow> {
        let Some(value) = self.prompt_u32("Reservation id: ")? else {
            return Ok(Flow::Quit);
        };
        let cancelled = ReservationId::try_from(value)
            .ok()
            .map_or(false, |id| self.registry.cancel_reservation(id).is_ok());
        if cancelled {
            writeln!(self.output, "Reservation cancelled.")?;
        } else {
            writeln!(self.output, "Reservation not found.")?;
        }
        Ok(Flow::Continue)
    }

    fn print_rooms(&mut self) -> io::Result<()> {
        if self.registry.rooms().is_empty() {
            writeln!(self.output, "No rooms registered.")?;
            return Ok(());
        }
        writeln!(self.output, "Rooms:")?;
        for room in self.registry.rooms() {
            writeln!(self.output, "  {room}")?;
        }
        Ok(())
    }

    fn print_room_types(&mut self) -> io::Result<()> {
        writeln!(self.output, "Room type:")?;
        for (position, room_type) in RoomType::ALL.iter().enumerate() {
            writeln!(self.output, "  {}. {room_type}", position + 1)?;
        }
        Ok(())
    }

    /// Resolves operator input to a known room. Zero and unknown ids
    /// both come back as `None`.
    fn find_room(&self, value: u32) -> Option<&Room> {
        RoomId::try_from(value)
            .ok()
            .and_then(|id| self.registry.room(id))
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn prompt_u32(&mut self, label: &str) -> io::Result<Option<u32>> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            match line.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Enter a whole number.")?,
            }
        }
    }

    fn prompt_date(&mut self, label: &str) -> io::Result<Option<NaiveDate>> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            // Slashes are accepted and normalized
            let normalized = line.replace('/', "-");
            match NaiveDate::parse_from_str(&normalized, "%Y-%m-%d") {
                Ok(date) => return Ok(Some(date)),
                Err(_) => writeln!(self.output, "Enter a date like 2025-03-14.")?,
            }
        }
    }

    fn prompt_time(&mut self, label: &str) -> io::Result<Option<NaiveTime>> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            match NaiveTime::parse_from_str(&line, "%H:%M") {
                Ok(time) => return Ok(Some(time)),
                Err(_) => writeln!(self.output, "Enter a time like 09:30.")?,
            }
        }
    }
}
