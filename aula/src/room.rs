//! Room catalog types.
//!
//! This module provides the room side of the reservation system: typed
//! room identifiers, the room classification, and the room entity itself.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A registry-assigned room identifier (1 or greater).
///
/// Identifiers are minted sequentially by the registry; zero is reserved
/// as an invalid sentinel and rejected on conversion.
///
/// # Examples
///
/// ```
/// use aula::RoomId;
///
/// // Valid identifier
/// let id = RoomId::try_from(3).unwrap();
/// assert_eq!(id.value(), 3);
///
/// // Zero is invalid
/// assert!(RoomId::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(u32);

impl RoomId {
    /// The first identifier a registry hands out.
    pub(crate) const FIRST: Self = Self(1);

    /// Returns the underlying numeric value.
    ///
    /// # Examples
    ///
    /// ```
    /// use aula::RoomId;
    ///
    /// let id = RoomId::try_from(7).unwrap();
    /// assert_eq!(id.value(), 7);
    /// ```
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

impl TryFrom<u32> for RoomId {
    type Error = InvalidIdError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value == 0 {
            Err(InvalidIdError { value })
        } else {
            Ok(Self(value))
        }
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for identifiers outside the assignable range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidIdError {
    /// The rejected value.
    pub value: u32,
}

impl fmt::Display for InvalidIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid identifier {}: identifiers start at 1",
            self.value
        )
    }
}

impl std::error::Error for InvalidIdError {}

/// Error type for an out-of-range menu selection.
///
/// Selections are 1-based: a list of three options accepts 1, 2 and 3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSelectionError {
    /// The rejected selection.
    pub value: usize,
    /// The highest accepted selection.
    pub max: usize,
}

impl fmt::Display for InvalidSelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid selection {}: expected a value between 1 and {}",
            self.value, self.max
        )
    }
}

impl std::error::Error for InvalidSelectionError {}

/// Classification of a room, governing which reservation kinds it accepts.
///
/// # Examples
///
/// ```
/// use aula::RoomType;
///
/// assert_eq!(RoomType::from_index(1).unwrap(), RoomType::Lecture);
/// assert_eq!(format!("{}", RoomType::Auditorium), "auditorium");
/// assert!(RoomType::from_index(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    /// A lecture room for taught sessions.
    Lecture,
    /// A laboratory with practical equipment.
    Laboratory,
    /// A large auditorium.
    Auditorium,
}

impl RoomType {
    /// All room types, in menu order.
    pub const ALL: [Self; 3] = [Self::Lecture, Self::Laboratory, Self::Auditorium];

    /// Resolves a 1-based menu selection to a room type.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection is 0 or past the end of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use aula::RoomType;
    ///
    /// assert_eq!(RoomType::from_index(2).unwrap(), RoomType::Laboratory);
    /// assert!(RoomType::from_index(0).is_err());
    /// ```
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

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lecture => write!(f, "lecture"),
            Self::Laboratory => write!(f, "laboratory"),
            Self::Auditorium => write!(f, "auditorium"),
        }
    }
}

/// A physical room in the catalog.
///
/// Rooms are created through the registry, which assigns the identifier.
/// Name and type may change afterwards; the identifier never does, and
/// rooms are never deleted.
///
/// # Examples
///
/// ```
/// use aula::{Registry, RoomType};
///
/// let mut registry = Registry::new();
/// let room = registry.create_room("Aula 1", RoomType::Lecture);
///
/// assert_eq!(room.id().value(), 1);
/// assert_eq!(room.name(), "Aula 1");
/// assert_eq!(room.room_type(), RoomType::Lecture);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    id: RoomId,
    name: String,
    room_type: RoomType,
}

impl Room {
    /// Creates a room with an already-minted identifier.
    ///
    /// The name is trimmed of surrounding whitespace; an empty name is
    /// accepted (names are free text).
    pub(crate) fn new(id: RoomId, name: impl Into<String>, room_type: RoomType) -> Self {
        Self {
            id,
            name: name.into().trim().to_string(),
            room_type,
        }
    }

    /// Returns the room identifier.
    #[must_use]
    pub const fn id(&self) -> RoomId {
        self.id
    }

    /// Returns the room name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the room classification.
    #[must_use]
    pub const fn room_type(&self) -> RoomType {
        self.room_type
    }

    /// Replaces the name and classification in place.
    pub(crate) fn update(&mut self, name: impl Into<String>, room_type: RoomType) {
        self.name = name.into().trim().to_string();
        self.room_type = room_type;
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.id, self.name, self.room_type)
    }
}
