//! Room catalog files and the builtin seed.
//!
//! A catalog describes the rooms a fresh registry starts with. It can be
//! loaded from a YAML file or fall back to the builtin trio the system
//! has always shipped with.
//!
//! A catalog file looks like:
//!
//! ```yaml
//! rooms:
//!   - name: Aula 1
//!     room_type: lecture
//!   - name: Laboratorio de redes
//!     room_type: laboratory
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::room::RoomType;

/// Environment variable naming a catalog file to load.
pub const ROOMS_ENV: &str = "AULA_ROOMS";

/// A room waiting to be seeded into a registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoomSeed {
    /// The room name.
    pub name: String,
    /// The room classification.
    pub room_type: RoomType,
}

/// A set of rooms to seed a registry with.
///
/// # Examples
///
/// ```
/// use aula::{Catalog, RoomType};
///
/// let catalog = Catalog::builtin();
/// assert_eq!(catalog.rooms.len(), 3);
/// assert_eq!(catalog.rooms[2].room_type, RoomType::Auditorium);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    /// The rooms, in seeding order.
    #[serde(default)]
    pub rooms: Vec<RoomSeed>,
}

impl Catalog {
    /// Returns the builtin catalog: two classrooms and the main
    /// auditorium.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            rooms: vec![
                RoomSeed {
                    name: "Aula 1".to_string(),
                    room_type: RoomType::Lecture,
                },
                RoomSeed {
                    name: "Aula 2".to_string(),
                    room_type: RoomType::Laboratory,
                },
                RoomSeed {
                    name: "Auditorio Principal".to_string(),
                    room_type: RoomType::Auditorium,
                },
            ],
        }
    }

    /// Loads a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML does not
    /// describe a catalog.
    pub fn load(path: &Path) -> Result<Self> {
        log::debug!("Loading room catalog from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Discovers the catalog to use.
    ///
    /// Precedence: an explicit path, then the [`ROOMS_ENV`] environment
    /// variable, then the per-user file at `~/.config/aula/rooms.yaml`,
    /// then the builtin catalog. A named file that is missing or
    /// malformed is an error, never silently skipped; the per-user file
    /// is only consulted when it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the selected file cannot be read or parsed.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Ok(path) = env::var(ROOMS_ENV) {
            return Self::load(Path::new(&path));
        }

        if let Some(path) = Self::user_catalog_path() {
            if path.exists() {
                return Self::load(&path);
            }
        }

        log::debug!("Using builtin room catalog");
        Ok(Self::builtin())
    }

    /// Returns the per-user catalog location, if a home directory is
    /// known.
    #[must_use]
    pub fn user_catalog_path() -> Option<PathBuf> {
        home::home_dir().map(|dir| dir.join(".config").join("aula").join("rooms.yaml"))
    }
}
