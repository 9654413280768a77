//! Room model and the static room catalog.
//!
//! Rooms (cabins and powered sites) are fixed for the lifetime of the
//! process. The catalog is read-only: nothing at runtime adds or removes
//! entries.

use serde::{Deserialize, Serialize};

use crate::error::RoomCatalogError;

/// A bookable room or site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
}

impl Room {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Ordered, immutable list of rooms shown as grid rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomCatalog {
    rooms: Vec<Room>,
}

impl RoomCatalog {
    /// Build a catalog from caller-supplied rooms.
    ///
    /// Rejects an empty list and duplicate or blank ids.
    pub fn new(rooms: Vec<Room>) -> Result<Self, RoomCatalogError> {
        if rooms.is_empty() {
            return Err(RoomCatalogError::Empty);
        }
        for (i, room) in rooms.iter().enumerate() {
            if room.id.trim().is_empty() {
                return Err(RoomCatalogError::BlankId);
            }
            if rooms[..i].iter().any(|earlier| earlier.id == room.id) {
                return Err(RoomCatalogError::DuplicateId(room.id.clone()));
            }
        }
        Ok(Self { rooms })
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn get(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Display name for a room id, falling back to "Room" for unknown ids.
    pub fn name_of(&self, id: &str) -> &str {
        self.get(id).map(|room| room.name.as_str()).unwrap_or("Room")
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl Default for RoomCatalog {
    /// The Shelly Beach property: three cabins and two powered sites.
    fn default() -> Self {
        Self {
            rooms: default_rooms(),
        }
    }
}

pub fn default_rooms() -> Vec<Room> {
    vec![
        Room::new("r1", "Cabin 1"),
        Room::new("r2", "Cabin 2"),
        Room::new("r3", "Cabin 3"),
        Room::new("r4", "Powered Site A"),
        Room::new("r5", "Powered Site B"),
    ]
}
