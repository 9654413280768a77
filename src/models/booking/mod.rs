// Booking module
// A guest reservation of one room over an inclusive range of calendar dates

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::BookingError;
use crate::models::room::RoomCatalog;
use crate::utils::date::{format_date, inclusive_day_count};

/// Unique booking identifier (a v4 UUID string on creation).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(pub String);

impl BookingId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookingId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A stored booking. Immutable once created.
///
/// Serialized as `{ id, roomId, start, end, guestName, notes? }` with
/// `yyyy-mm-dd` dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub room_id: String,
    pub start: NaiveDate,
    /// Inclusive
    pub end: NaiveDate,
    pub guest_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Booking {
    /// Number of nights/days covered, counting both endpoints.
    pub fn day_count(&self) -> i64 {
        inclusive_day_count(self.start, self.end)
    }

    /// Hover text for a booking chip: `"Smith (2025-03-10–2025-03-12)"`.
    pub fn tooltip(&self) -> String {
        format!(
            "{} ({}–{})",
            self.guest_name,
            format_date(self.start),
            format_date(self.end)
        )
    }

    /// Check the stored-record invariants against a room catalog.
    pub fn validate(&self, rooms: &RoomCatalog) -> Result<(), BookingError> {
        if self.guest_name.trim().is_empty() {
            return Err(BookingError::EmptyGuestName);
        }
        if !rooms.contains(&self.room_id) {
            return Err(BookingError::UnknownRoom(self.room_id.clone()));
        }
        if self.end < self.start {
            return Err(BookingError::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

/// Request to create a booking, as collected from the booking form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub room_id: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub guest_name: String,
    pub notes: Option<String>,
}

impl NewBooking {
    pub fn new(
        room_id: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
        guest_name: impl Into<String>,
    ) -> Self {
        Self {
            room_id: room_id.into(),
            start,
            end,
            guest_name: guest_name.into(),
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Validate and normalise into a stored booking with a fresh id.
    ///
    /// The guest name is trimmed; notes are trimmed and dropped when blank.
    pub fn into_booking(self, rooms: &RoomCatalog) -> Result<Booking, BookingError> {
        let booking = Booking {
            id: BookingId::generate(),
            room_id: self.room_id,
            start: self.start,
            end: self.end,
            guest_name: self.guest_name.trim().to_string(),
            notes: self
                .notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
        };
        booking.validate(rooms)?;
        Ok(booking)
    }
}
