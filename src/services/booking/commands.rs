// Booking Command System
//
// Every change to the booking collection goes through a command. A command
// that changes the collection is followed by exactly one snapshot write.

use crate::models::booking::{Booking, BookingId, NewBooking};

/// A discrete mutation of the booking collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingCommand {
    Create(NewBooking),
    Delete(BookingId),
}

impl BookingCommand {
    /// Human-readable description for logs
    pub fn description(&self) -> String {
        match self {
            Self::Create(new) => format!(
                "Create booking \"{}\" in {} ({} to {})",
                new.guest_name.trim(),
                new.room_id,
                new.start,
                new.end
            ),
            Self::Delete(id) => format!("Delete booking {}", id),
        }
    }
}

/// What applying a command did to the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Created(Booking),
    Deleted(Booking),
    /// Nothing matched; the collection and snapshot are untouched
    Unchanged,
}

impl CommandOutcome {
    pub fn changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}
