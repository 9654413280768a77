//! Error types for the booking grid core

use chrono::NaiveDate;
use thiserror::Error;

/// Failures of the calendar-date helpers in `utils::date`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Unparseable date: {0:?} (expected yyyy-mm-dd)")]
    Unparseable(String),

    #[error("Date arithmetic out of range")]
    OutOfRange,
}

/// Validation failures of the booking lifecycle.
///
/// Every variant leaves the booking collection untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Guest name cannot be empty")]
    EmptyGuestName,

    #[error("Unknown room: {0}")]
    UnknownRoom(String),

    #[error("Booking end {end} is before start {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("No committed selection is waiting for a booking")]
    NoPendingSelection,
}

/// Validation failures when building a room catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoomCatalogError {
    #[error("Room catalog cannot be empty")]
    Empty,

    #[error("Room id cannot be empty")]
    BlankId,

    #[error("Duplicate room id '{0}'")]
    DuplicateId(String),
}
