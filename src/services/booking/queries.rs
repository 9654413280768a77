//! Overlap queries over the booking collection.
//!
//! All ranges are inclusive calendar-date intervals. A cell query is a
//! linear scan; the grid shows tens of days for a handful of rooms.

use chrono::NaiveDate;

use super::BookingStore;
use crate::models::booking::{Booking, BookingId};

/// Inclusive calendar-date interval `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Returns `None` when `end` precedes `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn single_day(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }

    pub fn of(booking: &Booking) -> Self {
        Self {
            start: booking.start,
            end: booking.end,
        }
    }

    pub fn overlaps(&self, other: &DateRange) -> bool {
        ranges_overlap(self.start, self.end, other.start, other.end)
    }
}

/// `[a_start, a_end]` and `[b_start, b_end]` share at least one day.
pub fn ranges_overlap(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    !(a_end < b_start || b_end < a_start)
}

impl BookingStore {
    /// All bookings for a room, in insertion order.
    pub fn room_bookings(&self, room_id: &str) -> Vec<&Booking> {
        self.bookings().iter().filter(|b| b.room_id == room_id).collect()
    }

    /// Bookings of `room_id` that touch any day of `range`.
    pub fn bookings_in_range(&self, room_id: &str, range: DateRange) -> Vec<&Booking> {
        self.room_bookings(room_id)
            .into_iter()
            .filter(|b| DateRange::of(b).overlaps(&range))
            .collect()
    }

    /// Bookings of `room_id` covering `day`, used to paint one grid cell.
    pub fn bookings_on(&self, room_id: &str, day: NaiveDate) -> Vec<&Booking> {
        self.bookings_in_range(room_id, DateRange::single_day(day))
    }

    /// Other bookings in the same room that overlap the given booking.
    ///
    /// Overlap is allowed; this only reports it.
    pub fn overlapping_with(&self, id: &BookingId) -> Vec<&Booking> {
        let Some(target) = self.get(id) else {
            return Vec::new();
        };
        self.bookings_in_range(&target.room_id, DateRange::of(target))
            .into_iter()
            .filter(|b| b.id != target.id)
            .collect()
    }
}
