//! Booking grid session.
//!
//! One `BookingGrid` owns everything a single user session mutates: the
//! visible date sequence, the booking store, the drag state and the booking
//! request waiting for the form. Presentation code reads from it and feeds
//! pointer events and form results back in.

pub mod drag;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::error::{BookingError, DateError};
use crate::models::booking::{Booking, BookingId, NewBooking};
use crate::models::room::{Room, RoomCatalog};
use crate::models::settings::GridSettings;
use crate::services::booking::BookingStore;
use crate::services::settings::resolve_data_dir;
use crate::services::storage::FileStorage;
use crate::utils::date::{add_days, display_label, each_day, start_of_today, weekday_label};

pub use drag::{CommittedSelection, DragSelection, DragState, SelectionController};

/// Column header data for one visible day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayHeader {
    pub index: usize,
    pub date: NaiveDate,
    pub weekday: String,
    pub label: String,
}

/// A committed drag waiting for guest details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingBooking {
    pub room_id: String,
    pub room_name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

pub struct BookingGrid {
    anchor: NaiveDate,
    days_to_show: usize,
    days: Vec<NaiveDate>,
    store: BookingStore,
    selection: SelectionController,
    pending: Option<PendingBooking>,
}

impl BookingGrid {
    pub fn new(store: BookingStore, anchor: NaiveDate, days_to_show: usize) -> Result<Self, DateError> {
        let days = each_day(anchor, days_to_show)?;
        Ok(Self {
            anchor,
            days_to_show,
            days,
            store,
            selection: SelectionController::new(),
            pending: None,
        })
    }

    /// Open a file-backed session starting today.
    pub fn from_settings(settings: &GridSettings) -> Result<Self> {
        let rooms = RoomCatalog::new(settings.rooms.clone()).unwrap_or_else(|err| {
            log::warn!("Using default rooms: {err}");
            RoomCatalog::default()
        });
        let storage = FileStorage::new(resolve_data_dir(settings));
        let store = BookingStore::load(Box::new(storage), settings.storage_key.clone(), rooms);
        Self::new(store, start_of_today(), settings.days_to_show)
            .context("failed to build the visible date range")
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    pub fn day_headers(&self) -> Vec<DayHeader> {
        self.days
            .iter()
            .enumerate()
            .map(|(index, &date)| DayHeader {
                index,
                date,
                weekday: weekday_label(date),
                label: display_label(date),
            })
            .collect()
    }

    pub fn rooms(&self) -> &[Room] {
        self.store.rooms().rooms()
    }

    pub fn store(&self) -> &BookingStore {
        &self.store
    }

    /// Move the visible window to start at `anchor`.
    ///
    /// Any drag in progress is dropped since its indices referred to the
    /// old sequence. On error the current window is kept.
    pub fn set_anchor(&mut self, anchor: NaiveDate) -> Result<(), DateError> {
        let days = each_day(anchor, self.days_to_show)?;
        self.anchor = anchor;
        self.days = days;
        self.selection.cancel();
        Ok(())
    }

    /// Scroll the window by a signed number of days.
    pub fn shift_anchor(&mut self, days: i64) -> Result<(), DateError> {
        self.set_anchor(add_days(self.anchor, days)?)
    }

    /// Bookings painted in the cell for `room_id` at column `index`.
    pub fn cell_bookings(&self, room_id: &str, index: usize) -> Vec<&Booking> {
        match self.days.get(index) {
            Some(&day) => self.store.bookings_on(room_id, day),
            None => Vec::new(),
        }
    }

    pub fn is_selected(&self, room_id: &str, index: usize) -> bool {
        self.selection.is_selected(room_id, index)
    }

    pub fn drag_state(&self) -> &DragState {
        self.selection.state()
    }

    fn accepts_cell(&self, room_id: &str, index: usize) -> bool {
        index < self.days.len() && self.store.rooms().contains(room_id)
    }

    pub fn pointer_down(&mut self, room_id: &str, index: usize) {
        if self.pending.is_some() || !self.accepts_cell(room_id, index) {
            return;
        }
        self.selection.begin(room_id, index);
    }

    /// Pointer moved over a cell; only counts while the primary button is held.
    pub fn pointer_move(&mut self, room_id: &str, index: usize, primary_held: bool) {
        if !primary_held || !self.accepts_cell(room_id, index) {
            return;
        }
        self.selection.update(room_id, index);
    }

    /// Pointer released: commit the drag and open a booking request.
    pub fn pointer_up(&mut self) -> Option<&PendingBooking> {
        let committed = self.selection.finish()?;
        let (Some(&start), Some(&end)) = (
            self.days.get(committed.start_index),
            self.days.get(committed.end_index),
        ) else {
            log::warn!("Dropping selection outside the visible range: {committed:?}");
            return None;
        };

        self.pending = Some(PendingBooking {
            room_name: self.store.rooms().name_of(&committed.room_id).to_string(),
            room_id: committed.room_id,
            start,
            end,
        });
        self.pending.as_ref()
    }

    /// Pointer left the grid: cancel the drag without opening a request.
    pub fn pointer_leave(&mut self) {
        self.selection.cancel();
    }

    pub fn pending(&self) -> Option<&PendingBooking> {
        self.pending.as_ref()
    }

    /// Close the booking form without creating anything.
    pub fn dismiss_pending(&mut self) {
        self.pending = None;
    }

    /// Create a booking for the pending selection.
    ///
    /// On a validation error the request stays open so the form can be
    /// corrected.
    pub fn submit_booking(&mut self, guest_name: &str, notes: Option<&str>) -> Result<Booking, BookingError> {
        let pending = self.pending.as_ref().ok_or(BookingError::NoPendingSelection)?;
        let mut request = NewBooking::new(pending.room_id.clone(), pending.start, pending.end, guest_name);
        if let Some(notes) = notes {
            request = request.with_notes(notes);
        }

        let booking = self.store.create(request)?;
        self.pending = None;
        Ok(booking)
    }

    /// Delete after the user answered the confirmation prompt.
    pub fn confirm_delete(&mut self, id: &BookingId, confirmed: bool) -> Option<Booking> {
        if !confirmed {
            return None;
        }
        self.delete_booking(id)
    }

    pub fn delete_booking(&mut self, id: &BookingId) -> Option<Booking> {
        self.store.delete(id)
    }
}
