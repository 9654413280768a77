//! Booking store.
//!
//! Owns the booking collection and its persisted snapshot. Mutations are
//! expressed as [`BookingCommand`]s; a command that changes the collection is
//! followed by one synchronous snapshot write. Write failures are logged and
//! swallowed, so the in-memory collection stays authoritative for the rest of
//! the session (a failed write is lost on restart).

pub mod commands;
pub mod persistence;
pub mod queries;

use crate::error::BookingError;
use crate::models::booking::{Booking, BookingId, NewBooking};
use crate::models::room::RoomCatalog;
use crate::models::settings::DEFAULT_STORAGE_KEY;
use crate::services::storage::{MemoryStorage, SnapshotStorage};

pub use commands::{BookingCommand, CommandOutcome};
pub use queries::{ranges_overlap, DateRange};

pub struct BookingStore {
    rooms: RoomCatalog,
    bookings: Vec<Booking>,
    storage: Box<dyn SnapshotStorage>,
    key: String,
    /// Set while the latest change has not reached storage
    dirty: bool,
}

impl BookingStore {
    /// Load the collection stored under `key`.
    ///
    /// Never fails: a missing or unreadable snapshot starts an empty
    /// collection, and stored records that break the invariants are dropped.
    pub fn load(
        storage: Box<dyn SnapshotStorage>,
        key: impl Into<String>,
        rooms: RoomCatalog,
    ) -> Self {
        let key = key.into();
        let bookings = match persistence::load_snapshot(storage.as_ref(), &key) {
            Ok(bookings) => persistence::sanitize(bookings, &rooms),
            Err(err) => {
                log::warn!("Starting with no bookings: {err:#}");
                Vec::new()
            }
        };

        log::info!("Loaded {} bookings from {:?}", bookings.len(), key);

        Self {
            rooms,
            bookings,
            storage,
            key,
            dirty: false,
        }
    }

    /// Store backed by process memory only.
    pub fn in_memory(rooms: RoomCatalog) -> Self {
        Self::load(Box::new(MemoryStorage::new()), DEFAULT_STORAGE_KEY, rooms)
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn get(&self, id: &BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| &b.id == id)
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    pub fn rooms(&self) -> &RoomCatalog {
        &self.rooms
    }

    /// True when the last persist attempt failed.
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    /// Create a booking with a fresh id.
    ///
    /// Validation failures leave the collection unchanged.
    pub fn create(&mut self, request: NewBooking) -> Result<Booking, BookingError> {
        match self.apply(BookingCommand::Create(request))? {
            CommandOutcome::Created(booking) => Ok(booking),
            outcome => unreachable!("create produced {outcome:?}"),
        }
    }

    /// Remove a booking. An unknown id is a no-op and returns `None`.
    pub fn delete(&mut self, id: &BookingId) -> Option<Booking> {
        match self.apply(BookingCommand::Delete(id.clone())) {
            Ok(CommandOutcome::Deleted(booking)) => Some(booking),
            _ => None,
        }
    }

    /// Run a command, then persist once if it changed the collection.
    ///
    /// Every mutation of the collection goes through here.
    pub fn apply(&mut self, command: BookingCommand) -> Result<CommandOutcome, BookingError> {
        let description = command.description();
        let outcome = match command {
            BookingCommand::Create(request) => CommandOutcome::Created(self.insert(request)?),
            BookingCommand::Delete(id) => self
                .remove(&id)
                .map_or(CommandOutcome::Unchanged, CommandOutcome::Deleted),
        };

        if outcome.changed() {
            log::info!("{description}");
            self.persist();
        } else {
            log::debug!("{description}: nothing to do");
        }
        Ok(outcome)
    }

    fn insert(&mut self, request: NewBooking) -> Result<Booking, BookingError> {
        let mut booking = request.into_booking(&self.rooms)?;
        while self.get(&booking.id).is_some() {
            booking.id = BookingId::generate();
        }
        self.bookings.push(booking.clone());
        Ok(booking)
    }

    fn remove(&mut self, id: &BookingId) -> Option<Booking> {
        let index = self.bookings.iter().position(|b| &b.id == id)?;
        Some(self.bookings.remove(index))
    }

    /// Write the full collection to storage.
    ///
    /// Returns whether the write succeeded. Failures are logged, never raised.
    pub fn persist(&mut self) -> bool {
        match persistence::save_snapshot(self.storage.as_mut(), &self.key, &self.bookings) {
            Ok(()) => {
                self.dirty = false;
                true
            }
            Err(err) => {
                log::warn!(
                    "Failed to persist {} bookings; keeping them in memory only: {err:#}",
                    self.bookings.len()
                );
                self.dirty = true;
                false
            }
        }
    }
}

impl std::fmt::Debug for BookingStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingStore")
            .field("key", &self.key)
            .field("bookings", &self.bookings.len())
            .field("dirty", &self.dirty)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::MockSnapshotStorage;
    use anyhow::anyhow;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn smith() -> NewBooking {
        NewBooking::new("r2", d("2025-03-10"), d("2025-03-12"), "Smith")
    }

    #[test]
    fn test_create_appends_in_order() {
        let mut store = BookingStore::in_memory(RoomCatalog::default());
        let a = store.create(smith()).unwrap();
        let b = store
            .create(NewBooking::new("r1", d("2025-03-01"), d("2025-03-01"), "Jones"))
            .unwrap();
        let ids: Vec<&BookingId> = store.bookings().iter().map(|x| &x.id).collect();
        assert_eq!(ids, vec![&a.id, &b.id]);
    }

    #[test]
    fn test_whitespace_guest_leaves_collection_unchanged() {
        let mut store = BookingStore::in_memory(RoomCatalog::default());
        store.create(smith()).unwrap();
        let before = store.bookings().to_vec();

        let result = store.create(NewBooking::new("r1", d("2025-03-10"), d("2025-03-10"), "  "));
        assert_eq!(result, Err(BookingError::EmptyGuestName));
        assert_eq!(store.bookings(), before.as_slice());
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut store = BookingStore::in_memory(RoomCatalog::default());
        store.create(smith()).unwrap();
        let before = persistence::encode_snapshot(store.bookings()).unwrap();

        assert_eq!(store.delete(&BookingId::from("nope")), None);
        assert_eq!(persistence::encode_snapshot(store.bookings()).unwrap(), before);
    }

    #[test]
    fn test_delete_removes_booking() {
        let mut store = BookingStore::in_memory(RoomCatalog::default());
        let created = store.create(smith()).unwrap();
        assert_eq!(store.delete(&created.id), Some(created.clone()));
        assert!(store.is_empty());
        assert_eq!(store.delete(&created.id), None);
    }

    #[test]
    fn test_load_tolerates_malformed_snapshot() {
        let storage = MemoryStorage::with_entry(DEFAULT_STORAGE_KEY, "[{\"id\":");
        let store = BookingStore::load(Box::new(storage), DEFAULT_STORAGE_KEY, RoomCatalog::default());
        assert!(store.is_empty());
        assert!(!store.has_unsaved_changes());
    }

    #[test]
    fn test_load_tolerates_read_failure() {
        let mut storage = MockSnapshotStorage::new();
        storage
            .expect_read()
            .returning(|_| Err(anyhow!("storage unavailable")));
        let store = BookingStore::load(Box::new(storage), DEFAULT_STORAGE_KEY, RoomCatalog::default());
        assert!(store.is_empty());
    }

    #[test]
    fn test_each_mutation_writes_once() {
        let mut storage = MockSnapshotStorage::new();
        storage.expect_read().returning(|_| Ok(None));
        storage
            .expect_write()
            .times(2)
            .returning(|key, _| {
                assert_eq!(key, DEFAULT_STORAGE_KEY);
                Ok(())
            });

        let mut store = BookingStore::load(Box::new(storage), DEFAULT_STORAGE_KEY, RoomCatalog::default());
        let created = store.create(smith()).unwrap();
        let _ = store.create(NewBooking::new("r2", d("2025-03-10"), d("2025-03-10"), ""));
        store.delete(&BookingId::from("missing"));
        store.delete(&created.id);
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let mut storage = MockSnapshotStorage::new();
        storage.expect_read().returning(|_| Ok(None));
        storage
            .expect_write()
            .returning(|_, _| Err(anyhow!("quota exceeded")));

        let mut store = BookingStore::load(Box::new(storage), DEFAULT_STORAGE_KEY, RoomCatalog::default());
        let created = store.create(smith()).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&created.id), Some(&created));
        assert!(store.has_unsaved_changes());
    }

    #[test]
    fn test_apply_reports_outcomes_and_writes_only_on_change() {
        let mut storage = MockSnapshotStorage::new();
        storage.expect_read().returning(|_| Ok(None));
        storage.expect_write().times(2).returning(|_, _| Ok(()));

        let mut store = BookingStore::load(Box::new(storage), DEFAULT_STORAGE_KEY, RoomCatalog::default());

        let created = match store.apply(BookingCommand::Create(smith())).unwrap() {
            CommandOutcome::Created(booking) => booking,
            other => panic!("expected Created, got {other:?}"),
        };
        assert_eq!(store.bookings(), std::slice::from_ref(&created));

        let missed = store
            .apply(BookingCommand::Delete(BookingId::from("missing")))
            .unwrap();
        assert_eq!(missed, CommandOutcome::Unchanged);
        assert_eq!(store.len(), 1);

        let deleted = store
            .apply(BookingCommand::Delete(created.id.clone()))
            .unwrap();
        assert_eq!(deleted, CommandOutcome::Deleted(created));
        assert!(store.is_empty());
    }

    #[test]
    fn test_apply_rejected_create_does_not_write() {
        let mut storage = MockSnapshotStorage::new();
        storage.expect_read().returning(|_| Ok(None));
        storage.expect_write().never();

        let mut store = BookingStore::load(Box::new(storage), DEFAULT_STORAGE_KEY, RoomCatalog::default());
        let result = store.apply(BookingCommand::Create(NewBooking::new(
            "r7",
            d("2025-03-10"),
            d("2025-03-10"),
            "Smith",
        )));
        assert_eq!(result, Err(BookingError::UnknownRoom("r7".to_string())));
    }

    #[test]
    fn test_unsaved_flag_clears_after_successful_write() {
        let mut storage = MockSnapshotStorage::new();
        storage.expect_read().returning(|_| Ok(None));
        let mut calls = 0;
        storage.expect_write().times(2).returning(move |_, _| {
            calls += 1;
            if calls == 1 {
                Err(anyhow!("quota exceeded"))
            } else {
                Ok(())
            }
        });

        let mut store = BookingStore::load(Box::new(storage), DEFAULT_STORAGE_KEY, RoomCatalog::default());
        store.create(smith()).unwrap();
        assert!(store.has_unsaved_changes());

        store
            .create(NewBooking::new("r1", d("2025-03-01"), d("2025-03-02"), "Jones"))
            .unwrap();
        assert!(!store.has_unsaved_changes());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_persist_then_reload_round_trip() {
        let mut store = BookingStore::in_memory(RoomCatalog::default());
        store.create(smith().with_notes("late arrival")).unwrap();
        store
            .create(NewBooking::new("r5", d("2025-12-30"), d("2026-01-02"), "Nguyen"))
            .unwrap();

        let data = persistence::encode_snapshot(store.bookings()).unwrap();
        let reloaded = BookingStore::load(
            Box::new(MemoryStorage::with_entry("k", data)),
            "k",
            RoomCatalog::default(),
        );
        assert_eq!(reloaded.bookings(), store.bookings());
    }
}
