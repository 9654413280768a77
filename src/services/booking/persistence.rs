use std::collections::HashSet;

use anyhow::{anyhow, Context, Result};
use serde_json::{self, Value};

use crate::models::booking::Booking;
use crate::models::room::RoomCatalog;
use crate::services::storage::SnapshotStorage;

/// Read the snapshot stored under `key`.
///
/// A missing key is an empty collection. Text that is not a JSON array is an
/// error; array entries that do not decode as bookings are skipped.
pub fn load_snapshot(storage: &dyn SnapshotStorage, key: &str) -> Result<Vec<Booking>> {
    match storage.read(key)? {
        None => Ok(Vec::new()),
        Some(data) => decode_snapshot(&data)
            .with_context(|| format!("failed to deserialize bookings from {key:?}")),
    }
}

pub fn save_snapshot(storage: &mut dyn SnapshotStorage, key: &str, bookings: &[Booking]) -> Result<()> {
    let data = encode_snapshot(bookings)?;
    storage
        .write(key, &data)
        .with_context(|| format!("failed to write bookings to {key:?}"))
}

pub fn encode_snapshot(bookings: &[Booking]) -> Result<String> {
    Ok(serde_json::to_string(bookings)?)
}

pub fn decode_snapshot(data: &str) -> Result<Vec<Booking>> {
    let value: Value = serde_json::from_str(data)?;
    let Value::Array(entries) = value else {
        return Err(anyhow!("snapshot is not a JSON array"));
    };

    let mut bookings = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<Booking>(entry) {
            Ok(booking) => bookings.push(booking),
            Err(err) => log::warn!("Skipping unreadable booking #{index}: {err}"),
        }
    }
    Ok(bookings)
}

/// Drop records that break the collection invariants.
///
/// Keeps the first occurrence of a duplicated id; drops unknown rooms,
/// reversed ranges and blank guest names.
pub fn sanitize(bookings: Vec<Booking>, rooms: &RoomCatalog) -> Vec<Booking> {
    let mut seen = HashSet::new();
    bookings
        .into_iter()
        .filter(|booking| {
            if let Err(err) = booking.validate(rooms) {
                log::warn!("Discarding stored booking {}: {}", booking.id, err);
                return false;
            }
            if !seen.insert(booking.id.clone()) {
                log::warn!("Discarding duplicate stored booking {}", booking.id);
                return false;
            }
            true
        })
        .collect()
}
