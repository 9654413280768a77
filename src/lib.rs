// Shelly Beach Booking Library
// Booking-grid scheduling core: date sequences, drag selection, overlap
// queries and the persisted booking collection

pub mod error;
pub mod grid;
pub mod models;
pub mod services;
pub mod utils;
