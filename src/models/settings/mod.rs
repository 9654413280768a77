// Settings module
// Grid configuration loaded from settings.toml

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::room::{default_rooms, Room};

pub const DEFAULT_DAYS_TO_SHOW: usize = 28;
/// Widest window the grid will render (two years of columns)
pub const MAX_DAYS_TO_SHOW: usize = 731;
pub const DEFAULT_STORAGE_KEY: &str = "shellybeach.bookings.v1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Number of day columns rendered from the anchor date
    pub days_to_show: usize,
    /// Snapshot key in the storage backend
    pub storage_key: String,
    /// Directory for snapshot files; platform data dir when unset
    pub data_dir: Option<PathBuf>,
    pub rooms: Vec<Room>,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            days_to_show: DEFAULT_DAYS_TO_SHOW,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir: None,
            rooms: default_rooms(),
        }
    }
}
