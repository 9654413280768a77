//! Grid settings service.
//! Resolves platform directories and loads `settings.toml`.

mod service;

pub use service::{resolve_data_dir, resolve_settings_path, SettingsService};
