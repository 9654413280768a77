use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::room::RoomCatalog;
use crate::models::settings::{GridSettings, MAX_DAYS_TO_SHOW};

const SETTINGS_FILE: &str = "settings.toml";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("au", "ShellyBeach", "Bookings")
}

/// Location of `settings.toml` in the platform config directory.
pub fn resolve_settings_path() -> PathBuf {
    if let Some(dirs) = project_dirs() {
        dirs.config_dir().join(SETTINGS_FILE)
    } else {
        log::warn!("Unable to resolve project directory; using current dir for settings");
        PathBuf::from(SETTINGS_FILE)
    }
}

/// Directory holding booking snapshots.
pub fn resolve_data_dir(settings: &GridSettings) -> PathBuf {
    if let Some(dir) = &settings.data_dir {
        return dir.clone();
    }
    if let Some(dirs) = project_dirs() {
        dirs.data_dir().to_path_buf()
    } else {
        log::warn!("Unable to resolve project directory; using current dir for bookings");
        PathBuf::from(".")
    }
}

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service bound to the platform settings file.
    pub fn platform() -> Self {
        Self::new(resolve_settings_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults on any failure.
    ///
    /// A missing file is normal on first launch; a broken file or an
    /// invalid room list is logged and replaced by defaults.
    pub fn load(&self) -> GridSettings {
        if !self.path.exists() {
            log::info!(
                "No settings at {}; using defaults",
                self.path.display()
            );
            return GridSettings::default();
        }

        match self.try_load() {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Ignoring settings at {}: {err:#}", self.path.display());
                GridSettings::default()
            }
        }
    }

    fn try_load(&self) -> Result<GridSettings> {
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        let settings: GridSettings = toml::from_str(&data)
            .with_context(|| format!("failed to parse settings from {}", self.path.display()))?;
        validate(&settings)?;
        Ok(settings)
    }

    pub fn save(&self, settings: &GridSettings) -> Result<()> {
        validate(settings)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(settings).context("failed to encode settings")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;
        Ok(())
    }
}

fn validate(settings: &GridSettings) -> Result<()> {
    RoomCatalog::new(settings.rooms.clone()).map_err(|e| anyhow!("Invalid rooms: {}", e))?;
    if settings.days_to_show > MAX_DAYS_TO_SHOW {
        return Err(anyhow!(
            "Invalid settings: days_to_show {} exceeds {}",
            settings.days_to_show,
            MAX_DAYS_TO_SHOW
        ));
    }
    if settings.storage_key.trim().is_empty() {
        return Err(anyhow!("Invalid settings: storage_key cannot be empty"));
    }
    Ok(())
}
