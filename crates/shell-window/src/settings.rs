//! Persisted window settings.
//!
//! Settings are stored as TOML in the platform-specific config folder:
//! - macOS: ~/Library/Application Support/com.RegionShell.RegionShell/
//! - Windows: %APPDATA%/RegionShell/RegionShell/config/
//! - Linux: ~/.config/regionshell/
//!
//! Loading is tolerant: a missing file yields defaults, and so does an unreadable or
//! corrupt one (with a warning). Values are only written back by an explicit save.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::SettingsError;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "RegionShell";
const APP_NAME: &str = "RegionShell";
const CONFIG_FILENAME: &str = "settings.toml";

/// Read/write access to the persisted window settings.
///
/// Setters only change the in-memory values; nothing reaches storage until
/// [`save`](Self::save).
pub trait SettingsStore {
    fn window_height(&self) -> f64;
    fn set_window_height(&mut self, value: f64);

    fn window_width(&self) -> f64;
    fn set_window_width(&mut self, value: f64);

    fn window_left(&self) -> f64;
    fn set_window_left(&mut self, value: f64);

    fn window_top(&self) -> f64;
    fn set_window_top(&mut self, value: f64);

    /// Whether the window was in the normal (not maximized) state when last saved.
    fn window_is_normal_state(&self) -> bool;
    fn set_window_is_normal_state(&mut self, value: bool);

    /// Persist the current values.
    ///
    /// # Errors
    ///
    /// Returns a [`SettingsError`] if the values could not be written.
    fn save(&mut self) -> Result<(), SettingsError>;
}

// =============================================================================
// SETTINGS FILE
// =============================================================================

/// Contents of the settings file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Main window placement.
    pub window: WindowSettings,
}

/// Persisted main window placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub height: f64,
    pub width: f64,
    pub left: f64,
    pub top: f64,
    pub is_normal_state: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            height: 600.0,
            width: 800.0,
            left: 100.0,
            top: 100.0,
            is_normal_state: true,
        }
    }
}

impl Settings {
    /// Read settings from `path`, failing on any I/O or parse error.
    pub fn read_from(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            operation: "read",
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read settings from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        match Self::read_from(path) {
            Ok(settings) => {
                info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(error) if error.is_not_found() => {
                info!(path = %path.display(), "no settings file found, using defaults");
                Self::default()
            }
            Err(error) => {
                warn!(%error, "failed to load settings, using defaults");
                Self::default()
            }
        }
    }

    /// Write settings to `path`, creating the parent directory if needed.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                operation: "create directory for",
                path: path.to_path_buf(),
                source,
            })?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|source| SettingsError::Serialize { source })?;

        fs::write(path, content).map_err(|source| SettingsError::Io {
            operation: "write",
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), "saved settings");
        Ok(())
    }
}

/// Default settings file location.
///
/// Falls back to `settings.toml` in the working directory when the platform config
/// folder cannot be determined.
pub fn settings_path() -> PathBuf {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME))
}

// =============================================================================
// STORES
// =============================================================================

/// [`SettingsStore`] backed by a TOML file.
#[derive(Debug, Clone)]
pub struct TomlSettingsStore {
    path: PathBuf,
    settings: Settings,
}

impl TomlSettingsStore {
    /// Open the store at `path`, loading whatever it currently holds.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let settings = Settings::load_from(&path);
        Self { path, settings }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace every value with its default. Call [`SettingsStore::save`] to persist.
    pub fn reset(&mut self) {
        self.settings = Settings::default();
    }
}

impl SettingsStore for TomlSettingsStore {
    fn window_height(&self) -> f64 {
        self.settings.window.height
    }

    fn set_window_height(&mut self, value: f64) {
        self.settings.window.height = value;
    }

    fn window_width(&self) -> f64 {
        self.settings.window.width
    }

    fn set_window_width(&mut self, value: f64) {
        self.settings.window.width = value;
    }

    fn window_left(&self) -> f64 {
        self.settings.window.left
    }

    fn set_window_left(&mut self, value: f64) {
        self.settings.window.left = value;
    }

    fn window_top(&self) -> f64 {
        self.settings.window.top
    }

    fn set_window_top(&mut self, value: f64) {
        self.settings.window.top = value;
    }

    fn window_is_normal_state(&self) -> bool {
        self.settings.window.is_normal_state
    }

    fn set_window_is_normal_state(&mut self, value: bool) {
        self.settings.window.is_normal_state = value;
    }

    fn save(&mut self) -> Result<(), SettingsError> {
        self.settings.save_to(&self.path)
    }
}

/// In-memory [`SettingsStore`]; `save` only counts calls.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    pub window: WindowSettings,
    saves: usize,
}

impl MemorySettingsStore {
    pub fn new(window: WindowSettings) -> Self {
        Self { window, saves: 0 }
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl SettingsStore for MemorySettingsStore {
    fn window_height(&self) -> f64 {
        self.window.height
    }

    fn set_window_height(&mut self, value: f64) {
        self.window.height = value;
    }

    fn window_width(&self) -> f64 {
        self.window.width
    }

    fn set_window_width(&mut self, value: f64) {
        self.window.width = value;
    }

    fn window_left(&self) -> f64 {
        self.window.left
    }

    fn set_window_left(&mut self, value: f64) {
        self.window.left = value;
    }

    fn window_top(&self) -> f64 {
        self.window.top
    }

    fn set_window_top(&mut self, value: f64) {
        self.window.top = value;
    }

    fn window_is_normal_state(&self) -> bool {
        self.window.is_normal_state
    }

    fn set_window_is_normal_state(&mut self, value: bool) {
        self.window.is_normal_state = value;
    }

    fn save(&mut self) -> Result<(), SettingsError> {
        self.saves += 1;
        Ok(())
    }
}
