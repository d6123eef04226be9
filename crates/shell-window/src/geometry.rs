//! Normal-state window placement.

use crate::settings::{SettingsStore, WindowSettings};

/// Size and position of the window while it is in the normal state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowGeometry {
    pub height: f64,
    pub width: f64,
    pub left: f64,
    pub top: f64,
}

impl Default for WindowGeometry {
    fn default() -> Self {
        let defaults = WindowSettings::default();
        Self {
            height: defaults.height,
            width: defaults.width,
            left: defaults.left,
            top: defaults.top,
        }
    }
}

impl WindowGeometry {
    pub fn new(height: f64, width: f64, left: f64, top: f64) -> Self {
        Self {
            height,
            width,
            left,
            top,
        }
    }

    /// Read the persisted geometry.
    pub fn load<S: SettingsStore + ?Sized>(settings: &S) -> Self {
        Self {
            height: settings.window_height(),
            width: settings.window_width(),
            left: settings.window_left(),
            top: settings.window_top(),
        }
    }

    /// Write height, width, left and top, in that order.
    pub fn store<S: SettingsStore + ?Sized>(&self, settings: &mut S) {
        settings.set_window_height(self.height);
        settings.set_window_width(self.width);
        settings.set_window_left(self.left);
        settings.set_window_top(self.top);
    }
}
