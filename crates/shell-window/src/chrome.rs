//! Window chrome: the minimize / maximize / restore / close operations behind the
//! custom title bar.

use tracing::{debug, info};

/// Operations on the one live application window.
///
/// The coordinator receives its chrome explicitly; nothing reaches for a global
/// window.
pub trait WindowChrome {
    /// Minimize (iconify) the window.
    fn minimize(&mut self);

    /// Maximize the window.
    fn maximize(&mut self);

    /// Restore the window to the normal state.
    fn normalize(&mut self);

    /// Close the window and end the application.
    fn shutdown(&mut self);

    /// Whether the window is currently in the normal state.
    fn is_normal_state(&self) -> bool;
}

/// Display state of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowState {
    /// Normal window state (persisted size and position).
    #[default]
    Normal,
    /// Window is minimized (iconified).
    Minimized,
    /// Window is maximized (fills available space).
    Maximized,
}

impl WindowState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Minimized => "minimized",
            Self::Maximized => "maximized",
        }
    }
}

/// Chrome without a window, for command-line sessions and tests.
///
/// Tracks the state a real window would be in and records every transition.
#[derive(Debug, Clone, Default)]
pub struct HeadlessChrome {
    state: WindowState,
    history: Vec<WindowState>,
    shut_down: bool,
}

impl HeadlessChrome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    /// States entered so far, oldest first.
    pub fn history(&self) -> &[WindowState] {
        &self.history
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    fn set_state(&mut self, state: WindowState) {
        debug!(from = self.state.label(), to = state.label(), "window state changed");
        self.state = state;
        self.history.push(state);
    }
}

impl WindowChrome for HeadlessChrome {
    fn minimize(&mut self) {
        self.set_state(WindowState::Minimized);
    }

    fn maximize(&mut self) {
        self.set_state(WindowState::Maximized);
    }

    fn normalize(&mut self) {
        self.set_state(WindowState::Normal);
    }

    fn shutdown(&mut self) {
        info!(state = self.state.label(), "window shut down");
        self.shut_down = true;
    }

    fn is_normal_state(&self) -> bool {
        self.state == WindowState::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_chrome_tracks_transitions() {
        let mut chrome = HeadlessChrome::new();
        assert!(chrome.is_normal_state());

        chrome.maximize();
        assert!(!chrome.is_normal_state());
        chrome.minimize();
        assert!(!chrome.is_normal_state());
        chrome.normalize();
        assert!(chrome.is_normal_state());

        assert_eq!(
            chrome.history(),
            &[
                WindowState::Maximized,
                WindowState::Minimized,
                WindowState::Normal
            ]
        );
        assert!(!chrome.is_shut_down());
        chrome.shutdown();
        assert!(chrome.is_shut_down());
    }
}
