//! Main window concerns for the Region Shell desktop core.
//!
//! - `chrome` - the [`WindowChrome`] contract behind the custom title bar, and a
//!   headless implementation
//! - `settings` - the [`SettingsStore`] contract, the TOML-file store and an in-memory
//!   store
//! - `coordinator` - [`RootShellCoordinator`], which ties the root region, the chrome
//!   and the settings together

mod chrome;
mod coordinator;
mod error;
mod geometry;
mod settings;

pub use chrome::{HeadlessChrome, WindowChrome, WindowState};
pub use coordinator::RootShellCoordinator;
pub use error::SettingsError;
pub use geometry::WindowGeometry;
pub use settings::{
    MemorySettingsStore, Settings, SettingsStore, TomlSettingsStore, WindowSettings,
    settings_path,
};
