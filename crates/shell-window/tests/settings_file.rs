use std::fs;
use std::rc::Rc;

use shell_navigation::{RegionRegistry, ViewRegistry};
use shell_window::{
    HeadlessChrome, RootShellCoordinator, Settings, SettingsError, SettingsStore,
    TomlSettingsStore, WindowGeometry, WindowSettings, WindowState,
};
use tempfile::TempDir;

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let store = TomlSettingsStore::open(dir.path().join("settings.toml"));

    assert_eq!(store.settings(), &Settings::default());
    assert_eq!(store.window_width(), 800.0);
    assert!(store.window_is_normal_state());
}

#[test]
fn test_corrupt_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "[window\nheight = tall").unwrap();

    assert!(matches!(
        Settings::read_from(&path),
        Err(SettingsError::Parse { .. })
    ));
    let store = TomlSettingsStore::open(&path);
    assert_eq!(store.settings(), &Settings::default());
}

#[test]
fn test_save_creates_parent_directory_and_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("settings.toml");

    let mut store = TomlSettingsStore::open(&path);
    store.set_window_height(480.0);
    store.set_window_width(640.0);
    store.set_window_left(-8.0);
    store.set_window_top(24.5);
    store.set_window_is_normal_state(false);
    store.save().unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("[window]"));

    let reopened = TomlSettingsStore::open(&path);
    assert_eq!(
        reopened.settings().window,
        WindowSettings {
            height: 480.0,
            width: 640.0,
            left: -8.0,
            top: 24.5,
            is_normal_state: false,
        }
    );
}

#[test]
fn test_reset_restores_defaults_on_save() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "[window]\nheight = 300.0\nis_normal_state = false\n").unwrap();

    let mut store = TomlSettingsStore::open(&path);
    assert_eq!(store.window_height(), 300.0);
    store.reset();
    store.save().unwrap();

    assert_eq!(Settings::read_from(&path).unwrap(), Settings::default());
}

#[test]
fn test_session_persists_geometry_across_restarts() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    let regions = Rc::new(RegionRegistry::new(Rc::new(ViewRegistry::new())));

    let mut first = RootShellCoordinator::new(
        Rc::clone(&regions) as Rc<dyn shell_navigation::RegionManager>,
        HeadlessChrome::new(),
        TomlSettingsStore::open(&path),
    );
    first.set_geometry(WindowGeometry::new(720.0, 1280.0, 40.0, 60.0));
    first.shutdown_requested().unwrap();
    assert!(first.chrome().is_shut_down());
    drop(first);

    let second = RootShellCoordinator::new(
        Rc::clone(&regions) as Rc<dyn shell_navigation::RegionManager>,
        HeadlessChrome::new(),
        TomlSettingsStore::open(&path),
    );
    assert_eq!(
        second.geometry(),
        WindowGeometry::new(720.0, 1280.0, 40.0, 60.0)
    );
    assert_eq!(second.chrome().state(), WindowState::Normal);
}

#[test]
fn test_maximized_session_restores_maximized() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    let regions = Rc::new(RegionRegistry::new(Rc::new(ViewRegistry::new())));

    let mut first = RootShellCoordinator::new(
        Rc::clone(&regions) as Rc<dyn shell_navigation::RegionManager>,
        HeadlessChrome::new(),
        TomlSettingsStore::open(&path),
    );
    first.toggle_normalize_maximize_requested();
    first.shutdown_requested().unwrap();
    drop(first);

    let second = RootShellCoordinator::new(
        Rc::clone(&regions) as Rc<dyn shell_navigation::RegionManager>,
        HeadlessChrome::new(),
        TomlSettingsStore::open(&path),
    );
    assert_eq!(second.chrome().history(), &[WindowState::Maximized]);
    assert_eq!(second.geometry(), WindowGeometry::default());
}
