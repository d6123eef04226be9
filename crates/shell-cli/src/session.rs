//! Scripted headless navigation sessions.
//!
//! A session builds the root region with one screen per distinct destination, drives
//! it through the coordinator's commands exactly as the title bar and navigation
//! buttons would, and ends with a shutdown request.

use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result};
use shell_navigation::{
    INIT_VIEW, JournalSnapshot, ROOT_REGION, RegionManager, RegionRegistry, ScreenLifecycle,
    ViewHandle, ViewRegistry,
};
use shell_window::{
    HeadlessChrome, MemorySettingsStore, RootShellCoordinator, Settings, SettingsStore,
    TomlSettingsStore, WindowGeometry, WindowSettings, WindowState,
};
use tracing::{debug, info, info_span};

/// What a session should do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionPlan {
    /// Destinations navigated to, in order. Empty means the initial view.
    pub destinations: Vec<String>,
    /// GoBack steps requested after navigating.
    pub back: usize,
    /// GoForward steps requested after going back.
    pub forward: usize,
    /// Maximize the window before navigating.
    pub maximize: bool,
}

impl SessionPlan {
    /// Destinations to visit, falling back to the initial view.
    pub fn route(&self) -> Vec<String> {
        if self.destinations.is_empty() {
            vec![INIT_VIEW.to_string()]
        } else {
            self.destinations.clone()
        }
    }
}

/// Outcome of a session.
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub route: Vec<String>,
    /// GoBack steps actually taken.
    pub back_taken: usize,
    /// GoForward steps actually taken.
    pub forward_taken: usize,
    /// Root region history at shutdown.
    pub journal: JournalSnapshot,
    /// Window state at shutdown.
    pub window_state: WindowState,
    /// Window placement in effect during the session.
    pub geometry: WindowGeometry,
    /// Settings as written by the shutdown request.
    pub settings: WindowSettings,
}

fn register_screens(route: &[String]) -> Rc<ViewRegistry> {
    let views = Rc::new(ViewRegistry::new());
    for destination in route {
        if !views.contains(destination) {
            views.register(destination.as_str(), || {
                Rc::new(ScreenLifecycle::new()) as ViewHandle
            });
        }
    }
    views
}

fn window_settings<S: SettingsStore>(settings: &S) -> WindowSettings {
    WindowSettings {
        height: settings.window_height(),
        width: settings.window_width(),
        left: settings.window_left(),
        top: settings.window_top(),
        is_normal_state: settings.window_is_normal_state(),
    }
}

/// Run `plan` against a headless window whose placement is persisted in `settings`.
///
/// GoBack and GoForward stop early once the command becomes unavailable.
///
/// # Errors
///
/// Fails if a destination cannot be navigated to or the settings cannot be saved.
pub fn run_session<S: SettingsStore>(plan: &SessionPlan, settings: S) -> Result<SessionReport> {
    let route = plan.route();
    let span = info_span!("session", steps = route.len());
    let _guard = span.enter();

    let regions = Rc::new(RegionRegistry::new(register_screens(&route)));
    regions
        .add_region(ROOT_REGION)
        .context("create root region")?;

    let mut coordinator = RootShellCoordinator::new(
        Rc::clone(&regions) as Rc<dyn RegionManager>,
        HeadlessChrome::new(),
        settings,
    );
    coordinator
        .wire_root_region()
        .context("wire root region")?;

    if plan.maximize && coordinator.chrome().state() != WindowState::Maximized {
        coordinator.toggle_normalize_maximize_requested();
    }

    for destination in &route {
        coordinator
            .navigate_root_command()
            .execute(destination)
            .with_context(|| format!("navigate to {destination}"))?;
    }

    let back_taken = repeat_while_available(plan.back, || {
        let command = coordinator.go_back_root_command();
        command.can_execute(&()).then(|| command.execute(&()))
    })
    .context("go back")?;

    let forward_taken = repeat_while_available(plan.forward, || {
        let command = coordinator.go_forward_root_command();
        command.can_execute(&()).then(|| command.execute(&()))
    })
    .context("go forward")?;

    let journal = coordinator.root_journal_snapshot().unwrap_or_default();
    let window_state = coordinator.chrome().state();
    let geometry = coordinator.geometry();

    coordinator
        .shutdown_requested()
        .context("save window settings")?;

    info!(
        back_taken,
        forward_taken,
        state = window_state.label(),
        "session finished"
    );
    Ok(SessionReport {
        route,
        back_taken,
        forward_taken,
        journal,
        window_state,
        geometry,
        settings: window_settings(coordinator.settings()),
    })
}

/// Run `plan` against the settings file at `path`.
///
/// With `persist` off the session starts from the stored placement but writes only to
/// an in-memory copy, leaving the file untouched.
///
/// # Errors
///
/// Same as [`run_session`].
pub fn run_session_at(plan: &SessionPlan, path: &Path, persist: bool) -> Result<SessionReport> {
    let stored = TomlSettingsStore::open(path);
    if persist {
        run_session(plan, stored)
    } else {
        debug!(path = %path.display(), "session settings kept in memory");
        run_session(plan, MemorySettingsStore::new(stored.settings().window))
    }
}

/// Overwrite the settings file at `path` with defaults.
///
/// # Errors
///
/// Fails if the file cannot be written.
pub fn reset_settings(path: &Path) -> Result<Settings> {
    let mut store = TomlSettingsStore::open(path);
    store.reset();
    store
        .save()
        .with_context(|| format!("reset settings at {}", path.display()))?;
    info!(path = %path.display(), "settings reset to defaults");
    Ok(store.settings().clone())
}

/// Run `step` up to `times` times, stopping when it reports the command unavailable.
fn repeat_while_available<F>(times: usize, mut step: F) -> shell_navigation::Result<usize>
where
    F: FnMut() -> Option<shell_navigation::Result<()>>,
{
    for taken in 0..times {
        match step() {
            Some(result) => result?,
            None => {
                info!(requested = times, taken, "command unavailable, stopping early");
                return Ok(taken);
            }
        }
    }
    Ok(times)
}
