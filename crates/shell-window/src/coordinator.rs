//! Root shell coordinator.
//!
//! Owns the main window's concerns: navigation of the root region, the custom title
//! bar operations, and the window placement persisted between sessions.
//!
//! Geometry is read from the settings store once, at construction, and only written
//! back by [`RootShellCoordinator::shutdown_requested`].

use std::fmt;
use std::rc::{Rc, Weak};

use shell_navigation::{
    Command, JournalSnapshot, NavigationError, NavigationJournal, NavigationService,
    ROOT_REGION, RegionManager, SubscriptionId,
};
use tracing::{debug, info, warn};

use crate::chrome::WindowChrome;
use crate::error::SettingsError;
use crate::geometry::WindowGeometry;
use crate::settings::SettingsStore;

fn root_journal(regions: &dyn RegionManager) -> Option<Rc<dyn NavigationJournal>> {
    debug_assert!(
        regions.contains_region(ROOT_REGION),
        "root region '{ROOT_REGION}' is not registered"
    );
    regions
        .navigation_service(ROOT_REGION)
        .map(|service| service.journal())
}

fn root_not_found() -> NavigationError {
    NavigationError::RegionNotFound {
        region: ROOT_REGION.to_string(),
    }
}

struct RootCommands {
    navigate: Command<str>,
    go_back: Command<()>,
    go_forward: Command<()>,
}

impl RootCommands {
    fn new(regions: &Rc<dyn RegionManager>) -> Self {
        let navigate = {
            let regions = Rc::clone(regions);
            Command::always("NavigateRoot", move |destination: &str| {
                regions.request_navigate(ROOT_REGION, destination)
            })
        };

        let (action, guard) = (Rc::clone(regions), Rc::clone(regions));
        let go_back = Command::new(
            "GoBackRoot",
            move |_: &()| {
                root_journal(action.as_ref())
                    .ok_or_else(root_not_found)?
                    .go_back()
            },
            move |_: &()| {
                root_journal(guard.as_ref()).is_some_and(|journal| journal.can_go_back())
            },
        );

        let (action, guard) = (Rc::clone(regions), Rc::clone(regions));
        let go_forward = Command::new(
            "GoForwardRoot",
            move |_: &()| {
                root_journal(action.as_ref())
                    .ok_or_else(root_not_found)?
                    .go_forward()
            },
            move |_: &()| {
                root_journal(guard.as_ref()).is_some_and(|journal| journal.can_go_forward())
            },
        );

        Self {
            navigate,
            go_back,
            go_forward,
        }
    }

    fn refresh_history(&self) {
        self.go_back.raise_can_execute_changed();
        self.go_forward.raise_can_execute_changed();
    }
}

struct RootSubscription {
    service: Weak<dyn NavigationService>,
    id: SubscriptionId,
}

/// Coordinates the main window: root region navigation, title bar operations and
/// window settings.
pub struct RootShellCoordinator<C: WindowChrome, S: SettingsStore> {
    regions: Rc<dyn RegionManager>,
    commands: Rc<RootCommands>,
    chrome: C,
    settings: S,
    geometry: WindowGeometry,
    root_subscription: Option<RootSubscription>,
}

impl<C: WindowChrome, S: SettingsStore> fmt::Debug for RootShellCoordinator<C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RootShellCoordinator")
            .field("geometry", &self.geometry)
            .field("is_normal_state", &self.chrome.is_normal_state())
            .field("wired", &self.root_subscription.is_some())
            .finish_non_exhaustive()
    }
}

impl<C: WindowChrome, S: SettingsStore> RootShellCoordinator<C, S> {
    /// Create the coordinator and restore the persisted window state.
    ///
    /// The chrome is normalized or maximized, according to the persisted flag, before
    /// any other chrome call.
    pub fn new(regions: Rc<dyn RegionManager>, mut chrome: C, settings: S) -> Self {
        let geometry = WindowGeometry::load(&settings);
        if settings.window_is_normal_state() {
            chrome.normalize();
        } else {
            chrome.maximize();
        }
        debug!(
            height = geometry.height,
            width = geometry.width,
            left = geometry.left,
            top = geometry.top,
            is_normal_state = settings.window_is_normal_state(),
            "restored window placement"
        );

        let commands = Rc::new(RootCommands::new(&regions));
        Self {
            regions,
            commands,
            chrome,
            settings,
            geometry,
            root_subscription: None,
        }
    }

    /// Refresh GoBackRoot / GoForwardRoot after every navigation of the root region.
    ///
    /// Replaces any earlier wiring. The subscription is released when the coordinator
    /// is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::RegionNotFound`] if the root region does not exist.
    pub fn wire_root_region(&mut self) -> Result<(), NavigationError> {
        let service = self
            .regions
            .navigation_service(ROOT_REGION)
            .ok_or_else(root_not_found)?;
        self.unwire_root_region();

        let commands = Rc::downgrade(&self.commands);
        let id = service.navigated().subscribe(move |_| {
            if let Some(commands) = commands.upgrade() {
                commands.refresh_history();
            }
        });
        self.root_subscription = Some(RootSubscription {
            service: Rc::downgrade(&service),
            id,
        });
        debug!(region = ROOT_REGION, "root region wired");
        Ok(())
    }

    fn unwire_root_region(&mut self) {
        if let Some(subscription) = self.root_subscription.take()
            && let Some(service) = subscription.service.upgrade()
        {
            service.navigated().unsubscribe(subscription.id);
        }
    }

    /// Navigate the root region to a destination name. Always available.
    pub fn navigate_root_command(&self) -> &Command<str> {
        &self.commands.navigate
    }

    /// Go back in the root region's journal.
    pub fn go_back_root_command(&self) -> &Command<()> {
        &self.commands.go_back
    }

    /// Go forward in the root region's journal.
    pub fn go_forward_root_command(&self) -> &Command<()> {
        &self.commands.go_forward
    }

    /// The root region's content changed; re-evaluate GoBackRoot and GoForwardRoot.
    pub fn on_root_content_changed(&self) {
        self.commands.refresh_history();
    }

    /// Minimize the window.
    pub fn minimize_requested(&mut self) {
        debug!("minimize requested");
        self.chrome.minimize();
    }

    /// Maximize a normal window, restore any other.
    pub fn toggle_normalize_maximize_requested(&mut self) {
        if self.chrome.is_normal_state() {
            debug!("maximize requested");
            self.chrome.maximize();
        } else {
            debug!("restore requested");
            self.chrome.normalize();
        }
    }

    /// Persist the window placement and shut the window down.
    ///
    /// A normal window writes its geometry and `is_normal_state = true`; any other
    /// window writes only `is_normal_state = false`. The store is then saved and the
    /// chrome shut down, in that order.
    ///
    /// # Errors
    ///
    /// Returns the save failure, after the chrome has been shut down.
    pub fn shutdown_requested(&mut self) -> Result<(), SettingsError> {
        if self.chrome.is_normal_state() {
            self.geometry.store(&mut self.settings);
            self.settings.set_window_is_normal_state(true);
        } else {
            self.settings.set_window_is_normal_state(false);
        }

        let saved = self.settings.save();
        if let Err(error) = &saved {
            warn!(%error, "failed to save window settings");
        }

        info!("shutting down");
        self.chrome.shutdown();
        saved
    }

    /// Normal-state placement written back at shutdown.
    pub fn geometry(&self) -> WindowGeometry {
        self.geometry
    }

    /// Record the window's current normal-state placement.
    pub fn set_geometry(&mut self, geometry: WindowGeometry) {
        self.geometry = geometry;
    }

    /// History of the root region, if it exists.
    pub fn root_journal_snapshot(&self) -> Option<JournalSnapshot> {
        self.regions
            .navigation_service(ROOT_REGION)
            .map(|service| service.journal().snapshot())
    }

    /// The window being coordinated.
    pub fn chrome(&self) -> &C {
        &self.chrome
    }

    /// The backing settings store.
    pub fn settings(&self) -> &S {
        &self.settings
    }
}

impl<C: WindowChrome, S: SettingsStore> Drop for RootShellCoordinator<C, S> {
    fn drop(&mut self) {
        self.unwire_root_region();
    }
}
