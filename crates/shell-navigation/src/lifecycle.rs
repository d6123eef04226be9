//! Screen navigation lifecycle.
//!
//! [`ScreenLifecycle`] is the state machine shared by every screen's presentation
//! object. It attaches to the navigation service of the region that shows the screen,
//! exposes Navigate / GoBack / GoForward commands whose availability tracks that
//! service's journal, and refreshes their availability once per completed navigation.
//!
//! # States
//!
//! ```text
//! Created --on_shown--> Attached --on_hidden--> Detached
//!                          ^                        |
//!                          +--------on_shown--------+
//! ```
//!
//! A subscription to the attached service's "navigated" event exists exactly while the
//! lifecycle is `Attached`. The service is held weakly; a service dropped while
//! attached makes every guard report `false`.
//!
//! # Extension points
//!
//! Concrete screens customize behaviour through a [`ScreenHooks`] strategy instead of
//! overriding the state machine.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::command::Command;
use crate::context::NavigationContext;
use crate::error::{NavigationError, Result};
use crate::event::SubscriptionId;
use crate::service::NavigationService;
use crate::view::NavigationAware;

/// Per-screen customization of the shared lifecycle.
///
/// Every method has a default, so a screen only implements what it changes.
pub trait ScreenHooks {
    /// Keep the screen instance after it is navigated away from.
    fn keep_alive(&self) -> bool {
        false
    }

    /// Reuse this instance when its destination is navigated to again.
    fn is_navigation_target(&self, _context: &NavigationContext) -> bool {
        false
    }

    /// Record visits to this screen in the journal.
    fn persist_in_history(&self) -> bool {
        true
    }

    /// Runs before the Navigate command requests navigation.
    fn on_before_navigate(&self, _destination: &str) {}

    /// Runs before the GoBack command moves the journal.
    fn on_before_go_back(&self) {}

    /// Runs before the GoForward command moves the journal.
    fn on_before_go_forward(&self) {}
}

/// Hooks with every default left in place.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultHooks;

impl ScreenHooks for DefaultHooks {}

/// Observable lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Never shown.
    Created,
    /// Shown and subscribed to a navigation service.
    Attached,
    /// Hidden after having been shown.
    Detached,
}

struct Attachment {
    service: Weak<dyn NavigationService>,
    subscription: SubscriptionId,
}

struct Inner {
    hooks: Box<dyn ScreenHooks>,
    attachment: RefCell<Option<Attachment>>,
    was_attached: Cell<bool>,
    navigate: Command<str>,
    go_back: Command<()>,
    go_forward: Command<()>,
}

impl Inner {
    fn attached_service(&self) -> Option<Rc<dyn NavigationService>> {
        self.attachment
            .borrow()
            .as_ref()
            .and_then(|attachment| attachment.service.upgrade())
    }

    fn can_navigate(&self) -> bool {
        self.attached_service().is_some()
    }

    fn can_go_back(&self) -> bool {
        self.attached_service()
            .is_some_and(|service| service.journal().can_go_back())
    }

    fn can_go_forward(&self) -> bool {
        self.attached_service()
            .is_some_and(|service| service.journal().can_go_forward())
    }

    fn navigate(&self, destination: &str) -> Result<()> {
        let service = self.attached_service();
        debug_assert!(service.is_some(), "Navigate ran on a detached screen");
        let service = service.ok_or(NavigationError::NotAttached)?;
        self.hooks.on_before_navigate(destination);
        service.request_navigate(destination)
    }

    fn go_back(&self) -> Result<()> {
        let service = self.attached_service();
        debug_assert!(service.is_some(), "GoBack ran on a detached screen");
        let journal = service.ok_or(NavigationError::NotAttached)?.journal();
        self.hooks.on_before_go_back();
        journal.go_back()
    }

    fn go_forward(&self) -> Result<()> {
        let service = self.attached_service();
        debug_assert!(service.is_some(), "GoForward ran on a detached screen");
        let journal = service.ok_or(NavigationError::NotAttached)?.journal();
        self.hooks.on_before_go_forward();
        journal.go_forward()
    }

    fn on_navigated(&self, context: &NavigationContext) {
        debug!(
            destination = context.destination(),
            mode = context.mode().label(),
            "refreshing screen commands"
        );
        self.navigate.raise_can_execute_changed();
        self.go_back.raise_can_execute_changed();
        self.go_forward.raise_can_execute_changed();
    }
}

/// Navigation lifecycle of one screen.
pub struct ScreenLifecycle {
    inner: Rc<Inner>,
}

impl Default for ScreenLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ScreenLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScreenLifecycle")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl ScreenLifecycle {
    /// Lifecycle with default hooks.
    pub fn new() -> Self {
        Self::with_hooks(DefaultHooks)
    }

    /// Lifecycle customized by `hooks`.
    pub fn with_hooks<H>(hooks: H) -> Self
    where
        H: ScreenHooks + 'static,
    {
        let inner = Rc::new_cyclic(|weak: &Weak<Inner>| {
            let (action, guard) = (weak.clone(), weak.clone());
            let navigate = Command::new(
                "Navigate",
                move |destination: &str| {
                    action
                        .upgrade()
                        .ok_or(NavigationError::NotAttached)?
                        .navigate(destination)
                },
                move |_: &str| guard.upgrade().is_some_and(|inner| inner.can_navigate()),
            );

            let (action, guard) = (weak.clone(), weak.clone());
            let go_back = Command::new(
                "GoBack",
                move |_: &()| action.upgrade().ok_or(NavigationError::NotAttached)?.go_back(),
                move |_: &()| guard.upgrade().is_some_and(|inner| inner.can_go_back()),
            );

            let (action, guard) = (weak.clone(), weak.clone());
            let go_forward = Command::new(
                "GoForward",
                move |_: &()| {
                    action
                        .upgrade()
                        .ok_or(NavigationError::NotAttached)?
                        .go_forward()
                },
                move |_: &()| guard.upgrade().is_some_and(|inner| inner.can_go_forward()),
            );

            Inner {
                hooks: Box::new(hooks),
                attachment: RefCell::new(None),
                was_attached: Cell::new(false),
                navigate,
                go_back,
                go_forward,
            }
        });
        Self { inner }
    }

    /// Attach to the navigation service that just showed this screen.
    ///
    /// Any previous attachment is released first, so calling this twice without an
    /// intervening [`on_hidden`](Self::on_hidden) never leaves a stale subscription.
    pub fn on_shown(&self, context: &NavigationContext) {
        self.detach();

        let Some(service) = context.navigation_service() else {
            debug!(
                destination = context.destination(),
                "shown by a dropped navigation service; staying detached"
            );
            return;
        };

        let weak = Rc::downgrade(&self.inner);
        let subscription = service.navigated().subscribe(move |context| {
            if let Some(inner) = weak.upgrade() {
                inner.on_navigated(context);
            }
        });

        *self.inner.attachment.borrow_mut() = Some(Attachment {
            service: Rc::downgrade(&service),
            subscription,
        });
        self.inner.was_attached.set(true);
        debug!(
            region = service.region_name(),
            destination = context.destination(),
            "screen attached"
        );
    }

    /// Detach from the navigation service that is hiding this screen.
    pub fn on_hidden(&self, context: &NavigationContext) {
        if self.detach() {
            debug!(destination = context.destination(), "screen detached");
        }
    }

    fn detach(&self) -> bool {
        let attachment = self.inner.attachment.borrow_mut().take();
        let Some(attachment) = attachment else {
            return false;
        };
        if let Some(service) = attachment.service.upgrade() {
            service.navigated().unsubscribe(attachment.subscription);
        }
        true
    }

    /// Where the screen is in its show/hide cycle.
    pub fn state(&self) -> LifecycleState {
        if self.inner.attachment.borrow().is_some() {
            LifecycleState::Attached
        } else if self.inner.was_attached.get() {
            LifecycleState::Detached
        } else {
            LifecycleState::Created
        }
    }

    /// The attached navigation service, if any and still alive.
    pub fn attached_service(&self) -> Option<Rc<dyn NavigationService>> {
        self.inner.attached_service()
    }

    /// Navigate the hosting region to a destination name.
    pub fn navigate_command(&self) -> &Command<str> {
        &self.inner.navigate
    }

    /// Go back in the hosting region's journal.
    pub fn go_back_command(&self) -> &Command<()> {
        &self.inner.go_back
    }

    /// Go forward in the hosting region's journal.
    pub fn go_forward_command(&self) -> &Command<()> {
        &self.inner.go_forward
    }

    /// Extension points this screen was built with.
    pub fn hooks(&self) -> &dyn ScreenHooks {
        self.inner.hooks.as_ref()
    }
}

impl Drop for ScreenLifecycle {
    fn drop(&mut self) {
        self.detach();
    }
}

impl NavigationAware for ScreenLifecycle {
    fn is_navigation_target(&self, context: &NavigationContext) -> bool {
        self.inner.hooks.is_navigation_target(context)
    }

    fn on_navigated_to(&self, context: &NavigationContext) {
        self.on_shown(context);
    }

    fn on_navigated_from(&self, context: &NavigationContext) {
        self.on_hidden(context);
    }

    fn keep_alive(&self) -> bool {
        self.inner.hooks.keep_alive()
    }

    fn persist_in_history(&self) -> bool {
        self.inner.hooks.persist_in_history()
    }
}
