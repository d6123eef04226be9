//! Region navigation service.
//!
//! [`NavigationService`] is the contract consumed by screens and the shell
//! coordinator. [`RegionNavigationService`] is the in-memory implementation that hosts
//! screens created from a [`ViewRegistry`] and honours their extension points.
//!
//! A navigation runs in this order:
//!
//! 1. Resolve the target: a hosted instance of the same destination that reports
//!    `is_navigation_target`, otherwise a fresh instance from the registry.
//! 2. `on_navigated_from` on the screen being left; it stays hosted only if it is
//!    `keep_alive` (or is itself the reused target).
//! 3. Update the journal (record, or commit the back/forward move).
//! 4. `on_navigated_to` on the target.
//! 5. Raise `navigated`.
//!
//! Resolution happens before any screen is notified, so a failed request leaves the
//! region untouched.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{info, warn};

use crate::context::{NavigationContext, NavigationMode};
use crate::error::{NavigationError, Result};
use crate::event::Event;
use crate::journal::{Journal, JournalEntry, NavigationJournal};
use crate::view::{ViewHandle, ViewRegistry};

/// Performs navigation within one region.
pub trait NavigationService {
    /// Name of the region this service navigates.
    fn region_name(&self) -> &str;

    /// Navigate the region to `destination`.
    fn request_navigate(&self, destination: &str) -> Result<()>;

    /// History of this region.
    fn journal(&self) -> Rc<dyn NavigationJournal>;

    /// Raised after every completed navigation.
    fn navigated(&self) -> &Event<NavigationContext>;
}

struct HostedView {
    destination: String,
    view: ViewHandle,
}

enum Target {
    Active,
    Hosted(usize),
    Create,
}

/// In-memory navigation service for one region.
pub struct RegionNavigationService {
    region_name: String,
    views: Rc<ViewRegistry>,
    journal: Rc<Journal>,
    navigated: Event<NavigationContext>,
    active: RefCell<Option<HostedView>>,
    /// Inactive instances kept alive for reuse.
    hosted: RefCell<Vec<HostedView>>,
    self_ref: Weak<RegionNavigationService>,
}

impl fmt::Debug for RegionNavigationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegionNavigationService")
            .field("region_name", &self.region_name)
            .field("active", &self.active_destination())
            .field("journal", &self.journal)
            .finish_non_exhaustive()
    }
}

impl RegionNavigationService {
    /// Create a service for `region_name` resolving screens from `views`.
    pub fn new(region_name: impl Into<String>, views: Rc<ViewRegistry>) -> Rc<Self> {
        let region_name = region_name.into();
        Rc::new_cyclic(|self_ref: &Weak<Self>| Self {
            region_name,
            views,
            journal: Rc::new(Journal::new(self_ref.clone())),
            navigated: Event::new(),
            active: RefCell::new(None),
            hosted: RefCell::new(Vec::new()),
            self_ref: self_ref.clone(),
        })
    }

    /// Concrete journal, for snapshots.
    pub fn region_journal(&self) -> &Rc<Journal> {
        &self.journal
    }

    /// Destination of the active screen.
    pub fn active_destination(&self) -> Option<String> {
        self.active
            .borrow()
            .as_ref()
            .map(|hosted| hosted.destination.clone())
    }

    /// Number of screen instances currently held, active one included.
    pub fn hosted_count(&self) -> usize {
        let active = usize::from(self.active.borrow().is_some());
        active + self.hosted.borrow().len()
    }

    fn context(&self, destination: &str, mode: NavigationMode) -> NavigationContext {
        let service: Weak<dyn NavigationService> = self.self_ref.clone();
        NavigationContext::from_weak(service, destination, mode)
    }

    fn resolve(&self, context: &NavigationContext) -> Result<Target> {
        let destination = context.destination();
        if let Some(active) = self.active.borrow().as_ref()
            && active.destination == destination
            && active.view.is_navigation_target(context)
        {
            return Ok(Target::Active);
        }
        let reusable = self.hosted.borrow().iter().position(|hosted| {
            hosted.destination == destination && hosted.view.is_navigation_target(context)
        });
        if let Some(index) = reusable {
            return Ok(Target::Hosted(index));
        }
        if self.views.contains(destination) {
            return Ok(Target::Create);
        }
        warn!(
            region = %self.region_name,
            destination,
            "navigation target is not registered"
        );
        Err(NavigationError::ViewNotRegistered {
            destination: destination.to_string(),
        })
    }

    /// Navigate with an explicit mode. Journal replays use `Back` / `Forward`.
    pub(crate) fn navigate_with_mode(
        &self,
        destination: &str,
        mode: NavigationMode,
    ) -> Result<()> {
        let context = self.context(destination, mode);
        let target = self.resolve(&context)?;

        let previous = self.active.borrow_mut().take();
        let reused = !matches!(target, Target::Create);
        if let Some(previous) = previous.as_ref() {
            previous.view.on_navigated_from(&context);
        }

        let next = match target {
            Target::Active => previous,
            Target::Hosted(index) => {
                if let Some(previous) = previous {
                    self.retire(previous);
                }
                Some(self.hosted.borrow_mut().remove(index))
            }
            Target::Create => {
                if let Some(previous) = previous {
                    self.retire(previous);
                }
                self.views
                    .create(destination)
                    .map(|view| HostedView {
                        destination: destination.to_string(),
                        view,
                    })
            }
        };
        let Some(next) = next else {
            return Err(NavigationError::ViewNotRegistered {
                destination: destination.to_string(),
            });
        };

        match mode {
            NavigationMode::New => self.journal.record(
                JournalEntry::new(destination),
                next.view.persist_in_history(),
            ),
            NavigationMode::Back => self.journal.commit_back(),
            NavigationMode::Forward => self.journal.commit_forward(),
        }

        let view = Rc::clone(&next.view);
        *self.active.borrow_mut() = Some(next);
        view.on_navigated_to(&context);

        info!(
            region = %self.region_name,
            destination,
            mode = mode.label(),
            reused,
            "navigation completed"
        );
        self.navigated.raise(&context);
        Ok(())
    }

    /// Keep a screen that is being left if it asks to stay alive.
    ///
    /// Index-based reuse in `navigate_with_mode` relies on retired screens being
    /// appended, never inserted.
    fn retire(&self, hosted: HostedView) {
        if hosted.view.keep_alive() {
            self.hosted.borrow_mut().push(hosted);
        }
    }
}

impl NavigationService for RegionNavigationService {
    fn region_name(&self) -> &str {
        &self.region_name
    }

    fn request_navigate(&self, destination: &str) -> Result<()> {
        self.navigate_with_mode(destination, NavigationMode::New)
    }

    fn journal(&self) -> Rc<dyn NavigationJournal> {
        Rc::clone(&self.journal) as Rc<dyn NavigationJournal>
    }

    fn navigated(&self) -> &Event<NavigationContext> {
        &self.navigated
    }
}
