//! Navigation context passed to screens and "navigated" subscribers.

use std::fmt;
use std::rc::{Rc, Weak};

use crate::service::NavigationService;

/// How a navigation was initiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationMode {
    /// A fresh request; recorded in the journal.
    New,
    /// Replay of the previous journal entry.
    Back,
    /// Replay of the next journal entry.
    Forward,
}

impl NavigationMode {
    /// Lowercase label for logs and tables.
    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Back => "back",
            Self::Forward => "forward",
        }
    }
}

/// Information about one navigation.
///
/// Holds only a weak handle to the navigation service: a context kept by a subscriber
/// never extends the service's lifetime.
#[derive(Clone)]
pub struct NavigationContext {
    service: Weak<dyn NavigationService>,
    destination: String,
    mode: NavigationMode,
}

impl NavigationContext {
    /// Create a context for a navigation performed by `service`.
    pub fn new(
        service: &Rc<dyn NavigationService>,
        destination: impl Into<String>,
        mode: NavigationMode,
    ) -> Self {
        Self::from_weak(Rc::downgrade(service), destination, mode)
    }

    /// Create a context from an existing weak service handle.
    pub fn from_weak(
        service: Weak<dyn NavigationService>,
        destination: impl Into<String>,
        mode: NavigationMode,
    ) -> Self {
        Self {
            service,
            destination: destination.into(),
            mode,
        }
    }

    /// The navigation service that performed the navigation, if it is still alive.
    pub fn navigation_service(&self) -> Option<Rc<dyn NavigationService>> {
        self.service.upgrade()
    }

    /// Destination name that was navigated to.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn mode(&self) -> NavigationMode {
        self.mode
    }
}

impl fmt::Debug for NavigationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let region = self
            .service
            .upgrade()
            .map(|service| service.region_name().to_string());
        f.debug_struct("NavigationContext")
            .field("region", &region)
            .field("destination", &self.destination)
            .field("mode", &self.mode)
            .finish()
    }
}
