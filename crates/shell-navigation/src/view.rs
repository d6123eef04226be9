//! Screens hosted in regions and the registry that creates them.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::context::NavigationContext;

/// A presentation object that takes part in region navigation.
///
/// The region calls [`on_navigated_from`](Self::on_navigated_from) on the screen being
/// left and [`on_navigated_to`](Self::on_navigated_to) on the screen being shown, both
/// before the service raises its "navigated" notification.
pub trait NavigationAware {
    /// Whether this existing instance should be reused for a navigation to its own
    /// destination instead of creating a fresh one.
    fn is_navigation_target(&self, _context: &NavigationContext) -> bool {
        false
    }

    /// Called after the screen became the active view of the region.
    fn on_navigated_to(&self, context: &NavigationContext);

    /// Called just before another screen replaces this one.
    fn on_navigated_from(&self, context: &NavigationContext);

    /// Whether the instance survives being navigated away from.
    fn keep_alive(&self) -> bool {
        false
    }

    /// Whether visits to this screen are recorded in the journal.
    fn persist_in_history(&self) -> bool {
        true
    }
}

/// Shared handle to a hosted screen.
pub type ViewHandle = Rc<dyn NavigationAware>;

type ViewFactory = Rc<dyn Fn() -> ViewHandle>;

/// Destination name to screen factory map, shared by all regions.
#[derive(Default)]
pub struct ViewRegistry {
    factories: RefCell<BTreeMap<String, ViewFactory>>,
}

impl fmt::Debug for ViewRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewRegistry")
            .field("destinations", &self.destinations())
            .finish()
    }
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory for `destination`, replacing any previous one.
    pub fn register<F>(&self, destination: impl Into<String>, factory: F)
    where
        F: Fn() -> ViewHandle + 'static,
    {
        let destination = destination.into();
        debug!(destination = %destination, "registered view for navigation");
        self.factories
            .borrow_mut()
            .insert(destination, Rc::new(factory));
    }

    pub fn contains(&self, destination: &str) -> bool {
        self.factories.borrow().contains_key(destination)
    }

    /// Create a fresh instance for `destination`.
    pub fn create(&self, destination: &str) -> Option<ViewHandle> {
        let factory = self.factories.borrow().get(destination).cloned()?;
        Some(factory())
    }

    /// Registered destination names, sorted.
    pub fn destinations(&self) -> Vec<String> {
        self.factories.borrow().keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Blank;

    impl NavigationAware for Blank {
        fn on_navigated_to(&self, _context: &NavigationContext) {}
        fn on_navigated_from(&self, _context: &NavigationContext) {}
    }

    #[test]
    fn test_create_calls_factory_each_time() {
        let registry = ViewRegistry::new();
        let created = Rc::new(Cell::new(0));
        let counter = Rc::clone(&created);
        registry.register("InitView", move || {
            counter.set(counter.get() + 1);
            Rc::new(Blank) as ViewHandle
        });

        assert!(registry.contains("InitView"));
        let first = registry.create("InitView");
        let second = registry.create("InitView");
        assert!(first.is_some() && second.is_some());
        assert_eq!(created.get(), 2);
    }

    #[test]
    fn test_unknown_destination() {
        let registry = ViewRegistry::new();
        assert!(!registry.contains("Missing"));
        assert!(registry.create("Missing").is_none());
    }

    #[test]
    fn test_default_extension_points() {
        let blank = Blank;
        assert!(!blank.keep_alive());
        assert!(blank.persist_in_history());
    }
}
