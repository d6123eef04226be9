//! Regions and the region manager.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use tracing::debug;

use crate::error::{NavigationError, Result};
use crate::service::{NavigationService, RegionNavigationService};
use crate::view::ViewRegistry;

/// Locates regions by name and navigates them.
pub trait RegionManager {
    /// Whether a region with this name exists.
    fn contains_region(&self, name: &str) -> bool;

    /// Navigation service of the named region.
    fn navigation_service(&self, region: &str) -> Option<Rc<dyn NavigationService>>;

    /// Navigate the named region to `destination`.
    fn request_navigate(&self, region: &str, destination: &str) -> Result<()> {
        let service = self
            .navigation_service(region)
            .ok_or_else(|| NavigationError::RegionNotFound {
                region: region.to_string(),
            })?;
        service.request_navigate(destination)
    }
}

/// A named placeholder area and its navigation service.
#[derive(Debug)]
pub struct Region {
    service: Rc<RegionNavigationService>,
}

impl Region {
    pub fn navigation_service(&self) -> Rc<dyn NavigationService> {
        Rc::clone(&self.service) as Rc<dyn NavigationService>
    }

    /// Concrete service, for snapshots and inspection.
    pub fn region_service(&self) -> &Rc<RegionNavigationService> {
        &self.service
    }

    /// Destination of the screen currently shown.
    pub fn active_destination(&self) -> Option<String> {
        self.service.active_destination()
    }
}

/// In-memory [`RegionManager`].
#[derive(Debug)]
pub struct RegionRegistry {
    views: Rc<ViewRegistry>,
    regions: RefCell<BTreeMap<String, Rc<Region>>>,
}

impl RegionRegistry {
    /// Create a manager whose regions resolve screens from `views`.
    pub fn new(views: Rc<ViewRegistry>) -> Self {
        Self {
            views,
            regions: RefCell::new(BTreeMap::new()),
        }
    }

    /// Add a region.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::DuplicateRegion`] if the name is taken.
    pub fn add_region(&self, name: impl Into<String>) -> Result<Rc<Region>> {
        let name = name.into();
        let mut regions = self.regions.borrow_mut();
        if regions.contains_key(&name) {
            return Err(NavigationError::DuplicateRegion { region: name });
        }
        let region = Rc::new(Region {
            service: RegionNavigationService::new(name.clone(), Rc::clone(&self.views)),
        });
        debug!(region = %name, "region added");
        regions.insert(name, Rc::clone(&region));
        Ok(region)
    }

    pub fn region(&self, name: &str) -> Option<Rc<Region>> {
        self.regions.borrow().get(name).cloned()
    }
}

impl RegionManager for RegionRegistry {
    fn contains_region(&self, name: &str) -> bool {
        self.regions.borrow().contains_key(name)
    }

    fn navigation_service(&self, region: &str) -> Option<Rc<dyn NavigationService>> {
        self.regions
            .borrow()
            .get(region)
            .map(|region| region.navigation_service())
    }
}
