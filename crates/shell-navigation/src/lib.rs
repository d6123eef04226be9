//! Region navigation for the Region Shell desktop core.
//!
//! This crate provides the navigation half of the shell:
//!
//! - **Regions** (`region`) - named placeholder areas, each owning a navigation
//!   service, looked up through a [`RegionManager`]
//! - **Navigation services** (`service`) - swap the screen shown in a region and raise
//!   a "navigated" notification after every completed navigation
//! - **Journals** (`journal`) - per-region back/forward history
//! - **Screen lifecycle** (`lifecycle`) - the reusable state machine that binds a
//!   screen's Navigate / GoBack / GoForward commands to the region showing it
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//!
//! use shell_navigation::{
//!     INIT_VIEW, ROOT_REGION, RegionManager, RegionRegistry, ScreenLifecycle, ViewHandle,
//!     ViewRegistry,
//! };
//!
//! let views = Rc::new(ViewRegistry::new());
//! views.register(INIT_VIEW, || Rc::new(ScreenLifecycle::new()) as ViewHandle);
//! views.register("Settings", || Rc::new(ScreenLifecycle::new()) as ViewHandle);
//!
//! let regions = RegionRegistry::new(Rc::clone(&views));
//! regions.add_region(ROOT_REGION)?;
//! regions.request_navigate(ROOT_REGION, INIT_VIEW)?;
//! regions.request_navigate(ROOT_REGION, "Settings")?;
//!
//! let service = regions.navigation_service(ROOT_REGION).expect("root region");
//! assert!(service.journal().can_go_back());
//! # Ok::<(), shell_navigation::NavigationError>(())
//! ```

mod command;
mod constants;
mod context;
mod error;
mod event;
mod journal;
mod lifecycle;
mod region;
mod service;
mod view;

pub use command::Command;
pub use constants::{INIT_VIEW, ROOT_REGION};
pub use context::{NavigationContext, NavigationMode};
pub use error::{JournalDirection, NavigationError, Result};
pub use event::{Event, SubscriptionId};
pub use journal::{Journal, JournalEntry, JournalSnapshot, NavigationJournal};
pub use lifecycle::{DefaultHooks, LifecycleState, ScreenHooks, ScreenLifecycle};
pub use region::{Region, RegionManager, RegionRegistry};
pub use service::{NavigationService, RegionNavigationService};
pub use view::{NavigationAware, ViewHandle, ViewRegistry};
