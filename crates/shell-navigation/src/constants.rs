//! Region and view name constants.
//!
//! Centralized names used when wiring regions and requesting navigation.

/// Name of the single top-level region hosted by the main window.
pub const ROOT_REGION: &str = "RootRegion";

/// Name of the first screen shown in the root region.
pub const INIT_VIEW: &str = "InitView";
