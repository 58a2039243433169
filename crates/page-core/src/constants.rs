// Page markup contract and tuning constants shared by the web front-end and tests.

// Navigation
pub const ACTIVE_CLASS: &str = "active"; // marks the nav button of the current filter
pub const DATA_HREF_ATTR: &str = "data-href";
pub const PROPOSALS_PATH: &str = "/proposals"; // unfiltered proposals listing
pub const MISSING_HREF: &str = "null"; // what `location.href = null` navigates to

// Inline display values written by the toggler
pub const DISPLAY_NONE: &str = "none";
pub const DISPLAY_BLOCK: &str = "block";

// Scroll applied on load when the URL has a fragment; compensates the fixed header
pub const ANCHOR_SCROLL_DX: f64 = 0.0;
pub const ANCHOR_SCROLL_DY: f64 = -150.0;
