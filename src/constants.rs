// DOM contract of the landing page.
// Every element here is optional: whatever is missing is skipped and the
// remaining effects still start.

// Canvases
pub const HERO_CANVAS_ID: &str = "hero-canvas";
pub const CTA_CANVAS_ID: &str = "cta-canvas";
pub const PARTICLE_CANVAS_ID: &str = "particle-canvas";

// Cursor
pub const CURSOR_GLOW_ID: &str = "cursor-glow";
pub const TRAIL_PARTICLE_CLASS: &str = "cursor-trail";

// Navigation
pub const MENU_TOGGLE_ID: &str = "mobile-menu-toggle";
pub const MOBILE_NAV_ID: &str = "mobile-nav";
pub const HEADER_SELECTOR: &str = ".header";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// Sections and reveal
pub const HERO_ID: &str = "hero";
pub const STICKY_CTA_ID: &str = "mobile-sticky-cta";
pub const FADE_IN_SELECTOR: &str = ".fade-in";
pub const COUNTER_SELECTOR: &str = "[data-target]";

// Classes toggled by the glue
pub const ACTIVE_CLASS: &str = "active";
pub const VISIBLE_CLASS: &str = "visible";

// Counter attributes
pub const COUNTER_TARGET_ATTR: &str = "data-target";
pub const COUNTER_DURATION_ATTR: &str = "data-duration";
pub const COUNTER_SUFFIX_ATTR: &str = "data-suffix";

// Intersection observer settings
pub const CTA_CANVAS_THRESHOLD: f64 = 0.1;
pub const FADE_IN_THRESHOLD: f64 = 0.1;
pub const FADE_IN_ROOT_MARGIN: &str = "0px 0px -80px 0px";
pub const STICKY_ROOT_MARGIN: &str = "-100px 0px 0px 0px";
pub const COUNTER_THRESHOLD: f64 = 0.5;
