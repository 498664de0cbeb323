pub mod nav;
pub mod reveal;

pub use nav::{init_mobile_menu, init_smooth_scroll, init_sticky_cta};
pub use reveal::{init_counters, init_fade_in};
