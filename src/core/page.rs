use super::constants::*;

#[inline]
pub fn is_mobile(viewport_width: f64) -> bool {
    viewport_width <= MOBILE_BREAKPOINT_PX
}

/// The cursor glow and its trail only run on desktop-width viewports.
#[inline]
pub fn cursor_trail_enabled(viewport_width: f64) -> bool {
    !is_mobile(viewport_width)
}

/// The sticky call-to-action shows once the hero has scrolled away, on mobile only.
#[inline]
pub fn sticky_cta_visible(hero_intersecting: bool, viewport_width: f64) -> bool {
    !hero_intersecting && is_mobile(viewport_width)
}

/// Document scroll position that puts `target_top` (viewport-relative) just
/// under a fixed header of `header_height`.
#[inline]
pub fn anchor_scroll_top(target_top: f64, scroll_y: f64, header_height: f64) -> f64 {
    target_top + scroll_y - header_height - ANCHOR_EXTRA_OFFSET_PX
}

/// In-page links worth intercepting: `#something`, but not the bare `#`.
#[inline]
pub fn is_fragment_link(href: &str) -> bool {
    href.len() > 1 && href.starts_with('#')
}

/// Fade-ins are staggered in groups so long pages don't accumulate delay.
#[inline]
pub fn fade_in_delay_sec(index: usize) -> f64 {
    (index % FADE_STAGGER_GROUP) as f64 * FADE_STAGGER_STEP_SEC
}

#[inline]
pub fn fade_in_delay_css(index: usize) -> String {
    format!("{:.1}s", fade_in_delay_sec(index))
}

/// Body `overflow` while the mobile nav is open/closed.
#[inline]
pub fn body_overflow(nav_open: bool) -> &'static str {
    if nav_open {
        "hidden"
    } else {
        ""
    }
}
