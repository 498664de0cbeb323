use crate::constants::*;
use crate::core::{fade_in_delay_css, parse_duration, parse_target, Counter};
use crate::dom;
use crate::frame::FrameLoop;
use crate::lifecycle::{self, ObserveOptions};
use instant::Instant;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Staggers `.fade-in` elements and adds `visible` the first time each scrolls in.
pub fn init_fade_in(document: &web::Document) {
    let elements = dom::query_all(document, FADE_IN_SELECTOR);
    if elements.is_empty() {
        return;
    }
    let options = ObserveOptions {
        threshold: FADE_IN_THRESHOLD,
        root_margin: Some(FADE_IN_ROOT_MARGIN),
    };
    let Some(observer) = lifecycle::intersection_observer(options, |entry, observer| {
        if entry.is_intersecting() {
            let target = entry.target();
            _ = target.class_list().add_1(VISIBLE_CLASS);
            observer.unobserve(&target);
        }
    }) else {
        return;
    };
    for (index, el) in elements.iter().enumerate() {
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            dom::set_style(html, "transition-delay", &fade_in_delay_css(index));
        }
        observer.observe(el);
    }
    log::info!("[fade] observing {} elements", elements.len());
}

/// Counts `[data-target]` elements up from zero once each scrolls into view.
pub fn init_counters(document: &web::Document) {
    let elements = dom::query_all(document, COUNTER_SELECTOR);
    if elements.is_empty() {
        return;
    }
    let options = ObserveOptions {
        threshold: COUNTER_THRESHOLD,
        root_margin: None,
    };
    let Some(observer) = lifecycle::intersection_observer(options, |entry, observer| {
        if entry.is_intersecting() {
            let target = entry.target();
            observer.unobserve(&target);
            start_counter(target);
        }
    }) else {
        return;
    };
    for el in &elements {
        observer.observe(el);
    }
    log::info!("[counter] observing {} elements", elements.len());
}

fn start_counter(el: web::Element) {
    let counter = Counter::new(
        parse_target(el.get_attribute(COUNTER_TARGET_ATTR).as_deref()),
        parse_duration(el.get_attribute(COUNTER_DURATION_ATTR).as_deref()),
    );
    let suffix = el.get_attribute(COUNTER_SUFFIX_ATTR).unwrap_or_default();
    let started = Instant::now();
    let frames = FrameLoop::new(move || {
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        el.set_text_content(Some(&counter.text_at(elapsed_ms, &suffix)));
        !counter.is_done(elapsed_ms)
    });
    frames.start();
}
