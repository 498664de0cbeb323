use crate::core::{Debounce, RESIZE_DEBOUNCE_MS};
use crate::frame::FrameLoop;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[derive(Clone, Copy, Debug, Default)]
pub struct ObserveOptions<'a> {
    pub threshold: f64,
    pub root_margin: Option<&'a str>,
}

/// Builds an IntersectionObserver whose callback sees each entry individually.
/// The callback is leaked, like every page-lifetime listener here.
pub fn intersection_observer(
    options: ObserveOptions<'_>,
    mut on_entry: impl FnMut(&web::IntersectionObserverEntry, &web::IntersectionObserver) + 'static,
) -> Option<web::IntersectionObserver> {
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                    on_entry(&entry, &observer);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    if let Some(margin) = options.root_margin {
        init.set_root_margin(margin);
    }
    let observer =
        match web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init) {
            Ok(o) => o,
            Err(e) => {
                log::warn!("IntersectionObserver unavailable: {:?}", e);
                return None;
            }
        };
    closure.forget();
    Some(observer)
}

/// Runs `frames` only while `surface` intersects the viewport. Pausing keeps
/// whatever state the effect owns; only time stops.
pub fn run_while_visible(surface: &web::Element, threshold: f64, frames: FrameLoop, label: &'static str) {
    let options = ObserveOptions {
        threshold,
        root_margin: None,
    };
    let observer = intersection_observer(options, move |entry, _| {
        if entry.is_intersecting() {
            if !frames.is_running() {
                log::debug!("[{label}] visible, resuming");
            }
            frames.start();
        } else if frames.is_running() {
            log::debug!("[{label}] hidden, pausing");
            frames.stop();
        }
    });
    if let Some(observer) = observer {
        observer.observe(surface);
    }
}

/// Calls `handler` once resize events have been quiet for the debounce window.
pub fn on_resize_debounced(handler: impl FnMut() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let debounce = Rc::new(RefCell::new(Debounce::new()));
    let handler = Rc::new(RefCell::new(handler));
    let closure = Closure::wrap(Box::new(move || {
        let ticket = debounce.borrow_mut().poke();
        let debounce = debounce.clone();
        let handler = handler.clone();
        let fire = Closure::once_into_js(move || {
            if debounce.borrow_mut().settle(ticket) {
                (*handler.borrow_mut())();
            }
        });
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                fire.unchecked_ref(),
                RESIZE_DEBOUNCE_MS,
            );
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
