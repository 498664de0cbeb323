use crate::constants::*;
use crate::core::{anchor_scroll_top, body_overflow, is_fragment_link, is_mobile, sticky_cta_visible};
use crate::dom;
use crate::lifecycle::{self, ObserveOptions};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Hamburger toggle: flips `active` on the button and the panel and locks body scroll while open.
pub fn init_mobile_menu(document: &web::Document) {
    let (Some(toggle), Some(nav)) = (
        document.get_element_by_id(MENU_TOGGLE_ID),
        document.get_element_by_id(MOBILE_NAV_ID),
    ) else {
        log::debug!("[nav] menu toggle or panel missing, skipping");
        return;
    };
    let doc = document.clone();
    dom::add_click_listener(document, MENU_TOGGLE_ID, move || {
        _ = toggle.class_list().toggle(ACTIVE_CLASS);
        let open = nav.class_list().toggle(ACTIVE_CLASS).unwrap_or(false);
        dom::set_body_overflow(&doc, body_overflow(open));
    });
}

fn close_mobile_menu(document: &web::Document) {
    let Some(nav) = document.get_element_by_id(MOBILE_NAV_ID) else {
        return;
    };
    if !nav.class_list().contains(ACTIVE_CLASS) {
        return;
    }
    _ = nav.class_list().remove_1(ACTIVE_CLASS);
    if let Some(toggle) = document.get_element_by_id(MENU_TOGGLE_ID) {
        _ = toggle.class_list().remove_1(ACTIVE_CLASS);
    }
    dom::set_body_overflow(document, body_overflow(false));
}

/// In-page anchors scroll smoothly and land below the fixed header.
pub fn init_smooth_scroll(document: &web::Document) {
    let links = dom::query_all(document, ANCHOR_SELECTOR);
    for link in &links {
        let doc = document.clone();
        let anchor = link.clone();
        let on_click = Closure::wrap(Box::new(move |ev: web::Event| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            if !is_fragment_link(&href) {
                return;
            }
            // `#1` and friends are not valid selectors; treat them as missing targets.
            let Ok(Some(target)) = doc.query_selector(&href) else {
                return;
            };
            ev.prevent_default();
            close_mobile_menu(&doc);
            scroll_to_target(&doc, &target);
        }) as Box<dyn FnMut(_)>);
        _ = link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }
    if !links.is_empty() {
        log::info!("[nav] smooth scroll on {} links", links.len());
    }
}

fn scroll_to_target(document: &web::Document, target: &web::Element) {
    let Some(window) = web::window() else {
        return;
    };
    let header_height = document
        .query_selector(HEADER_SELECTOR)
        .ok()
        .flatten()
        .and_then(|h| h.dyn_into::<web::HtmlElement>().ok())
        .map(|h| h.offset_height() as f64)
        .unwrap_or(0.0);
    let scroll_y = window.page_y_offset().unwrap_or(0.0);
    let top = anchor_scroll_top(target.get_bounding_client_rect().top(), scroll_y, header_height);

    let options = web::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Mobile-only call-to-action that appears once the hero has scrolled away.
pub fn init_sticky_cta(document: &web::Document) {
    let (Some(cta), Some(hero)) = (
        document.get_element_by_id(STICKY_CTA_ID),
        document.get_element_by_id(HERO_ID),
    ) else {
        log::debug!("[sticky] CTA or hero missing, skipping");
        return;
    };

    let options = ObserveOptions {
        threshold: 0.0,
        root_margin: Some(STICKY_ROOT_MARGIN),
    };
    let cta_observe = cta.clone();
    let observer = lifecycle::intersection_observer(options, move |entry, _| {
        // Width is read when the hero crosses, not at init.
        let show = sticky_cta_visible(entry.is_intersecting(), dom::viewport_width());
        let classes = cta_observe.class_list();
        _ = if show {
            classes.add_1(VISIBLE_CLASS)
        } else {
            classes.remove_1(VISIBLE_CLASS)
        };
    });
    if let Some(observer) = observer {
        observer.observe(&hero);
    }

    lifecycle::on_resize_debounced(move || {
        if !is_mobile(dom::viewport_width()) {
            _ = cta.class_list().remove_1(VISIBLE_CLASS);
        }
    });
}
