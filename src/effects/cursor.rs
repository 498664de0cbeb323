use crate::constants::TRAIL_PARTICLE_CLASS;
use crate::core::{
    centered_transform, cursor_trail_enabled, glow_transform, trail_fill_css, CursorTrail,
    TrailConfig, TrailParticle, TRAIL_COLOR,
};
use crate::dom;
use crate::frame::FrameLoop;
use crate::input;
use fnv::FnvHashMap;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct CursorFx {
    document: web::Document,
    glow: web::HtmlElement,
    trail: CursorTrail,
    rng: StdRng,
    // One DOM node per live trail particle, keyed by particle id
    nodes: FnvHashMap<u64, web::HtmlElement>,
    expired: Vec<u64>,
}

impl CursorFx {
    fn pointer_moved(&mut self, ev: &web::MouseEvent) {
        let pos = input::pointer_client(ev);
        let Some(p) = self.trail.pointer_moved(pos, &mut self.rng).cloned() else {
            return;
        };
        if let Some(node) = self.create_node(&p) {
            self.nodes.insert(p.id, node);
        }
    }

    fn create_node(&self, p: &TrailParticle) -> Option<web::HtmlElement> {
        let node = self
            .document
            .create_element("div")
            .ok()?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        node.set_class_name(TRAIL_PARTICLE_CLASS);
        let size = format!("{:.1}px", p.size);
        dom::set_style(&node, "position", "fixed");
        dom::set_style(&node, "left", "0");
        dom::set_style(&node, "top", "0");
        dom::set_style(&node, "width", &size);
        dom::set_style(&node, "height", &size);
        dom::set_style(&node, "border-radius", "50%");
        dom::set_style(&node, "background", &trail_fill_css(TRAIL_COLOR));
        dom::set_style(&node, "pointer-events", "none");
        place(&node, p);
        _ = self.document.body()?.append_child(&node);
        Some(node)
    }

    fn frame(&mut self) -> bool {
        self.expired.clear();
        self.trail.step(&mut self.expired);

        let glow = self.trail.glow();
        dom::set_style(&self.glow, "transform", &glow_transform(glow));

        for id in &self.expired {
            if let Some(node) = self.nodes.remove(id) {
                node.remove();
            }
        }
        for p in self.trail.particles() {
            if let Some(node) = self.nodes.get(&p.id) {
                place(node, p);
            }
        }
        true
    }
}

// Centres the node on the particle and applies its current opacity.
fn place(node: &web::HtmlElement, p: &TrailParticle) {
    dom::set_style(node, "transform", &centered_transform(p.pos, p.size));
    dom::set_style(node, "opacity", &format!("{:.3}", p.opacity.max(0.0)));
}

/// Starts the cursor glow and trail on desktop-width viewports.
pub fn init_cursor_trail(document: &web::Document, glow_id: &str) {
    let width = dom::viewport_width();
    if !cursor_trail_enabled(width) {
        log::debug!("[cursor] viewport {width}px is mobile, skipping");
        return;
    }
    let Some(glow) = dom::html_element_by_id(document, glow_id) else {
        log::debug!("[cursor] #{glow_id} not found, skipping");
        return;
    };
    let Some(window) = web::window() else {
        return;
    };

    let state = Rc::new(RefCell::new(CursorFx {
        document: document.clone(),
        glow,
        trail: CursorTrail::new(TrailConfig::default()),
        rng: StdRng::from_entropy(),
        nodes: FnvHashMap::default(),
        expired: Vec::new(),
    }));

    let state_move = state.clone();
    let on_move = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        state_move.borrow_mut().pointer_moved(&ev);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
    on_move.forget();

    let frames = FrameLoop::new(move || state.borrow_mut().frame());
    frames.start();
    log::info!("[cursor] trail running");
}
