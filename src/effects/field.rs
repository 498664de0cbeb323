use crate::core::{
    FieldConfig, Link, ParticleField, BRAND_BLUE, FIELD_GLOW_SCALE, FIELD_LINK_ALPHA_MAX,
    TRANSPARENT,
};
use crate::dom::{self, Sizing};
use crate::draw;
use crate::frame::FrameLoop;
use crate::input;
use crate::lifecycle;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct FieldCanvas {
    ctx: web::CanvasRenderingContext2d,
    field: ParticleField,
    rng: StdRng,
    links: Vec<Link>,
}

impl FieldCanvas {
    fn resize(&mut self, width: u32, height: u32) {
        self.field.resize(width as f32, height as f32, &mut self.rng);
        log::debug!(
            "[field] {}x{} -> {} particles",
            width,
            height,
            self.field.particles().len()
        );
    }

    fn frame(&mut self) -> bool {
        let (w, h) = self.field.size();
        draw::clear(&self.ctx, w as u32, h as u32);

        self.field.links(&mut self.links);
        let particles = self.field.particles();
        for link in &self.links {
            let color = BRAND_BLUE.with_alpha(link.opacity * FIELD_LINK_ALPHA_MAX);
            draw::line(&self.ctx, particles[link.a].pos, particles[link.b].pos, color, 0.5);
        }

        for p in particles {
            let glow_radius = p.radius * FIELD_GLOW_SCALE;
            let stops = [
                (0.0, BRAND_BLUE.with_alpha(p.opacity * 0.3)),
                (1.0, TRANSPARENT),
            ];
            let r = glow_radius as f64;
            draw::radial_glow(
                &self.ctx,
                p.pos,
                glow_radius,
                &stops,
                (p.pos.x as f64 - r, p.pos.y as f64 - r, r * 2.0, r * 2.0),
            );
            draw::fill_disc(&self.ctx, p.pos, p.radius, BRAND_BLUE.with_alpha(p.opacity));
        }

        self.field.step();
        true
    }
}

/// Wires the particle mesh onto `#id`, tracking the pointer over the canvas's section.
pub fn init_particle_field(document: &web::Document, id: &'static str) -> anyhow::Result<()> {
    let Some((canvas, ctx)) = dom::canvas_2d(document, id)? else {
        log::debug!("[field] #{id} not found, skipping");
        return Ok(());
    };
    let (width, height) = dom::sync_canvas_size(&canvas, Sizing::Parent);
    let state = Rc::new(RefCell::new(FieldCanvas {
        ctx,
        field: ParticleField::new(FieldConfig::default()),
        rng: StdRng::from_entropy(),
        links: Vec::new(),
    }));
    state.borrow_mut().resize(width, height);

    let canvas_resize = canvas.clone();
    let state_resize = state.clone();
    lifecycle::on_resize_debounced(move || {
        let (w, h) = dom::sync_canvas_size(&canvas_resize, Sizing::Parent);
        state_resize.borrow_mut().resize(w, h);
    });

    wire_pointer(&canvas, &state);

    let state_frame = state.clone();
    let frames = FrameLoop::new(move || state_frame.borrow_mut().frame());
    lifecycle::run_while_visible(&canvas, 0.0, frames, id);
    log::info!(
        "[field] #{id} {}x{} with {} particles",
        width,
        height,
        state.borrow().field.particles().len()
    );
    Ok(())
}

// The canvas usually sits under the section's content, so listen on its parent.
fn wire_pointer(canvas: &web::HtmlCanvasElement, state: &Rc<RefCell<FieldCanvas>>) {
    let target: web::EventTarget = match canvas.parent_element() {
        Some(parent) => parent.into(),
        None => canvas.clone().into(),
    };

    let canvas_move = canvas.clone();
    let state_move = state.clone();
    let on_move = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = input::pointer_canvas_px(&ev, &canvas_move);
        state_move.borrow_mut().field.set_pointer(pos);
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
    on_move.forget();

    let state_leave = state.clone();
    let on_leave = Closure::wrap(Box::new(move || {
        state_leave.borrow_mut().field.clear_pointer();
    }) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref());
    on_leave.forget();
}
