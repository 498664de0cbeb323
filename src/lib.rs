#![cfg(target_arch = "wasm32")]
//! Landing-page effects compiled to WebAssembly.
//!
//! On start this wires, independently of each other:
//! - wave backgrounds on `#hero-canvas` (viewport sized) and `#cta-canvas` (parent sized)
//! - the particle mesh on `#particle-canvas`
//! - the cursor glow (`#cursor-glow`) and its trail, desktop only
//! - fade-ins, smooth anchor scrolling, the mobile menu, the sticky CTA and counters
//!
//! Any element that is missing only disables the piece that needs it.
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod draw;
mod effects;
mod frame;
mod input;
mod lifecycle;
mod page;

use crate::constants::*;
use crate::core::WaveSurface;
use crate::dom::Sizing;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("apex-web starting");

    spawn_local(async move {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    init_canvases(&document);
    effects::init_cursor_trail(&document, CURSOR_GLOW_ID);

    page::init_fade_in(&document);
    page::init_smooth_scroll(&document);
    page::init_mobile_menu(&document);
    page::init_sticky_cta(&document);
    page::init_counters(&document);
    Ok(())
}

// A failing canvas is logged and skipped so the others still start.
fn init_canvases(document: &web::Document) {
    if let Err(e) =
        effects::init_wave_canvas(document, HERO_CANVAS_ID, WaveSurface::hero(), Sizing::Viewport, 0.0)
    {
        log::warn!("hero canvas disabled: {:?}", e);
    }
    if let Err(e) = effects::init_wave_canvas(
        document,
        CTA_CANVAS_ID,
        WaveSurface::cta(),
        Sizing::Parent,
        CTA_CANVAS_THRESHOLD,
    ) {
        log::warn!("cta canvas disabled: {:?}", e);
    }
    if let Err(e) = effects::init_particle_field(document, PARTICLE_CANVAS_ID) {
        log::warn!("particle canvas disabled: {:?}", e);
    }
}
