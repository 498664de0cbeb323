use crate::core::{pulse_dots, sample_wave, Dot, WaveClock, WaveSurface, BRAND_BLUE};
use crate::dom::{self, Sizing};
use crate::draw;
use crate::frame::FrameLoop;
use crate::lifecycle;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct WaveCanvas {
    ctx: web::CanvasRenderingContext2d,
    surface: WaveSurface,
    clock: WaveClock,
    width: u32,
    height: u32,
    // Scratch buffers reused every frame
    points: Vec<Vec2>,
    dots: Vec<Dot>,
}

impl WaveCanvas {
    fn frame(&mut self) -> bool {
        let (w, h) = (self.width, self.height);
        let t = self.clock.t;
        draw::clear(&self.ctx, w, h);

        let harmonic = self.surface.harmonic;
        for wave in &self.surface.layers {
            sample_wave(wave, &harmonic, w, h, t, self.surface.sample_step, &mut self.points);
            draw::stroke_polyline(&self.ctx, &self.points, wave.color, wave.line_width);
        }

        if self.surface.dots {
            pulse_dots(w, h, t, &mut self.dots);
            for dot in &self.dots {
                draw::fill_disc(&self.ctx, dot.pos, dot.radius, BRAND_BLUE.with_alpha(dot.alpha));
            }
        }

        if let Some(glow) = &self.surface.glow {
            let (wf, hf) = (w as f32, h as f32);
            let center = Vec2::new(wf * glow.center_frac.x, hf * glow.center_frac.y);
            draw::radial_glow(
                &self.ctx,
                center,
                wf * glow.radius_frac,
                &glow.stops,
                (0.0, 0.0, w as f64, h as f64),
            );
        }

        self.clock.advance(self.surface.time_step);
        true
    }
}

/// Wires a wave background onto canvas `#id`. Missing canvas: nothing happens.
pub fn init_wave_canvas(
    document: &web::Document,
    id: &'static str,
    surface: WaveSurface,
    sizing: Sizing,
    visibility_threshold: f64,
) -> anyhow::Result<()> {
    let Some((canvas, ctx)) = dom::canvas_2d(document, id)? else {
        log::debug!("[waves] #{id} not found, skipping");
        return Ok(());
    };
    let (width, height) = dom::sync_canvas_size(&canvas, sizing);
    let state = Rc::new(RefCell::new(WaveCanvas {
        ctx,
        surface,
        clock: WaveClock::default(),
        width,
        height,
        points: Vec::new(),
        dots: Vec::new(),
    }));

    let canvas_resize = canvas.clone();
    let state_resize = state.clone();
    lifecycle::on_resize_debounced(move || {
        let (w, h) = dom::sync_canvas_size(&canvas_resize, sizing);
        let mut s = state_resize.borrow_mut();
        s.width = w;
        s.height = h;
    });

    let state_frame = state.clone();
    let frames = FrameLoop::new(move || state_frame.borrow_mut().frame());
    lifecycle::run_while_visible(&canvas, visibility_threshold, frames, id);
    log::info!("[waves] #{id} {}x{}", width, height);
    Ok(())
}
