use crate::core::Rgba;
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

#[inline]
pub fn clear(ctx: &web::CanvasRenderingContext2d, width: u32, height: u32) {
    ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
}

pub fn stroke_polyline(
    ctx: &web::CanvasRenderingContext2d,
    points: &[Vec2],
    color: Rgba,
    line_width: f32,
) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    ctx.begin_path();
    ctx.set_stroke_style_str(&color.css());
    ctx.set_line_width(line_width as f64);
    ctx.move_to(first.x as f64, first.y as f64);
    for p in rest {
        ctx.line_to(p.x as f64, p.y as f64);
    }
    ctx.stroke();
}

#[inline]
pub fn line(ctx: &web::CanvasRenderingContext2d, a: Vec2, b: Vec2, color: Rgba, line_width: f32) {
    ctx.begin_path();
    ctx.set_stroke_style_str(&color.css());
    ctx.set_line_width(line_width as f64);
    ctx.move_to(a.x as f64, a.y as f64);
    ctx.line_to(b.x as f64, b.y as f64);
    ctx.stroke();
}

#[inline]
pub fn fill_disc(ctx: &web::CanvasRenderingContext2d, center: Vec2, radius: f32, color: Rgba) {
    if radius.is_nan() || radius <= 0.0 {
        return;
    }
    ctx.begin_path();
    if ctx
        .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
        .is_err()
    {
        return;
    }
    ctx.set_fill_style_str(&color.css());
    ctx.fill();
}

/// Fills `bounds` (x, y, w, h) with a radial gradient centred at `center`.
pub fn radial_glow(
    ctx: &web::CanvasRenderingContext2d,
    center: Vec2,
    radius: f32,
    stops: &[(f32, Rgba)],
    bounds: (f64, f64, f64, f64),
) {
    if radius.is_nan() || radius <= 0.0 {
        return;
    }
    let (cx, cy) = (center.x as f64, center.y as f64);
    let Ok(gradient) = ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, radius as f64) else {
        return;
    };
    for (offset, color) in stops {
        _ = gradient.add_color_stop(*offset, &color.css());
    }
    ctx.set_fill_style_canvas_gradient(&gradient);
    let (x, y, w, h) = bounds;
    ctx.fill_rect(x, y, w, h);
}
