// Host-side tests for wave sampling, overlays and the surface presets.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod fx {
    pub mod color {
        include!("../src/core/color.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod waves {
        include!("../src/core/waves.rs");
    }
}

use fx::color::*;
use fx::waves::*;

fn flat_harmonic() -> Harmonic {
    Harmonic {
        amplitude: 0.0,
        frequency: 1.0,
        speed: 1.0,
    }
}

fn blue_wave() -> WaveSpec {
    WaveSpec {
        y_frac: 0.5,
        amplitude: 60.0,
        frequency: 0.003,
        speed: 0.8,
        color: BRAND_BLUE.with_alpha(0.15),
        line_width: 2.0,
    }
}

#[test]
fn wave_y_is_primary_plus_scaled_harmonic() {
    let s = blue_wave();
    let h = Harmonic {
        amplitude: 0.5,
        frequency: 0.5,
        speed: 0.7,
    };
    for &(x, t) in &[(0.0_f32, 0.0_f32), (123.0, 1.5), (800.0, 42.0)] {
        let expected = 400.0
            + (x * 0.003 + t * 0.8).sin() * 60.0
            + (x * 0.003 * 0.5 + t * 0.8 * 0.7).sin() * 30.0;
        let y = wave_y(&s, &h, x, 800.0, t);
        assert!((y - expected).abs() < 1e-3, "x={x} t={t}: {y} vs {expected}");
    }
}

#[test]
fn wave_stays_within_combined_amplitude() {
    let s = blue_wave();
    let h = Harmonic {
        amplitude: 0.3,
        frequency: 0.7,
        speed: 1.3,
    };
    let mut pts = Vec::new();
    for frame in 0..200 {
        sample_wave(&s, &h, 1200, 600, frame as f32 * 0.01, 2, &mut pts);
        for p in &pts {
            assert!((p.y - 300.0).abs() <= 60.0 * 1.3 + 1e-3);
        }
    }
}

#[test]
fn zero_harmonic_reduces_to_single_sine() {
    let s = blue_wave();
    let y = wave_y(&s, &flat_harmonic(), 250.0, 100.0, 3.0);
    let expected = 50.0 + (250.0_f32 * 0.003 + 3.0 * 0.8).sin() * 60.0;
    assert!((y - expected).abs() < 1e-4);
}

#[test]
fn sampling_spans_full_width_at_fixed_step() {
    let mut pts = Vec::new();
    sample_wave(&blue_wave(), &flat_harmonic(), 10, 100, 0.0, 2, &mut pts);
    let xs: Vec<f32> = pts.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);

    sample_wave(&blue_wave(), &flat_harmonic(), 11, 100, 0.0, 2, &mut pts);
    assert_eq!(pts.len(), 6);
    assert_eq!(pts.last().map(|p| p.x), Some(10.0));
}

#[test]
fn zero_width_yields_single_sample() {
    let mut pts = vec![glam::Vec2::ONE; 8];
    sample_wave(&blue_wave(), &flat_harmonic(), 0, 0, 1.0, 2, &mut pts);
    assert_eq!(pts.len(), 1);
    assert_eq!(pts[0].x, 0.0);
    assert!(pts[0].y.is_finite());
}

#[test]
fn zero_step_is_treated_as_one() {
    let mut pts = Vec::new();
    sample_wave(&blue_wave(), &flat_harmonic(), 4, 10, 0.0, 0, &mut pts);
    assert_eq!(pts.len(), 5);
}

#[test]
fn presets_use_two_harmonic_tuning() {
    let hero = WaveSurface::hero();
    assert_eq!(hero.layers.len(), 4);
    assert!(hero.dots);
    assert!(hero.glow.is_some());
    assert_eq!(hero.time_step, 0.015);

    let cta = WaveSurface::cta();
    assert_eq!(cta.layers.len(), 3);
    assert!(!cta.dots);
    assert!(cta.glow.is_none());
    assert_eq!(cta.time_step, 0.01);

    for surface in [&hero, &cta] {
        let h = surface.harmonic;
        assert!((0.3..=0.5).contains(&h.amplitude));
        assert!((0.5..=0.7).contains(&h.frequency));
        assert!((0.7..=1.4).contains(&h.speed));
        assert_eq!(surface.sample_step, 2);
        for layer in &surface.layers {
            assert!(layer.amplitude > 0.0);
            assert!(layer.y_frac > 0.0 && layer.y_frac < 1.0);
            assert!(layer.color.a > 0.0 && layer.color.a <= 0.2);
        }
    }
}

#[test]
fn hero_glow_fades_to_transparent() {
    let glow = WaveSurface::hero().glow.unwrap();
    assert_eq!(glow.stops[0].0, 0.0);
    assert_eq!(glow.stops[2], (1.0, TRANSPARENT));
    assert!(glow.stops[0].1.a > glow.stops[1].1.a);
}

#[test]
fn dot_count_follows_width_and_is_capped() {
    assert_eq!(dot_count(0), 0);
    assert_eq!(dot_count(49), 0);
    assert_eq!(dot_count(1000), 20);
    assert_eq!(dot_count(1920), 38);
    assert_eq!(dot_count(100_000), 64);
}

#[test]
fn pulse_dots_have_positive_radius_and_soft_alpha() {
    let mut dots = Vec::new();
    for frame in 0..300 {
        let t = frame as f32 * 0.015;
        pulse_dots(1440, 900, t, &mut dots);
        assert_eq!(dots.len(), 28);
        for d in &dots {
            assert!(d.radius >= 0.5 && d.radius <= 1.5);
            assert!(d.alpha >= 0.05 - 1e-6 && d.alpha <= 0.35 + 1e-6);
            assert!((d.pos.y - 270.0).abs() <= 100.0 + 1e-3);
        }
    }
}

#[test]
fn pulse_dots_move_with_time() {
    let (mut a, mut b) = (Vec::new(), Vec::new());
    pulse_dots(1000, 800, 0.0, &mut a);
    pulse_dots(1000, 800, 1.0, &mut b);
    assert_eq!(a.len(), b.len());
    assert!(a.iter().zip(&b).any(|(p, q)| p.pos != q.pos));
}

#[test]
fn clock_advances_by_fixed_step() {
    let mut clock = WaveClock::default();
    for _ in 0..100 {
        clock.advance(0.01);
    }
    assert!((clock.t - 1.0).abs() < 1e-4);
}

#[test]
fn rgba_formats_as_css() {
    assert_eq!(BRAND_BLUE.with_alpha(0.15).css(), "rgba(0, 113, 227, 0.15)");
    assert_eq!(TRANSPARENT.css(), "rgba(0, 0, 0, 0)");
    assert_eq!(BRAND_VIOLET.with_alpha(3.0).a, 1.0);
}
