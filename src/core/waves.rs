use super::color::{Rgba, BRAND_BLUE, BRAND_CYAN, BRAND_VIOLET, TRANSPARENT};
use super::constants::*;
use glam::Vec2;
use smallvec::{smallvec, SmallVec};

/// One wave layer. `y_frac` is the resting line as a fraction of surface height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveSpec {
    pub y_frac: f32,
    pub amplitude: f32,
    pub frequency: f32,
    pub speed: f32,
    pub color: Rgba,
    pub line_width: f32,
}

/// Secondary sine added on top of every layer of a surface: amplitude,
/// frequency and speed multipliers relative to the primary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Harmonic {
    pub amplitude: f32,
    pub frequency: f32,
    pub speed: f32,
}

/// Radial glow: centre and radius are fractions of the surface (radius of width).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub center_frac: Vec2,
    pub radius_frac: f32,
    pub stops: [(f32, Rgba); 3],
}

#[derive(Clone, Debug, PartialEq)]
pub struct WaveSurface {
    pub layers: SmallVec<[WaveSpec; 4]>,
    pub harmonic: Harmonic,
    pub time_step: f32,
    pub sample_step: u32,
    pub dots: bool,
    pub glow: Option<Glow>,
}

impl WaveSurface {
    /// Full-viewport hero background: four layers, pulsing dots and a centre glow.
    pub fn hero() -> Self {
        Self {
            layers: smallvec![
                layer(0.5, 60.0, 0.003, 0.8, BRAND_BLUE.with_alpha(0.15), 2.0),
                layer(0.55, 40.0, 0.004, 1.0, BRAND_BLUE.with_alpha(0.12), 1.5),
                layer(0.6, 80.0, 0.002, 0.6, BRAND_CYAN.with_alpha(0.08), 2.5),
                layer(0.45, 30.0, 0.005, 1.2, BRAND_VIOLET.with_alpha(0.1), 1.0),
            ],
            harmonic: Harmonic {
                amplitude: 0.5,
                frequency: 0.5,
                speed: 0.7,
            },
            time_step: HERO_TIME_STEP,
            sample_step: WAVE_SAMPLE_STEP_PX,
            dots: true,
            glow: Some(Glow {
                center_frac: Vec2::new(0.5, 0.4),
                radius_frac: 0.4,
                stops: [
                    (0.0, BRAND_BLUE.with_alpha(0.08)),
                    (0.5, BRAND_BLUE.with_alpha(0.03)),
                    (1.0, TRANSPARENT),
                ],
            }),
        }
    }

    /// Call-to-action band: three calmer layers, no overlays.
    pub fn cta() -> Self {
        Self {
            layers: smallvec![
                layer(0.6, 50.0, 0.004, 0.6, BRAND_BLUE.with_alpha(0.2), 2.0),
                layer(0.5, 30.0, 0.005, 0.8, BRAND_CYAN.with_alpha(0.15), 1.5),
                layer(0.7, 40.0, 0.003, 0.5, BRAND_VIOLET.with_alpha(0.12), 2.0),
            ],
            harmonic: Harmonic {
                amplitude: 0.3,
                frequency: 0.7,
                speed: 1.3,
            },
            time_step: CTA_TIME_STEP,
            sample_step: WAVE_SAMPLE_STEP_PX,
            dots: false,
            glow: None,
        }
    }
}

const fn layer(
    y_frac: f32,
    amplitude: f32,
    frequency: f32,
    speed: f32,
    color: Rgba,
    line_width: f32,
) -> WaveSpec {
    WaveSpec {
        y_frac,
        amplitude,
        frequency,
        speed,
        color,
        line_width,
    }
}

/// Monotonic animation time, advanced by a fixed step per rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WaveClock {
    pub t: f32,
}

impl WaveClock {
    #[inline]
    pub fn advance(&mut self, step: f32) {
        self.t += step;
    }
}

/// Primary sine plus the surface harmonic at horizontal position `x`.
#[inline]
pub fn wave_y(wave: &WaveSpec, harmonic: &Harmonic, x: f32, height: f32, t: f32) -> f32 {
    let base = height * wave.y_frac;
    let primary = (x * wave.frequency + t * wave.speed).sin() * wave.amplitude;
    let secondary = (x * wave.frequency * harmonic.frequency + t * wave.speed * harmonic.speed)
        .sin()
        * (wave.amplitude * harmonic.amplitude);
    base + primary + secondary
}

/// Samples one layer from x = 0 to x = width inclusive. A zero width yields the
/// single sample at x = 0.
pub fn sample_wave(
    wave: &WaveSpec,
    harmonic: &Harmonic,
    width: u32,
    height: u32,
    t: f32,
    step: u32,
    out: &mut Vec<Vec2>,
) {
    out.clear();
    let h = height as f32;
    for x in (0..=width).step_by(step.max(1) as usize) {
        let xf = x as f32;
        out.push(Vec2::new(xf, wave_y(wave, harmonic, xf, h, t)));
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    pub pos: Vec2,
    pub radius: f32,
    pub alpha: f32,
}

#[inline]
pub fn dot_count(width: u32) -> usize {
    ((width as f32 / WAVE_DOT_SPACING_PX).floor() as usize).min(WAVE_DOTS_MAX)
}

/// Small dots floating above the waves; all of position, size and alpha pulse with `t`.
pub fn pulse_dots(width: u32, height: u32, t: f32, out: &mut Vec<Dot>) {
    out.clear();
    let n = dot_count(width);
    let (w, h) = (width as f32, height as f32);
    for i in 0..n {
        let fi = i as f32;
        let x = (fi / n as f32) * w + (t * 0.5 + fi).sin() * 30.0;
        let y = h * 0.3 + (t * 0.3 + fi * 0.5).sin() * 100.0;
        out.push(Dot {
            pos: Vec2::new(x, y),
            radius: 1.0 + (t + fi).sin() * 0.5,
            alpha: 0.2 + (t * 0.5 + fi).sin() * 0.15,
        });
    }
}
