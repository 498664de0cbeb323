use super::color::{Rgba, BRAND_CYAN};
use super::constants::*;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailConfig {
    pub follow: f32,
    pub spawn_speed: f32,
    pub max_live: usize,
    pub size_range: (f32, f32),
    pub decay_range: (f32, f32),
    pub max_spread: f32,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            follow: TRAIL_FOLLOW,
            spawn_speed: TRAIL_SPAWN_SPEED,
            max_live: TRAIL_MAX_LIVE,
            size_range: (TRAIL_SIZE_MIN, TRAIL_SIZE_MAX),
            decay_range: (TRAIL_DECAY_MIN, TRAIL_DECAY_MAX),
            max_spread: TRAIL_MAX_SPREAD,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrailParticle {
    pub id: u64,
    pub pos: Vec2,
    pub size: f32,
    pub opacity: f32,
    pub decay: f32,
    pub vel: Vec2,
}

/// Pointer-following glow plus the short-lived particles fast movement leaves behind.
#[derive(Clone, Debug)]
pub struct CursorTrail {
    pub config: TrailConfig,
    pointer: Option<Vec2>,
    last_sample: Option<Vec2>,
    glow: Vec2,
    particles: Vec<TrailParticle>,
    next_id: u64,
}

impl CursorTrail {
    pub fn new(config: TrailConfig) -> Self {
        Self {
            config,
            pointer: None,
            last_sample: None,
            glow: Vec2::ZERO,
            particles: Vec::new(),
            next_id: 0,
        }
    }

    pub fn glow(&self) -> Vec2 {
        self.glow
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn particles(&self) -> &[TrailParticle] {
        &self.particles
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn live_count(&self) -> usize {
        self.particles.len()
    }

    /// Records a pointer sample. Returns the particle spawned by this move, if
    /// the pointer travelled fast enough and the live cap allows one more.
    pub fn pointer_moved<R: Rng>(&mut self, to: Vec2, rng: &mut R) -> Option<&TrailParticle> {
        // The glow appears at the first sample and eases from there on.
        let speed = match self.last_sample {
            Some(from) => from.distance(to),
            None => {
                self.glow = to;
                0.0
            }
        };
        self.last_sample = Some(to);
        self.pointer = Some(to);

        if speed <= self.config.spawn_speed || self.particles.len() >= self.config.max_live {
            return None;
        }
        let p = self.spawn(to, rng);
        self.particles.push(p);
        self.particles.last()
    }

    fn spawn<R: Rng>(&mut self, at: Vec2, rng: &mut R) -> TrailParticle {
        let cfg = &self.config;
        let id = self.next_id;
        self.next_id += 1;
        let (s0, s1) = cfg.size_range;
        let (d0, d1) = cfg.decay_range;
        TrailParticle {
            id,
            pos: at,
            size: s0 + (s1 - s0) * rng.gen::<f32>(),
            opacity: 1.0,
            decay: d0 + (d1 - d0) * rng.gen::<f32>(),
            vel: Vec2::new(
                (rng.gen::<f32>() * 2.0 - 1.0) * cfg.max_spread,
                (rng.gen::<f32>() * 2.0 - 1.0) * cfg.max_spread,
            ),
        }
    }

    /// One frame: ease the glow toward the pointer, age every particle, and drop
    /// the faded ones. Ids of removed particles are appended to `expired`.
    pub fn step(&mut self, expired: &mut Vec<u64>) {
        if let Some(target) = self.pointer {
            self.glow += (target - self.glow) * self.config.follow;
        }
        for p in &mut self.particles {
            p.pos += p.vel;
            p.opacity -= p.decay;
        }
        self.particles.retain(|p| {
            if p.opacity <= 0.0 {
                expired.push(p.id);
                false
            } else {
                true
            }
        });
    }
}

/// Trail dot colour.
pub const TRAIL_COLOR: Rgba = BRAND_CYAN;

/// Inline `background` for a trail dot: solid centre fading out at the rim, so
/// the dot shows without any page stylesheet.
pub fn trail_fill_css(color: Rgba) -> String {
    format!(
        "radial-gradient(circle, {} 0%, {} 100%)",
        color.css(),
        color.with_alpha(0.0).css()
    )
}

/// Inline `transform` centring an element of `size` px on `pos`.
pub fn centered_transform(pos: Vec2, size: f32) -> String {
    let half = size * 0.5;
    format!("translate({:.1}px, {:.1}px)", pos.x - half, pos.y - half)
}

/// Inline `transform` centring the glow element on `glow`, whatever its size.
pub fn glow_transform(glow: Vec2) -> String {
    format!(
        "translate({:.1}px, {:.1}px) translate(-50%, -50%)",
        glow.x, glow.y
    )
}
