use super::constants::*;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldConfig {
    pub area_per_particle: f64,
    pub max_particles: usize,
    pub link_distance: f32,
    pub repulsion_radius: f32,
    pub repulsion_strength: f32,
    pub max_drift: f32,
    pub radius_range: (f32, f32),
    pub opacity_range: (f32, f32),
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            area_per_particle: FIELD_AREA_PER_PARTICLE,
            max_particles: FIELD_MAX_PARTICLES,
            link_distance: FIELD_LINK_DISTANCE,
            repulsion_radius: FIELD_REPULSION_RADIUS,
            repulsion_strength: FIELD_REPULSION_STRENGTH,
            max_drift: FIELD_MAX_DRIFT,
            radius_range: (FIELD_RADIUS_MIN, FIELD_RADIUS_MAX),
            opacity_range: (FIELD_OPACITY_MIN, FIELD_OPACITY_MAX),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Where the particle was seeded on the last regeneration.
    pub base: Vec2,
    pub radius: f32,
    pub vel: Vec2,
    pub opacity: f32,
}

/// A connection between particles `a < b`, with `opacity` in (0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub opacity: f32,
}

/// Number of particles for a surface: one per `area_per_particle` px², capped.
pub fn particle_count(width: f32, height: f32, cfg: &FieldConfig) -> usize {
    if width.is_nan() || height.is_nan() || width <= 0.0 || height <= 0.0 {
        return 0;
    }
    let area = width as f64 * height as f64;
    ((area / cfg.area_per_particle).floor() as usize).min(cfg.max_particles)
}

/// Line strength for two points `distance` apart: `None` at or beyond the
/// threshold, otherwise `1 - distance / threshold`.
#[inline]
pub fn link_opacity(distance: f32, threshold: f32) -> Option<f32> {
    (distance < threshold).then(|| 1.0 - distance / threshold)
}

/// Drifting particles that link up when close and shy away from the pointer.
#[derive(Clone, Debug)]
pub struct ParticleField {
    pub config: FieldConfig,
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    pointer: Option<Vec2>,
}

impl ParticleField {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config,
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            pointer: None,
        }
    }

    /// Resumes from an existing particle set (no regeneration).
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn from_parts(config: FieldConfig, width: f32, height: f32, particles: Vec<Particle>) -> Self {
        Self {
            config,
            width: width.max(0.0),
            height: height.max(0.0),
            particles,
            pointer: None,
        }
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn set_pointer(&mut self, pos: Vec2) {
        self.pointer = Some(pos);
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    /// Adopts a new surface size and regenerates every particle so density keeps
    /// tracking area.
    pub fn resize<R: Rng>(&mut self, width: f32, height: f32, rng: &mut R) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let count = particle_count(self.width, self.height, &self.config);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let p = self.spawn(rng);
            self.particles.push(p);
        }
    }

    fn spawn<R: Rng>(&self, rng: &mut R) -> Particle {
        let cfg = &self.config;
        let pos = Vec2::new(
            rng.gen::<f32>() * self.width,
            rng.gen::<f32>() * self.height,
        );
        let drift = cfg.max_drift;
        Particle {
            pos,
            base: pos,
            radius: lerp(cfg.radius_range, rng.gen()),
            vel: Vec2::new(
                (rng.gen::<f32>() * 2.0 - 1.0) * drift,
                (rng.gen::<f32>() * 2.0 - 1.0) * drift,
            ),
            opacity: lerp(cfg.opacity_range, rng.gen()),
        }
    }

    /// Every pair closer than the link distance, scanned in index order (i < j).
    /// Quadratic in the particle count, which the cap keeps small.
    pub fn links(&self, out: &mut Vec<Link>) {
        out.clear();
        let threshold = self.config.link_distance;
        let n = self.particles.len();
        for a in 0..n {
            for b in (a + 1)..n {
                let d = self.particles[a].pos.distance(self.particles[b].pos);
                if let Some(opacity) = link_opacity(d, threshold) {
                    out.push(Link { a, b, opacity });
                }
            }
        }
    }

    /// One simulation frame: drift, pointer repulsion, then edge bounce.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        let radius = self.config.repulsion_radius;
        let strength = self.config.repulsion_strength;
        for p in &mut self.particles {
            p.pos += p.vel;

            if let Some(pointer) = self.pointer {
                let delta = p.pos - pointer;
                let dist = delta.length();
                if dist < radius {
                    let force = (radius - dist) / radius;
                    p.pos += delta * force * strength;
                }
            }

            if p.pos.x < 0.0 || p.pos.x > w {
                p.vel.x = -p.vel.x;
            }
            if p.pos.y < 0.0 || p.pos.y > h {
                p.vel.y = -p.vel.y;
            }
            p.pos.x = p.pos.x.clamp(0.0, w);
            p.pos.y = p.pos.y.clamp(0.0, h);
        }
    }
}

#[inline]
fn lerp((lo, hi): (f32, f32), t: f32) -> f32 {
    lo + (hi - lo) * t
}
