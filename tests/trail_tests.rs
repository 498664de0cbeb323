// Host-side tests for the cursor glow and trail particles.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod fx {
    pub mod color {
        include!("../src/core/color.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod trail {
        include!("../src/core/trail.rs");
    }
}

use fx::trail::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Moves back and forth by `step` px so every sample after the first has that speed.
fn wiggle(trail: &mut CursorTrail, rng: &mut StdRng, moves: usize, step: f32) -> usize {
    let mut spawned = 0;
    for i in 0..moves {
        let x = if i % 2 == 0 { 100.0 } else { 100.0 + step };
        if trail.pointer_moved(Vec2::new(x, 100.0), rng).is_some() {
            spawned += 1;
        }
    }
    spawned
}

#[test]
fn first_sample_never_spawns() {
    let mut trail = CursorTrail::new(TrailConfig::default());
    let mut rng = rng();
    assert!(trail.pointer_moved(Vec2::new(500.0, 500.0), &mut rng).is_none());
    assert_eq!(trail.live_count(), 0);
    assert_eq!(trail.pointer(), Some(Vec2::new(500.0, 500.0)));
}

#[test]
fn slow_moves_do_not_spawn() {
    let mut trail = CursorTrail::new(TrailConfig::default());
    let mut rng = rng();
    // Exactly at the threshold is not above it
    assert_eq!(wiggle(&mut trail, &mut rng, 30, 5.0), 0);
    assert_eq!(trail.live_count(), 0);
}

#[test]
fn fast_move_at_nineteen_live_fills_cap_then_suppresses() {
    let mut trail = CursorTrail::new(TrailConfig::default());
    let mut rng = rng();
    trail.pointer_moved(Vec2::new(100.0, 100.0), &mut rng);
    let mut x = 100.0;
    for _ in 0..19 {
        x += 6.0;
        assert!(trail.pointer_moved(Vec2::new(x, 100.0), &mut rng).is_some());
    }
    assert_eq!(trail.live_count(), 19);

    x += 6.0;
    let p = trail
        .pointer_moved(Vec2::new(x, 100.0), &mut rng)
        .cloned()
        .expect("20th particle");
    assert_eq!(p.pos, Vec2::new(x, 100.0));
    assert_eq!(trail.live_count(), 20);

    x += 6.0;
    assert!(trail.pointer_moved(Vec2::new(x, 100.0), &mut rng).is_none());
    assert_eq!(trail.live_count(), 20);
}

#[test]
fn spawning_resumes_once_particles_expire() {
    let mut trail = CursorTrail::new(TrailConfig::default());
    let mut rng = rng();
    wiggle(&mut trail, &mut rng, 40, 10.0);
    assert_eq!(trail.live_count(), 20);

    let mut expired = Vec::new();
    // Slowest decay is 0.02/frame, so 60 frames clears everything
    for _ in 0..60 {
        trail.step(&mut expired);
    }
    assert_eq!(trail.live_count(), 0);
    assert_eq!(expired.len(), 20);
    assert!(wiggle(&mut trail, &mut rng, 3, 10.0) > 0);
}

#[test]
fn spawned_particles_are_randomised_within_ranges() {
    let mut trail = CursorTrail::new(TrailConfig::default());
    let mut rng = rng();
    wiggle(&mut trail, &mut rng, 21, 8.0);
    let ids: Vec<u64> = trail.particles().iter().map(|p| p.id).collect();
    let mut unique = ids.clone();
    unique.dedup();
    assert_eq!(ids, unique);
    for p in trail.particles() {
        assert!(p.size >= 2.0 && p.size <= 6.0);
        assert!(p.decay >= 0.02 && p.decay <= 0.05);
        assert!(p.vel.x.abs() <= 1.0 && p.vel.y.abs() <= 1.0);
        assert_eq!(p.opacity, 1.0);
    }
}

#[test]
fn opacity_strictly_decreases_and_removal_happens_once() {
    let mut trail = CursorTrail::new(TrailConfig::default());
    let mut rng = rng();
    wiggle(&mut trail, &mut rng, 2, 20.0);
    assert_eq!(trail.live_count(), 1);
    let id = trail.particles()[0].id;

    let mut expired = Vec::new();
    let mut prev = trail.particles()[0].opacity;
    let mut frames = 0;
    while trail.live_count() > 0 {
        trail.step(&mut expired);
        frames += 1;
        if let Some(p) = trail.particles().first() {
            assert!(p.opacity < prev);
            assert!(p.opacity > 0.0);
            prev = p.opacity;
        }
        assert!(frames <= 60, "particle never expired");
    }
    assert_eq!(expired, vec![id]);

    for _ in 0..10 {
        trail.step(&mut expired);
    }
    assert_eq!(expired, vec![id]);
}

#[test]
fn particles_drift_with_their_velocity() {
    let mut trail = CursorTrail::new(TrailConfig::default());
    let mut rng = rng();
    wiggle(&mut trail, &mut rng, 2, 20.0);
    let before = trail.particles()[0].clone();
    let mut expired = Vec::new();
    trail.step(&mut expired);
    let after = &trail.particles()[0];
    assert!((after.pos - (before.pos + before.vel)).length() < 1e-5);
}

#[test]
fn glow_eases_toward_pointer_without_jumping() {
    let mut trail = CursorTrail::new(TrailConfig::default());
    let mut rng = rng();
    let mut expired = Vec::new();

    // No pointer yet: the glow stays put
    trail.step(&mut expired);
    assert_eq!(trail.glow(), Vec2::ZERO);

    trail.pointer_moved(Vec2::new(100.0, 0.0), &mut rng);
    trail.step(&mut expired);
    assert!((trail.glow().x - 100.0).abs() < 1e-4);

    trail.pointer_moved(Vec2::new(200.0, 0.0), &mut rng);
    trail.step(&mut expired);
    assert!((trail.glow().x - 110.0).abs() < 1e-4);

    let mut prev = trail.glow().x;
    for _ in 0..100 {
        trail.step(&mut expired);
        let x = trail.glow().x;
        assert!(x > prev && x < 200.0);
        assert!(x - prev <= (200.0 - prev) * 0.1 + 1e-4);
        prev = x;
    }
    assert!(200.0 - prev < 0.01);
}

#[test]
fn glow_appears_at_first_pointer_sample() {
    let mut trail = CursorTrail::new(TrailConfig::default());
    let mut rng = rng();
    let mut expired = Vec::new();
    trail.pointer_moved(Vec2::new(800.0, 400.0), &mut rng);
    assert_eq!(trail.glow(), Vec2::new(800.0, 400.0));
    for _ in 0..10 {
        trail.step(&mut expired);
        assert!(trail.glow().distance(Vec2::new(800.0, 400.0)) < 1e-3);
    }

    // Later moves ease rather than jump
    trail.pointer_moved(Vec2::new(900.0, 400.0), &mut rng);
    assert_eq!(trail.glow(), Vec2::new(800.0, 400.0));
    trail.step(&mut expired);
    assert!((trail.glow().x - 810.0).abs() < 1e-3);
}

#[test]
fn trail_dots_carry_their_own_fill() {
    use fx::color::BRAND_CYAN;
    let fill = trail_fill_css(TRAIL_COLOR);
    assert_eq!(TRAIL_COLOR, BRAND_CYAN);
    assert_eq!(
        fill,
        "radial-gradient(circle, rgba(0, 198, 255, 1) 0%, rgba(0, 198, 255, 0) 100%)"
    );
}

#[test]
fn glow_and_dots_are_centred_on_their_point() {
    assert_eq!(
        glow_transform(Vec2::new(120.0, 45.5)),
        "translate(120.0px, 45.5px) translate(-50%, -50%)"
    );
    assert_eq!(
        centered_transform(Vec2::new(100.0, 50.0), 4.0),
        "translate(98.0px, 48.0px)"
    );
}
