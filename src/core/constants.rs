// Tuning values shared by the effects and the page glue.
// Everything here is plain data so host tests can include it directly.

// Viewport
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0; // at or below this width the page is "mobile"
pub const RESIZE_DEBOUNCE_MS: i32 = 250;

// Waves
pub const WAVE_SAMPLE_STEP_PX: u32 = 2;
pub const HERO_TIME_STEP: f32 = 0.015;
pub const CTA_TIME_STEP: f32 = 0.01;
pub const WAVE_DOT_SPACING_PX: f32 = 50.0; // one pulsing dot per this many px of width
pub const WAVE_DOTS_MAX: usize = 64;

// Particle field
pub const FIELD_AREA_PER_PARTICLE: f64 = 15_000.0;
pub const FIELD_MAX_PARTICLES: usize = 80;
pub const FIELD_LINK_DISTANCE: f32 = 150.0;
pub const FIELD_REPULSION_RADIUS: f32 = 150.0;
pub const FIELD_REPULSION_STRENGTH: f32 = 0.02;
pub const FIELD_MAX_DRIFT: f32 = 0.25; // per-axis speed, px/frame
pub const FIELD_RADIUS_MIN: f32 = 1.0;
pub const FIELD_RADIUS_MAX: f32 = 3.0;
pub const FIELD_OPACITY_MIN: f32 = 0.2;
pub const FIELD_OPACITY_MAX: f32 = 0.7;
pub const FIELD_LINK_ALPHA_MAX: f32 = 0.2; // line alpha at zero distance
pub const FIELD_GLOW_SCALE: f32 = 3.0; // glow radius relative to particle radius

// Cursor trail
pub const TRAIL_FOLLOW: f32 = 0.1; // fraction of remaining distance covered per frame
pub const TRAIL_SPAWN_SPEED: f32 = 5.0; // px moved between samples
pub const TRAIL_MAX_LIVE: usize = 20;
pub const TRAIL_SIZE_MIN: f32 = 2.0;
pub const TRAIL_SIZE_MAX: f32 = 6.0;
pub const TRAIL_DECAY_MIN: f32 = 0.02;
pub const TRAIL_DECAY_MAX: f32 = 0.05;
pub const TRAIL_MAX_SPREAD: f32 = 1.0; // per-axis initial speed, px/frame

// Page glue
pub const ANCHOR_EXTRA_OFFSET_PX: f64 = 20.0; // gap left below the fixed header
pub const FADE_STAGGER_GROUP: usize = 5;
pub const FADE_STAGGER_STEP_SEC: f64 = 0.1;
pub const COUNTER_DURATION_MS: f64 = 2000.0;
