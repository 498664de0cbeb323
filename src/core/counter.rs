use super::constants::COUNTER_DURATION_MS;

/// Quartic ease-out on `p` in 0..=1 (clamped).
#[inline]
pub fn ease_out_quart(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// Reads a numeric attribute; anything missing, unparsable, non-finite or
/// negative counts as zero.
pub fn parse_target(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0)
}

/// Duration override in milliseconds; falls back to the default when absent or not positive.
pub fn parse_duration(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(COUNTER_DURATION_MS)
}

/// Count-up from zero to `target` over `duration_ms`, eased by elapsed time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Counter {
    pub target: f64,
    pub duration_ms: f64,
}

impl Counter {
    pub fn new(target: f64, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
        }
    }

    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }

    /// Whole value shown after `elapsed_ms`. Exactly `target` once the duration has passed.
    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 || self.is_done(elapsed_ms) {
            return self.target;
        }
        let eased = ease_out_quart(elapsed_ms / self.duration_ms);
        (self.target * eased).floor().min(self.target)
    }

    pub fn text_at(&self, elapsed_ms: f64, suffix: &str) -> String {
        format!("{}{}", self.value_at(elapsed_ms), suffix)
    }
}
