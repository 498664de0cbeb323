/// 8-bit RGB with a float alpha, matching what the 2-D canvas accepts as a CSS colour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same hue, different alpha (clamped to 0..=1).
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `rgba(...)` form, e.g. `rgba(0, 113, 227, 0.15)`.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

// Brand palette
pub const BRAND_BLUE: Rgba = Rgba::new(0, 113, 227, 1.0);
pub const BRAND_CYAN: Rgba = Rgba::new(0, 198, 255, 1.0);
pub const BRAND_VIOLET: Rgba = Rgba::new(124, 58, 237, 1.0);
pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);
