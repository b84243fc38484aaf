use crate::config::MIN_PIXEL_UNIT;

use super::color::Color;
use super::surface::Surface;

/// Coarse pixel grid. Every rect origin is floored onto the grid before it
/// reaches the surface, giving the low-resolution look.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelGrid {
    pub unit: f32,
}

impl PixelGrid {
    /// Units below [`MIN_PIXEL_UNIT`] (or not finite) fall back to it, so
    /// loops stepping by the unit always terminate.
    pub fn new(unit: f32) -> Self {
        let unit = if unit.is_finite() {
            unit.max(MIN_PIXEL_UNIT)
        } else {
            MIN_PIXEL_UNIT
        };
        Self { unit }
    }

    /// Floor `v` to the nearest lower multiple of the unit.
    #[inline]
    pub fn snap(&self, v: f32) -> f32 {
        (v / self.unit).floor() * self.unit
    }

    /// Fill a rect whose origin is snapped; size is passed through untouched.
    #[inline]
    pub fn fill(&self, surface: &mut dyn Surface, x: f32, y: f32, w: f32, h: f32, color: Color) {
        surface.fill_rect(self.snap(x), self.snap(y), w, h, color);
    }

    /// Fill one grid cell (unit × unit) containing (x, y).
    #[inline]
    pub fn cell(&self, surface: &mut dyn Surface, x: f32, y: f32, color: Color) {
        self.fill(surface, x, y, self.unit, self.unit, color);
    }
}
