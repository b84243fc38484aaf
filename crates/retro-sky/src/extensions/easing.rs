// extensions/easing.rs
//
// Easing curves for the splash exit transition. Pure math.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant velocity (no easing).
    Linear,
    /// Slow end.
    QuadOut,
    /// Stronger slow end. Closest to CSS `ease-out`.
    #[default]
    CubicOut,
    /// Slow start and end.
    CubicInOut,
    /// Sine-shaped slow end.
    SineOut,
    /// Exponential slow end (dramatic).
    ExpoOut,
}

impl Easing {
    /// Apply the easing function to a normalized time value `t`.
    /// `t` is clamped to [0, 1]; the result is in [0, 1].
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::SineOut => (t * PI / 2.0).sin(),
            Easing::ExpoOut => {
                if t == 1.0 { 1.0 } else { 1.0 - 2.0_f32.powf(-10.0 * t) }
            }
        }
    }
}

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Interpolate with easing.
#[inline]
pub fn ease(a: f32, b: f32, t: f32, easing: Easing) -> f32 {
    lerp(a, b, easing.apply(t))
}
