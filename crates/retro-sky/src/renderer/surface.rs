//! Drawing surface contract.
//!
//! Loops only ever talk to a `Surface`; the browser bridge implements it on
//! top of a canvas 2D context, and [`FrameBuffer`](super::instance::FrameBuffer)
//! records the same calls for headless hosts and tests.

use glam::Vec2;

use super::color::Color;

/// One stop of a gradient: `offset` in 0.0 - 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Color,
}

impl ColorStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Radial gradient between two concentric circles, filling the whole surface.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub stops: Vec<ColorStop>,
}

/// Immediate-mode 2D drawing surface.
pub trait Surface {
    /// Surface width in pixels.
    fn width(&self) -> f32;
    /// Surface height in pixels.
    fn height(&self) -> f32;
    /// Clear every pixel to transparent.
    fn clear(&mut self);
    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    /// Fill the whole surface with a radial gradient.
    fn fill_radial_gradient(&mut self, gradient: &RadialGradient);
}
