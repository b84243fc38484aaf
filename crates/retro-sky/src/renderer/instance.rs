use bytemuck::{Pod, Zeroable};

use super::color::Color;
use super::surface::{RadialGradient, Surface};

/// One filled rectangle. 8 floats = 32 bytes stride, so the rect list can be
/// handed to JS as a flat `Float32Array`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RectInstance {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl RectInstance {
    pub fn new(x: f32, y: f32, w: f32, h: f32, color: Color) -> Self {
        Self {
            x,
            y,
            w,
            h,
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        }
    }

    pub fn color(&self) -> Color {
        Color::new(self.r, self.g, self.b, self.a)
    }
}

/// What lies underneath the rects of a frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Backdrop {
    /// Nothing drawn yet this frame; previous pixels stay.
    #[default]
    Keep,
    /// Cleared to transparent.
    Cleared,
    /// Covered by a radial gradient.
    Gradient(RadialGradient),
}

/// Recording surface: one backdrop followed by rects in paint order.
///
/// A full-surface clear or gradient hides everything painted before it, so
/// either one resets the rect list.
pub struct FrameBuffer {
    width: f32,
    height: f32,
    backdrop: Backdrop,
    rects: Vec<RectInstance>,
}

impl FrameBuffer {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            backdrop: Backdrop::Keep,
            rects: Vec::with_capacity(4096),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Forget the previous frame without painting anything.
    pub fn reset(&mut self) {
        self.backdrop = Backdrop::Keep;
        self.rects.clear();
    }

    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    pub fn rects(&self) -> &[RectInstance] {
        &self.rects
    }

    pub fn rect_count(&self) -> u32 {
        self.rects.len() as u32
    }

    /// Rect data as a flat float slice (x, y, w, h, r, g, b, a per rect).
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.rects)
    }

    /// Number of rects painted in exactly this color.
    pub fn count_color(&self, color: Color) -> usize {
        self.rects.iter().filter(|r| r.color() == color).count()
    }

    /// Paint the recorded frame onto another surface.
    pub fn replay(&self, target: &mut dyn Surface) {
        match &self.backdrop {
            Backdrop::Keep => {}
            Backdrop::Cleared => target.clear(),
            Backdrop::Gradient(g) => target.fill_radial_gradient(g),
        }
        for r in &self.rects {
            target.fill_rect(r.x, r.y, r.w, r.h, r.color());
        }
    }
}

impl Surface for FrameBuffer {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self) {
        self.rects.clear();
        self.backdrop = Backdrop::Cleared;
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.rects.push(RectInstance::new(x, y, w, h, color));
    }

    fn fill_radial_gradient(&mut self, gradient: &RadialGradient) {
        self.rects.clear();
        self.backdrop = Backdrop::Gradient(gradient.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::surface::ColorStop;
    use glam::Vec2;

    #[test]
    fn rect_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<RectInstance>(), 32);
        assert_eq!(std::mem::size_of::<RectInstance>(), 8 * std::mem::size_of::<f32>());
    }

    #[test]
    fn records_rects_in_order() {
        let mut fb = FrameBuffer::new(100.0, 100.0);
        fb.fill_rect(0.0, 0.0, 4.0, 4.0, Color::WHITE);
        fb.fill_rect(8.0, 8.0, 4.0, 4.0, Color::BLACK);
        assert_eq!(fb.rect_count(), 2);
        assert_eq!(fb.rects()[1].x, 8.0);
        assert_eq!(fb.as_floats().len(), 16);
        assert_eq!(fb.count_color(Color::BLACK), 1);
    }

    #[test]
    fn clear_and_gradient_reset_rects() {
        let mut fb = FrameBuffer::new(100.0, 100.0);
        fb.fill_rect(0.0, 0.0, 4.0, 4.0, Color::WHITE);
        fb.clear();
        assert_eq!(fb.rect_count(), 0);
        assert_eq!(fb.backdrop(), &Backdrop::Cleared);

        fb.fill_rect(0.0, 0.0, 4.0, 4.0, Color::WHITE);
        let g = RadialGradient {
            center: Vec2::new(50.0, 50.0),
            inner_radius: 0.0,
            outer_radius: 100.0,
            stops: vec![ColorStop::new(0.0, Color::BLACK)],
        };
        fb.fill_radial_gradient(&g);
        assert_eq!(fb.rect_count(), 0);
        assert!(matches!(fb.backdrop(), Backdrop::Gradient(_)));
    }

    #[test]
    fn replay_reproduces_frame() {
        let mut src = FrameBuffer::new(10.0, 10.0);
        src.clear();
        src.fill_rect(1.0, 2.0, 3.0, 4.0, Color::WHITE);

        let mut dst = FrameBuffer::new(10.0, 10.0);
        dst.fill_rect(9.0, 9.0, 1.0, 1.0, Color::BLACK);
        src.replay(&mut dst);
        assert_eq!(dst.backdrop(), &Backdrop::Cleared);
        assert_eq!(dst.rects(), src.rects());
    }
}
