use std::f32::consts::{PI, TAU};

use glam::Vec2;

use crate::renderer::{Color, PixelGrid, Surface};
use crate::systems::rng::Rng;

pub const GALAXY_PALETTE: [Color; 5] = [
    Color::hex(0x9D4EDD),
    Color::hex(0x7209B7),
    Color::hex(0xF72585),
    Color::hex(0x4361EE),
    Color::hex(0x3A86FF),
];

/// Points traced along each spiral.
pub const SPIRAL_POINTS: usize = 50;

/// A slowly turning pixel spiral.
#[derive(Debug, Clone, PartialEq)]
pub struct Galaxy {
    pub pos: Vec2,
    /// Spiral reach in surface pixels (30 - 49).
    pub size: f32,
    /// Radians; unbounded.
    pub rotation: f32,
    pub rotation_speed: f32,
    pub color: Color,
}

impl Galaxy {
    pub fn spawn(rng: &mut Rng, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(rng.range(0.0, width), rng.range(0.0, height)),
            size: (rng.next_int(20) + 30) as f32,
            rotation: rng.range(0.0, TAU),
            rotation_speed: rng.symmetric(0.001),
            color: *rng.pick(&GALAXY_PALETTE),
        }
    }

    /// Position of spiral point `i`: two full turns outward from the core.
    pub fn spiral_point(&self, i: usize) -> Vec2 {
        let t = i as f32 / SPIRAL_POINTS as f32;
        let angle = t * PI * 4.0 + self.rotation;
        let distance = t * self.size;
        self.pos + Vec2::new(angle.cos(), angle.sin()) * distance
    }

    pub fn draw(&self, surface: &mut dyn Surface, grid: PixelGrid) {
        let u = grid.unit;
        for i in 0..SPIRAL_POINTS {
            let p = self.spiral_point(i);
            let opacity = 1.0 - i as f32 / SPIRAL_POINTS as f32;
            grid.fill(surface, p.x, p.y, u * 2.0, u * 2.0, self.color.with_alpha8(opacity));
        }
        grid.fill(surface, self.pos.x, self.pos.y, u * 3.0, u * 3.0, Color::WHITE);
    }

    pub fn advance(&mut self) {
        self.rotation += self.rotation_speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::FrameBuffer;

    fn galaxy() -> Galaxy {
        Galaxy {
            pos: Vec2::new(200.0, 200.0),
            size: 40.0,
            rotation: 0.0,
            rotation_speed: 0.001,
            color: GALAXY_PALETTE[0],
        }
    }

    #[test]
    fn spawn_ranges() {
        let mut rng = Rng::new(17);
        for _ in 0..300 {
            let g = Galaxy::spawn(&mut rng, 800.0, 600.0);
            assert!((30.0..50.0).contains(&g.size), "size {}", g.size);
            assert!((0.0..TAU).contains(&g.rotation));
            assert!(g.rotation_speed.abs() <= 0.001);
            assert!(GALAXY_PALETTE.contains(&g.color));
        }
    }

    #[test]
    fn spiral_starts_at_core_and_reaches_out() {
        let g = galaxy();
        assert_eq!(g.spiral_point(0), g.pos);
        let last = g.spiral_point(SPIRAL_POINTS - 1);
        let reach = (last - g.pos).length();
        assert!((reach - 40.0 * 49.0 / 50.0).abs() < 1e-3, "reach {}", reach);
    }

    #[test]
    fn draw_emits_spiral_then_core() {
        let mut fb = FrameBuffer::new(400.0, 400.0);
        galaxy().draw(&mut fb, PixelGrid::new(4.0));
        assert_eq!(fb.rects().len(), SPIRAL_POINTS + 1);
        let first = fb.rects()[0];
        let tail = fb.rects()[SPIRAL_POINTS - 1];
        assert!(first.a > tail.a, "opacity should fade outward");
        let core = fb.rects()[SPIRAL_POINTS];
        assert_eq!(core.color(), Color::WHITE);
        assert_eq!(core.w, 12.0);
    }

    #[test]
    fn rotation_accumulates() {
        let mut g = galaxy();
        for _ in 0..1000 {
            g.advance();
        }
        assert!((g.rotation - 1.0).abs() < 1e-3, "rotation {}", g.rotation);
    }
}
