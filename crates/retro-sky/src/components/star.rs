use glam::Vec2;

use crate::renderer::{Color, PixelGrid, Surface};
use crate::systems::rng::Rng;

/// A background star drifting slowly to the right.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    /// Edge length in surface pixels (1, 2 or 3).
    pub size: f32,
    pub twinkle: bool,
    /// Phase offset for the twinkle, 0.0 - 1.0.
    pub brightness: f32,
    /// Horizontal drift per step.
    pub speed: f32,
}

impl Star {
    pub const MAX_SPEED: f32 = 0.1;

    pub fn spawn(rng: &mut Rng, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(rng.range(0.0, width), rng.range(0.0, height)),
            size: (rng.next_int(3) + 1) as f32,
            twinkle: rng.chance(0.5),
            brightness: rng.next_f32(),
            speed: rng.range(0.0, Self::MAX_SPEED),
        }
    }

    /// Current opacity. Twinkling stars pulse with time; the rest stay opaque.
    pub fn opacity(&self, elapsed_ms: f64) -> f32 {
        if !self.twinkle {
            return 1.0;
        }
        let phase = elapsed_ms * 0.003 + self.brightness as f64 * 10.0;
        ((phase.sin() + 1.0) / 2.0) as f32
    }

    pub fn draw(&self, surface: &mut dyn Surface, grid: PixelGrid, elapsed_ms: f64) {
        let color = Color::WHITE.with_alpha(self.opacity(elapsed_ms));
        grid.fill(surface, self.pos.x, self.pos.y, self.size, self.size, color);
    }

    /// Drift right; wrap to the left edge once past `width`.
    pub fn advance(&mut self, width: f32) {
        self.pos.x += self.speed;
        if self.pos.x > width {
            self.pos.x = 0.0;
        }
    }
}
