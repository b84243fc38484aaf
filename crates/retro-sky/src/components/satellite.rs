use glam::Vec2;

use crate::components::asteroid::wrap;
use crate::renderer::{Color, PixelGrid, Surface};
use crate::systems::rng::Rng;

pub const BODY_COLOR: Color = Color::hex(0xC0C0C0);
pub const PANEL_COLOR: Color = Color::hex(0x4169E1);
pub const ANTENNA_COLOR: Color = Color::hex(0x808080);
pub const BEACON_COLOR: Color = Color::hex(0xFF0000);

/// A drifting satellite sprite with a blinking beacon.
#[derive(Debug, Clone, PartialEq)]
pub struct Satellite {
    pub pos: Vec2,
    pub velocity: Vec2,
    /// Beacon lit.
    pub blink: bool,
}

impl Satellite {
    pub const MAX_SPEED: f32 = 0.5;

    pub fn spawn(rng: &mut Rng, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(rng.range(0.0, width), rng.range(0.0, height)),
            velocity: Vec2::new(rng.symmetric(Self::MAX_SPEED), rng.symmetric(Self::MAX_SPEED)),
            blink: rng.chance(0.5),
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface, grid: PixelGrid) {
        let u = grid.unit;
        let (x, y) = (self.pos.x, self.pos.y);

        grid.fill(surface, x, y, u * 4.0, u * 3.0, BODY_COLOR);
        grid.fill(surface, x - u * 3.0, y + u, u * 2.0, u, PANEL_COLOR);
        grid.fill(surface, x + u * 5.0, y + u, u * 2.0, u, PANEL_COLOR);
        grid.fill(surface, x + u * 2.0, y - u * 2.0, u, u * 2.0, ANTENNA_COLOR);

        if self.blink {
            grid.cell(surface, x + u, y + u, BEACON_COLOR);
        }
    }

    /// Toggle the beacon with probability `blink_chance`, move, and wrap
    /// with a fixed `margin` past each edge.
    pub fn advance(&mut self, rng: &mut Rng, blink_chance: f32, width: f32, height: f32, margin: f32) {
        if rng.chance(blink_chance) {
            self.blink = !self.blink;
        }
        self.pos = wrap(self.pos + self.velocity, width, height, margin);
    }
}
