use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec2;

use crate::renderer::{Color, PixelGrid, Surface};
use crate::systems::rng::Rng;

pub const ROCK_COLOR: Color = Color::hex(0x8B7355);
pub const CRATER_COLOR: Color = Color::hex(0x6B5345);

/// Fixed pixel silhouettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsteroidShape {
    /// Solid size × size block.
    Block,
    /// Two overlapping bars forming an L.
    Ell,
    /// Four cells around the centre, turning with the rotation.
    Cross,
}

impl AsteroidShape {
    pub const ALL: [AsteroidShape; 3] = [Self::Block, Self::Ell, Self::Cross];

    /// Shape id 0 - 2.
    pub fn id(self) -> u8 {
        self as u8
    }
}

/// A tumbling rock that wraps around every edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    pub pos: Vec2,
    /// Edge length in surface pixels (4 - 11). Also the wrap margin.
    pub size: f32,
    pub velocity: Vec2,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub shape: AsteroidShape,
}

impl Asteroid {
    pub const MAX_SPEED: f32 = 0.25;
    pub const MAX_SPIN: f32 = 0.025;

    pub fn spawn(rng: &mut Rng, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(rng.range(0.0, width), rng.range(0.0, height)),
            size: (rng.next_int(8) + 4) as f32,
            velocity: Vec2::new(rng.symmetric(Self::MAX_SPEED), rng.symmetric(Self::MAX_SPEED)),
            rotation: rng.range(0.0, TAU),
            rotation_speed: rng.symmetric(Self::MAX_SPIN),
            shape: *rng.pick(&AsteroidShape::ALL),
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface, grid: PixelGrid) {
        let (x, y, s) = (self.pos.x, self.pos.y, self.size);
        match self.shape {
            AsteroidShape::Block => grid.fill(surface, x, y, s, s, ROCK_COLOR),
            AsteroidShape::Ell => {
                grid.fill(surface, x, y, s, s * 1.5, ROCK_COLOR);
                grid.fill(surface, x, y, s * 1.5, s, ROCK_COLOR);
            }
            AsteroidShape::Cross => {
                let cell = grid.unit * 2.0;
                for i in 0..4 {
                    let angle = FRAC_PI_2 * i as f32 + self.rotation;
                    let p = self.pos + Vec2::new(angle.cos(), angle.sin()) * s * 0.7;
                    grid.fill(surface, p.x, p.y, cell, cell, ROCK_COLOR);
                }
            }
        }
        grid.cell(surface, x + 2.0, y + 2.0, CRATER_COLOR);
    }

    /// Move, spin, and wrap. Leaving by more than `size` past an edge
    /// re-enters just outside the opposite edge.
    pub fn advance(&mut self, width: f32, height: f32) {
        self.pos += self.velocity;
        self.rotation += self.rotation_speed;
        self.pos = wrap(self.pos, width, height, self.size);
    }
}

/// Wrap `pos` into `[-margin, dim + margin]` on both axes.
pub fn wrap(mut pos: Vec2, width: f32, height: f32, margin: f32) -> Vec2 {
    if pos.x < -margin {
        pos.x = width + margin;
    }
    if pos.x > width + margin {
        pos.x = -margin;
    }
    if pos.y < -margin {
        pos.y = height + margin;
    }
    if pos.y > height + margin {
        pos.y = -margin;
    }
    pos
}
