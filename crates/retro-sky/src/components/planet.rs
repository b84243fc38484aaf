use glam::Vec2;

use crate::renderer::{Color, PixelGrid, Surface};
use crate::systems::rng::Rng;

pub const PLANET_PALETTE: [Color; 5] = [
    Color::hex(0xE07A5F),
    Color::hex(0x81B29A),
    Color::hex(0xF2CC8F),
    Color::hex(0x3D5A80),
    Color::hex(0x98C1D9),
];

pub const RING_COLOR: Color = Color::hex(0x8B7355);
pub const SHADOW_COLOR: Color = Color::hex_alpha(0x00000066);

/// Ring half-axes relative to the planet radius.
const RING_HALF_WIDTH: f32 = 1.5;
const RING_HALF_HEIGHT: f32 = 0.3;
/// Ring band bounds in normalized ellipse distance.
const RING_INNER: f32 = 0.7;
const RING_OUTER: f32 = 1.0;

/// A static planet, optionally ringed.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub pos: Vec2,
    /// Radius in surface pixels (20 - 34).
    pub radius: f32,
    pub color: Color,
    pub has_ring: bool,
    pub ring_color: Color,
}

impl Planet {
    pub fn spawn(rng: &mut Rng, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(rng.range(0.0, width), rng.range(0.0, height)),
            radius: (rng.next_int(15) + 20) as f32,
            color: *rng.pick(&PLANET_PALETTE),
            has_ring: rng.chance(0.5),
            ring_color: RING_COLOR,
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface, grid: PixelGrid) {
        let r = self.radius;
        let u = grid.unit;

        // Body
        for_each_step(-r, r, u, |dy| {
            for_each_step(-r, r, u, |dx| {
                if dx.hypot(dy) <= r {
                    grid.cell(surface, self.pos.x + dx, self.pos.y + dy, self.color);
                }
            });
        });

        // Shadow over the lower-right side
        for_each_step(-r / 2.0, r, u, |dy| {
            for_each_step(r / 4.0, r, u, |dx| {
                if dx.hypot(dy) <= r {
                    grid.cell(surface, self.pos.x + dx, self.pos.y + dy, SHADOW_COLOR);
                }
            });
        });

        if self.has_ring {
            self.draw_ring(surface, grid);
        }
    }

    fn draw_ring(&self, surface: &mut dyn Surface, grid: PixelGrid) {
        let half_w = self.radius * RING_HALF_WIDTH;
        let half_h = self.radius * RING_HALF_HEIGHT;
        let u = grid.unit;

        for_each_step(-half_w, half_w, u, |dx| {
            for_each_step(-half_h, half_h, u, |dy| {
                if self.ring_covers(dx, dy) {
                    grid.cell(surface, self.pos.x + dx, self.pos.y + dy, self.ring_color);
                }
            });
        });
    }

    /// Whether the ring shows at offset (dx, dy) from the centre: inside the
    /// band and not hidden behind the body's lower half.
    pub fn ring_covers(&self, dx: f32, dy: f32) -> bool {
        let half_w = self.radius * RING_HALF_WIDTH;
        let half_h = self.radius * RING_HALF_HEIGHT;
        let d = ((dx / half_w).powi(2) + (dy / half_h).powi(2)).sqrt();
        if d <= RING_INNER || d >= RING_OUTER {
            return false;
        }
        dx.hypot(dy) > self.radius || dy < 0.0
    }
}

/// Walk `from..=to` in `step` increments.
fn for_each_step(from: f32, to: f32, step: f32, mut f: impl FnMut(f32)) {
    let mut v = from;
    while v <= to {
        f(v);
        v += step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::FrameBuffer;

    fn planet(has_ring: bool) -> Planet {
        Planet {
            pos: Vec2::new(100.0, 100.0),
            radius: 24.0,
            color: PLANET_PALETTE[1],
            has_ring,
            ring_color: RING_COLOR,
        }
    }

    #[test]
    fn spawn_ranges() {
        let mut rng = Rng::new(23);
        for _ in 0..300 {
            let p = Planet::spawn(&mut rng, 800.0, 600.0);
            assert!((20.0..35.0).contains(&p.radius), "radius {}", p.radius);
            assert!(PLANET_PALETTE.contains(&p.color));
            assert_eq!(p.ring_color, RING_COLOR);
        }
    }

    #[test]
    fn body_and_shadow_without_ring() {
        let mut fb = FrameBuffer::new(200.0, 200.0);
        let p = planet(false);
        p.draw(&mut fb, PixelGrid::new(4.0));
        assert!(fb.count_color(p.color) > 0);
        assert!(fb.count_color(SHADOW_COLOR) > 0);
        assert_eq!(fb.count_color(RING_COLOR), 0);
        assert!(fb.count_color(SHADOW_COLOR) < fb.count_color(p.color));
    }

    #[test]
    fn body_cells_stay_inside_disc() {
        let mut fb = FrameBuffer::new(200.0, 200.0);
        let p = planet(false);
        p.draw(&mut fb, PixelGrid::new(4.0));
        for r in fb.rects().iter().filter(|r| r.color() == p.color) {
            // Snapping moves a cell origin by less than one unit per axis.
            let d = Vec2::new(r.x, r.y).distance(p.pos);
            assert!(d <= p.radius + 4.0 * std::f32::consts::SQRT_2, "cell at distance {}", d);
        }
    }

    #[test]
    fn ring_drawn_only_when_flagged() {
        let mut fb = FrameBuffer::new(200.0, 200.0);
        planet(true).draw(&mut fb, PixelGrid::new(4.0));
        assert!(fb.count_color(RING_COLOR) > 0);
    }

    #[test]
    fn ring_hidden_behind_lower_body() {
        let p = planet(true);
        // Inside the band, below centre, within the body: hidden.
        assert!(!p.ring_covers(0.0, 6.0));
        // Same spot above centre: in front.
        assert!(p.ring_covers(0.0, -6.0));
        // Beyond the body to the side: visible.
        assert!(p.ring_covers(30.0, 2.0));
        // Centre of the ellipse is the gap.
        assert!(!p.ring_covers(0.0, 0.0));
    }
}
