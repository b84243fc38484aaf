use std::f32::consts::TAU;

use glam::Vec2;

use crate::renderer::{Color, PixelGrid, Surface};

pub const GOLD: Color = Color::hex(0xFFD700);
pub const DARK_GOLD: Color = Color::hex(0xDAA520);
pub const HIGHLIGHT: Color = Color::hex(0xFFF8DC);

/// Scale above which the currency glyph shows.
pub const GLYPH_THRESHOLD: f32 = 0.3;
/// Scale above which the rim highlight shows.
pub const HIGHLIGHT_THRESHOLD: f32 = 0.7;

/// 5×7 `$` glyph, row-major.
const DOLLAR: [[u8; 5]; 7] = [
    [0, 1, 1, 1, 0],
    [1, 1, 0, 0, 0],
    [1, 1, 0, 0, 0],
    [0, 1, 1, 1, 0],
    [0, 0, 0, 1, 1],
    [0, 0, 0, 1, 1],
    [1, 1, 1, 1, 0],
];
/// Cells in the glyph's vertical bar.
const BAR_CELLS: usize = 9;

/// Angular and radial sampling of the pixel disc.
const DISC_ANGLE_STEP: f32 = 0.1;

/// Which overlays a coin frame painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoinOverlays {
    pub glyph: bool,
    pub highlight: bool,
}

/// The splash coin. Spinning is faked by squashing it horizontally.
#[derive(Debug, Clone, PartialEq)]
pub struct Coin {
    /// Diameter in surface pixels.
    pub size: f32,
    /// Radians; unbounded.
    pub rotation: f32,
}

impl Coin {
    pub fn new(size: f32) -> Self {
        Self { size, rotation: 0.0 }
    }

    /// Horizontal squash factor, always in [0, 1].
    pub fn scale(&self) -> f32 {
        self.rotation.cos().abs()
    }

    pub fn advance(&mut self, spin: f32) {
        self.rotation += spin;
    }

    /// Paint one frame centred at `center`.
    pub fn draw(&self, surface: &mut dyn Surface, grid: PixelGrid, center: Vec2) -> CoinOverlays {
        let scale = self.scale();
        let radius = self.size / 2.0;

        draw_disc(surface, grid, center, radius, scale, GOLD);
        draw_disc(surface, grid, center, radius - grid.unit * 2.0, scale, DARK_GOLD);

        let overlays = CoinOverlays {
            glyph: scale > GLYPH_THRESHOLD,
            highlight: scale > HIGHLIGHT_THRESHOLD,
        };
        if overlays.glyph {
            draw_dollar(surface, grid, center, scale);
        }
        if overlays.highlight {
            let rim = Vec2::new(center.x, center.y - self.size / 4.0);
            draw_highlight(surface, grid, rim, scale);
        }
        overlays
    }
}

/// Disc sampled in polar steps and squashed horizontally by `scale_x`.
/// A fully edge-on coin (scale 0) paints nothing.
fn draw_disc(
    surface: &mut dyn Surface,
    grid: PixelGrid,
    center: Vec2,
    radius: f32,
    scale_x: f32,
    color: Color,
) {
    if scale_x <= f32::EPSILON || radius <= 0.0 {
        return;
    }
    let radial_step = grid.unit / 2.0;
    let mut angle = 0.0;
    while angle < TAU {
        let (sin, cos) = angle.sin_cos();
        let mut r = 0.0;
        while r < radius {
            let x = center.x + cos * r * scale_x;
            let y = center.y + sin * r;
            grid.cell(surface, x, y, color);
            r += radial_step;
        }
        angle += DISC_ANGLE_STEP;
    }
}

fn draw_dollar(surface: &mut dyn Surface, grid: PixelGrid, center: Vec2, scale_x: f32) {
    let u = grid.unit;
    for i in 0..BAR_CELLS {
        let y = center.y - u * 4.0 + i as f32 * u;
        grid.fill(surface, center.x, y, u * scale_x, u, HIGHLIGHT);
    }
    for (row, cells) in DOLLAR.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if *cell == 1 {
                let x = center.x + (col as f32 - 2.0) * u * scale_x;
                let y = center.y + (row as f32 - 3.0) * u;
                grid.fill(surface, x, y, u * scale_x, u, HIGHLIGHT);
            }
        }
    }
}

fn draw_highlight(surface: &mut dyn Surface, grid: PixelGrid, at: Vec2, scale_x: f32) {
    let u = grid.unit;
    let x = grid.snap(at.x);
    let y = grid.snap(at.y);
    surface.fill_rect(x - u * scale_x, y, u * 2.0 * scale_x, u, HIGHLIGHT);
    surface.fill_rect(x, y - u, u * scale_x, u, HIGHLIGHT);
}

/// Number of set cells in the glyph plus its bar.
pub fn glyph_cell_count() -> usize {
    BAR_CELLS + DOLLAR.iter().flatten().filter(|c| **c == 1).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::FrameBuffer;

    const CENTER: Vec2 = Vec2::new(96.0, 96.0);

    fn frame_at(rotation: f32) -> (FrameBuffer, CoinOverlays) {
        let mut fb = FrameBuffer::new(192.0, 192.0);
        let coin = Coin { size: 64.0, rotation };
        let overlays = coin.draw(&mut fb, PixelGrid::new(8.0), CENTER);
        (fb, overlays)
    }

    #[test]
    fn scale_in_unit_interval() {
        let mut coin = Coin::new(64.0);
        for _ in 0..10_000 {
            let s = coin.scale();
            assert!((0.0..=1.0).contains(&s), "scale {}", s);
            coin.advance(0.05);
        }
    }

    #[test]
    fn glyph_has_27_cells() {
        assert_eq!(glyph_cell_count(), 27);
    }

    #[test]
    fn face_on_draws_everything() {
        let (fb, overlays) = frame_at(0.0);
        assert_eq!(overlays, CoinOverlays { glyph: true, highlight: true });
        assert!(fb.count_color(GOLD) > 0);
        assert!(fb.count_color(DARK_GOLD) > 0);
        assert_eq!(fb.count_color(HIGHLIGHT), glyph_cell_count() + 2);
    }

    #[test]
    fn overlays_follow_thresholds() {
        let mut rotation = 0.0f32;
        while rotation < TAU {
            let (fb, overlays) = frame_at(rotation);
            let scale = rotation.cos().abs();
            assert_eq!(overlays.glyph, scale > GLYPH_THRESHOLD, "rotation {}", rotation);
            assert_eq!(overlays.highlight, scale > HIGHLIGHT_THRESHOLD, "rotation {}", rotation);
            let expected = match (overlays.glyph, overlays.highlight) {
                (true, true) => glyph_cell_count() + 2,
                (true, false) => glyph_cell_count(),
                _ => 0,
            };
            assert_eq!(fb.count_color(HIGHLIGHT), expected, "rotation {}", rotation);
            rotation += 0.05;
        }
    }

    #[test]
    fn edge_on_coin_paints_no_disc() {
        let mut fb = FrameBuffer::new(192.0, 192.0);
        draw_disc(&mut fb, PixelGrid::new(8.0), CENTER, 32.0, 0.0, GOLD);
        assert_eq!(fb.rect_count(), 0);
    }

    #[test]
    fn squashed_disc_is_narrower() {
        let extent = |rotation: f32| {
            let (fb, _) = frame_at(rotation);
            let xs = fb.rects().iter().filter(|r| r.color() == GOLD).map(|r| r.x);
            let (lo, hi) = xs.fold((f32::MAX, f32::MIN), |(lo, hi), x| (lo.min(x), hi.max(x)));
            hi - lo
        };
        assert!(extent(1.2) < extent(0.0));
    }

    #[test]
    fn rects_land_on_grid() {
        let (fb, _) = frame_at(0.0);
        for r in fb.rects().iter().filter(|r| r.color() != HIGHLIGHT) {
            assert_eq!(r.x % 8.0, 0.0, "x {}", r.x);
            assert_eq!(r.y % 8.0, 0.0, "y {}", r.y);
        }
    }
}
