use std::fmt;

/// RGBA color, components in 0.0 - 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a packed `0xRRGGBB` value.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as f32 / 255.0,
            g: ((rgb >> 8) & 0xFF) as f32 / 255.0,
            b: (rgb & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Color from a packed `0xRRGGBBAA` value.
    pub const fn hex_alpha(rgba: u32) -> Self {
        Self {
            r: ((rgba >> 24) & 0xFF) as f32 / 255.0,
            g: ((rgba >> 16) & 0xFF) as f32 / 255.0,
            b: ((rgba >> 8) & 0xFF) as f32 / 255.0,
            a: (rgba & 0xFF) as f32 / 255.0,
        }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Quantize alpha to 8 bits, as a `#RRGGBBAA` fill style would.
    pub fn with_alpha8(self, opacity: f32) -> Self {
        let byte = (opacity.clamp(0.0, 1.0) * 255.0).floor();
        self.with_alpha(byte / 255.0)
    }

    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Formats as a CSS `rgba(r, g, b, a)` string, usable as a canvas fill style.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(
            f,
            "rgba({}, {}, {}, {})",
            channel(self.r),
            channel(self.g),
            channel(self.b),
            self.a.clamp(0.0, 1.0)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_unpacks_channels() {
        let c = Color::hex(0xFF8000);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn hex_alpha_unpacks_alpha() {
        let shadow = Color::hex_alpha(0x00000066);
        assert!((shadow.a - 0.4).abs() < 1e-6, "alpha was {}", shadow.a);
    }

    #[test]
    fn alpha8_floors() {
        let c = Color::WHITE.with_alpha8(0.5);
        assert_eq!(c.a, 127.0 / 255.0);
        assert_eq!(Color::WHITE.with_alpha8(1.0).a, 1.0);
    }

    #[test]
    fn css_format() {
        assert_eq!(Color::hex(0xFFD700).to_string(), "rgba(255, 215, 0, 1)");
        assert_eq!(Color::WHITE.with_alpha(0.5).to_string(), "rgba(255, 255, 255, 0.5)");
    }
}
