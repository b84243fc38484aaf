use serde::{Deserialize, Serialize};

use crate::extensions::easing::Easing;

/// Tunables for both loops. Loaded from JSON; every field is optional and
/// falls back to the stock look.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyConfig {
    pub background: BackgroundConfig,
    pub splash: SplashConfig,
}

impl SkyConfig {
    /// Parse a config from a JSON string. Values that fail [`validate`]
    /// are reported as parse errors.
    ///
    /// [`validate`]: SkyConfig::validate
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        config
            .validate()
            .map_err(<serde_json::Error as serde::de::Error>::custom)?;
        Ok(config)
    }

    /// Check the values the drawing code steps or sizes by.
    pub fn validate(&self) -> Result<(), String> {
        at_least("background.pixel_unit", self.background.pixel_unit, MIN_PIXEL_UNIT)?;
        at_least("splash.pixel_unit", self.splash.pixel_unit, MIN_PIXEL_UNIT)?;
        at_least("splash.coin_size", self.splash.coin_size, MIN_PIXEL_UNIT)?;
        at_least("splash.surface_scale", self.splash.surface_scale, 1.0)?;
        Ok(())
    }
}

/// Smallest pixel unit; drawing loops advance by the unit.
pub const MIN_PIXEL_UNIT: f32 = 1.0;

fn at_least(field: &str, value: f32, min: f32) -> Result<(), String> {
    if value.is_finite() && value >= min {
        Ok(())
    } else {
        Err(format!("{} must be a finite number >= {}, got {}", field, min, value))
    }
}

/// Space background tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// Pixel-snapping unit in surface pixels.
    pub pixel_unit: f32,
    pub star_count: usize,
    pub galaxy_count: usize,
    pub planet_count: usize,
    pub asteroid_count: usize,
    pub satellite_count: usize,
    /// Satellite wrap margin, in pixel units.
    pub satellite_margin_units: f32,
    /// Per-step probability that a satellite's beacon toggles.
    pub blink_chance: f32,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            pixel_unit: 4.0,
            star_count: 200,
            galaxy_count: 3,
            planet_count: 2,
            asteroid_count: 15,
            satellite_count: 4,
            satellite_margin_units: 10.0,
            blink_chance: 0.03,
        }
    }
}

/// Coin splash tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashConfig {
    /// Coin diameter in surface pixels.
    pub coin_size: f32,
    /// Pixel-snapping unit in surface pixels.
    pub pixel_unit: f32,
    /// Surface edge length as a multiple of `coin_size`.
    pub surface_scale: f32,
    /// Rotation added per fixed step, in radians.
    pub spin_per_step: f32,
    /// Length of the exit transition before the closed signal.
    pub exit_duration_ms: f64,
    /// Scale the splash grows to while fading out.
    pub exit_scale: f32,
    pub exit_easing: Easing,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            coin_size: 64.0,
            pixel_unit: 8.0,
            surface_scale: 3.0,
            spin_per_step: 0.05,
            exit_duration_ms: 800.0,
            exit_scale: 1.1,
            exit_easing: Easing::CubicOut,
        }
    }
}

impl SplashConfig {
    /// Edge length of the square splash surface.
    pub fn surface_edge(&self) -> f32 {
        self.coin_size * self.surface_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let config = SkyConfig::from_json("{}").unwrap();
        assert_eq!(config, SkyConfig::default());
        assert_eq!(config.background.star_count, 200);
        assert_eq!(config.splash.exit_duration_ms, 800.0);
        assert_eq!(config.splash.surface_edge(), 192.0);
    }

    #[test]
    fn partial_override() {
        let json = r#"{
            "background": { "star_count": 50, "pixel_unit": 2 },
            "splash": { "exit_easing": "linear" }
        }"#;
        let config = SkyConfig::from_json(json).unwrap();
        assert_eq!(config.background.star_count, 50);
        assert_eq!(config.background.pixel_unit, 2.0);
        assert_eq!(config.background.asteroid_count, 15);
        assert_eq!(config.splash.exit_easing, Easing::Linear);
        assert_eq!(config.splash.coin_size, 64.0);
    }

    #[test]
    fn degenerate_pixel_units_are_rejected() {
        for json in [
            r#"{"background":{"pixel_unit":0}}"#,
            r#"{"background":{"pixel_unit":0.25}}"#,
            r#"{"splash":{"pixel_unit":-4}}"#,
            r#"{"splash":{"coin_size":0}}"#,
            r#"{"splash":{"surface_scale":-1}}"#,
        ] {
            let err = SkyConfig::from_json(json).expect_err(json);
            assert!(err.to_string().contains("must be"), "{}: {}", json, err);
        }
        assert!(SkyConfig::default().validate().is_ok());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SkyConfig::from_json("{ \"background\": 3 }").is_err());
        assert!(SkyConfig::from_json("not json").is_err());
    }
}
