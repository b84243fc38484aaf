//! Deep-space background: stars, galaxies, planets, asteroids, satellites.
//!
//! All five collections are owned here and rebuilt from scratch on every
//! resize. Paint order is fixed: gradient wash, galaxies, stars, planets,
//! asteroids, satellites.

use glam::Vec2;

use crate::api::sky_loop::{LoopConfig, LoopContext, SkyLoop};
use crate::components::asteroid::Asteroid;
use crate::components::galaxy::Galaxy;
use crate::components::planet::Planet;
use crate::components::satellite::Satellite;
use crate::components::star::Star;
use crate::config::BackgroundConfig;
use crate::core::time::FrameClock;
use crate::input::queue::InputQueue;
use crate::renderer::{Color, ColorStop, PixelGrid, RadialGradient, Surface};
use crate::systems::rng::Rng;

const WASH_STOPS: [ColorStop; 3] = [
    ColorStop::new(0.0, Color::hex(0x0A0A1A)),
    ColorStop::new(0.5, Color::hex(0x050510)),
    ColorStop::new(1.0, Color::hex(0x000000)),
];

pub struct SpaceBackground {
    config: BackgroundConfig,
    seed: u64,
    grid: PixelGrid,
    width: f32,
    height: f32,
    pub stars: Vec<Star>,
    pub galaxies: Vec<Galaxy>,
    pub planets: Vec<Planet>,
    pub asteroids: Vec<Asteroid>,
    pub satellites: Vec<Satellite>,
}

impl SpaceBackground {
    pub fn new(config: BackgroundConfig) -> Self {
        Self::with_seed(config, LoopConfig::default().seed)
    }

    pub fn with_seed(config: BackgroundConfig, seed: u64) -> Self {
        Self {
            grid: PixelGrid::new(config.pixel_unit),
            config,
            seed,
            width: 0.0,
            height: 0.0,
            stars: Vec::new(),
            galaxies: Vec::new(),
            planets: Vec::new(),
            asteroids: Vec::new(),
            satellites: Vec::new(),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Satellite wrap margin in surface pixels.
    pub fn satellite_margin(&self) -> f32 {
        self.config.satellite_margin_units * self.grid.unit
    }

    /// Discard every entity and generate a fresh sky for a `width` × `height` surface.
    pub fn regenerate(&mut self, rng: &mut Rng, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        let c = &self.config;

        self.stars = (0..c.star_count).map(|_| Star::spawn(rng, width, height)).collect();
        self.galaxies = (0..c.galaxy_count).map(|_| Galaxy::spawn(rng, width, height)).collect();
        self.planets = (0..c.planet_count).map(|_| Planet::spawn(rng, width, height)).collect();
        self.asteroids = (0..c.asteroid_count).map(|_| Asteroid::spawn(rng, width, height)).collect();
        self.satellites = (0..c.satellite_count).map(|_| Satellite::spawn(rng, width, height)).collect();

        log::debug!(
            "space regenerated for {}x{}: {} stars, {} galaxies, {} planets, {} asteroids, {} satellites",
            width,
            height,
            self.stars.len(),
            self.galaxies.len(),
            self.planets.len(),
            self.asteroids.len(),
            self.satellites.len(),
        );
    }

    /// Advance every entity by one step.
    pub fn step(&mut self, rng: &mut Rng) {
        let (w, h) = (self.width, self.height);
        let margin = self.satellite_margin();

        for galaxy in &mut self.galaxies {
            galaxy.advance();
        }
        for star in &mut self.stars {
            star.advance(w);
        }
        for asteroid in &mut self.asteroids {
            asteroid.advance(w, h);
        }
        for satellite in &mut self.satellites {
            satellite.advance(rng, self.config.blink_chance, w, h, margin);
        }
    }

    fn wash(&self) -> RadialGradient {
        RadialGradient {
            center: Vec2::new(self.width / 2.0, self.height / 2.0),
            inner_radius: 0.0,
            outer_radius: self.width,
            stops: WASH_STOPS.to_vec(),
        }
    }

    /// Paint the current state with an injected elapsed time.
    pub fn draw(&self, surface: &mut dyn Surface, elapsed_ms: f64) {
        surface.fill_radial_gradient(&self.wash());
        for galaxy in &self.galaxies {
            galaxy.draw(surface, self.grid);
        }
        for star in &self.stars {
            star.draw(surface, self.grid, elapsed_ms);
        }
        for planet in &self.planets {
            planet.draw(surface, self.grid);
        }
        for asteroid in &self.asteroids {
            asteroid.draw(surface, self.grid);
        }
        for satellite in &self.satellites {
            satellite.draw(surface, self.grid);
        }
    }
}

impl SkyLoop for SpaceBackground {
    fn config(&self) -> LoopConfig {
        LoopConfig {
            seed: self.seed,
            ..LoopConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut LoopContext, width: f32, height: f32) {
        log::info!("space background: starting at {}x{}", width, height);
        self.regenerate(&mut ctx.rng, width, height);
    }

    fn resize(&mut self, ctx: &mut LoopContext, width: f32, height: f32) {
        self.regenerate(&mut ctx.rng, width, height);
    }

    fn update(&mut self, ctx: &mut LoopContext, _input: &InputQueue) {
        self.step(&mut ctx.rng);
    }

    fn render(&self, surface: &mut dyn Surface, clock: &FrameClock) {
        self.draw(surface, clock.elapsed_ms);
    }
}
