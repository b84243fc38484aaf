use crate::api::types::{LoopEvent, SurfaceSize};
use crate::core::time::FrameClock;
use crate::input::queue::InputQueue;
use crate::renderer::Surface;
use crate::systems::rng::Rng;

/// Runner configuration, provided by the loop.
#[derive(Debug, Clone)]
pub struct LoopConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// RNG seed for entity generation.
    pub seed: u64,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            seed: 42,
        }
    }
}

/// The contract both animation loops fulfil.
///
/// The runner calls `init` once, `resize` whenever the surface changes,
/// `update` zero or more times per displayed frame (one call per fixed
/// step), then `render` exactly once per displayed frame.
pub trait SkyLoop {
    /// Return runner configuration. Called once before init.
    fn config(&self) -> LoopConfig {
        LoopConfig::default()
    }

    /// How big the drawing surface should be.
    fn surface_size(&self) -> SurfaceSize {
        SurfaceSize::Viewport
    }

    /// Reset state. Called once with the initial surface size already known.
    fn init(&mut self, ctx: &mut LoopContext, width: f32, height: f32);

    /// The surface changed size.
    fn resize(&mut self, _ctx: &mut LoopContext, _width: f32, _height: f32) {}

    /// Advance by one fixed step.
    fn update(&mut self, ctx: &mut LoopContext, input: &InputQueue);

    /// Paint the current state. Read-only.
    fn render(&self, surface: &mut dyn Surface, clock: &FrameClock);
}

/// Mutable runner state handed to a loop.
pub struct LoopContext {
    pub rng: Rng,
    pub clock: FrameClock,
    pub events: Vec<LoopEvent>,
}

impl LoopContext {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Rng::new(seed),
            clock: FrameClock::new(),
            events: Vec::new(),
        }
    }

    /// Report an event to the owner.
    pub fn emit(&mut self, event: LoopEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for LoopContext {
    fn default() -> Self {
        Self::new(LoopConfig::default().seed)
    }
}
