use retro_sky::{
    FixedTimestep, FrameBuffer, InputEvent, InputQueue, LoopContext, LoopEvent, SkyLoop,
};

/// Generic loop runner: time injection, fixed stepping, input, recording.
///
/// Knows nothing about the browser, so the same runner drives a canvas in
/// `lib.rs` and headless loops in tests.
pub struct LoopRunner<L: SkyLoop> {
    sky: L,
    ctx: LoopContext,
    input: InputQueue,
    timestep: FixedTimestep,
    frame: FrameBuffer,
    initialized: bool,
}

impl<L: SkyLoop> LoopRunner<L> {
    pub fn new(sky: L) -> Self {
        let config = sky.config();
        Self {
            sky,
            ctx: LoopContext::new(config.seed),
            input: InputQueue::new(),
            timestep: FixedTimestep::new(config.fixed_dt),
            frame: FrameBuffer::new(0.0, 0.0),
            initialized: false,
        }
    }

    /// Initialize the loop for a surface of the given size. Call once.
    pub fn init(&mut self, width: f32, height: f32) {
        self.frame.resize(width, height);
        self.sky.init(&mut self.ctx, width, height);
        self.initialized = true;
    }

    /// The surface changed size.
    pub fn resize(&mut self, width: f32, height: f32) {
        if !self.initialized {
            return;
        }
        log::debug!("runner: resize to {}x{}", width, height);
        self.frame.resize(width, height);
        self.sky.resize(&mut self.ctx, width, height);
    }

    /// Queue an event that happened at host time `at_ms`.
    pub fn push_input(&mut self, event: InputEvent, at_ms: f64) {
        self.input.push_at(event, at_ms);
    }

    /// Run one displayed frame at host time `now_ms`: fixed steps, then one
    /// render into the frame buffer. Returns the events raised this frame.
    pub fn tick(&mut self, now_ms: f64) -> &[LoopEvent] {
        if !self.initialized {
            return &[];
        }

        self.ctx.clear_frame_data();
        let dt = self.ctx.clock.advance(now_ms);

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.sky.update(&mut self.ctx, &self.input);
        }
        // Keep input until a step has seen it.
        if steps > 0 {
            self.input.drain();
        }

        self.frame.reset();
        self.sky.render(&mut self.frame, &self.ctx.clock);

        &self.ctx.events
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn sky(&self) -> &L {
        &self.sky
    }

    pub fn sky_mut(&mut self) -> &mut L {
        &mut self.sky
    }
}
