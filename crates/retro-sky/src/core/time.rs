/// Fixed timestep accumulator.
/// Motion advances in fixed steps regardless of display refresh rate.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        // Cap to prevent spiral of death (max 10 steps per frame)
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// Host time injected into a loop each frame.
///
/// `now_ms` is the host's monotonic timestamp (e.g. the rAF timestamp);
/// `elapsed_ms` counts from the first frame the loop saw.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    pub now_ms: f64,
    pub elapsed_ms: f64,
    origin_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock to a new host timestamp. Returns the frame delta in seconds.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let (origin, dt) = match self.origin_ms {
            None => {
                self.origin_ms = Some(now_ms);
                (now_ms, 0.0)
            }
            Some(origin) => (origin, ((now_ms - self.now_ms).max(0.0) / 1000.0) as f32),
        };
        self.now_ms = now_ms;
        self.elapsed_ms = now_ms - origin;
        dt
    }

    /// A clock frozen at the given elapsed time (headless rendering, tests).
    pub fn at(elapsed_ms: f64) -> Self {
        Self {
            now_ms: elapsed_ms,
            elapsed_ms,
            origin_ms: Some(0.0),
        }
    }
}
