/// Events a loop reports back to its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopEvent {
    /// The splash finished its exit transition. Emitted exactly once.
    SplashClosed,
}

/// Pixel size a loop wants its surface to have.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceSize {
    /// Follow the host viewport.
    Viewport,
    /// Fixed square/rect independent of the viewport.
    Fixed { width: f32, height: f32 },
}
