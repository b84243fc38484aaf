//! Spinning coin splash with a one-shot dismiss.
//!
//! `Active` → `Closing` on the first dismiss action; later dismisses are
//! ignored. Once the exit transition has run for its full duration the
//! splash emits [`LoopEvent::SplashClosed`] and settles in `Closed`.
//! Cancelling the frame loop is the owner's job.

use glam::Vec2;

use crate::api::sky_loop::{LoopContext, SkyLoop};
use crate::api::types::{LoopEvent, SurfaceSize};
use crate::components::coin::{Coin, CoinOverlays};
use crate::config::SplashConfig;
use crate::core::time::FrameClock;
use crate::extensions::easing::ease;
use crate::input::queue::InputQueue;
use crate::renderer::{PixelGrid, Surface};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplashState {
    Active,
    Closing { since_ms: f64 },
    /// Terminal. The closed signal has been emitted.
    Closed,
}

/// Visual state of the exit transition, applied by the host to the splash element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExitTransition {
    pub opacity: f32,
    pub scale: f32,
}

impl ExitTransition {
    pub const IDLE: Self = Self { opacity: 1.0, scale: 1.0 };
}

pub struct CoinSplash {
    config: SplashConfig,
    grid: PixelGrid,
    coin: Coin,
    state: SplashState,
}

impl CoinSplash {
    pub fn new(config: SplashConfig) -> Self {
        Self {
            grid: PixelGrid::new(config.pixel_unit),
            coin: Coin::new(config.coin_size),
            config,
            state: SplashState::Active,
        }
    }

    pub fn state(&self) -> SplashState {
        self.state
    }

    pub fn coin(&self) -> &Coin {
        &self.coin
    }

    /// Start closing. Returns `true` only for the dismiss that started it.
    pub fn dismiss(&mut self, now_ms: f64) -> bool {
        match self.state {
            SplashState::Active => {
                log::debug!("splash: closing at {:.1}ms", now_ms);
                self.state = SplashState::Closing { since_ms: now_ms };
                true
            }
            SplashState::Closing { .. } | SplashState::Closed => false,
        }
    }

    /// Check the exit timer. Yields the closed signal once, when it expires.
    pub fn poll(&mut self, now_ms: f64) -> Option<LoopEvent> {
        match self.state {
            SplashState::Closing { since_ms } if now_ms - since_ms >= self.config.exit_duration_ms => {
                log::debug!("splash: closed after {:.1}ms", now_ms - since_ms);
                self.state = SplashState::Closed;
                Some(LoopEvent::SplashClosed)
            }
            _ => None,
        }
    }

    /// Host time at which the closed signal falls due, while closing.
    pub fn closes_at(&self) -> Option<f64> {
        match self.state {
            SplashState::Closing { since_ms } => Some(since_ms + self.config.exit_duration_ms),
            SplashState::Active | SplashState::Closed => None,
        }
    }

    /// Exit transition progress at `now_ms`: opacity fades to 0 while the
    /// splash grows to `exit_scale`.
    pub fn exit_transition(&self, now_ms: f64) -> ExitTransition {
        let t = match self.state {
            SplashState::Active => return ExitTransition::IDLE,
            SplashState::Closing { since_ms } => {
                ((now_ms - since_ms) / self.config.exit_duration_ms.max(f64::EPSILON)) as f32
            }
            SplashState::Closed => 1.0,
        };
        let easing = self.config.exit_easing;
        ExitTransition {
            opacity: ease(1.0, 0.0, t, easing),
            scale: ease(1.0, self.config.exit_scale, t, easing),
        }
    }

    /// Paint the coin centred on the surface.
    pub fn draw(&self, surface: &mut dyn Surface) -> CoinOverlays {
        surface.clear();
        let center = Vec2::new(surface.width() / 2.0, surface.height() / 2.0);
        self.coin.draw(surface, self.grid, center)
    }
}

impl SkyLoop for CoinSplash {
    fn surface_size(&self) -> SurfaceSize {
        let edge = self.config.surface_edge();
        SurfaceSize::Fixed { width: edge, height: edge }
    }

    fn init(&mut self, _ctx: &mut LoopContext, _width: f32, _height: f32) {
        log::info!("splash: starting");
        self.coin.rotation = 0.0;
    }

    fn update(&mut self, ctx: &mut LoopContext, input: &InputQueue) {
        let now = ctx.clock.now_ms;
        if let Some(at) = input.first_dismiss(now) {
            self.dismiss(at);
        }
        self.coin.advance(self.config.spin_per_step);
        if let Some(event) = self.poll(now) {
            ctx.emit(event);
        }
    }

    fn render(&self, surface: &mut dyn Surface, _clock: &FrameClock) {
        self.draw(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::queue::{InputEvent, KEY_ENTER};
    use crate::renderer::{Backdrop, FrameBuffer};

    fn splash() -> CoinSplash {
        CoinSplash::new(SplashConfig::default())
    }

    #[test]
    fn surface_is_three_coins_wide() {
        assert_eq!(
            splash().surface_size(),
            SurfaceSize::Fixed { width: 192.0, height: 192.0 }
        );
    }

    #[test]
    fn double_dismiss_is_idempotent() {
        let mut s = splash();
        assert!(s.dismiss(100.0));
        assert!(!s.dismiss(101.0));
        assert_eq!(s.state(), SplashState::Closing { since_ms: 100.0 });
        assert_eq!(s.closes_at(), Some(900.0));
    }

    #[test]
    fn closes_at_only_while_closing() {
        let mut s = splash();
        assert_eq!(s.closes_at(), None);
        s.dismiss(0.0);
        s.poll(800.0);
        assert_eq!(s.closes_at(), None);
    }

    #[test]
    fn closed_fires_once_after_800ms() {
        let mut s = splash();
        s.dismiss(0.0);
        s.dismiss(0.0);
        assert_eq!(s.poll(799.9), None);
        assert_eq!(s.poll(800.0), Some(LoopEvent::SplashClosed));
        assert_eq!(s.poll(800.0), None);
        assert_eq!(s.poll(5_000.0), None);
        assert_eq!(s.state(), SplashState::Closed);
        assert!(!s.dismiss(6_000.0));
    }

    #[test]
    fn no_signal_without_dismiss() {
        let mut s = splash();
        assert_eq!(s.poll(1_000_000.0), None);
        assert_eq!(s.state(), SplashState::Active);
    }

    #[test]
    fn frame_driven_close_lands_between_800_and_900ms() {
        let mut s = splash();
        let mut ctx = LoopContext::default();
        s.init(&mut ctx, 192.0, 192.0);
        assert_eq!(s.coin().rotation, 0.0);

        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: 10.0, y: 10.0 });
        let start = 1_000.0;
        ctx.clock.advance(start);
        s.update(&mut ctx, &input);
        input.drain();

        // A second click mid-transition changes nothing.
        input.push(InputEvent::KeyDown { key_code: KEY_ENTER });

        let mut fired_at = Vec::new();
        let mut now = start;
        while now < start + 2_000.0 {
            now += 1000.0 / 60.0;
            ctx.clear_frame_data();
            ctx.clock.advance(now);
            s.update(&mut ctx, &input);
            input.drain();
            if ctx.events.contains(&LoopEvent::SplashClosed) {
                fired_at.push(now - start);
            }
        }
        assert_eq!(fired_at.len(), 1, "closed fired {:?}", fired_at);
        assert!(fired_at[0] >= 800.0 && fired_at[0] < 900.0, "fired at {}", fired_at[0]);
    }

    #[test]
    fn timed_dismiss_starts_at_the_click() {
        let mut s = splash();
        let mut ctx = LoopContext::default();
        let mut input = InputQueue::new();
        input.push_at(InputEvent::PointerDown { x: 10.0, y: 10.0 }, 1_005.0);
        ctx.clock.advance(1_030.0);
        s.update(&mut ctx, &input);
        assert_eq!(s.state(), SplashState::Closing { since_ms: 1_005.0 });
        assert_eq!(s.closes_at(), Some(1_805.0));
    }

    #[test]
    fn update_spins_coin() {
        let mut s = splash();
        let mut ctx = LoopContext::default();
        for _ in 0..10 {
            s.update(&mut ctx, &InputQueue::new());
        }
        assert!((s.coin().rotation - 0.5).abs() < 1e-5);
    }

    #[test]
    fn exit_transition_fades_and_grows() {
        let mut s = splash();
        assert_eq!(s.exit_transition(0.0), ExitTransition::IDLE);

        s.dismiss(0.0);
        let start = s.exit_transition(0.0);
        assert_eq!(start, ExitTransition::IDLE);

        let mid = s.exit_transition(400.0);
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0, "mid opacity {}", mid.opacity);
        assert!(mid.scale > 1.0 && mid.scale < 1.1, "mid scale {}", mid.scale);

        let end = s.exit_transition(800.0);
        assert!(end.opacity.abs() < 1e-6);
        assert!((end.scale - 1.1).abs() < 1e-6);

        s.poll(800.0);
        assert!(s.exit_transition(10_000.0).opacity.abs() < 1e-6);
    }

    #[test]
    fn negative_pixel_unit_still_renders() {
        let s = CoinSplash::new(SplashConfig {
            pixel_unit: -4.0,
            ..SplashConfig::default()
        });
        let mut fb = FrameBuffer::new(192.0, 192.0);
        s.render(&mut fb, &FrameClock::at(0.0));
        assert!(fb.rect_count() > 0);
    }

    #[test]
    fn render_clears_then_paints_coin() {
        let s = splash();
        let mut fb = FrameBuffer::new(192.0, 192.0);
        fb.fill_rect(0.0, 0.0, 1.0, 1.0, crate::renderer::Color::BLACK);
        s.render(&mut fb, &FrameClock::at(0.0));
        assert_eq!(fb.backdrop(), &Backdrop::Cleared);
        assert!(fb.rect_count() > 0);
        assert_eq!(fb.count_color(crate::renderer::Color::BLACK), 0);
    }
}
