pub mod canvas;
pub mod dom;
pub mod runner;
pub mod scheduler;

pub use canvas::CanvasSurface;
pub use runner::LoopRunner;
pub use scheduler::AnimationFrames;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent, MouseEvent};

use retro_sky::{
    CoinSplash, InputEvent, LoopEvent, SkyConfig, SkyLoop, SpaceBackground, SurfaceSize,
    KEY_ENTER, KEY_SPACE,
};

use dom::{defer, now_ms, viewport_size, window, Listener};

// ── Hosts ────────────────────────────────────────────────────────────

struct BackgroundHost {
    runner: LoopRunner<SpaceBackground>,
    canvas: CanvasSurface,
    size: (u32, u32),
    _frames: Option<AnimationFrames>,
    _resize: Option<Listener>,
}

impl BackgroundHost {
    fn frame(&mut self, timestamp: f64) {
        self.runner.tick(timestamp);
        self.runner.frame().replay(&mut self.canvas);
    }

    /// Regenerate only when the viewport actually changed size.
    fn fit_viewport(&mut self) {
        let size = match viewport_size() {
            Ok(size) => size,
            Err(e) => {
                log::warn!("viewport size unavailable: {:?}", e);
                return;
            }
        };
        if size == self.size {
            return;
        }
        self.size = size;
        self.canvas.set_size(size.0, size.1);
        self.runner.resize(size.0 as f32, size.1 as f32);
    }
}

struct SplashHost {
    runner: LoopRunner<CoinSplash>,
    canvas: CanvasSurface,
    on_closed: js_sys::Function,
    timer_armed: bool,
    _frames: Option<AnimationFrames>,
    _listeners: Vec<Listener>,
}

impl SplashHost {
    fn frame(&mut self, timestamp: f64) {
        let closed = self.runner.tick(timestamp).contains(&LoopEvent::SplashClosed);
        self.runner.frame().replay(&mut self.canvas);
        self.canvas
            .apply_transition(self.runner.sky().exit_transition(timestamp));

        if closed {
            notify_closed(&self.on_closed);
        } else {
            self.arm_timer(timestamp);
        }
    }

    /// Back the frame-driven exit timer with a real timeout, so the closed
    /// signal still fires when frames are throttled.
    fn arm_timer(&mut self, now: f64) {
        if self.timer_armed {
            return;
        }
        let Some(due) = self.runner.sky().closes_at() else {
            return;
        };
        self.timer_armed = true;
        let delay = (due - now).ceil().max(0.0) as i32;
        let result = defer(delay, || {
            let closed = SPLASH.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let host = borrow.as_mut()?;
                host.runner.sky_mut().poll(now_ms())?;
                Some(host.on_closed.clone())
            });
            if let Some(on_closed) = closed {
                notify_closed(&on_closed);
            }
        });
        if let Err(e) = result {
            log::warn!("splash exit timer unavailable, relying on frames: {:?}", e);
        }
    }
}

/// Call the owner's closed callback outside any frame callback, so it may
/// tear the splash down synchronously.
fn notify_closed(on_closed: &js_sys::Function) {
    log::info!("splash: closed");
    let on_closed = on_closed.clone();
    let result = defer(0, move || {
        if let Err(e) = on_closed.call0(&JsValue::NULL) {
            log::error!("splash closed callback threw: {:?}", e);
        }
    });
    if let Err(e) = result {
        log::error!("could not schedule splash closed callback: {:?}", e);
    }
}

thread_local! {
    static BACKGROUND: RefCell<Option<BackgroundHost>> = RefCell::new(None);
    static SPLASH: RefCell<Option<SplashHost>> = RefCell::new(None);
}

fn parse_config(config_json: Option<String>) -> Result<SkyConfig, JsValue> {
    match config_json {
        Some(json) => SkyConfig::from_json(&json)
            .map_err(|e| JsValue::from_str(&format!("invalid retro-sky config: {}", e))),
        None => Ok(SkyConfig::default()),
    }
}

fn seed() -> u64 {
    (js_sys::Math::random() * u32::MAX as f64) as u64 ^ (js_sys::Date::now() as u64)
}

// ── Exports ──────────────────────────────────────────────────────────

/// Install the console logger and panic hook. Safe to call repeatedly.
#[wasm_bindgen]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Start the space background on `<canvas id=canvas_id>`, sized to the viewport.
#[wasm_bindgen]
pub fn start_background(canvas_id: &str, config_json: Option<String>) -> Result<(), JsValue> {
    init_logging();
    stop_background();

    let config = parse_config(config_json)?;
    let mut canvas = CanvasSurface::acquire(canvas_id)?;
    let size = viewport_size()?;
    canvas.set_size(size.0, size.1);

    let mut runner = LoopRunner::new(SpaceBackground::with_seed(config.background, seed()));
    runner.init(size.0 as f32, size.1 as f32);

    let resize = Listener::new(window()?.as_ref(), "resize", |_: Event| {
        BACKGROUND.with(|cell| {
            if let Some(host) = cell.borrow_mut().as_mut() {
                host.fit_viewport();
            }
        });
    })?;

    BACKGROUND.with(|cell| {
        *cell.borrow_mut() = Some(BackgroundHost {
            runner,
            canvas,
            size,
            _frames: None,
            _resize: Some(resize),
        });
    });

    let frames = AnimationFrames::start(|timestamp| {
        BACKGROUND.with(|cell| {
            if let Some(host) = cell.borrow_mut().as_mut() {
                host.frame(timestamp);
            }
        });
    })?;
    BACKGROUND.with(|cell| {
        if let Some(host) = cell.borrow_mut().as_mut() {
            host._frames = Some(frames);
        }
    });
    Ok(())
}

/// Cancel the background's frame loop and resize listener.
#[wasm_bindgen]
pub fn stop_background() {
    if let Some(host) = BACKGROUND.with(|cell| cell.borrow_mut().take()) {
        log::info!("space background: stopped");
        drop(host);
    }
}

/// Start the coin splash on `<canvas id=canvas_id>`. `on_closed` is called
/// exactly once, after the exit transition that follows the first dismiss.
#[wasm_bindgen]
pub fn start_splash(
    canvas_id: &str,
    on_closed: js_sys::Function,
    config_json: Option<String>,
) -> Result<(), JsValue> {
    init_logging();
    stop_splash();

    let config = parse_config(config_json)?;
    let mut canvas = CanvasSurface::acquire(canvas_id)?;
    let splash = CoinSplash::new(config.splash);
    let (width, height) = match splash.surface_size() {
        SurfaceSize::Fixed { width, height } => (width, height),
        SurfaceSize::Viewport => {
            let (w, h) = viewport_size()?;
            (w as f32, h as f32)
        }
    };
    canvas.set_size(width as u32, height as u32);

    let element = canvas.element().clone();
    element.set_attribute("tabindex", "0")?;
    element.set_attribute("role", "button")?;

    let click = Listener::new(element.as_ref(), "click", |event: Event| {
        let (x, y) = event
            .dyn_ref::<MouseEvent>()
            .map(|m| (m.offset_x() as f32, m.offset_y() as f32))
            .unwrap_or_default();
        push_splash_input(InputEvent::PointerDown { x, y });
    })?;
    let keydown = Listener::new(element.as_ref(), "keydown", |event: Event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(|k| k.key()) else {
            return;
        };
        let key_code = match key.as_str() {
            "Enter" => KEY_ENTER,
            " " => KEY_SPACE,
            _ => return,
        };
        event.prevent_default();
        push_splash_input(InputEvent::KeyDown { key_code });
    })?;

    let mut runner = LoopRunner::new(splash);
    runner.init(width, height);

    SPLASH.with(|cell| {
        *cell.borrow_mut() = Some(SplashHost {
            runner,
            canvas,
            on_closed,
            timer_armed: false,
            _frames: None,
            _listeners: vec![click, keydown],
        });
    });

    let frames = AnimationFrames::start(|timestamp| {
        SPLASH.with(|cell| {
            if let Some(host) = cell.borrow_mut().as_mut() {
                host.frame(timestamp);
            }
        });
    })?;
    SPLASH.with(|cell| {
        if let Some(host) = cell.borrow_mut().as_mut() {
            host._frames = Some(frames);
        }
    });
    Ok(())
}

/// Dismiss the splash from host UI. Repeated calls are no-ops.
#[wasm_bindgen]
pub fn dismiss_splash() {
    push_splash_input(InputEvent::Dismiss);
}

/// Cancel the splash's frame loop and input listeners.
#[wasm_bindgen]
pub fn stop_splash() {
    if let Some(host) = SPLASH.with(|cell| cell.borrow_mut().take()) {
        log::info!("splash: stopped");
        drop(host);
    }
}

fn push_splash_input(event: InputEvent) {
    SPLASH.with(|cell| {
        if let Some(host) = cell.borrow_mut().as_mut() {
            host.runner.push_input(event, now_ms());
        }
    });
}

// ---- Frame data accessors ----

/// Pointer to the background's last recorded frame (8 floats per rect).
#[wasm_bindgen]
pub fn get_background_rects_ptr() -> *const f32 {
    BACKGROUND.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|h| h.runner.frame().as_floats().as_ptr())
            .unwrap_or(std::ptr::null())
    })
}

/// Number of rects in the background's last recorded frame.
#[wasm_bindgen]
pub fn get_background_rect_count() -> u32 {
    BACKGROUND.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|h| h.runner.frame().rect_count())
            .unwrap_or(0)
    })
}
