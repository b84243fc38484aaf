use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::dom::window;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// A self-rescheduling `requestAnimationFrame` loop.
///
/// Each callback runs to completion before the next frame is requested, so
/// the frame body is never re-entered. Dropping the handle (or `cancel`)
/// cancels the pending request. Must not be cancelled from inside its own
/// frame callback; owners defer such work with a zero timeout.
pub struct AnimationFrames {
    pending: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
    cancelled: Rc<Cell<bool>>,
    callback: Option<Rc<RefCell<Option<FrameCallback>>>>,
}

impl AnimationFrames {
    /// Start calling `on_frame(timestamp_ms)` once per display refresh.
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Result<Self, JsValue> {
        let pending = Rc::new(Cell::new(None));
        let running = Rc::new(Cell::new(false));
        let cancelled = Rc::new(Cell::new(false));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let weak: Weak<RefCell<Option<FrameCallback>>> = Rc::downgrade(&callback);
        let pending_in = pending.clone();
        let running_in = running.clone();
        let cancelled_in = cancelled.clone();
        *callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
            pending_in.set(None);
            running_in.set(true);
            on_frame(timestamp);
            running_in.set(false);

            if cancelled_in.get() {
                return;
            }
            let Some(cb) = weak.upgrade() else {
                return;
            };
            match request(&cb) {
                Ok(id) => pending_in.set(Some(id)),
                Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
            }
        }));

        pending.set(Some(request(&callback)?));
        Ok(Self {
            pending,
            running,
            cancelled,
            callback: Some(callback),
        })
    }

    /// Cancel the pending frame request. Idempotent.
    pub fn cancel(&mut self) {
        self.cancelled.set(true);
        if let Some(id) = self.pending.take() {
            if let Ok(w) = window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
        if let Some(cb) = self.callback.take() {
            if self.running.get() {
                // Freeing a closure while it executes would trap; keep it alive.
                log::warn!("animation frames cancelled from inside a frame callback");
                std::mem::forget(cb);
            }
        }
    }
}

impl Drop for AnimationFrames {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request(callback: &Rc<RefCell<Option<FrameCallback>>>) -> Result<i32, JsValue> {
    let borrow = callback.borrow();
    let closure = borrow
        .as_ref()
        .ok_or_else(|| JsValue::from_str("animation frame callback released"))?;
    window()?.request_animation_frame(closure.as_ref().unchecked_ref())
}
