//! Small wrappers over the DOM pieces the loops need.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

/// `performance.now()` in milliseconds; same time base as rAF timestamps.
pub fn now_ms() -> f64 {
    window()
        .ok()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Viewport size in CSS pixels.
pub fn viewport_size() -> Result<(u32, u32), JsValue> {
    let w = window()?;
    let width = w.inner_width()?.as_f64().unwrap_or(0.0);
    let height = w.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width as u32, height as u32))
}

/// Run `f` once after `delay_ms`, outside any frame callback.
pub fn defer(delay_ms: i32, f: impl FnOnce() + 'static) -> Result<(), JsValue> {
    let callback = Closure::once_into_js(f);
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms,
    )?;
    Ok(())
}

/// An event listener removed again when dropped.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}
