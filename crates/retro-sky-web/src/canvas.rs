use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use retro_sky::{Color, ExitTransition, RadialGradient, Surface};

use crate::dom::window;

/// `Surface` painting onto a `<canvas>` 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    /// Fill style currently set on the context, to skip redundant string sets.
    fill: Option<Color>,
}

impl CanvasSurface {
    /// Look up `<canvas id=canvas_id>` and take its 2D context.
    /// Failure here is fatal for the loop; there is no fallback.
    pub fn acquire(canvas_id: &str) -> Result<Self, JsValue> {
        let document = window()?
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("'{}' is not a canvas", canvas_id)))?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("unexpected context type"))?;
        ctx.set_image_smoothing_enabled(false);

        Ok(Self {
            canvas,
            ctx,
            fill: None,
        })
    }

    pub fn element(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Resize the backing store. Resets context state, including fill style.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.ctx.set_image_smoothing_enabled(false);
        self.fill = None;
    }

    /// Apply the splash exit transition to the element's style.
    pub fn apply_transition(&self, transition: ExitTransition) {
        let style = self.canvas.style();
        let opacity = style.set_property("opacity", &transition.opacity.to_string());
        let transform = style.set_property("transform", &format!("scale({})", transition.scale));
        if let Err(e) = opacity.and(transform) {
            log::warn!("could not style splash canvas: {:?}", e);
        }
    }

    fn set_fill(&mut self, color: Color) {
        if self.fill != Some(color) {
            self.ctx.set_fill_style_str(&color.to_string());
            self.fill = Some(color);
        }
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f32 {
        self.canvas.width() as f32
    }

    fn height(&self) -> f32 {
        self.canvas.height() as f32
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width() as f64, self.height() as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.set_fill(color);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_radial_gradient(&mut self, gradient: &RadialGradient) {
        let (cx, cy) = (gradient.center.x as f64, gradient.center.y as f64);
        let paint = match self.ctx.create_radial_gradient(
            cx,
            cy,
            gradient.inner_radius as f64,
            cx,
            cy,
            gradient.outer_radius as f64,
        ) {
            Ok(paint) => paint,
            Err(e) => {
                log::warn!("radial gradient rejected: {:?}", e);
                return;
            }
        };
        for stop in &gradient.stops {
            if let Err(e) = paint.add_color_stop(stop.offset, &stop.color.to_string()) {
                log::warn!("gradient stop at {} rejected: {:?}", stop.offset, e);
            }
        }
        self.ctx.set_fill_style_canvas_gradient(&paint);
        self.fill = None;
        self.ctx
            .fill_rect(0.0, 0.0, self.width() as f64, self.height() as f64);
    }
}
