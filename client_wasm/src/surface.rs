//! Canvas 2D implementation of the game's drawing surface

use std::f64::consts::TAU;

use game_core::{Color, Surface};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, context })
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f32 {
        self.canvas.width() as f32
    }

    fn height(&self) -> f32 {
        self.canvas.height() as f32
    }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.context.clear_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.context.set_fill_style_str(color.as_css());
        self.context.begin_path();
        if let Err(e) = self.context.arc(x as f64, y as f64, radius as f64, 0.0, TAU) {
            console::error_1(&e);
        }
        self.context.fill();
        self.context.close_path();
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.context.set_fill_style_str(color.as_css());
        self.context.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }
}
