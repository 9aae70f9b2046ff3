// Drawing surface abstraction. The field only needs a handful of 2d canvas
// operations, so it draws through this trait instead of holding a canvas
// context directly.

use crate::color::Color;
use std::f64::consts::PI;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

pub trait Surface {
    type Error;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error>;
    fn set_stroke(&mut self, color: Color, opacity: f64, line_width: f64) -> Result<(), Self::Error>;
    fn line(&mut self, from: [f64; 2], to: [f64; 2]) -> Result<(), Self::Error>;
    fn set_fill(&mut self, color: Color, opacity: f64) -> Result<(), Self::Error>;
    fn fill_circle(&mut self, center: [f64; 2], radius: f64) -> Result<(), Self::Error>;
}

pub struct CanvasSurface {
    pub context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(context: CanvasRenderingContext2d) -> Self {
        CanvasSurface { context }
    }
}

impl Surface for CanvasSurface {
    type Error = JsValue;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.context.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn set_stroke(&mut self, color: Color, opacity: f64, line_width: f64) -> Result<(), JsValue> {
        self.context.set_stroke_style_str(&color.to_css(opacity));
        self.context.set_line_width(line_width);
        Ok(())
    }

    fn line(&mut self, from: [f64; 2], to: [f64; 2]) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
        Ok(())
    }

    fn set_fill(&mut self, color: Color, opacity: f64) -> Result<(), JsValue> {
        self.context.set_fill_style_str(&color.to_css(opacity));
        Ok(())
    }

    fn fill_circle(&mut self, center: [f64; 2], radius: f64) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context.arc(center[0], center[1], radius, 0.0, PI * 2.0)?;
        self.context.fill();
        Ok(())
    }
}
