//! Canvas2D painting for each view. Painters read simulation state and never
//! mutate it.

use crate::dom;
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys as web;

pub mod gravity_well;
pub mod seal;
pub mod slingshot;
pub mod style;
pub mod universe;

pub type PaintResult = Result<(), JsValue>;

/// A canvas, its 2D context, and its size in CSS px.
pub struct Surface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl Surface {
    pub fn new(canvas: web::HtmlCanvasElement, width: f64, height: f64) -> anyhow::Result<Self> {
        let ctx = dom::context_2d(&canvas)?;
        let mut surface = Self {
            canvas,
            ctx,
            width: 0.0,
            height: 0.0,
        };
        surface.resize(width, height);
        Ok(surface)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        dom::size_canvas(&self.canvas, self.width, self.height);
    }

    /// Reset the transform to CSS px and clear. Returns the context to paint with.
    pub fn begin(&self) -> Result<&web::CanvasRenderingContext2d, JsValue> {
        let dpr = dom::device_pixel_ratio();
        self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
        Ok(&self.ctx)
    }
}

pub(crate) fn fill_circle(
    ctx: &web::CanvasRenderingContext2d,
    x: f64,
    y: f64,
    radius: f64,
    fill: &str,
) -> PaintResult {
    if radius <= 0.0 {
        return Ok(());
    }
    ctx.begin_path();
    ctx.arc(x, y, radius, 0.0, TAU)?;
    ctx.set_fill_style_str(fill);
    ctx.fill();
    Ok(())
}

pub(crate) fn stroke_circle(
    ctx: &web::CanvasRenderingContext2d,
    x: f64,
    y: f64,
    radius: f64,
    stroke: &str,
    line_width: f64,
) -> PaintResult {
    if radius <= 0.0 {
        return Ok(());
    }
    ctx.begin_path();
    ctx.arc(x, y, radius, 0.0, TAU)?;
    ctx.set_stroke_style_str(stroke);
    ctx.set_line_width(line_width);
    ctx.stroke();
    Ok(())
}

/// Soft halo fading from `inner` colour at `r0` to transparent at `r1`.
pub(crate) fn glow(
    ctx: &web::CanvasRenderingContext2d,
    x: f64,
    y: f64,
    r0: f64,
    r1: f64,
    inner: &str,
    outer: &str,
) -> PaintResult {
    if r1 <= 0.0 {
        return Ok(());
    }
    let gradient = ctx.create_radial_gradient(x, y, r0.max(0.0), x, y, r1)?;
    gradient.add_color_stop(0.0, inner)?;
    gradient.add_color_stop(1.0, outer)?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.begin_path();
    ctx.arc(x, y, r1, 0.0, TAU)?;
    ctx.fill();
    Ok(())
}

pub(crate) fn text(
    ctx: &web::CanvasRenderingContext2d,
    content: &str,
    x: f64,
    y: f64,
    font: &str,
    fill: &str,
) -> PaintResult {
    ctx.set_font(font);
    ctx.set_fill_style_str(fill);
    ctx.set_text_align("center");
    ctx.fill_text(content, x, y)
}
