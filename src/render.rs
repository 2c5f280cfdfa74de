use web_sys as web;

mod field;
mod helpers;
mod spectrum;

pub use field::{paint_field, paint_static};
pub use spectrum::{paint_bars, paint_resting, paint_scanlines};

/// A 2D context plus the canvas it draws into.
#[derive(Clone)]
pub struct Surface {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
}

impl Surface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = crate::dom::context_2d(&canvas)?;
        Ok(Self { canvas, ctx })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.canvas.height() as f64
    }
}
