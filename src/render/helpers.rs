use crate::core::Rgb;
use web_sys as web;

#[inline]
pub fn fill(ctx: &web::CanvasRenderingContext2d, color: Rgb, alpha: f32) {
    ctx.set_fill_style_str(&color.rgba(alpha));
}

#[inline]
pub fn stroke(ctx: &web::CanvasRenderingContext2d, color: Rgb, alpha: f32) {
    ctx.set_stroke_style_str(&color.rgba(alpha));
}

pub fn fill_circle(ctx: &web::CanvasRenderingContext2d, x: f64, y: f64, r: f64) {
    ctx.begin_path();
    if ctx.arc(x, y, r, 0.0, std::f64::consts::TAU).is_ok() {
        ctx.fill();
    }
}

pub fn line(ctx: &web::CanvasRenderingContext2d, from: (f64, f64), to: (f64, f64)) {
    ctx.begin_path();
    ctx.move_to(from.0, from.1);
    ctx.line_to(to.0, to.1);
    ctx.stroke();
}
