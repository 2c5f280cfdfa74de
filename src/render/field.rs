use super::helpers::{fill, fill_circle, line, stroke};
use super::Surface;
use crate::core::{ParticleField, BACKGROUND, CYAN, LINK_LINE_WIDTH, TRAIL_ALPHA};
use wasm_bindgen::Clamped;
use web_sys as web;

/// Trail fill, particles and proximity links for one tick.
pub fn paint_field(surface: &Surface, field: &ParticleField) {
    let ctx = &surface.ctx;
    let (w, h) = (surface.width(), surface.height());

    fill(ctx, BACKGROUND, TRAIL_ALPHA);
    ctx.fill_rect(0.0, 0.0, w, h);

    for p in field.particles() {
        fill(ctx, CYAN, p.pulse_alpha());
        fill_circle(
            ctx,
            p.position.x as f64,
            p.position.y as f64,
            p.pulse_radius() as f64,
        );
    }

    ctx.set_line_width(LINK_LINE_WIDTH);
    for link in field.links() {
        stroke(ctx, CYAN, link.alpha);
        line(
            ctx,
            (link.from.x as f64, link.from.y as f64),
            (link.to.x as f64, link.to.y as f64),
        );
    }
}

/// Read back the canvas, sprinkle static, write it back.
pub fn paint_static(surface: &Surface, field: &mut ParticleField) -> anyhow::Result<()> {
    let (w, h) = (surface.canvas.width(), surface.canvas.height());
    if w == 0 || h == 0 {
        return Ok(());
    }
    let image = surface
        .ctx
        .get_image_data(0.0, 0.0, w as f64, h as f64)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let mut pixels = image.data().0;
    if field.apply_static(&mut pixels) == 0 {
        return Ok(());
    }
    let noisy = web::ImageData::new_with_u8_clamped_array_and_sh(Clamped(&pixels[..]), w, h)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    surface
        .ctx
        .put_image_data(&noisy, 0.0, 0.0)
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}
