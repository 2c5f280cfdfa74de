use super::helpers::fill;
use super::Surface;
use crate::core::spectrum::Bar;
use crate::core::{
    BarLayout, Rgb, Selection, BACKGROUND, BAR_GLOW_ALPHA, BAR_GLOW_BLUR, CYAN, SCANLINE_ALPHA,
    SCANLINE_THICKNESS,
};

fn layout(surface: &Surface) -> BarLayout {
    BarLayout::new(surface.width() as f32, surface.height() as f32)
}

fn fill_bar(surface: &Surface, bar: &Bar) {
    surface.ctx.fill_rect(
        bar.x as f64,
        bar.y as f64,
        bar.width as f64,
        bar.height as f64,
    );
}

/// One live visualizer frame: active bars with glow, or the ambient ripple.
pub fn paint_bars(surface: &Surface, selection: Selection<'_>, t_sec: f64) {
    let ctx = &surface.ctx;
    let layout = layout(surface);
    ctx.clear_rect(0.0, 0.0, surface.width(), surface.height());

    let color: Rgb = selection.color();
    match selection {
        Selection::Active { samples, .. } => {
            for bar in layout.active_bars(samples).iter() {
                fill(ctx, color, bar.alpha);
                fill_bar(surface, bar);
                ctx.set_shadow_color(&color.rgba(BAR_GLOW_ALPHA));
                ctx.set_shadow_blur(BAR_GLOW_BLUR);
                fill_bar(surface, bar);
                ctx.set_shadow_blur(0.0);
            }
        }
        Selection::Idle => {
            for bar in layout.idle_bars(t_sec).iter() {
                fill(ctx, color, bar.alpha);
                fill_bar(surface, bar);
            }
        }
    }
    paint_scanlines(surface);
}

/// Flat strip shown while no session is live.
pub fn paint_resting(surface: &Surface) {
    let layout = layout(surface);
    surface
        .ctx
        .clear_rect(0.0, 0.0, surface.width(), surface.height());
    for bar in layout.resting_bars().iter() {
        fill(&surface.ctx, CYAN, bar.alpha);
        fill_bar(surface, bar);
    }
    paint_scanlines(surface);
}

pub fn paint_scanlines(surface: &Surface) {
    let w = surface.width();
    fill(&surface.ctx, BACKGROUND, SCANLINE_ALPHA);
    for y in layout(surface).scanlines() {
        surface
            .ctx
            .fill_rect(0.0, y as f64, w, SCANLINE_THICKNESS as f64);
    }
}
